//! # Branch Instructions
//!
//! This module implements the eight conditional branches. Each tests a single
//! status flag and, when taken, moves PC by the signed 8-bit offset.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 3 + page penalty if branch taken to a different page
//!
//! No flags are affected.

use super::Operand;
use crate::addressing::pages_differ;
use crate::{Flag, MemoryBus, CPU};

/// Takes the branch when `condition` holds.
///
/// The resolver reports `op.address = pc + offset`; the engine's size advance
/// then lands PC on `pc + 2 + offset`.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand, condition: bool) {
    if !condition {
        return;
    }

    let size = op.size as u16;
    let next_instruction = op.pc.wrapping_add(size);
    let destination = op.address.wrapping_add(size);

    cpu.cycles = cpu.cycles.saturating_add(1);
    if pages_differ(next_instruction, destination) {
        cpu.cycles = cpu.cycles.saturating_add(op.page_cycles as u64);
    }

    cpu.regs.pc = op.address;
}

/// BCC - Branch if Carry Clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = !cpu.regs.get_flag(Flag::Carry);
    branch_if(cpu, op, taken);
}

/// BCS - Branch if Carry Set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = cpu.regs.get_flag(Flag::Carry);
    branch_if(cpu, op, taken);
}

/// BEQ - Branch if Equal (Z set).
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = cpu.regs.get_flag(Flag::Zero);
    branch_if(cpu, op, taken);
}

/// BNE - Branch if Not Equal (Z clear).
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = !cpu.regs.get_flag(Flag::Zero);
    branch_if(cpu, op, taken);
}

/// BMI - Branch if Minus (N set).
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = cpu.regs.get_flag(Flag::Negative);
    branch_if(cpu, op, taken);
}

/// BPL - Branch if Positive (N clear).
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = !cpu.regs.get_flag(Flag::Negative);
    branch_if(cpu, op, taken);
}

/// BVC - Branch if Overflow Clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = !cpu.regs.get_flag(Flag::Overflow);
    branch_if(cpu, op, taken);
}

/// BVS - Branch if Overflow Set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let taken = cpu.regs.get_flag(Flag::Overflow);
    branch_if(cpu, op, taken);
}
