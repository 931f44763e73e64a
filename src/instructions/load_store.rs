//! # Load and Store Instructions
//!
//! Loads copy memory into a register and update N and Z.
//! Stores copy a register into memory and affect no flags.

use super::Operand;
use crate::{MemoryBus, CPU};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    cpu.regs.a = value;
    cpu.regs.set_zero_and_negative(value);
}

/// LDX - Load X Register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    cpu.regs.x = value;
    cpu.regs.set_zero_and_negative(value);
}

/// LDY - Load Y Register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    cpu.regs.y = value;
    cpu.regs.set_zero_and_negative(value);
}

/// STA - Store Accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.memory.write(op.address, cpu.regs.a);
}

/// STX - Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.memory.write(op.address, cpu.regs.x);
}

/// STY - Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.memory.write(op.address, cpu.regs.y);
}
