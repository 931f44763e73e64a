//! # ALU Instructions
//!
//! This module implements arithmetic and logic operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic against the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Arithmetic is always binary. The Decimal flag is stored by SED/CLD but has
//! no effect here, matching the NES 2A03.

use super::Operand;
use crate::{Flag, MemoryBus, CPU};

/// Adds `value` and the carry into A, updating C, Z, V and N.
///
/// Shared by ADC and the RRA undocumented opcode.
pub(crate) fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.get_flag(Flag::Carry) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = (sum & 0xFF) as u8;

    cpu.regs.set_flag(Flag::Carry, sum > 0xFF);
    cpu.regs.set_overflow_from_addition(result, a, value);
    cpu.regs.set_zero_and_negative(result);
    cpu.regs.a = result;
}

/// Computes A - value - (1 - C) into A, updating C, Z, V and N.
///
/// C is set when no borrow occurred. V is derived from the accumulator and
/// the raw operand with the same sign rule ADC uses.
/// Shared by SBC and the ISC undocumented opcode.
pub(crate) fn subtract_with_borrow<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let borrow = !cpu.regs.get_flag(Flag::Carry) as i16;

    let difference = a as i16 - value as i16 - borrow;
    let result = difference as u8;

    cpu.regs.set_flag(Flag::Carry, difference >= 0);
    cpu.regs.set_overflow_from_addition(result, a, value);
    cpu.regs.set_zero_and_negative(result);
    cpu.regs.a = result;
}

/// Unsigned comparison: C = register >= value, N/Z from the wrapped difference.
pub(crate) fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.regs.set_flag(Flag::Carry, register >= value);
    cpu.regs.set_zero_and_negative(register.wrapping_sub(value));
}

/// ADC - Add with Carry.
///
/// ```text
/// A + M + C -> A, C
/// ```
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    add_with_carry(cpu, value);
}

/// SBC - Subtract with Carry.
///
/// ```text
/// A - M - (1 - C) -> A
/// ```
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    subtract_with_borrow(cpu, value);
}

/// AND - Logical AND with the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.a &= cpu.memory.read(op.address);
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// ORA - Logical inclusive OR with the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.a |= cpu.memory.read(op.address);
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// EOR - Exclusive OR with the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.a ^= cpu.memory.read(op.address);
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// BIT - Bit Test.
///
/// Z reflects `A & M`; N and V are copied straight from bits 7 and 6 of M.
/// A is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    cpu.regs.set_flag(Flag::Zero, cpu.regs.a & value == 0);
    cpu.regs.set_negative_and_overflow_from_bits(value);
}

/// CMP - Compare Accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    let register = cpu.regs.a;
    compare(cpu, register, value);
}

/// CPX - Compare X Register.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    let register = cpu.regs.x;
    compare(cpu, register, value);
}

/// CPY - Compare Y Register.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    let register = cpu.regs.y;
    compare(cpu, register, value);
}
