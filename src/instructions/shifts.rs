//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate on the accumulator or on memory depending on
//! the addressing mode. The bit shifted out always lands in C; only the
//! rotates feed the old carry back in.

use super::{read_operand, write_operand, Operand};
use crate::{Flag, MemoryBus, CPU};

fn shift_left<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand, carry_in: bool) -> u8 {
    let value = read_operand(cpu, op);
    let result = (value << 1) | carry_in as u8;
    cpu.regs.set_flag(Flag::Carry, value & 0x80 != 0);
    cpu.regs.set_zero_and_negative(result);
    write_operand(cpu, op, result);
    result
}

fn shift_right<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand, carry_in: bool) -> u8 {
    let value = read_operand(cpu, op);
    let result = (value >> 1) | ((carry_in as u8) << 7);
    cpu.regs.set_flag(Flag::Carry, value & 0x01 != 0);
    cpu.regs.set_zero_and_negative(result);
    write_operand(cpu, op, result);
    result
}

/// ASL - Arithmetic Shift Left. Returns the shifted value.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) -> u8 {
    shift_left(cpu, op, false)
}

/// LSR - Logical Shift Right. Returns the shifted value.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) -> u8 {
    shift_right(cpu, op, false)
}

/// ROL - Rotate Left through carry. Returns the rotated value.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) -> u8 {
    let carry = cpu.regs.get_flag(Flag::Carry);
    shift_left(cpu, op, carry)
}

/// ROR - Rotate Right through carry. Returns the rotated value.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) -> u8 {
    let carry = cpu.regs.get_flag(Flag::Carry);
    shift_right(cpu, op, carry)
}
