//! # Increment and Decrement Instructions
//!
//! All six wrap modulo 256 and update N and Z.

use super::Operand;
use crate::{MemoryBus, CPU};

/// INC - Increment Memory. Returns the new value.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) -> u8 {
    let value = cpu.memory.read(op.address).wrapping_add(1);
    cpu.memory.write(op.address, value);
    cpu.regs.set_zero_and_negative(value);
    value
}

/// DEC - Decrement Memory. Returns the new value.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) -> u8 {
    let value = cpu.memory.read(op.address).wrapping_sub(1);
    cpu.memory.write(op.address, value);
    cpu.regs.set_zero_and_negative(value);
    value
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.set_zero_and_negative(cpu.regs.x);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.set_zero_and_negative(cpu.regs.y);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.set_zero_and_negative(cpu.regs.x);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.set_zero_and_negative(cpu.regs.y);
}
