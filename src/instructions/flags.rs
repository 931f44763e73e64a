//! # Status Flag Instructions
//!
//! Single-flag set/clear instructions. Each touches exactly one bit of P.

use crate::{Flag, MemoryBus, CPU};

pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::Carry, false);
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::Decimal, false);
}

pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::InterruptDisable, false);
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::Overflow, false);
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::Carry, true);
}

/// SED - the flag is stored but arithmetic stays binary (the 2A03 has no BCD).
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::Decimal, true);
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(Flag::InterruptDisable, true);
}
