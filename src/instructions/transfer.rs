//! # Register Transfer Instructions
//!
//! All transfers update N and Z from the copied value, except TXS which
//! leaves the status register alone.

use crate::{MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.set_zero_and_negative(cpu.regs.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.set_zero_and_negative(cpu.regs.y);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.s;
    cpu.regs.set_zero_and_negative(cpu.regs.x);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// TXS - no flags affected.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.s = cpu.regs.x;
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}
