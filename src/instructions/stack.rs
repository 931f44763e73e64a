//! # Stack Instructions
//!
//! PHA/PLA move the accumulator; PHP/PLP move the status byte verbatim.

use crate::{MemoryBus, CPU};

/// PHA - Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.regs.a);
}

/// PHP - Push Processor Status, exactly as currently held.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.regs.p);
}

/// PLA - Pull Accumulator. Updates N and Z.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull_byte();
    cpu.regs.a = value;
    cpu.regs.set_zero_and_negative(value);
}

/// PLP - Pull Processor Status. Replaces the whole status byte.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p = cpu.pull_byte();
}
