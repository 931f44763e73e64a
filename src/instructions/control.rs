//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - BRK: Force Interrupt
//! - NOP: No operation (all variants, documented or not)
//!
//! Every handler that moves PC stores `target - size`, since the engine adds
//! the instruction size afterwards.

use log::debug;

use super::Operand;
use crate::cpu::IRQ_VECTOR;
use crate::{Flag, MemoryBus, CPU};

/// JMP - Jump (absolute or indirect).
///
/// The resolver has already performed the indirect dereference.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.pc = op.landing_pc(op.address);
}

/// JSR - Jump to Subroutine.
///
/// Pushes the address of the last byte of the JSR (PC + 2), high byte first.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let return_address = op.pc.wrapping_add(op.size as u16).wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.regs.pc = op.landing_pc(op.address);
}

/// RTS - Return from Subroutine.
///
/// Resumes one byte after the address JSR pushed.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let return_address = cpu.pull_word().wrapping_add(1);
    cpu.regs.pc = op.landing_pc(return_address);
}

/// RTI - Return from Interrupt.
///
/// Pulls the status byte, then PC. Unlike RTS there is no +1.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.p = cpu.pull_byte();
    let return_address = cpu.pull_word();
    cpu.regs.pc = op.landing_pc(return_address);
}

/// BRK - Force Interrupt.
///
/// 1. Sets B and I
/// 2. Pushes PC + 2 (high byte first)
/// 3. Pushes the status byte with B and the unused bit set
/// 4. Continues at the address stored in the IRQ/BRK vector ($FFFE/F)
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    debug!(target: "nes6502::cpu", "BRK at pc={:04X}", op.pc);

    cpu.regs.set_flag(Flag::Break, true);
    cpu.regs.set_flag(Flag::InterruptDisable, true);

    cpu.push_word(op.pc.wrapping_add(2));
    let status = cpu.regs.p | Flag::Break.mask() | Flag::Unused.mask();
    cpu.push_byte(status);

    let vector = cpu.memory.read_word(IRQ_VECTOR);
    cpu.regs.pc = op.landing_pc(vector);
}

/// NOP - No Operation.
///
/// Undocumented multi-byte NOPs still perform their operand read, which
/// matters for memory-mapped hardware behind the bus.
pub(crate) fn nop<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    if op.size > 1 {
        let _ = cpu.memory.read(op.address);
    }
}
