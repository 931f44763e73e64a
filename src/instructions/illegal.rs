//! # Undocumented Instructions
//!
//! The NMOS 6502 decodes every byte. Opcodes outside the documented set
//! still do something, usually a fused pair of documented operations.
//!
//! Stable combinations are modelled here on top of the documented handlers.
//! Opcodes whose result depends on analog bus behavior (AHX, SHX, SHY, TAS,
//! XAA) and the KIL jam opcodes only consume their cycles and size.

use log::warn;

use super::alu::{add_with_carry, compare, subtract_with_borrow};
use super::{inc_dec, shifts, Operand};
use crate::{AddressingMode, Flag, MemoryBus, Mnemonic, CPU};

/// LAX - LDA and LDX from the same operand.
pub(crate) fn lax<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.set_zero_and_negative(value);
}

/// SAX - Store A & X. No flags affected.
pub(crate) fn sax<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.memory.write(op.address, cpu.regs.a & cpu.regs.x);
}

/// DCP - DEC memory, then CMP against it.
pub(crate) fn dcp<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = inc_dec::dec(cpu, op);
    let a = cpu.regs.a;
    compare(cpu, a, value);
}

/// ISC - INC memory, then SBC it.
pub(crate) fn isc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = inc_dec::inc(cpu, op);
    subtract_with_borrow(cpu, value);
}

/// SLO - ASL memory, then ORA it into A.
pub(crate) fn slo<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = shifts::asl(cpu, op);
    cpu.regs.a |= value;
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// RLA - ROL memory, then AND it into A.
pub(crate) fn rla<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = shifts::rol(cpu, op);
    cpu.regs.a &= value;
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// SRE - LSR memory, then EOR it into A.
pub(crate) fn sre<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = shifts::lsr(cpu, op);
    cpu.regs.a ^= value;
    cpu.regs.set_zero_and_negative(cpu.regs.a);
}

/// RRA - ROR memory, then ADC it.
pub(crate) fn rra<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = shifts::ror(cpu, op);
    add_with_carry(cpu, value);
}

/// ANC - AND immediate, then copy N into C.
pub(crate) fn anc<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.a &= cpu.memory.read(op.address);
    cpu.regs.set_zero_and_negative(cpu.regs.a);
    let negative = cpu.regs.get_flag(Flag::Negative);
    cpu.regs.set_flag(Flag::Carry, negative);
}

/// ALR - AND immediate, then LSR A.
pub(crate) fn alr<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    cpu.regs.a &= cpu.memory.read(op.address);
    let accumulator = Operand {
        mode: AddressingMode::Accumulator,
        ..*op
    };
    shifts::lsr(cpu, &accumulator);
}

/// ARR - AND immediate, then ROR A. C comes from bit 6, V from bit 6 ^ bit 5.
pub(crate) fn arr<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let carry = cpu.regs.get_flag(Flag::Carry) as u8;
    let result = ((cpu.regs.a & cpu.memory.read(op.address)) >> 1) | (carry << 7);

    cpu.regs.a = result;
    cpu.regs.set_zero_and_negative(result);
    cpu.regs.set_flag(Flag::Carry, result & 0x40 != 0);
    cpu.regs.set_flag(Flag::Overflow, ((result >> 6) ^ (result >> 5)) & 0x01 != 0);
}

/// AXS - X = (A & X) - immediate, without borrow. Sets C like CMP.
pub(crate) fn axs<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address);
    let masked = cpu.regs.a & cpu.regs.x;
    compare(cpu, masked, value);
    cpu.regs.x = masked.wrapping_sub(value);
}

/// LAS - A, X and SP all become memory & SP.
pub(crate) fn las<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand) {
    let value = cpu.memory.read(op.address) & cpu.regs.s;
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.s = value;
    cpu.regs.set_zero_and_negative(value);
}

/// KIL - Halts a real 6502. Here it behaves as a one-byte NOP.
pub(crate) fn kil<M: MemoryBus>(_cpu: &mut CPU<M>, op: &Operand) {
    warn!(target: "nes6502::cpu", "KIL opcode at pc={:04X}, continuing", op.pc);
}

/// Unstable opcodes: size and cycles are charged, no state changes.
pub(crate) fn unstable(mnemonic: Mnemonic, op: &Operand) {
    warn!(
        target: "nes6502::cpu",
        "unstable opcode {} at pc={:04X} treated as NOP",
        mnemonic,
        op.pc
    );
}
