//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU and the resolved `Operand`.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: Undocumented opcodes (LAX, SAX, DCP, ISC, SLO, RLA, SRE, RRA, ...)
//!
//! ## PC Convention
//!
//! The engine adds the instruction size to PC after every handler returns.
//! A handler that transfers control stores `target - size` so the advance
//! lands exactly on `target`.

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, MemoryBus, Mnemonic, CPU};

/// Everything a handler needs about the instruction being executed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operand {
    /// Effective address from the resolver (0 for Implied/Accumulator).
    pub address: u16,
    /// Address of the opcode byte.
    pub pc: u16,
    pub mode: AddressingMode,
    /// Instruction length in bytes.
    pub size: u8,
    /// Extra cycles owed when a page boundary is crossed.
    pub page_cycles: u8,
}

impl Operand {
    /// PC value that makes the engine's post-instruction advance land on `target`.
    #[inline]
    pub fn landing_pc(&self, target: u16) -> u16 {
        target.wrapping_sub(self.size as u16)
    }
}

/// Reads the operand value, from A in accumulator mode or memory otherwise.
#[inline]
pub(crate) fn read_operand<M: MemoryBus>(cpu: &CPU<M>, op: &Operand) -> u8 {
    match op.mode {
        AddressingMode::Accumulator => cpu.regs.a,
        _ => cpu.memory.read(op.address),
    }
}

/// Writes a read-modify-write result back to A or memory.
#[inline]
pub(crate) fn write_operand<M: MemoryBus>(cpu: &mut CPU<M>, op: &Operand, value: u8) {
    match op.mode {
        AddressingMode::Accumulator => cpu.regs.a = value,
        _ => cpu.memory.write(op.address, value),
    }
}

/// Routes a mnemonic to its handler.
pub(crate) fn dispatch<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, op: &Operand) {
    match mnemonic {
        // Load / store
        Mnemonic::Lda => load_store::lda(cpu, op),
        Mnemonic::Ldx => load_store::ldx(cpu, op),
        Mnemonic::Ldy => load_store::ldy(cpu, op),
        Mnemonic::Sta => load_store::sta(cpu, op),
        Mnemonic::Stx => load_store::stx(cpu, op),
        Mnemonic::Sty => load_store::sty(cpu, op),

        // Transfers
        Mnemonic::Tax => transfer::tax(cpu),
        Mnemonic::Tay => transfer::tay(cpu),
        Mnemonic::Tsx => transfer::tsx(cpu),
        Mnemonic::Txa => transfer::txa(cpu),
        Mnemonic::Txs => transfer::txs(cpu),
        Mnemonic::Tya => transfer::tya(cpu),

        // Arithmetic and logic
        Mnemonic::Adc => alu::adc(cpu, op),
        Mnemonic::Sbc => alu::sbc(cpu, op),
        Mnemonic::And => alu::and(cpu, op),
        Mnemonic::Ora => alu::ora(cpu, op),
        Mnemonic::Eor => alu::eor(cpu, op),
        Mnemonic::Bit => alu::bit(cpu, op),
        Mnemonic::Cmp => alu::cmp(cpu, op),
        Mnemonic::Cpx => alu::cpx(cpu, op),
        Mnemonic::Cpy => alu::cpy(cpu, op),

        // Shifts
        Mnemonic::Asl => {
            shifts::asl(cpu, op);
        }
        Mnemonic::Lsr => {
            shifts::lsr(cpu, op);
        }
        Mnemonic::Rol => {
            shifts::rol(cpu, op);
        }
        Mnemonic::Ror => {
            shifts::ror(cpu, op);
        }

        // Increments
        Mnemonic::Inc => {
            inc_dec::inc(cpu, op);
        }
        Mnemonic::Dec => {
            inc_dec::dec(cpu, op);
        }
        Mnemonic::Inx => inc_dec::inx(cpu),
        Mnemonic::Iny => inc_dec::iny(cpu),
        Mnemonic::Dex => inc_dec::dex(cpu),
        Mnemonic::Dey => inc_dec::dey(cpu),

        // Branches
        Mnemonic::Bcc => branches::bcc(cpu, op),
        Mnemonic::Bcs => branches::bcs(cpu, op),
        Mnemonic::Beq => branches::beq(cpu, op),
        Mnemonic::Bne => branches::bne(cpu, op),
        Mnemonic::Bmi => branches::bmi(cpu, op),
        Mnemonic::Bpl => branches::bpl(cpu, op),
        Mnemonic::Bvc => branches::bvc(cpu, op),
        Mnemonic::Bvs => branches::bvs(cpu, op),

        // Control flow
        Mnemonic::Jmp => control::jmp(cpu, op),
        Mnemonic::Jsr => control::jsr(cpu, op),
        Mnemonic::Rts => control::rts(cpu, op),
        Mnemonic::Rti => control::rti(cpu, op),
        Mnemonic::Brk => control::brk(cpu, op),
        Mnemonic::Nop => control::nop(cpu, op),

        // Stack
        Mnemonic::Pha => stack::pha(cpu),
        Mnemonic::Php => stack::php(cpu),
        Mnemonic::Pla => stack::pla(cpu),
        Mnemonic::Plp => stack::plp(cpu),

        // Flags
        Mnemonic::Clc => flags::clc(cpu),
        Mnemonic::Cld => flags::cld(cpu),
        Mnemonic::Cli => flags::cli(cpu),
        Mnemonic::Clv => flags::clv(cpu),
        Mnemonic::Sec => flags::sec(cpu),
        Mnemonic::Sed => flags::sed(cpu),
        Mnemonic::Sei => flags::sei(cpu),

        // Undocumented
        Mnemonic::Lax => illegal::lax(cpu, op),
        Mnemonic::Sax => illegal::sax(cpu, op),
        Mnemonic::Dcp => illegal::dcp(cpu, op),
        Mnemonic::Isc => illegal::isc(cpu, op),
        Mnemonic::Slo => illegal::slo(cpu, op),
        Mnemonic::Rla => illegal::rla(cpu, op),
        Mnemonic::Sre => illegal::sre(cpu, op),
        Mnemonic::Rra => illegal::rra(cpu, op),
        Mnemonic::Anc => illegal::anc(cpu, op),
        Mnemonic::Alr => illegal::alr(cpu, op),
        Mnemonic::Arr => illegal::arr(cpu, op),
        Mnemonic::Axs => illegal::axs(cpu, op),
        Mnemonic::Las => illegal::las(cpu, op),
        Mnemonic::Kil => illegal::kil(cpu, op),
        Mnemonic::Ahx | Mnemonic::Shx | Mnemonic::Shy | Mnemonic::Tas | Mnemonic::Xaa => {
            illegal::unstable(mnemonic, op)
        }
    }
}
