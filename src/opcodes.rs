//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Flagged with `illegal: true`
//!
//! Illegal opcodes carry their real size and cycle cost even when their
//! computational effect is not modelled, so programs that use them as padding
//! stay in step.

use serde::{Deserialize, Serialize};

use crate::addressing::AddressingMode;

/// Instruction identifier for every 6502 operation, documented and not.
///
/// The dispatcher matches on this enum exhaustively, so adding a variant
/// without a handler is a compile error.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mnemonic {
    // Documented
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    // Undocumented
    Ahx, Alr, Anc, Arr, Axs, Dcp, Isc, Kil, Las, Lax, Rla, Rra, Sax, Shx,
    Shy, Slo, Sre, Tas, Xaa,
}

impl Mnemonic {
    /// Upper-case three-letter name, as printed by disassemblers.
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA",
            Ahx => "AHX", Alr => "ALR", Anc => "ANC", Arr => "ARR", Axs => "AXS",
            Dcp => "DCP", Isc => "ISC", Kil => "KIL", Las => "LAS", Lax => "LAX",
            Rla => "RLA", Rra => "RRA", Sax => "SAX", Shx => "SHX", Shy => "SHY",
            Slo => "SLO", Sre => "SRE", Tas => "TAS", Xaa => "XAA",
        }
    }

    /// True for instructions that assign the program counter themselves.
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
                | Mnemonic::Jmp
                | Mnemonic::Jsr
                | Mnemonic::Rts
                | Mnemonic::Rti
                | Mnemonic::Brk
        )
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nes6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA absolute,X (opcode 0xBD)
/// let lda = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert_eq!(lda.page_cycles, 1);
/// assert_eq!(lda.size_bytes, 3);
/// assert!(!lda.illegal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Opcode byte; equal to this entry's index in `OPCODE_TABLE`.
    pub opcode: u8,

    /// Instruction identifier. Also selects the handler.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Extra cycles when indexing (or a taken branch) crosses a page.
    pub page_cycles: u8,

    /// Undocumented opcode.
    pub illegal: bool,
}

impl OpcodeMetadata {
    const fn legal(
        opcode: u8,
        mnemonic: Mnemonic,
        addressing_mode: AddressingMode,
        size_bytes: u8,
        base_cycles: u8,
        page_cycles: u8,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            addressing_mode,
            size_bytes,
            base_cycles,
            page_cycles,
            illegal: false,
        }
    }

    const fn illegal(
        opcode: u8,
        mnemonic: Mnemonic,
        addressing_mode: AddressingMode,
        size_bytes: u8,
        base_cycles: u8,
        page_cycles: u8,
    ) -> Self {
        Self {
            illegal: true,
            ..Self::legal(opcode, mnemonic, addressing_mode, size_bytes, base_cycles, page_cycles)
        }
    }
}

const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteX;
const ABY: AddressingMode = AddressingMode::AbsoluteY;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const IMP: AddressingMode = AddressingMode::Implied;
const IND: AddressingMode = AddressingMode::Indirect;
const IZX: AddressingMode = AddressingMode::IndirectX;
const IZY: AddressingMode = AddressingMode::IndirectY;
const REL: AddressingMode = AddressingMode::Relative;
const ZP0: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageX;
const ZPY: AddressingMode = AddressingMode::ZeroPageY;

use Mnemonic::*;

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Columns: opcode, mnemonic, addressing mode, size, base cycles, page-cross cycles.
///
/// # Examples
///
/// ```
/// use nes6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic.as_str(), "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // Illegal opcodes keep a real footprint
/// let slo = &OPCODE_TABLE[0x03];
/// assert!(slo.illegal);
/// assert_eq!(slo.size_bytes, 2);
/// assert_eq!(slo.base_cycles, 8);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata::legal(0x00, Brk, IMP, 1, 7, 0),
    OpcodeMetadata::legal(0x01, Ora, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0x02, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x03, Slo, IZX, 2, 8, 0),
    OpcodeMetadata::illegal(0x04, Nop, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x05, Ora, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x06, Asl, ZP0, 2, 5, 0),
    OpcodeMetadata::illegal(0x07, Slo, ZP0, 2, 5, 0),
    OpcodeMetadata::legal(0x08, Php, IMP, 1, 3, 0),
    OpcodeMetadata::legal(0x09, Ora, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x0A, Asl, ACC, 1, 2, 0),
    OpcodeMetadata::illegal(0x0B, Anc, IMM, 2, 2, 0),
    OpcodeMetadata::illegal(0x0C, Nop, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x0D, Ora, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x0E, Asl, ABS, 3, 6, 0),
    OpcodeMetadata::illegal(0x0F, Slo, ABS, 3, 6, 0),

    // 0x10
    OpcodeMetadata::legal(0x10, Bpl, REL, 2, 2, 1),
    OpcodeMetadata::legal(0x11, Ora, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0x12, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x13, Slo, IZY, 2, 8, 0),
    OpcodeMetadata::illegal(0x14, Nop, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x15, Ora, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x16, Asl, ZPX, 2, 6, 0),
    OpcodeMetadata::illegal(0x17, Slo, ZPX, 2, 6, 0),
    OpcodeMetadata::legal(0x18, Clc, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0x19, Ora, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0x1A, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x1B, Slo, ABY, 3, 7, 0),
    OpcodeMetadata::illegal(0x1C, Nop, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x1D, Ora, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x1E, Asl, ABX, 3, 7, 0),
    OpcodeMetadata::illegal(0x1F, Slo, ABX, 3, 7, 0),

    // 0x20
    OpcodeMetadata::legal(0x20, Jsr, ABS, 3, 6, 0),
    OpcodeMetadata::legal(0x21, And, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0x22, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x23, Rla, IZX, 2, 8, 0),
    OpcodeMetadata::legal(0x24, Bit, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x25, And, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x26, Rol, ZP0, 2, 5, 0),
    OpcodeMetadata::illegal(0x27, Rla, ZP0, 2, 5, 0),
    OpcodeMetadata::legal(0x28, Plp, IMP, 1, 4, 0),
    OpcodeMetadata::legal(0x29, And, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x2A, Rol, ACC, 1, 2, 0),
    OpcodeMetadata::illegal(0x2B, Anc, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x2C, Bit, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x2D, And, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x2E, Rol, ABS, 3, 6, 0),
    OpcodeMetadata::illegal(0x2F, Rla, ABS, 3, 6, 0),

    // 0x30
    OpcodeMetadata::legal(0x30, Bmi, REL, 2, 2, 1),
    OpcodeMetadata::legal(0x31, And, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0x32, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x33, Rla, IZY, 2, 8, 0),
    OpcodeMetadata::illegal(0x34, Nop, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x35, And, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x36, Rol, ZPX, 2, 6, 0),
    OpcodeMetadata::illegal(0x37, Rla, ZPX, 2, 6, 0),
    OpcodeMetadata::legal(0x38, Sec, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0x39, And, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0x3A, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x3B, Rla, ABY, 3, 7, 0),
    OpcodeMetadata::illegal(0x3C, Nop, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x3D, And, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x3E, Rol, ABX, 3, 7, 0),
    OpcodeMetadata::illegal(0x3F, Rla, ABX, 3, 7, 0),

    // 0x40
    OpcodeMetadata::legal(0x40, Rti, IMP, 1, 6, 0),
    OpcodeMetadata::legal(0x41, Eor, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0x42, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x43, Sre, IZX, 2, 8, 0),
    OpcodeMetadata::illegal(0x44, Nop, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x45, Eor, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x46, Lsr, ZP0, 2, 5, 0),
    OpcodeMetadata::illegal(0x47, Sre, ZP0, 2, 5, 0),
    OpcodeMetadata::legal(0x48, Pha, IMP, 1, 3, 0),
    OpcodeMetadata::legal(0x49, Eor, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x4A, Lsr, ACC, 1, 2, 0),
    OpcodeMetadata::illegal(0x4B, Alr, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x4C, Jmp, ABS, 3, 3, 0),
    OpcodeMetadata::legal(0x4D, Eor, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x4E, Lsr, ABS, 3, 6, 0),
    OpcodeMetadata::illegal(0x4F, Sre, ABS, 3, 6, 0),

    // 0x50
    OpcodeMetadata::legal(0x50, Bvc, REL, 2, 2, 1),
    OpcodeMetadata::legal(0x51, Eor, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0x52, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x53, Sre, IZY, 2, 8, 0),
    OpcodeMetadata::illegal(0x54, Nop, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x55, Eor, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x56, Lsr, ZPX, 2, 6, 0),
    OpcodeMetadata::illegal(0x57, Sre, ZPX, 2, 6, 0),
    OpcodeMetadata::legal(0x58, Cli, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0x59, Eor, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0x5A, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x5B, Sre, ABY, 3, 7, 0),
    OpcodeMetadata::illegal(0x5C, Nop, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x5D, Eor, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x5E, Lsr, ABX, 3, 7, 0),
    OpcodeMetadata::illegal(0x5F, Sre, ABX, 3, 7, 0),

    // 0x60
    OpcodeMetadata::legal(0x60, Rts, IMP, 1, 6, 0),
    OpcodeMetadata::legal(0x61, Adc, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0x62, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x63, Rra, IZX, 2, 8, 0),
    OpcodeMetadata::illegal(0x64, Nop, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x65, Adc, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x66, Ror, ZP0, 2, 5, 0),
    OpcodeMetadata::illegal(0x67, Rra, ZP0, 2, 5, 0),
    OpcodeMetadata::legal(0x68, Pla, IMP, 1, 4, 0),
    OpcodeMetadata::legal(0x69, Adc, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x6A, Ror, ACC, 1, 2, 0),
    OpcodeMetadata::illegal(0x6B, Arr, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x6C, Jmp, IND, 3, 5, 0),
    OpcodeMetadata::legal(0x6D, Adc, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x6E, Ror, ABS, 3, 6, 0),
    OpcodeMetadata::illegal(0x6F, Rra, ABS, 3, 6, 0),

    // 0x70
    OpcodeMetadata::legal(0x70, Bvs, REL, 2, 2, 1),
    OpcodeMetadata::legal(0x71, Adc, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0x72, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x73, Rra, IZY, 2, 8, 0),
    OpcodeMetadata::illegal(0x74, Nop, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x75, Adc, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x76, Ror, ZPX, 2, 6, 0),
    OpcodeMetadata::illegal(0x77, Rra, ZPX, 2, 6, 0),
    OpcodeMetadata::legal(0x78, Sei, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0x79, Adc, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0x7A, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x7B, Rra, ABY, 3, 7, 0),
    OpcodeMetadata::illegal(0x7C, Nop, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x7D, Adc, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0x7E, Ror, ABX, 3, 7, 0),
    OpcodeMetadata::illegal(0x7F, Rra, ABX, 3, 7, 0),

    // 0x80
    OpcodeMetadata::illegal(0x80, Nop, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x81, Sta, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0x82, Nop, IMM, 2, 2, 0),
    OpcodeMetadata::illegal(0x83, Sax, IZX, 2, 6, 0),
    OpcodeMetadata::legal(0x84, Sty, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x85, Sta, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x86, Stx, ZP0, 2, 3, 0),
    OpcodeMetadata::illegal(0x87, Sax, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0x88, Dey, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x89, Nop, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x8A, Txa, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x8B, Xaa, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0x8C, Sty, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x8D, Sta, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0x8E, Stx, ABS, 3, 4, 0),
    OpcodeMetadata::illegal(0x8F, Sax, ABS, 3, 4, 0),

    // 0x90
    OpcodeMetadata::legal(0x90, Bcc, REL, 2, 2, 1),
    OpcodeMetadata::legal(0x91, Sta, IZY, 2, 6, 0),
    OpcodeMetadata::illegal(0x92, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x93, Ahx, IZY, 2, 6, 0),
    OpcodeMetadata::legal(0x94, Sty, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x95, Sta, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0x96, Stx, ZPY, 2, 4, 0),
    OpcodeMetadata::illegal(0x97, Sax, ZPY, 2, 4, 0),
    OpcodeMetadata::legal(0x98, Tya, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0x99, Sta, ABY, 3, 5, 0),
    OpcodeMetadata::legal(0x9A, Txs, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0x9B, Tas, ABY, 3, 5, 0),
    OpcodeMetadata::illegal(0x9C, Shy, ABX, 3, 5, 0),
    OpcodeMetadata::legal(0x9D, Sta, ABX, 3, 5, 0),
    OpcodeMetadata::illegal(0x9E, Shx, ABY, 3, 5, 0),
    OpcodeMetadata::illegal(0x9F, Ahx, ABY, 3, 5, 0),

    // 0xA0
    OpcodeMetadata::legal(0xA0, Ldy, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xA1, Lda, IZX, 2, 6, 0),
    OpcodeMetadata::legal(0xA2, Ldx, IMM, 2, 2, 0),
    OpcodeMetadata::illegal(0xA3, Lax, IZX, 2, 6, 0),
    OpcodeMetadata::legal(0xA4, Ldy, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xA5, Lda, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xA6, Ldx, ZP0, 2, 3, 0),
    OpcodeMetadata::illegal(0xA7, Lax, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xA8, Tay, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0xA9, Lda, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xAA, Tax, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xAB, Lax, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xAC, Ldy, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0xAD, Lda, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0xAE, Ldx, ABS, 3, 4, 0),
    OpcodeMetadata::illegal(0xAF, Lax, ABS, 3, 4, 0),

    // 0xB0
    OpcodeMetadata::legal(0xB0, Bcs, REL, 2, 2, 1),
    OpcodeMetadata::legal(0xB1, Lda, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0xB2, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xB3, Lax, IZY, 2, 5, 1),
    OpcodeMetadata::legal(0xB4, Ldy, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0xB5, Lda, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0xB6, Ldx, ZPY, 2, 4, 0),
    OpcodeMetadata::illegal(0xB7, Lax, ZPY, 2, 4, 0),
    OpcodeMetadata::legal(0xB8, Clv, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0xB9, Lda, ABY, 3, 4, 1),
    OpcodeMetadata::legal(0xBA, Tsx, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xBB, Las, ABY, 3, 4, 1),
    OpcodeMetadata::legal(0xBC, Ldy, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0xBD, Lda, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0xBE, Ldx, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0xBF, Lax, ABY, 3, 4, 1),

    // 0xC0
    OpcodeMetadata::legal(0xC0, Cpy, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xC1, Cmp, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0xC2, Nop, IMM, 2, 2, 0),
    OpcodeMetadata::illegal(0xC3, Dcp, IZX, 2, 8, 0),
    OpcodeMetadata::legal(0xC4, Cpy, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xC5, Cmp, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xC6, Dec, ZP0, 2, 5, 0),
    OpcodeMetadata::illegal(0xC7, Dcp, ZP0, 2, 5, 0),
    OpcodeMetadata::legal(0xC8, Iny, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0xC9, Cmp, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xCA, Dex, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xCB, Axs, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xCC, Cpy, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0xCD, Cmp, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0xCE, Dec, ABS, 3, 6, 0),
    OpcodeMetadata::illegal(0xCF, Dcp, ABS, 3, 6, 0),

    // 0xD0
    OpcodeMetadata::legal(0xD0, Bne, REL, 2, 2, 1),
    OpcodeMetadata::legal(0xD1, Cmp, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0xD2, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xD3, Dcp, IZY, 2, 8, 0),
    OpcodeMetadata::illegal(0xD4, Nop, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0xD5, Cmp, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0xD6, Dec, ZPX, 2, 6, 0),
    OpcodeMetadata::illegal(0xD7, Dcp, ZPX, 2, 6, 0),
    OpcodeMetadata::legal(0xD8, Cld, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0xD9, Cmp, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0xDA, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xDB, Dcp, ABY, 3, 7, 0),
    OpcodeMetadata::illegal(0xDC, Nop, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0xDD, Cmp, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0xDE, Dec, ABX, 3, 7, 0),
    OpcodeMetadata::illegal(0xDF, Dcp, ABX, 3, 7, 0),

    // 0xE0
    OpcodeMetadata::legal(0xE0, Cpx, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xE1, Sbc, IZX, 2, 6, 0),
    OpcodeMetadata::illegal(0xE2, Nop, IMM, 2, 2, 0),
    OpcodeMetadata::illegal(0xE3, Isc, IZX, 2, 8, 0),
    OpcodeMetadata::legal(0xE4, Cpx, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xE5, Sbc, ZP0, 2, 3, 0),
    OpcodeMetadata::legal(0xE6, Inc, ZP0, 2, 5, 0),
    OpcodeMetadata::illegal(0xE7, Isc, ZP0, 2, 5, 0),
    OpcodeMetadata::legal(0xE8, Inx, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0xE9, Sbc, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xEA, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xEB, Sbc, IMM, 2, 2, 0),
    OpcodeMetadata::legal(0xEC, Cpx, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0xED, Sbc, ABS, 3, 4, 0),
    OpcodeMetadata::legal(0xEE, Inc, ABS, 3, 6, 0),
    OpcodeMetadata::illegal(0xEF, Isc, ABS, 3, 6, 0),

    // 0xF0
    OpcodeMetadata::legal(0xF0, Beq, REL, 2, 2, 1),
    OpcodeMetadata::legal(0xF1, Sbc, IZY, 2, 5, 1),
    OpcodeMetadata::illegal(0xF2, Kil, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xF3, Isc, IZY, 2, 8, 0),
    OpcodeMetadata::illegal(0xF4, Nop, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0xF5, Sbc, ZPX, 2, 4, 0),
    OpcodeMetadata::legal(0xF6, Inc, ZPX, 2, 6, 0),
    OpcodeMetadata::illegal(0xF7, Isc, ZPX, 2, 6, 0),
    OpcodeMetadata::legal(0xF8, Sed, IMP, 1, 2, 0),
    OpcodeMetadata::legal(0xF9, Sbc, ABY, 3, 4, 1),
    OpcodeMetadata::illegal(0xFA, Nop, IMP, 1, 2, 0),
    OpcodeMetadata::illegal(0xFB, Isc, ABY, 3, 7, 0),
    OpcodeMetadata::illegal(0xFC, Nop, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0xFD, Sbc, ABX, 3, 4, 1),
    OpcodeMetadata::legal(0xFE, Inc, ABX, 3, 7, 0),
    OpcodeMetadata::illegal(0xFF, Isc, ABX, 3, 7, 0),
];

/// Looks up the metadata for an opcode byte.
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}
