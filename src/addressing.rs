//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns a mode plus the current register state into an
//! effective 16-bit address.
//!
//! Operand bytes are always read relative to `pc + 1`, where `pc` is the
//! address of the opcode being executed.

use serde::{Deserialize, Serialize};

use crate::{MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// Effective operand address (0 for Implied/Accumulator).
    pub address: u16,
    /// True when indexing carried into the high byte (AbsoluteX/Y, IndirectY).
    pub page_crossed: bool,
}

impl ResolvedAddress {
    fn new(address: u16) -> Self {
        Self {
            address,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let address = base.wrapping_add(index as u16);
        Self {
            address,
            page_crossed: pages_differ(base, address),
        }
    }
}

/// True if `a` and `b` live in different 256-byte pages.
#[inline]
pub fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Reads a pointer stored in the zero page. The high byte wraps to 0x00.
#[inline]
fn read_zero_page_word<M: MemoryBus + ?Sized>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Resolves the effective address for `mode` at the instruction `regs.pc`.
///
/// With `indirect_page_wrap` set, `Indirect` reproduces the NMOS quirk where
/// a pointer at `$xxFF` fetches its high byte from `$xx00`.
///
/// # Examples
///
/// ```
/// use nes6502::{addressing::resolve, AddressingMode, FlatMemory, Registers};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(&[0xBD, 0xF0, 0x12]).unwrap();
///
/// let mut regs = Registers::new();
/// regs.x = 0x20;
///
/// let resolved = resolve(AddressingMode::AbsoluteX, &regs, &memory, false);
/// assert_eq!(resolved.address, 0x1310);
/// assert!(resolved.page_crossed);
/// ```
pub fn resolve<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    regs: &Registers,
    memory: &M,
    indirect_page_wrap: bool,
) -> ResolvedAddress {
    let operand = regs.pc.wrapping_add(1);

    match mode {
        AddressingMode::Absolute => ResolvedAddress::new(memory.read_word(operand)),
        AddressingMode::AbsoluteX => ResolvedAddress::indexed(memory.read_word(operand), regs.x),
        AddressingMode::AbsoluteY => ResolvedAddress::indexed(memory.read_word(operand), regs.y),
        AddressingMode::Accumulator | AddressingMode::Implied => ResolvedAddress::new(0),
        AddressingMode::Immediate => ResolvedAddress::new(operand),
        AddressingMode::Indirect => {
            let ptr = memory.read_word(operand);
            let target = if indirect_page_wrap && ptr & 0x00FF == 0x00FF {
                let lo = memory.read(ptr) as u16;
                let hi = memory.read(ptr & 0xFF00) as u16;
                (hi << 8) | lo
            } else {
                memory.read_word(ptr)
            };
            ResolvedAddress::new(target)
        }
        AddressingMode::IndirectX => {
            let ptr = memory.read(operand).wrapping_add(regs.x);
            ResolvedAddress::new(read_zero_page_word(memory, ptr))
        }
        AddressingMode::IndirectY => {
            let base = read_zero_page_word(memory, memory.read(operand));
            ResolvedAddress::indexed(base, regs.y)
        }
        AddressingMode::Relative => {
            // Relative to the opcode; the engine's advance adds the +2.
            let offset = memory.read(operand) as i8;
            ResolvedAddress::new(regs.pc.wrapping_add_signed(offset as i16))
        }
        AddressingMode::ZeroPage => ResolvedAddress::new(memory.read(operand) as u16),
        AddressingMode::ZeroPageX => {
            ResolvedAddress::new(memory.read(operand).wrapping_add(regs.x) as u16)
        }
        AddressingMode::ZeroPageY => {
            ResolvedAddress::new(memory.read(operand).wrapping_add(regs.y) as u16)
        }
    }
}
