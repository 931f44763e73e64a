//! # NES 6502 CPU Core
//!
//! A cycle-aware MOS 6502 emulator covering the full 256-entry opcode space,
//! documented and undocumented, as found in the NES's 2A03.
//!
//! Instructions execute atomically: `step` runs whole instructions and keeps a
//! running cycle count that includes page-crossing and branch penalties.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{Flag, CPU};
//!
//! let mut cpu = CPU::new();
//!
//! // LDA #$80 ; ADC #$80
//! cpu.load_program(&[0xA9, 0x80, 0x69, 0x80]).unwrap();
//!
//! let cycles = cpu.step_n(2);
//!
//! assert_eq!(cycles, 4);
//! assert_eq!(cpu.a(), 0x00);
//! assert!(cpu.flag(Flag::Carry));
//! assert!(cpu.flag(Flag::Overflow));
//! assert!(cpu.flag(Flag::Zero));
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Design**: all opcode metadata lives in `OPCODE_TABLE`
//! - **Exhaustive dispatch**: every `Mnemonic` maps to a handler through one `match`
//! - **Determinism**: no clocks, no randomness, no shared state between CPUs
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `registers` / `status` - register file and status flag helpers
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and the effective address resolver
//! - `cartridge` - iNES / NES 2.0 image header parsing
//! - `config` - CPU compatibility switches

pub mod addressing;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, ResolvedAddress};
pub use cartridge::{Cartridge, Mirroring, RomHeader};
pub use config::CpuConfig;
pub use cpu::{CpuSnapshot, CPU};
pub use memory::{FlatMemory, MemoryBus, ADDRESS_SPACE_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::Registers;
pub use status::Flag;

use thiserror::Error;

/// Errors from host-side bulk memory operations.
///
/// Single-byte and word accesses cannot fail; only range operations that
/// would run past 0xFFFF, or program images that do not fit, are rejected.
/// A rejected operation leaves memory untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The range `start..start + len` extends past the end of the address space.
    #[error("range 0x{start:04X}+{len} exceeds the 64KB address space")]
    OutOfRange { start: u16, len: usize },

    /// The program image is too large to load at 0x0000.
    #[error("program of {len} bytes does not fit in the 64KB address space")]
    ProgramTooLarge { len: usize },
}

/// Errors raised while parsing a cartridge image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomError {
    /// Fewer than 16 bytes were supplied.
    #[error("image is {len} bytes, shorter than the 16-byte header")]
    TruncatedHeader { len: usize },

    /// The first four bytes are not `NES\x1A`.
    #[error("missing NES header magic, found {found:02X?}")]
    BadMagic { found: [u8; 4] },

    /// The header promises more PRG/CHR data than the image contains.
    #[error("image is {actual} bytes but the header describes {expected}")]
    TruncatedData { expected: usize, actual: usize },
}
