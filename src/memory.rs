//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `FlatMemory`, the 64KB byte array the
//! core ships with.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors: single byte and word accesses always succeed
//! - Word accesses are little-endian and wrap at 0xFFFF
//! - Only host-side bulk operations (`read_range`, `write_range`,
//!   `load_program`) can fail, and they never partially mutate memory
//!
//! Memory-mapped devices are not modelled here. A surrounding system that
//! needs them implements `MemoryBus` itself and intercepts the ranges it owns.

use crate::MemoryError;

/// Size of the 16-bit address space in bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write_word(0xFFFF, 0x1234);
/// assert_eq!(mem.read(0xFFFF), 0x34);
/// assert_eq!(mem.read(0x0000), 0x12);
/// assert_eq!(mem.read_word(0xFFFF), 0x1234);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes6502::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[(addr & 0x07FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[(addr & 0x07FF) as usize] = value;
///     }
/// }
///
/// let mut mem = MirroredRam { ram: [0; 0x0800] };
/// mem.write(0x0001, 0xAB);
/// assert_eq!(mem.read(0x0801), 0xAB);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word. The high byte comes from `addr + 1`,
    /// wrapping from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word with the same wraparound as `read_word`.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Checks that `[start, start + len)` lies inside the address space.
fn check_range(start: u16, len: usize) -> Result<(), MemoryError> {
    if len > ADDRESS_SPACE_SIZE - start as usize {
        return Err(MemoryError::OutOfRange { start, len });
    }
    Ok(())
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous RAM array,
/// zero-initialized on construction.
///
/// # Examples
///
/// ```
/// use nes6502::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(&[0xA9, 0x42]).unwrap();
///
/// assert_eq!(memory.read(0x0000), 0xA9);
/// assert_eq!(memory.read(0x0001), 0x42);
/// assert_eq!(memory.read(0x0002), 0x00);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Returns a copy of `len` bytes starting at `start`.
    ///
    /// Fails with `MemoryError::OutOfRange` if the range runs past 0xFFFF.
    pub fn read_range(&self, start: u16, len: usize) -> Result<Vec<u8>, MemoryError> {
        check_range(start, len)?;
        let start = start as usize;
        Ok(self.data[start..start + len].to_vec())
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Fails without touching memory if the range runs past 0xFFFF.
    pub fn write_range(&mut self, start: u16, bytes: &[u8]) -> Result<(), MemoryError> {
        check_range(start, bytes.len())?;
        let start = start as usize;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Loads a program image at address 0x0000.
    ///
    /// The image must be strictly smaller than the address space. Bytes past
    /// the image are left as they were.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), MemoryError> {
        if bytes.len() >= ADDRESS_SPACE_SIZE {
            return Err(MemoryError::ProgramTooLarge { len: bytes.len() });
        }
        self.data[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Borrows the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &ADDRESS_SPACE_SIZE)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write_word(0xFFFF, 0xBEEF);

        assert_eq!(mem.read(0xFFFF), 0xEF);
        assert_eq!(mem.read(0x0000), 0xBE);
        assert_eq!(mem.read_word(0xFFFF), 0xBEEF);
    }

    #[test]
    fn test_range_exactly_fills_address_space() {
        let mut mem = FlatMemory::new();
        assert!(mem.write_range(0xFFFE, &[0x01, 0x02]).is_ok());
        assert_eq!(mem.read_range(0xFFFE, 2).unwrap(), vec![0x01, 0x02]);
        assert_eq!(mem.read_range(0x0000, ADDRESS_SPACE_SIZE).unwrap().len(), ADDRESS_SPACE_SIZE);
    }

    #[test]
    fn test_range_past_end_fails() {
        let mut mem = FlatMemory::new();
        assert_eq!(
            mem.write_range(0xFFFF, &[0xCA, 0xFE]),
            Err(MemoryError::OutOfRange { start: 0xFFFF, len: 2 })
        );
        assert_eq!(mem.read(0xFFFF), 0x00);
        assert_eq!(mem.read(0x0000), 0x00);
        assert!(mem.read_range(0xFFFF, 0xFFFF).is_err());
    }

    #[test]
    fn test_huge_range_length_fails() {
        let mut mem = FlatMemory::new();
        mem.write(0x0001, 0x77);

        assert_eq!(
            mem.read_range(0x0001, usize::MAX),
            Err(MemoryError::OutOfRange { start: 0x0001, len: usize::MAX })
        );
        assert!(mem.read_range(0xFFFF, usize::MAX - 0xFFFE).is_err());
        assert_eq!(mem.as_slice()[0x0001], 0x77);
        assert!(mem.as_slice()[0x0002..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_program_size_limit() {
        let mut mem = FlatMemory::new();
        let too_big = vec![0xEA; ADDRESS_SPACE_SIZE];
        assert_eq!(
            mem.load_program(&too_big),
            Err(MemoryError::ProgramTooLarge { len: ADDRESS_SPACE_SIZE })
        );
        assert_eq!(mem.read(0x0000), 0x00);

        let fits = vec![0xEA; ADDRESS_SPACE_SIZE - 1];
        assert!(mem.load_program(&fits).is_ok());
        assert_eq!(mem.read(0xFFFE), 0xEA);
        assert_eq!(mem.read(0xFFFF), 0x00);
    }
}
