//! # Status Flags
//!
//! The 6502 processor status register packs eight flags into a single byte
//! (NV1BDIZC). [`Flag`] names each bit; the byte itself lives in
//! [`Registers::p`](crate::Registers).

use serde::{Deserialize, Serialize};

/// One bit of the processor status register.
///
/// The discriminant is the bit mask, so `Flag::Zero as u8 == 0b0000_0010`.
///
/// # Examples
///
/// ```
/// use nes6502::Flag;
///
/// assert_eq!(Flag::Carry.mask(), 0x01);
/// assert_eq!(Flag::Negative.mask(), 0x80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Flag {
    /// Bit 0: unsigned carry out of the last add, shift, or compare.
    Carry = 1 << 0,
    /// Bit 1: last result was zero.
    Zero = 1 << 1,
    /// Bit 2: maskable interrupts (IRQ) are blocked.
    InterruptDisable = 1 << 2,
    /// Bit 3: decimal mode. Stored but has no arithmetic effect on the NES variant.
    Decimal = 1 << 3,
    /// Bit 4: set by BRK.
    Break = 1 << 4,
    /// Bit 5: not wired on hardware, always reads as 1.
    Unused = 1 << 5,
    /// Bit 6: signed overflow.
    Overflow = 1 << 6,
    /// Bit 7: bit 7 of the last result.
    Negative = 1 << 7,
}

impl Flag {
    /// All eight flags in bit order, Carry first.
    pub const ALL: [Flag; 8] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::Break,
        Flag::Unused,
        Flag::Overflow,
        Flag::Negative,
    ];

    /// Returns the single-bit mask for this flag.
    #[inline]
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Bit position within the status byte (0-7).
    pub const fn bit(self) -> u8 {
        (self as u8).trailing_zeros() as u8
    }

    /// Conventional one-letter name, as printed in NV-BDIZC traces.
    pub const fn letter(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Zero => 'Z',
            Flag::InterruptDisable => 'I',
            Flag::Decimal => 'D',
            Flag::Break => 'B',
            Flag::Unused => '-',
            Flag::Overflow => 'V',
            Flag::Negative => 'N',
        }
    }
}

/// Renders a status byte as `NV-BDIZC`, with `.` for clear bits.
///
/// ```
/// use nes6502::status::format_status;
///
/// assert_eq!(format_status(0b1010_0001), "N.-....C");
/// ```
pub fn format_status(p: u8) -> String {
    Flag::ALL
        .iter()
        .rev()
        .map(|flag| {
            if p & flag.mask() != 0 {
                flag.letter()
            } else {
                '.'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        for (i, flag) in Flag::ALL.iter().enumerate() {
            assert_eq!(flag.bit() as usize, i);
            assert_eq!(flag.mask(), 1 << i);
        }
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(0x00), "........");
        assert_eq!(format_status(0x20), "..-.....");
        assert_eq!(format_status(0xFF), "NV-BDIZC");
    }
}
