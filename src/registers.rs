//! # Register File
//!
//! The 6502 has three 8-bit data registers (A, X, Y), an 8-bit stack pointer,
//! the packed status byte, and a 16-bit program counter. This module owns the
//! flag helpers every instruction family uses to derive N, Z and V.

use serde::{Deserialize, Serialize};

use crate::status::{format_status, Flag};

/// Snapshot of the CPU register file.
///
/// A freshly constructed register file is all zero except for the Unused
/// status bit, which always reads as 1.
///
/// # Examples
///
/// ```
/// use nes6502::{Flag, Registers};
///
/// let mut regs = Registers::new();
/// assert_eq!(regs.p, 0b0010_0000);
///
/// regs.set_zero_and_negative(0x80);
/// assert!(regs.get_flag(Flag::Negative));
/// assert!(!regs.get_flag(Flag::Zero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer (offset into page 0x0100)
    pub s: u8,
    /// Processor status (NV1BDIZC)
    pub p: u8,
    /// Program counter
    pub pc: u16,
}

impl Registers {
    /// Creates a zeroed register file with only the Unused flag set.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0,
            p: Flag::Unused.mask(),
            pc: 0,
        }
    }

    /// Sets or clears exactly one status bit.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.p |= flag.mask();
        } else {
            self.p &= !flag.mask();
        }
    }

    /// Returns true if the given status bit is set.
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.p & flag.mask() != 0
    }

    /// Z = (value == 0), N = bit 7 of value.
    #[inline]
    pub fn set_zero_and_negative(&mut self, value: u8) {
        self.set_flag(Flag::Zero, value == 0);
        self.set_flag(Flag::Negative, value & 0x80 != 0);
    }

    /// Copies bits 7 and 6 of `value` straight into N and V (BIT only).
    #[inline]
    pub fn set_negative_and_overflow_from_bits(&mut self, value: u8) {
        const NV: u8 = Flag::Negative.mask() | Flag::Overflow.mask();
        self.p = (self.p & !NV) | (value & NV);
    }

    /// Signed overflow: both operands share a sign and the result does not.
    ///
    /// Shared by ADC and SBC.
    #[inline]
    pub fn set_overflow_from_addition(&mut self, result: u8, operand1: u8, operand2: u8) {
        let operands_same_sign = (operand1 ^ operand2) & 0x80 == 0;
        let result_sign_changed = (operand1 ^ result) & 0x80 != 0;
        self.set_flag(Flag::Overflow, operands_same_sign && result_sign_changed);
    }

    /// Full 16-bit address of the current stack slot.
    #[inline]
    pub fn stack_address(&self) -> u16 {
        0x0100 | self.s as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} [{}] SP:{:02X} PC:{:04X}",
            self.a,
            self.x,
            self.y,
            self.p,
            format_status(self.p),
            self.s,
            self.pc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_initialize_to_zero() {
        let regs = Registers::new();
        assert_eq!(regs.a, 0);
        assert_eq!(regs.x, 0);
        assert_eq!(regs.y, 0);
        assert_eq!(regs.s, 0);
        assert_eq!(regs.p, Flag::Unused.mask());
        assert_eq!(regs.pc, 0);
    }

    #[test]
    fn test_set_flag_touches_one_bit() {
        for flag in Flag::ALL {
            let mut regs = Registers::new();
            let before = regs.p;

            regs.set_flag(flag, true);
            assert!(regs.get_flag(flag));
            assert_eq!(regs.p, before | flag.mask());

            regs.set_flag(flag, false);
            assert!(!regs.get_flag(flag));
            assert_eq!(regs.p, before & !flag.mask());
        }
    }

    #[test]
    fn test_zero_and_negative() {
        let mut regs = Registers::new();

        regs.set_zero_and_negative(0);
        assert!(regs.get_flag(Flag::Zero));
        assert!(!regs.get_flag(Flag::Negative));

        regs.set_zero_and_negative(0x7F);
        assert!(!regs.get_flag(Flag::Zero));
        assert!(!regs.get_flag(Flag::Negative));

        regs.set_zero_and_negative(0xFF);
        assert!(!regs.get_flag(Flag::Zero));
        assert!(regs.get_flag(Flag::Negative));
    }

    #[test]
    fn test_negative_and_overflow_from_bits() {
        let mut regs = Registers::new();
        regs.set_flag(Flag::Carry, true);

        regs.set_negative_and_overflow_from_bits(0xC0);
        assert!(regs.get_flag(Flag::Negative));
        assert!(regs.get_flag(Flag::Overflow));
        assert!(regs.get_flag(Flag::Carry));
        assert!(regs.get_flag(Flag::Unused));

        regs.set_negative_and_overflow_from_bits(0x3F);
        assert!(!regs.get_flag(Flag::Negative));
        assert!(!regs.get_flag(Flag::Overflow));
        assert!(regs.get_flag(Flag::Carry));
    }

    #[test]
    fn test_overflow_from_addition() {
        let mut regs = Registers::new();

        // 0x50 + 0x50 = 0xA0: positive + positive -> negative
        regs.set_overflow_from_addition(0xA0, 0x50, 0x50);
        assert!(regs.get_flag(Flag::Overflow));

        // 0x80 + 0x80 = 0x00: negative + negative -> positive
        regs.set_overflow_from_addition(0x00, 0x80, 0x80);
        assert!(regs.get_flag(Flag::Overflow));

        // Mixed signs never overflow
        regs.set_overflow_from_addition(0x7F, 0xFF, 0x80);
        assert!(!regs.get_flag(Flag::Overflow));

        regs.set_overflow_from_addition(0x20, 0x10, 0x10);
        assert!(!regs.get_flag(Flag::Overflow));
    }

    #[test]
    fn test_display() {
        let regs = Registers {
            a: 0x12,
            x: 0x34,
            y: 0x56,
            s: 0xFD,
            p: 0x24,
            pc: 0xC000,
        };
        assert_eq!(
            regs.to_string(),
            "A:12 X:34 Y:56 P:24 [..-..I..] SP:FD PC:C000"
        );
    }
}
