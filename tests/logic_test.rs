//! Tests for AND, ORA, EOR and BIT.

use nes6502::{Flag, CPU};

fn run(program: &[u8], a: u8) -> CPU {
    let mut cpu = CPU::new();
    cpu.load_program(program).unwrap();
    cpu.set_a(a);
    cpu.step();
    cpu
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let cpu = run(&[0x29, 0x0F], 0x3C);
    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
}

#[test]
fn test_and_to_zero() {
    let cpu = run(&[0x29, 0x0F], 0xF0);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_and_indirect_x() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0x21, 0x20]).unwrap();
    cpu.set_x(0x04);
    cpu.write_word(0x0024, 0x0400);
    cpu.write_byte(0x0400, 0x81);
    cpu.set_a(0xFF);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag(Flag::Negative));
}

// ========== ORA ==========

#[test]
fn test_ora_sets_negative() {
    let cpu = run(&[0x09, 0x80], 0x01);
    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Zero));
}

#[test]
fn test_ora_zero_with_zero() {
    let cpu = run(&[0x09, 0x00], 0x00);
    assert!(cpu.flag(Flag::Zero));
}

// ========== EOR ==========

#[test]
fn test_eor_self_cancels() {
    let cpu = run(&[0x49, 0xA5], 0xA5);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_eor_flips_bits() {
    let cpu = run(&[0x49, 0xFF], 0x0F);
    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag(Flag::Negative));
}

// ========== BIT ==========

#[test]
fn test_bit_copies_operand_bits_not_result_bits() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0x24, 0x10]).unwrap();
    cpu.write_byte(0x0010, 0xC0);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative));
    assert!(cpu.flag(Flag::Overflow));
}

#[test]
fn test_bit_clears_n_and_v() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0x2C, 0x00, 0x03]).unwrap();
    cpu.write_byte(0x0300, 0x3F);
    cpu.set_a(0x01);
    cpu.set_flag(Flag::Negative, true);
    cpu.set_flag(Flag::Overflow, true);

    assert_eq!(cpu.step(), 4);
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Overflow));
}
