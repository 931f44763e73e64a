//! Tests for INC, DEC, INX, INY, DEX and DEY.

use nes6502::{Flag, CPU};

#[test]
fn test_inc_memory_wraps() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0xE6, 0x20]).unwrap();
    cpu.write_byte(0x0020, 0xFF);
    cpu.set_flag(Flag::Carry, true);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.read_byte(0x0020), 0x00);
    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Carry)); // untouched
}

#[test]
fn test_dec_memory_goes_negative() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0xCE, 0x00, 0x03]).unwrap();

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.read_byte(0x0300), 0xFF);
    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Zero));
}

#[test]
fn test_inx_iny() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0xE8, 0xC8]).unwrap();
    cpu.set_x(0x7F);
    cpu.set_y(0xFF);

    cpu.step();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag(Flag::Negative));

    cpu.step();
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
}

#[test]
fn test_dex_dey() {
    let mut cpu = CPU::new();
    cpu.load_program(&[0xCA, 0x88]).unwrap();
    cpu.set_x(0x01);

    cpu.step();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Flag::Zero));

    cpu.step();
    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cpu.cycles(), 4);
}
