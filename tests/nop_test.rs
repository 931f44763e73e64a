//! Tests for NOP and its undocumented multi-byte variants.

use nes6502::CPU;

fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_nop_changes_nothing_but_pc() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x12);
    cpu.set_x(0x34);
    cpu.set_y(0x56);
    cpu.set_status(0xE7);
    cpu.write_byte(0x8000, 0xEA);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x12, 0x34, 0x56));
    assert_eq!(cpu.status(), 0xE7);
}

#[test]
fn test_undocumented_single_byte_nops() {
    for opcode in [0x1A, 0x3A, 0x5A, 0x7A, 0xDA, 0xFA] {
        let mut cpu = setup_cpu();
        cpu.write_byte(0x8000, opcode);
        assert_eq!(cpu.step(), 2, "opcode 0x{:02X}", opcode);
        assert_eq!(cpu.pc(), 0x8001, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_immediate_nop_skips_operand() {
    let mut cpu = setup_cpu();
    cpu.write_range(0x8000, &[0x80, 0xFF]).unwrap();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_zero_page_nop() {
    let mut cpu = setup_cpu();
    cpu.write_range(0x8000, &[0x04, 0x10, 0x14, 0x10]).unwrap();

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x8004);
}

#[test]
fn test_absolute_x_nop_page_penalty() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.write_range(0x8000, &[0x0C, 0x00, 0x20, 0x1C, 0xFF, 0x20]).unwrap();

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.pc(), 0x8006);
}
