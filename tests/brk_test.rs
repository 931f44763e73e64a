//! Tests for the BRK instruction.

use nes6502::{Flag, CPU};

fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.load_program(&[0x00]).unwrap();
    cpu.write_word(0xFFFE, 0x9000);
    cpu.set_sp(0xFF);
    cpu
}

#[test]
fn test_brk_loads_irq_vector() {
    let mut cpu = setup_cpu();

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag(Flag::Break));
    assert!(cpu.flag(Flag::InterruptDisable));
}

#[test]
fn test_brk_pushes_pc_plus_two_then_status() {
    let mut cpu = setup_cpu();
    cpu.set_flag(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.read_byte(0x01FF), 0x00);
    assert_eq!(cpu.read_byte(0x01FE), 0x02);

    let pushed = cpu.read_byte(0x01FD);
    assert_ne!(pushed & Flag::Break.mask(), 0);
    assert_ne!(pushed & Flag::Unused.mask(), 0);
    assert_ne!(pushed & Flag::Carry.mask(), 0);
}

#[test]
fn test_brk_rti_resumes_after_padding_byte() {
    let mut cpu = setup_cpu();
    cpu.write_byte(0x9000, 0x40); // RTI

    cpu.step_n(2);

    assert_eq!(cpu.pc(), 0x0002);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(!cpu.flag(Flag::Carry));
    assert_eq!(cpu.cycles(), 13);
}
