//! Tests for the register transfer and flag instructions.

use nes6502::{Flag, CPU};

fn run(program: &[u8], setup: impl FnOnce(&mut CPU)) -> CPU {
    let mut cpu = CPU::new();
    cpu.load_program(program).unwrap();
    setup(&mut cpu);
    cpu.step();
    cpu
}

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    let cpu = run(&[0xAA], |cpu| cpu.set_a(0x00));
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag(Flag::Zero));

    let cpu = run(&[0xA8], |cpu| cpu.set_a(0xF0));
    assert_eq!(cpu.y(), 0xF0);
    assert!(cpu.flag(Flag::Negative));
}

#[test]
fn test_txa_tya() {
    let cpu = run(&[0x8A], |cpu| cpu.set_x(0x42));
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));

    let cpu = run(&[0x98], |cpu| cpu.set_y(0x80));
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag(Flag::Negative));
    assert_eq!(cpu.cycles(), 2);
}

// ========== Flag Instructions ==========

#[test]
fn test_set_and_clear_touch_one_bit() {
    let cases = [
        (0x38, Flag::Carry, true),
        (0x18, Flag::Carry, false),
        (0x78, Flag::InterruptDisable, true),
        (0x58, Flag::InterruptDisable, false),
        (0xF8, Flag::Decimal, true),
        (0xD8, Flag::Decimal, false),
        (0xB8, Flag::Overflow, false),
    ];

    for (opcode, flag, expected) in cases {
        for start in [0x00u8, 0xFF] {
            let cpu = run(&[opcode], |cpu| cpu.set_status(start));
            assert_eq!(cpu.flag(flag), expected, "opcode 0x{:02X}", opcode);
            assert_eq!(
                cpu.status() & !flag.mask(),
                start & !flag.mask(),
                "opcode 0x{:02X} touched other bits",
                opcode
            );
            assert_eq!(cpu.cycles(), 2);
        }
    }
}
