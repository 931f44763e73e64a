//! Tests for the execution loop: step, step_n, run_for_cycles, stall,
//! determinism and snapshots.

use nes6502::{CpuSnapshot, MemoryBus, Registers, CPU};

/// Counts X down from 5 to 0, storing each value, then spins on a JMP.
#[rustfmt::skip]
const COUNTDOWN: [u8; 11] = [
    0xA2, 0x05,       // LDX #$05
    0x8A,             // loop: TXA
    0x95, 0x20,       // STA $20,X
    0xCA,             // DEX
    0xD0, 0xFA,       // BNE loop
    0x4C, 0x08, 0x00, // JMP $0008
];

fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.load_program(&COUNTDOWN).unwrap();
    cpu
}

#[test]
fn test_step_returns_instruction_cost() {
    let mut cpu = setup_cpu();
    assert_eq!(cpu.step(), 2); // LDX
    assert_eq!(cpu.step(), 2); // TXA
    assert_eq!(cpu.step(), 4); // STA zp,X
    assert_eq!(cpu.step(), 2); // DEX
    assert_eq!(cpu.step(), 3); // BNE taken
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_countdown_program() {
    let mut cpu = setup_cpu();
    cpu.step_n(1 + 5 * 4);

    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.pc(), 0x0008);
    for i in 1..=5u16 {
        assert_eq!(cpu.read_byte(0x20 + i), i as u8);
    }
    // LDX + 5 * (TXA + STA + DEX) + 4 taken BNE + 1 not taken
    assert_eq!(cpu.cycles(), 2 + 5 * 8 + 4 * 3 + 2);
}

#[test]
fn test_step_n_matches_repeated_step() {
    let mut batched = setup_cpu();
    let mut single = setup_cpu();

    let total = batched.step_n(40);
    for _ in 0..40 {
        single.step();
    }

    assert_eq!(total, single.cycles());
    assert_eq!(batched.registers(), single.registers());
    assert_eq!(
        batched.read_range(0x0000, 0x10000).unwrap(),
        single.read_range(0x0000, 0x10000).unwrap()
    );
}

#[test]
fn test_step_n_returns_cumulative_count() {
    let mut cpu = setup_cpu();
    let first = cpu.step_n(3);
    let second = cpu.step_n(3);
    assert_eq!(first, 8);
    assert_eq!(second, cpu.cycles());
    assert!(second > first);
}

#[test]
fn test_run_for_cycles_budget() {
    let mut cpu = setup_cpu();
    let used = cpu.run_for_cycles(100);
    assert!(used >= 100);
    assert!(used < 100 + 7);
    assert_eq!(cpu.cycles(), used);
}

#[test]
fn test_stall_adds_to_running_count() {
    let mut cpu = setup_cpu();
    cpu.step();
    cpu.stall(514);
    assert_eq!(cpu.step_n(0), 516);
}

#[test]
fn test_set_registers_round_trip() {
    let mut cpu = CPU::new();
    let regs = Registers {
        a: 1,
        x: 2,
        y: 3,
        s: 0xFD,
        p: 0xE5,
        pc: 0x8000,
    };
    cpu.set_registers(regs);
    assert_eq!(cpu.registers(), regs);
}

#[test]
fn test_snapshot_serializes() {
    let mut cpu = setup_cpu();
    cpu.step_n(5);
    let snapshot = cpu.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: CpuSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);

    let mut other = setup_cpu();
    other.restore(&restored);
    assert_eq!(other.registers(), cpu.registers());
    assert_eq!(other.cycles(), cpu.cycles());
}

#[test]
fn test_custom_memory_bus() {
    /// 2 KiB of RAM mirrored across the address space.
    struct MirroredRam([u8; 0x800]);

    impl MemoryBus for MirroredRam {
        fn read(&self, addr: u16) -> u8 {
            self.0[(addr & 0x07FF) as usize]
        }

        fn write(&mut self, addr: u16, value: u8) {
            self.0[(addr & 0x07FF) as usize] = value;
        }
    }

    let mut ram = MirroredRam([0; 0x800]);
    // STA $0800 ; writes the mirror of $0000
    ram.0[..3].copy_from_slice(&[0x8D, 0x00, 0x08]);

    let mut cpu = CPU::with_memory(ram);
    cpu.set_a(0x77);
    cpu.step();

    assert_eq!(cpu.read_byte(0x0000), 0x77);
    assert_eq!(cpu.memory().read(0x1000), 0x77);
}
