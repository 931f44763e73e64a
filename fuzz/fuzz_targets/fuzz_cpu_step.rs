//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, runs a handful of
//! instructions, and checks the invariants every instruction must keep.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{Flag, FlatMemory, CpuConfig, MemoryBus, Registers, CPU, OPCODE_TABLE};

#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    s: u8,
    p: u8,
    pc: u16,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at 0x4000 for absolute/indexed operands
    main_memory: [u8; 256],
    indirect_jmp_page_wrap: bool,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFA, 0x9000);
    memory.write_word(0xFFFE, 0x9000);

    let _ = memory.write_range(0x0000, &input.zero_page);
    let _ = memory.write_range(0x0100, &input.stack_page);
    let _ = memory.write_range(0x4000, &input.main_memory);

    let pc = input.registers.pc;
    for (i, &byte) in input.instruction_bytes.iter().enumerate() {
        memory.write(pc.wrapping_add(i as u16), byte);
    }

    let config = CpuConfig {
        indirect_jmp_page_wrap: input.indirect_jmp_page_wrap,
        ..CpuConfig::default()
    };
    let mut cpu = CPU::with_config(memory, config);
    cpu.set_registers(Registers {
        a: input.registers.a,
        x: input.registers.x,
        y: input.registers.y,
        s: input.registers.s,
        p: input.registers.p,
        pc,
    });

    // The first instruction is fully known, so its cost is bounded by metadata.
    let opcode = cpu.read_byte(pc);
    let metadata = &OPCODE_TABLE[opcode as usize];
    let cost = cpu.step();
    let max_cost = metadata.base_cycles as u64 + 1 + metadata.page_cycles as u64;
    assert!(cost >= metadata.base_cycles as u64);
    assert!(cost <= max_cost);

    if !metadata.mnemonic.is_control_flow() {
        assert_eq!(cpu.pc(), pc.wrapping_add(metadata.size_bytes as u16));
    }

    let before = cpu.cycles();
    let after = cpu.step_n((input.steps % 16) as usize);
    assert!(after >= before);

    // NMI always enters through the vector.
    cpu.trigger_nmi();
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag(Flag::InterruptDisable));
});
