//! Tests for the 256-entry opcode metadata table.

use nes6502::{opcodes::lookup, AddressingMode, Mnemonic, OPCODE_TABLE};

#[test]
fn test_table_is_indexed_by_opcode() {
    for (i, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(metadata.opcode as usize, i);
        assert!(std::ptr::eq(lookup(i as u8), metadata));
    }
}

#[test]
fn test_every_entry_has_size_and_cycles() {
    for metadata in OPCODE_TABLE.iter() {
        assert!(
            (1..=3).contains(&metadata.size_bytes),
            "opcode 0x{:02X} has size {}",
            metadata.opcode,
            metadata.size_bytes
        );
        assert!(metadata.base_cycles >= 2, "opcode 0x{:02X}", metadata.opcode);
        assert!(metadata.base_cycles <= 8, "opcode 0x{:02X}", metadata.opcode);
    }
}

#[test]
fn test_size_follows_addressing_mode() {
    for metadata in OPCODE_TABLE.iter() {
        if metadata.mnemonic == Mnemonic::Brk {
            continue;
        }
        assert_eq!(
            metadata.size_bytes,
            1 + metadata.addressing_mode.operand_bytes(),
            "opcode 0x{:02X}",
            metadata.opcode
        );
    }
}

#[test]
fn test_known_entries() {
    let lda_imm = lookup(0xA9);
    assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
    assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
    assert_eq!(lda_imm.size_bytes, 2);
    assert_eq!(lda_imm.base_cycles, 2);
    assert!(!lda_imm.illegal);

    let lda_abx = lookup(0xBD);
    assert_eq!(lda_abx.base_cycles, 4);
    assert_eq!(lda_abx.page_cycles, 1);

    let sta_abx = lookup(0x9D);
    assert_eq!(sta_abx.base_cycles, 5);
    assert_eq!(sta_abx.page_cycles, 0);

    let jmp_ind = lookup(0x6C);
    assert_eq!(jmp_ind.addressing_mode, AddressingMode::Indirect);
    assert_eq!(jmp_ind.size_bytes, 3);
    assert_eq!(jmp_ind.base_cycles, 5);

    let brk = lookup(0x00);
    assert_eq!(brk.mnemonic, Mnemonic::Brk);
    assert_eq!(brk.size_bytes, 1);
    assert_eq!(brk.base_cycles, 7);
}

#[test]
fn test_branches_are_relative_with_page_cycles() {
    for opcode in [0x10u8, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
        let metadata = lookup(opcode);
        assert_eq!(metadata.addressing_mode, AddressingMode::Relative);
        assert_eq!(metadata.size_bytes, 2);
        assert_eq!(metadata.base_cycles, 2);
        assert_eq!(metadata.page_cycles, 1);
    }
}

#[test]
fn test_illegal_marking() {
    assert!(!lookup(0xEA).illegal);
    assert!(lookup(0x1A).illegal);
    assert!(lookup(0xEB).illegal);
    assert_eq!(lookup(0xEB).mnemonic, Mnemonic::Sbc);
    assert!(lookup(0xA7).illegal);
    assert_eq!(lookup(0xA7).mnemonic, Mnemonic::Lax);

    let documented = OPCODE_TABLE.iter().filter(|m| !m.illegal).count();
    assert_eq!(documented, 151);
}

#[test]
fn test_mnemonic_display() {
    assert_eq!(Mnemonic::Adc.to_string(), "ADC");
    assert_eq!(Mnemonic::Kil.as_str(), "KIL");
}
