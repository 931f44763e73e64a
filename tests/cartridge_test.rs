//! Tests for cartridge image parsing and handing PRG-ROM to the CPU.

use nes6502::cartridge::{CHR_PAGE_SIZE, HEADER_SIZE, PRG_PAGE_SIZE};
use nes6502::{Cartridge, Mirroring, RomError, RomHeader, CPU};

fn build_image(prg_pages: u8, chr_pages: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut image = vec![b'N', b'E', b'S', 0x1A, prg_pages, chr_pages, flags6, flags7];
    image.resize(HEADER_SIZE, 0);
    image.resize(
        HEADER_SIZE + prg_pages as usize * PRG_PAGE_SIZE + chr_pages as usize * CHR_PAGE_SIZE,
        0,
    );
    image
}

#[test]
fn test_parse_ines_header() {
    let image = build_image(2, 1, 0x01, 0x00);
    let header = RomHeader::parse(&image).unwrap();

    assert_eq!(header.prg_pages, 2);
    assert_eq!(header.chr_pages, 1);
    assert_eq!(header.mapper, 0);
    assert_eq!(header.mirroring, Mirroring::Vertical);
    assert!(!header.nes2);
    assert_eq!(header.image_size(), image.len());
}

#[test]
fn test_bad_magic_is_rejected() {
    let mut image = build_image(1, 0, 0, 0);
    image[0] = b'X';

    assert_eq!(
        Cartridge::from_bytes(&image),
        Err(RomError::BadMagic {
            found: [b'X', b'E', b'S', 0x1A]
        })
    );
}

#[test]
fn test_prg_and_chr_split() {
    let mut image = build_image(1, 1, 0, 0);
    image[HEADER_SIZE] = 0xA9;
    image[HEADER_SIZE + PRG_PAGE_SIZE] = 0xCC;

    let cart = Cartridge::from_bytes(&image).unwrap();
    assert_eq!(cart.prg_rom().len(), PRG_PAGE_SIZE);
    assert_eq!(cart.chr_rom().len(), CHR_PAGE_SIZE);
    assert_eq!(cart.prg_rom()[0], 0xA9);
    assert_eq!(cart.chr_rom()[0], 0xCC);
    assert!(cart.trainer().is_none());
}

#[test]
fn test_chr_ram_cartridge() {
    let image = build_image(1, 0, 0, 0);
    let cart = Cartridge::from_bytes(&image).unwrap();
    assert!(cart.chr_rom().is_empty());
}

#[test]
fn test_prg_rom_runs_after_reset() {
    let mut image = build_image(1, 0, 0, 0);
    // LDA #$42 at $C000, reset vector -> $C000
    image[HEADER_SIZE] = 0xA9;
    image[HEADER_SIZE + 1] = 0x42;
    image[HEADER_SIZE + 0x3FFC] = 0x00;
    image[HEADER_SIZE + 0x3FFD] = 0xC0;

    let cart = Cartridge::from_bytes(&image).unwrap();
    let mut cpu = CPU::new();
    cpu.write_range(0xC000, cart.prg_rom()).unwrap();
    cpu.reset();

    assert_eq!(cpu.pc(), 0xC000);
    cpu.step();
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_error_display() {
    let err = RomError::TruncatedHeader { len: 4 };
    assert_eq!(
        err.to_string(),
        "image is 4 bytes, shorter than the 16-byte header"
    );
}
