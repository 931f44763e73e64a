//! # Cartridge Images
//!
//! Parsing for the 16-byte iNES header and its NES 2.0 extension, plus a
//! plain split of the PRG and CHR payloads that follow it.
//!
//! No mapper logic lives here. A host copies `prg_rom()` into the CPU's
//! address space itself, e.g. with `CPU::write_range`.

use serde::{Deserialize, Serialize};

use crate::RomError;

/// Header length in bytes.
pub const HEADER_SIZE: usize = 0x10;
/// Trainer length in bytes, present when flags 6 bit 2 is set.
pub const TRAINER_SIZE: usize = 0x200;
/// One PRG-ROM page.
pub const PRG_PAGE_SIZE: usize = 0x4000;
/// One CHR-ROM page.
pub const CHR_PAGE_SIZE: usize = 0x2000;

const MAGIC: [u8; 4] = *b"NES\x1A";

/// Nametable arrangement requested by the cartridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Decoded iNES / NES 2.0 header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomHeader {
    /// Number of 16 KiB PRG-ROM pages (12 bits under NES 2.0).
    pub prg_pages: u16,
    /// Number of 8 KiB CHR-ROM pages (12 bits under NES 2.0).
    pub chr_pages: u16,
    /// Mapper number (12 bits under NES 2.0).
    pub mapper: u16,
    /// NES 2.0 sub-mapper, 0 otherwise.
    pub submapper: u8,
    pub mirroring: Mirroring,
    /// Battery-backed SRAM at $6000-$7FFF.
    pub battery: bool,
    /// A 512-byte trainer precedes PRG-ROM.
    pub trainer: bool,
    pub vs_unisystem: bool,
    pub playchoice: bool,
    /// Header uses the NES 2.0 extension.
    pub nes2: bool,
}

impl RomHeader {
    /// Parses the first 16 bytes of `bytes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{Mirroring, RomHeader};
    ///
    /// let header = RomHeader::parse(&[
    ///     b'N', b'E', b'S', 0x1A, 0x02, 0x01, 0x11, 0x00,
    ///     0, 0, 0, 0, 0, 0, 0, 0,
    /// ]).unwrap();
    ///
    /// assert_eq!(header.prg_pages, 2);
    /// assert_eq!(header.chr_pages, 1);
    /// assert_eq!(header.mapper, 1);
    /// assert_eq!(header.mirroring, Mirroring::Vertical);
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, RomError> {
        if bytes.len() < HEADER_SIZE {
            return Err(RomError::TruncatedHeader { len: bytes.len() });
        }

        let found = [bytes[0], bytes[1], bytes[2], bytes[3]];
        if found != MAGIC {
            return Err(RomError::BadMagic { found });
        }

        let flags6 = bytes[6];
        let flags7 = bytes[7];

        let mirroring = if flags6 & 0x08 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mut header = Self {
            prg_pages: bytes[4] as u16,
            chr_pages: bytes[5] as u16,
            mapper: ((flags6 >> 4) | (flags7 & 0xF0)) as u16,
            submapper: 0,
            mirroring,
            battery: flags6 & 0x02 != 0,
            trainer: flags6 & 0x04 != 0,
            vs_unisystem: flags7 & 0x01 != 0,
            playchoice: flags7 & 0x02 != 0,
            nes2: (flags7 & 0x0C) == 0x08,
        };

        if header.nes2 {
            header.prg_pages |= ((bytes[9] & 0x0F) as u16) << 8;
            header.chr_pages |= ((bytes[9] >> 4) as u16) << 8;
            header.mapper |= ((bytes[8] & 0x0F) as u16) << 8;
            header.submapper = bytes[8] >> 4;
        }

        Ok(header)
    }

    pub fn prg_rom_size(&self) -> usize {
        self.prg_pages as usize * PRG_PAGE_SIZE
    }

    pub fn chr_rom_size(&self) -> usize {
        self.chr_pages as usize * CHR_PAGE_SIZE
    }

    /// Total image size the header describes, trainer included.
    pub fn image_size(&self) -> usize {
        let trainer = if self.trainer { TRAINER_SIZE } else { 0 };
        HEADER_SIZE + trainer + self.prg_rom_size() + self.chr_rom_size()
    }
}

/// A parsed cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartridge {
    header: RomHeader,
    trainer: Option<Vec<u8>>,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
}

impl Cartridge {
    /// Splits a full image into its header, trainer, PRG and CHR parts.
    ///
    /// Trailing bytes past the CHR data are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RomError> {
        let header = RomHeader::parse(bytes)?;

        let expected = header.image_size();
        if bytes.len() < expected {
            return Err(RomError::TruncatedData {
                expected,
                actual: bytes.len(),
            });
        }

        let mut offset = HEADER_SIZE;
        let trainer = if header.trainer {
            let data = bytes[offset..offset + TRAINER_SIZE].to_vec();
            offset += TRAINER_SIZE;
            Some(data)
        } else {
            None
        };

        let prg_end = offset + header.prg_rom_size();
        let prg_rom = bytes[offset..prg_end].to_vec();
        let chr_rom = bytes[prg_end..prg_end + header.chr_rom_size()].to_vec();

        Ok(Self {
            header,
            trainer,
            prg_rom,
            chr_rom,
        })
    }

    pub fn header(&self) -> &RomHeader {
        &self.header
    }

    pub fn trainer(&self) -> Option<&[u8]> {
        self.trainer.as_deref()
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }
}
