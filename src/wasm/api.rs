//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control and state inspection.

use wasm_bindgen::prelude::*;

use crate::{Cartridge, Flag, CPU};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// CPU handle owned by JavaScript.
#[wasm_bindgen]
pub struct WasmCpu {
    cpu: CPU,
}

#[wasm_bindgen]
impl WasmCpu {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCpu {
        WasmCpu { cpu: CPU::new() }
    }

    /// Load a program image at $0000
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        self.cpu.load_program(bytes)?;
        Ok(())
    }

    /// Copy an iNES image's PRG-ROM to $8000 (mirrored to $C000 for 16 KiB
    /// images) and run the reset sequence
    pub fn load_cartridge(&mut self, image: &[u8]) -> Result<(), JsError> {
        let cartridge = Cartridge::from_bytes(image)?;
        let prg = cartridge.prg_rom();
        let prg = &prg[..prg.len().min(0x8000)];

        self.cpu.write_range(0x8000, prg)?;
        if prg.len() <= 0x4000 {
            self.cpu.write_range(0xC000, prg)?;
        }
        self.cpu.reset();
        Ok(())
    }

    /// Execute `times` instructions and return the cumulative cycle count
    pub fn step(&mut self, times: u32) -> f64 {
        self.cpu.step_n(times as usize) as f64
    }

    /// Execute whole instructions for at least `cycles` cycles
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn trigger_nmi(&mut self) {
        self.cpu.trigger_nmi();
    }

    pub fn trigger_irq(&mut self) -> bool {
        self.cpu.trigger_irq()
    }

    pub fn read_range(&self, start: u16, len: usize) -> Result<Vec<u8>, JsError> {
        Ok(self.cpu.read_range(start, len)?)
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.cpu.write_byte(addr, value);
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // u64 does not fit a JS number losslessly
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag(Flag::Negative)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag(Flag::Overflow)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag(Flag::InterruptDisable)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag(Flag::Zero)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag(Flag::Carry)
    }

    /// Register file as a display string, e.g. for a debugger panel
    pub fn registers_string(&self) -> String {
        self.cpu.registers().to_string()
    }
}

impl Default for WasmCpu {
    fn default() -> Self {
        Self::new()
    }
}
