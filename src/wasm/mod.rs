//! WebAssembly bindings for the nes6502 core.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU,
//! enabling browser-based stepping and inspection.

pub mod api;

pub use api::WasmCpu;
