//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, stack pointer, packed status byte and PC (see `Registers`)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Memory**: any `MemoryBus` implementation, `FlatMemory` by default
//!
//! ## Execution Model
//!
//! Each instruction runs atomically:
//! 1. Fetch the opcode at PC and look up its `OpcodeMetadata`
//! 2. Resolve the effective address for its addressing mode
//! 3. Dispatch to the instruction handler
//! 4. Advance PC by the instruction size
//! 5. Charge base cycles plus any page-crossing penalty
//!
//! Handlers that redirect control flow (jumps, calls, returns, taken branches)
//! store a PC that already accounts for step 4.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::addressing::{self, ResolvedAddress};
use crate::instructions::{self, Operand};
use crate::opcodes::lookup;
use crate::{
    AddressingMode, CpuConfig, Flag, FlatMemory, MemoryBus, MemoryError, Registers,
};

/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles charged for servicing an NMI or IRQ.
const INTERRUPT_CYCLES: u64 = 7;

/// Serializable copy of everything the CPU owns except memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSnapshot {
    pub registers: Registers,
    pub cycles: u64,
}

/// 6502 CPU state and execution context.
///
/// The CPU is generic over the memory implementation via the `MemoryBus`
/// trait and defaults to the 64KB `FlatMemory`.
///
/// # Examples
///
/// ```
/// use nes6502::{Flag, CPU};
///
/// let mut cpu = CPU::new();
///
/// // ADC #$10 with A = 0x10
/// cpu.load_program(&[0x69, 0x10]).unwrap();
/// cpu.set_a(0x10);
///
/// assert_eq!(cpu.step(), 2);
/// assert_eq!(cpu.a(), 0x20);
/// assert_eq!(cpu.pc(), 0x0002);
/// assert!(!cpu.flag(Flag::Carry));
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Register file
    pub(crate) regs: Registers,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Compatibility switches
    pub(crate) config: CpuConfig,
}

impl CPU<FlatMemory> {
    /// Creates a CPU with zeroed registers and 64KB of zeroed memory.
    ///
    /// Unlike `reset`, construction does not read the reset vector: PC, SP
    /// and every register start at zero, with only the Unused status bit set.
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }

    /// Loads a program image at address 0x0000. See `FlatMemory::load_program`.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), MemoryError> {
        self.memory.load_program(bytes)
    }

    /// Copies `len` bytes out of memory starting at `start`.
    pub fn read_range(&self, start: u16, len: usize) -> Result<Vec<u8>, MemoryError> {
        self.memory.read_range(start, len)
    }

    /// Copies `bytes` into memory starting at `start`.
    pub fn write_range(&mut self, start: u16, bytes: &[u8]) -> Result<(), MemoryError> {
        self.memory.write_range(start, bytes)
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU around an existing memory bus with the default config.
    pub fn with_memory(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU around an existing memory bus.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CpuConfig, FlatMemory, CPU};
    ///
    /// let cpu = CPU::with_config(FlatMemory::new(), CpuConfig::nmos());
    /// assert!(cpu.config().indirect_jmp_page_wrap);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(),
            cycles: 0,
            memory,
            config,
        }
    }

    /// Power-on/reset sequence: PC from the reset vector, SP = 0xFD, I set.
    ///
    /// The cycle counter is left alone.
    pub fn reset(&mut self) {
        self.regs.pc = self.memory.read_word(RESET_VECTOR);
        self.regs.s = 0xFD;
        self.regs.set_flag(Flag::InterruptDisable, true);
        debug!(target: "nes6502::cpu", "reset, pc={:04X}", self.regs.pc);
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load_program(&[0xEA]).unwrap(); // NOP
    ///
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> u64 {
        let start = self.cycles;
        self.execute_instruction();
        self.cycles - start
    }

    /// Executes `times` instructions and returns the cycle counter afterwards.
    ///
    /// `step_n(0)` executes nothing and simply reports the current count.
    pub fn step_n(&mut self, times: usize) -> u64 {
        for _ in 0..times {
            self.execute_instruction();
        }
        self.cycles
    }

    /// Runs whole instructions until at least `cycle_budget` cycles have
    /// elapsed and returns the cycles actually consumed.
    ///
    /// The result may overshoot the budget by up to one instruction.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.execute_instruction();
        }

        self.cycles - start_cycles
    }

    /// Charges `cycles` without executing anything (DMA and similar stalls).
    ///
    /// The counter saturates at `u64::MAX`.
    pub fn stall(&mut self, cycles: u64) {
        self.cycles = self.cycles.saturating_add(cycles);
    }

    fn execute_instruction(&mut self) {
        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);
        let metadata = lookup(opcode);

        let resolved = addressing::resolve(
            metadata.addressing_mode,
            &self.regs,
            &self.memory,
            self.config.indirect_jmp_page_wrap,
        );

        trace!(
            target: "nes6502::cpu",
            "{:04X}  {:02X}  {} {:?} ${:04X}  {} CYC:{}",
            pc,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            resolved.address,
            self.regs,
            self.cycles
        );

        let operand = Operand {
            address: resolved.address,
            pc,
            mode: metadata.addressing_mode,
            size: metadata.size_bytes,
            page_cycles: metadata.page_cycles,
        };
        instructions::dispatch(self, metadata.mnemonic, &operand);

        self.regs.pc = self.regs.pc.wrapping_add(metadata.size_bytes as u16);
        self.cycles = self.cycles.saturating_add(metadata.base_cycles as u64);

        // Branches charge their own penalty against the post-branch PC.
        if metadata.addressing_mode != AddressingMode::Relative
            && metadata.page_cycles > 0
            && resolved.page_crossed
        {
            self.cycles = self.cycles.saturating_add(metadata.page_cycles as u64);
        }
    }

    /// Resolves `mode` against the current PC and registers without
    /// executing anything.
    pub fn effective_address(&self, mode: AddressingMode) -> ResolvedAddress {
        addressing::resolve(
            mode,
            &self.regs,
            &self.memory,
            self.config.indirect_jmp_page_wrap,
        )
    }

    // ========== Interrupts ==========

    /// Services a non-maskable interrupt immediately.
    ///
    /// Pushes PC and status (B clear), sets I and jumps through 0xFFFA.
    pub fn trigger_nmi(&mut self) {
        debug!(target: "nes6502::cpu", "NMI at pc={:04X}", self.regs.pc);
        self.enter_interrupt(NMI_VECTOR);
    }

    /// Services a maskable interrupt through 0xFFFE.
    ///
    /// Returns false without touching state if the interrupt was masked by
    /// the I flag (see `CpuConfig::irq_respects_interrupt_disable`).
    pub fn trigger_irq(&mut self) -> bool {
        if self.config.irq_respects_interrupt_disable
            && self.regs.get_flag(Flag::InterruptDisable)
        {
            debug!(target: "nes6502::cpu", "IRQ masked at pc={:04X}", self.regs.pc);
            return false;
        }
        debug!(target: "nes6502::cpu", "IRQ at pc={:04X}", self.regs.pc);
        self.enter_interrupt(IRQ_VECTOR);
        true
    }

    fn enter_interrupt(&mut self, vector: u16) {
        self.push_word(self.regs.pc);
        let status = (self.regs.p & !Flag::Break.mask()) | Flag::Unused.mask();
        self.push_byte(status);
        self.regs.set_flag(Flag::InterruptDisable, true);
        self.regs.pc = self.memory.read_word(vector);
        self.cycles = self.cycles.saturating_add(INTERRUPT_CYCLES);
    }

    // ========== Stack ==========

    /// Writes `value` at 0x0100|SP, then decrements SP (wrapping).
    pub fn push_byte(&mut self, value: u8) {
        self.memory.write(self.regs.stack_address(), value);
        self.regs.s = self.regs.s.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads 0x0100|SP.
    pub fn pull_byte(&mut self) -> u8 {
        self.regs.s = self.regs.s.wrapping_add(1);
        self.memory.read(self.regs.stack_address())
    }

    /// Pushes the high byte, then the low byte.
    pub fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pulls the low byte, then the high byte.
    pub fn pull_word(&mut self) -> u16 {
        let lo = self.pull_byte() as u16;
        let hi = self.pull_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Memory ==========

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub fn read_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Registers ==========

    /// Returns a copy of the register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Replaces the whole register file.
    ///
    /// The status byte is stored verbatim; the Unused bit is not forced.
    pub fn set_registers(&mut self, regs: Registers) {
        self.regs = regs;
    }

    pub fn a(&self) -> u8 {
        self.regs.a
    }

    pub fn x(&self) -> u8 {
        self.regs.x
    }

    pub fn y(&self) -> u8 {
        self.regs.y
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.regs.s
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.p
    }

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.s = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.regs.p = value;
    }

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.regs.get_flag(flag)
    }

    /// Sets or clears a single status flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Snapshots ==========

    /// Captures registers and cycle count. Memory is not included.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            registers: self.regs,
            cycles: self.cycles,
        }
    }

    /// Restores registers and cycle count from a snapshot.
    pub fn restore(&mut self, snapshot: &CpuSnapshot) {
        self.regs = snapshot.registers;
        self.cycles = snapshot.cycles;
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("regs", &self.regs)
            .field("cycles", &self.cycles)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
