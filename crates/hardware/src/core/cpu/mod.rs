//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the whole
//! programmer-visible processor state. It coordinates the following:
//! 1. **State Management:** R0-R7, the program counter and FL, kept as distinct fields.
//! 2. **Run State:** The running/halted state machine driven by `HLT` and faults.
//! 3. **Observability:** Instruction tracing, statistics and state dumps.
//!
//! Memory and the output sink are not part of the CPU; they are borrowed for
//! the duration of each [`Cpu::tick`].

/// Instruction execution (fetch, decode, dispatch, PC advance).
pub mod execution;

/// Fault raising and reporting.
pub mod fault;

/// Instruction fetch and stack access.
pub mod memory;

use crate::common::constants::Addr;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::arch::{Flag, Flags, Gpr};
use crate::stats::SimStats;

/// Execution state of the CPU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuState {
    /// Ticks fetch and execute instructions.
    #[default]
    Running,
    /// Terminal until [`Cpu::reset`]; ticks do nothing.
    Halted,
}

/// LS-8 processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers R0-R7 (R7 is SP).
    pub regs: Gpr,
    /// Program Counter.
    pub pc: Addr,
    /// Flags register.
    pub fl: Flags,
    /// Running or halted.
    pub state: CpuState,
    /// Emit a trace event for every executed instruction.
    pub trace: bool,
    /// The fault that halted the CPU, if any.
    pub last_fault: Option<Fault>,
    /// Execution statistics.
    pub stats: SimStats,
    /// PC value restored by [`Cpu::reset`].
    reset_pc: Addr,
}

impl Cpu {
    /// Creates a CPU in its reset state using the given configuration.
    ///
    /// PC starts at the configured load address, SP at `0xF4`, everything
    /// else at zero.
    pub fn new(config: &Config) -> Self {
        let reset_pc = config.system.load_address;
        Self {
            regs: Gpr::new(),
            pc: reset_pc,
            fl: Flags::new(),
            state: CpuState::Running,
            trace: config.general.trace_instructions,
            last_fault: None,
            stats: SimStats::default(),
            reset_pc,
        }
    }

    /// Restores the power-on register state so a halted CPU can run again.
    ///
    /// Statistics and the trace setting are kept.
    pub fn reset(&mut self) {
        self.regs = Gpr::new();
        self.pc = self.reset_pc;
        self.fl = Flags::new();
        self.state = CpuState::Running;
        self.last_fault = None;
        tracing::debug!(pc = self.pc, "cpu reset");
    }

    /// Returns true once `HLT` has executed or a fault was raised.
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// Halts the CPU from outside the instruction stream.
    pub const fn halt(&mut self) {
        self.state = CpuState::Halted;
    }

    /// Reads a named flag.
    pub const fn flag(&self, flag: Flag) -> bool {
        self.fl.get(flag)
    }

    /// Sets or clears a named flag.
    pub const fn set_flag(&mut self, flag: Flag, on: bool) {
        self.fl.set(flag, on);
    }

    /// Dumps the current CPU state (PC, FL and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#06x}  {}", self.pc, self.fl);
        self.regs.dump();
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
