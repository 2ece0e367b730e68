//! Core processor implementation.
//!
//! This module contains the LS-8 CPU: its architectural state, its single
//! execution unit, and the fetch/decode/execute loop that drives them.

/// Architectural state (register file, flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, CpuState};
