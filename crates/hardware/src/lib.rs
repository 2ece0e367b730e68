//! LS-8 system simulator library.
//!
//! This crate implements an instruction-level simulator for the LS-8 8-bit
//! computer with the following:
//! 1. **Core:** Register file (R0-R7, SP = R7), PC, FL, the ALU and the
//!    fetch/decode/execute loop.
//! 2. **ISA:** Opcode definitions, a static decode table and a disassembler.
//! 3. **SoC:** The `Memory` and `OutputSink` collaborator traits, RAM and console.
//! 4. **Simulation:** Program loader, clock pacing, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::soc::{CaptureOutput, Ram};
//! use ls8_core::sim::{RunOutcome, Simulator, parse_program};
//! use ls8_core::Config;
//!
//! let program = "\
//! 10011001 # LDI R0,8
//! 00000000
//! 00001000
//! 10011001 # LDI R1,9
//! 00000001
//! 00001001
//! 10101010 # MUL R0,R1
//! 00000000
//! 00000001
//! 01000011 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//!
//! let mut config = Config::default();
//! config.system.clock_period_us = 0;
//!
//! let mut sim = Simulator::new(Ram::default(), CaptureOutput::new(), &config);
//! sim.load_program(&parse_program(program).unwrap()).unwrap();
//!
//! assert_eq!(sim.run(), RunOutcome::Halted);
//! assert_eq!(sim.output().values(), &[72]);
//! ```

/// Common types and constants (addresses, registers, faults, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (architectural state, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, decode table, disassembler).
pub mod isa;
/// Program loader, clock and top-level simulator.
pub mod sim;
/// Memory, output devices and collaborator traits.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Fatal CPU fault raised by the execution loop.
pub use crate::common::error::Fault;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, PC, FL and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::with_config` or `Simulator::new`.
pub use crate::sim::Simulator;
