//! Fault and error definitions.
//!
//! This module defines the error taxonomy for the simulator. It provides:
//! 1. **Faults:** Fatal conditions raised by the CPU while executing a program.
//!    A fault halts the CPU; it is never retried or skipped.
//! 2. **Load Errors:** Failures while reading or placing a program image.
//! 3. **Config Errors:** Failures while reading or validating a configuration file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::constants::Addr;

/// Fatal CPU fault.
///
/// Raised by the execution loop when the loaded program cannot be executed
/// any further. The CPU halts and stays halted until it is reset.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// The byte at PC does not encode any known instruction.
    #[error("Unknown instruction: {opcode:#010b} at PC {pc:#04x}")]
    UnknownOpcode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: Addr,
    },

    /// A register operand names a register outside R0-R7.
    #[error("Invalid register R{index} in instruction at PC {pc:#04x}")]
    InvalidRegister {
        /// The out-of-range register operand.
        index: u8,
        /// Address of the faulting instruction.
        pc: Addr,
    },
}

impl Fault {
    /// Returns the address of the instruction that raised the fault.
    pub const fn pc(&self) -> Addr {
        match self {
            Self::UnknownOpcode { pc, .. } | Self::InvalidRegister { pc, .. } => *pc,
        }
    }
}

/// Errors raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line is neither blank, a comment, nor an 8-digit binary byte.
    #[error("line {line}: expected an 8-digit binary byte, found '{text}'")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Offending text with comments stripped.
        text: String,
    },

    /// The program contains no instruction bytes.
    #[error("program contains no instructions")]
    Empty,

    /// The image does not fit in the attached memory.
    #[error("program of {len} bytes does not fit at {base:#04x} in {capacity} bytes of memory")]
    ProgramTooLarge {
        /// Image length in bytes.
        len: usize,
        /// Load address.
        base: Addr,
        /// Memory size in bytes.
        capacity: usize,
    },
}

/// Errors raised while loading simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for the config schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulator cannot use.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
