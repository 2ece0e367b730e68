//! Common types and constants shared across the LS-8 simulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Register-file geometry, stack base, flag bit positions, memory size.
//! 2. **Error Handling:** Fatal CPU faults plus loader and configuration errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault and error type definitions.
pub mod error;

pub use constants::{Addr, NUM_REGS, SP, STACK_BASE};
pub use error::{ConfigError, Fault, LoadError};
