//! LS-8 architectural state.
//!
//! This module contains the programmer-visible state of the machine:
//! 1. **GPRs:** The eight general-purpose byte registers, R7 doubling as SP.
//! 2. **Flags:** The FL register holding the Equal/Greater/Less comparison bits.

/// Comparison flags register (FL).
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::{Flag, Flags};
pub use gpr::Gpr;
