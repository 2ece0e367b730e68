//! Components around the CPU core.
//!
//! This module organizes the collaborators the CPU talks to during a step:
//! the memory it fetches from and the output sink `PRN` writes to, plus
//! default implementations of both.

/// Output devices (console and in-memory capture).
pub mod devices;

/// Byte-addressable RAM.
pub mod memory;

/// Collaborator trait definitions (`Memory`, `OutputSink`).
pub mod traits;

pub use devices::{CaptureOutput, Console};
pub use memory::Ram;
pub use traits::{Memory, OutputSink};
