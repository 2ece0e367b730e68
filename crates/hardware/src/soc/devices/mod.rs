//! Output devices.
//!
//! Implementations of [`OutputSink`](crate::soc::traits::OutputSink):
//! 1. **Console:** Writes `PRN` values to stdout (or stderr) and faults to stderr.
//! 2. **Capture:** Records values and faults in memory for tests and embedding.

/// Console and in-memory output sinks.
pub mod console;

pub use console::{CaptureOutput, Console};
