//! Simulation driver and program loading.
//!
//! Provides the text-format program loader, the clock that paces execution,
//! and the [`Simulator`] that ties the CPU to its memory and output sink.

/// Clock pacing and run state.
pub mod clock;

/// LS-8 program text parsing and file loading.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

pub use clock::Clock;
pub use loader::{load_program_file, parse_program};
pub use simulator::{RunOutcome, Simulator};
