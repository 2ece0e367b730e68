//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU, which performs the
//! arithmetic and comparison work handed off by the execution loop.

/// Arithmetic Logic Unit: add, multiply and compare on register values.
pub mod alu;
