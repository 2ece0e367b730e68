/// ALU arithmetic and comparison.
pub mod alu;
