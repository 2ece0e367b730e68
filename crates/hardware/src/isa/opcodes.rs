//! LS-8 opcode byte values.
//!
//! These bit patterns are fixed: previously assembled programs depend on
//! them, so they must never change.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// Load an immediate value into a register: `LDI reg, imm`.
pub const LDI: u8 = 0b1001_1001;
/// Print the value of a register: `PRN reg`.
pub const PRN: u8 = 0b0100_0011;
/// Multiply two registers into the first: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_1010;
/// Add two registers into the first: `ADD regA, regB`.
pub const ADD: u8 = 0b1010_1000;
/// Push a register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_1101;
/// Pop the top of the stack into a register: `POP reg`.
pub const POP: u8 = 0b0100_1100;
/// Call the subroutine at the address held in a register: `CALL reg`.
pub const CALL: u8 = 0b0100_1000;
/// Return from a subroutine.
pub const RET: u8 = 0b0000_1001;
/// Compare two registers and set FL: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0000;
/// Jump to the address held in a register: `JMP reg`.
pub const JMP: u8 = 0b0101_0000;
/// Jump if the Equal flag is set: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0001;
/// Jump if the Equal flag is clear: `JNE reg`.
pub const JNE: u8 = 0b0101_0010;
