//! LS-8 Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the field layout of an opcode byte, the
//! static decoder and the disassembler.
//!
//! # Opcode layout
//!
//! ```text
//!   7 6   5 4 3 2 1 0
//!  [ n ] [    id     ]
//! ```
//!
//! * `n`: number of operand bytes following the opcode (0, 1 or 2).
//! * `id`: identifies the instruction among those with the same operand count.
//!
//! Dispatch is on the whole byte; only `n` carries meaning on its own.

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction enumeration and opcode field extraction utilities.
pub mod instruction;

/// Opcode byte values (the binary compatibility contract).
pub mod opcodes;

pub use decode::{Decoded, decode};
pub use instruction::{Instruction, InstructionBits, InstructionClass};
