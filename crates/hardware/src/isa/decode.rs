//! LS-8 Instruction Decoder.
//!
//! Maps opcode bytes to [`Instruction`]s through a 256-entry table built at
//! compile time, so decoding is a single indexed load and the table is never
//! rebuilt while the simulator runs.

use crate::isa::instruction::{Instruction, operand_count};

/// Number of distinct opcode byte values.
const OPCODE_SPACE: usize = 1 << u8::BITS;

/// Opcode -> instruction lookup table. `None` marks unassigned opcodes.
static DECODE_TABLE: [Option<Instruction>; OPCODE_SPACE] = build_table();

/// Fills the decode table from [`Instruction::ALL`].
const fn build_table() -> [Option<Instruction>; OPCODE_SPACE] {
    let mut table = [None; OPCODE_SPACE];
    let mut i = 0;
    while i < Instruction::ALL.len() {
        let inst = Instruction::ALL[i];
        table[inst.opcode() as usize] = Some(inst);
        i += 1;
    }
    table
}

/// A fetched instruction: opcode byte, its two trailing bytes, and the
/// instruction they decode to.
///
/// Both operand bytes are always present; instructions with fewer operands
/// simply ignore the extra ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded instruction.
    pub inst: Instruction,
    /// Raw opcode byte.
    pub opcode: u8,
    /// Byte at PC+1.
    pub a: u8,
    /// Byte at PC+2.
    pub b: u8,
}

impl Decoded {
    /// Decodes a fetched opcode and its trailing bytes.
    ///
    /// Returns `None` if `opcode` is not assigned.
    pub fn new(opcode: u8, a: u8, b: u8) -> Option<Self> {
        decode(opcode).map(|inst| Self { inst, opcode, a, b })
    }

    /// Instruction length in bytes (opcode plus operands).
    pub const fn width(&self) -> u8 {
        1 + operand_count(self.opcode)
    }
}

/// Decodes an opcode byte.
///
/// # Examples
///
/// ```
/// use ls8_core::isa::{Instruction, decode};
///
/// assert_eq!(decode(0b1001_1001), Some(Instruction::Ldi));
/// assert_eq!(decode(0b0000_0001), Some(Instruction::Hlt));
/// assert_eq!(decode(0b1111_1111), None);
/// ```
#[inline(always)]
pub fn decode(opcode: u8) -> Option<Instruction> {
    DECODE_TABLE[usize::from(opcode)]
}
