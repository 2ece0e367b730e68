//! Instruction Disassembler for the LS-8.
//!
//! Converts an opcode and its operand bytes into assembler text for debug
//! tracing, the CLI `disasm` command, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0b1001_1001, 0, 8), "LDI R0,8");
//! assert_eq!(disassemble(0b1010_1010, 0, 1), "MUL R0,R1");
//! assert_eq!(disassemble(0b0000_0001, 0, 0), "HLT");
//! assert_eq!(disassemble(0b1111_1111, 0, 0), ".byte 0b11111111");
//! ```

use crate::common::constants::Addr;
use crate::isa::decode::decode;
use crate::isa::instruction::{InstructionBits, OperandKind};

/// Disassembles one instruction.
///
/// `a` and `b` are the bytes at PC+1 and PC+2; unused ones are ignored.
/// Unassigned opcodes render as a `.byte` directive.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(inst) = decode(opcode) else {
        return format!(".byte {opcode:#010b}");
    };
    let name = inst.mnemonic();
    match inst.operand_kind() {
        OperandKind::None => name.to_string(),
        OperandKind::Reg => format!("{name} R{a}"),
        OperandKind::RegReg => format!("{name} R{a},R{b}"),
        OperandKind::RegImm => format!("{name} R{a},{b}"),
    }
}

/// Disassembles a program image into `(address, width, text)` lines.
///
/// Walks the image using each opcode's encoded operand count, so data bytes
/// embedded in the image show up as whatever instruction they happen to
/// encode. Operand bytes past the end of the image read as zero.
pub fn disassemble_program(image: &[u8], base: Addr) -> Vec<(Addr, u8, String)> {
    let byte_at = |i: usize| image.get(i).copied().unwrap_or(0);
    let mut lines = Vec::new();
    let mut i = 0;
    while i < image.len() {
        let opcode = image[i];
        let width = opcode.width();
        let addr = base.wrapping_add(i as Addr);
        lines.push((addr, width, disassemble(opcode, byte_at(i + 1), byte_at(i + 2))));
        i += usize::from(width);
    }
    lines
}
