//! Instruction definitions and opcode field extraction.
//!
//! Provides the [`Instruction`] enumeration of the implemented LS-8 subset
//! and the [`InstructionBits`] trait for pulling fields out of raw opcode bytes.

use crate::common::constants::{OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT};
use crate::isa::opcodes;

/// Returns the number of operand bytes encoded in the top two bits of `opcode`.
///
/// This is a pure function of the byte, so it is also valid for opcodes the
/// decoder does not recognize.
#[inline(always)]
pub const fn operand_count(opcode: u8) -> u8 {
    (opcode >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK
}

/// Trait for extracting instruction fields from encoded opcode bytes.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 6-7).
    fn operand_count(&self) -> u8;

    /// Total instruction length in bytes, opcode included.
    fn width(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        operand_count(*self)
    }

    #[inline(always)]
    fn width(&self) -> u8 {
        1 + operand_count(*self)
    }
}

/// Broad instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Immediate loads (`LDI`).
    Load,
    /// ALU operations (`ADD`, `MUL`, `CMP`).
    Alu,
    /// Stack operations (`PUSH`, `POP`).
    Stack,
    /// Control flow (`JMP`, `JEQ`, `JNE`, `CALL`, `RET`).
    Branch,
    /// Output (`PRN`).
    Io,
    /// Machine control (`HLT`).
    System,
}

/// Shape of an instruction's operand bytes, used by the disassembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// No operands.
    None,
    /// One register operand.
    Reg,
    /// Two register operands.
    RegReg,
    /// A register and an immediate byte.
    RegImm,
}

/// An instruction of the implemented LS-8 subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Halt execution.
    Hlt,
    /// Load immediate into register.
    Ldi,
    /// Output a register's value.
    Prn,
    /// Multiply two registers, storing in the first.
    Mul,
    /// Add two registers, storing in the first.
    Add,
    /// Push a register onto the stack.
    Push,
    /// Pop the stack into a register.
    Pop,
    /// Push the return address and jump to the address in a register.
    Call,
    /// Pop the return address into PC.
    Ret,
    /// Compare two registers and set FL.
    Cmp,
    /// Jump to the address in a register.
    Jmp,
    /// Jump if Equal is set.
    Jeq,
    /// Jump if Equal is clear.
    Jne,
}

impl Instruction {
    /// Every implemented instruction.
    pub const ALL: [Self; 13] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Mul,
        Self::Add,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Cmp,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
    ];

    /// Returns the opcode byte for this instruction.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Hlt => opcodes::HLT,
            Self::Ldi => opcodes::LDI,
            Self::Prn => opcodes::PRN,
            Self::Mul => opcodes::MUL,
            Self::Add => opcodes::ADD,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Call => opcodes::CALL,
            Self::Ret => opcodes::RET,
            Self::Cmp => opcodes::CMP,
            Self::Jmp => opcodes::JMP,
            Self::Jeq => opcodes::JEQ,
            Self::Jne => opcodes::JNE,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Mul => "MUL",
            Self::Add => "ADD",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }

    /// Number of operand bytes, taken from the opcode encoding.
    pub const fn operand_count(self) -> u8 {
        operand_count(self.opcode())
    }

    /// Shape of the operand bytes.
    pub const fn operand_kind(self) -> OperandKind {
        match self {
            Self::Hlt | Self::Ret => OperandKind::None,
            Self::Prn | Self::Push | Self::Pop | Self::Call | Self::Jmp | Self::Jeq | Self::Jne => {
                OperandKind::Reg
            }
            Self::Mul | Self::Add | Self::Cmp => OperandKind::RegReg,
            Self::Ldi => OperandKind::RegImm,
        }
    }

    /// Statistics category.
    pub const fn class(self) -> InstructionClass {
        match self {
            Self::Hlt => InstructionClass::System,
            Self::Ldi => InstructionClass::Load,
            Self::Prn => InstructionClass::Io,
            Self::Mul | Self::Add | Self::Cmp => InstructionClass::Alu,
            Self::Push | Self::Pop => InstructionClass::Stack,
            Self::Call | Self::Ret | Self::Jmp | Self::Jeq | Self::Jne => InstructionClass::Branch,
        }
    }
}
