//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU the execution loop hands math and
//! comparisons off to. It only ever sees register *values*, never register
//! indices; resolving operands is the caller's job.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul (8-bit wraparound, no overflow flag)
//! - [`compare`]:    Cmp (sets exactly one of E/G/L)

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

/// Value comparison producing FL state.
pub mod compare;

use crate::core::arch::Flags;

/// ALU operation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping 8-bit multiply.
    Mul,
    /// Wrapping 8-bit add.
    Add,
    /// Compare and update FL.
    Cmp,
}

/// Arithmetic Logic Unit.
///
/// Stateless apart from the flags register it is handed; every call is a
/// pure function of its operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation on two register values.
    ///
    /// # Arguments
    ///
    /// * `op`    - The ALU operation to perform
    /// * `a`     - Value of the first (destination) register
    /// * `b`     - Value of the second register
    /// * `flags` - FL, updated by comparisons and untouched otherwise
    ///
    /// # Returns
    ///
    /// `Some(result)` for operations that write the destination register,
    /// `None` for comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::arch::{Flag, Flags};
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let mut fl = Flags::new();
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9, &mut fl), Some(72));
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100, &mut fl), Some(44));
    /// assert_eq!(fl.bits(), 0);
    ///
    /// assert_eq!(Alu::execute(AluOp::Cmp, 3, 7, &mut fl), None);
    /// assert!(fl.get(Flag::Less));
    /// assert!(!fl.get(Flag::Equal));
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8, flags: &mut Flags) -> Option<u8> {
        match op {
            AluOp::Mul => Some(arithmetic::mul(a, b)),
            AluOp::Add => Some(arithmetic::add(a, b)),
            AluOp::Cmp => {
                compare::execute(a, b, flags);
                None
            }
        }
    }
}
