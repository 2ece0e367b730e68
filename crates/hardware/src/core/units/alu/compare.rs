//! ALU comparison.
//!
//! Exactly one of E, G and L is set after a comparison; the other two are
//! cleared. Bits of FL outside those three are left alone.

use std::cmp::Ordering;

use crate::core::arch::{Flag, Flags};

/// Compares two register values and records the ordering in `flags`.
pub fn execute(a: u8, b: u8, flags: &mut Flags) {
    let ord = a.cmp(&b);
    flags.set(Flag::Equal, ord == Ordering::Equal);
    flags.set(Flag::Greater, ord == Ordering::Greater);
    flags.set(Flag::Less, ord == Ordering::Less);
}
