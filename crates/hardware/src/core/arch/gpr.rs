//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight byte-wide registers R0-R7.
//! It performs the following:
//! 1. **Storage:** Maintains 8 independent `u8` registers.
//! 2. **Stack Pointer:** Resets R7 to the empty-stack address `0xF4`.
//! 3. **Checked Access:** Offers fallible lookups for register operands decoded from memory.
//! 4. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt;

use crate::common::constants::{NUM_REGS, SP, STACK_BASE};

/// General-Purpose Register file.
///
/// Register indices are `0..8`. The unchecked accessors panic on an
/// out-of-range index, like slice indexing; operands fetched from a program
/// go through [`Gpr::get`] / [`Gpr::get_mut`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; NUM_REGS],
}

impl Gpr {
    /// Creates a register file in its reset state: all zero except SP.
    pub const fn new() -> Self {
        let mut regs = [0; NUM_REGS];
        regs[SP] = STACK_BASE;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..8`.
    #[inline(always)]
    pub const fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..8`.
    #[inline(always)]
    pub const fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Looks up a register by an operand byte, returning `None` when out of range.
    #[inline]
    pub fn get(&self, operand: u8) -> Option<u8> {
        self.regs.get(usize::from(operand)).copied()
    }

    /// Mutable lookup by operand byte, returning `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, operand: u8) -> Option<&mut u8> {
        self.regs.get_mut(usize::from(operand))
    }

    /// Returns the current stack pointer (R7).
    #[inline(always)]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer (R7).
    #[inline(always)]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// Returns all registers in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        println!("{self}");
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Gpr {
    /// Formats registers in pairs, `R0=0x00 R1=0x00`, one pair per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "R{}={:#04x} R{}={:#04x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
