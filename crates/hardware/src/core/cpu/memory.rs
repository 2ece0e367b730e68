//! Instruction fetch and stack access.
//!
//! The stack lives in ordinary memory below SP (R7) and grows downward:
//! a push decrements SP and then writes `mem[SP]`; a pop reads `mem[SP]`
//! and then increments SP. SP wraps at 8 bits and nothing checks for
//! overflow or underflow.

use super::Cpu;
use crate::common::constants::Addr;
use crate::soc::traits::Memory;

impl Cpu {
    /// Reads the opcode at PC and the two bytes after it.
    ///
    /// Both trailing bytes are read unconditionally; instructions that need
    /// fewer operands ignore the rest.
    pub fn fetch<M: Memory + ?Sized>(&self, mem: &mut M) -> (u8, u8, u8) {
        let pc = self.pc;
        (
            mem.read(pc),
            mem.read(pc.wrapping_add(1)),
            mem.read(pc.wrapping_add(2)),
        )
    }

    /// Pushes a byte onto the stack.
    pub fn push<M: Memory + ?Sized>(&mut self, mem: &mut M, val: u8) {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        mem.write(Addr::from(sp), val);
    }

    /// Pops a byte off the stack.
    pub fn pop<M: Memory + ?Sized>(&mut self, mem: &mut M) -> u8 {
        let sp = self.regs.sp();
        let val = mem.read(Addr::from(sp));
        self.regs.set_sp(sp.wrapping_add(1));
        val
    }
}
