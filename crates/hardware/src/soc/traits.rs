//! Collaborator traits for the CPU.
//!
//! This module defines the two interfaces the execution loop depends on. It provides:
//! 1. **Memory:** Byte-wide `read`/`write` over a linear address space.
//! 2. **Output:** A sink for `PRN` values and fatal fault reports.
//!
//! The CPU never owns either collaborator; it borrows them for one step at a time.

use crate::common::constants::Addr;
use crate::common::error::Fault;

/// Linear byte-addressable storage.
///
/// There is no alignment or protection. Implementations own address
/// reduction: an address past the end must wrap (or otherwise be mapped)
/// rather than panic, because the CPU never bounds-checks.
pub trait Memory {
    /// Returns the number of addressable bytes.
    fn size(&self) -> usize;

    /// Reads one byte.
    fn read(&mut self, addr: Addr) -> u8;

    /// Writes one byte.
    fn write(&mut self, addr: Addr, val: u8);

    /// Writes a contiguous byte slice starting at `base` (default: byte-by-byte).
    fn load(&mut self, data: &[u8], base: Addr) {
        for (i, byte) in data.iter().enumerate() {
            self.write(base.wrapping_add(i as Addr), *byte);
        }
    }
}

/// Destination for program output.
pub trait OutputSink {
    /// Receives the value of the register named by a `PRN` instruction.
    fn print_value(&mut self, value: u8);

    /// Receives a fatal fault just before the CPU halts.
    fn report_fault(&mut self, fault: &Fault);
}

impl<M: Memory + ?Sized> Memory for &mut M {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn read(&mut self, addr: Addr) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: Addr, val: u8) {
        (**self).write(addr, val);
    }
}

impl<M: Memory + ?Sized> Memory for Box<M> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn read(&mut self, addr: Addr) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: Addr, val: u8) {
        (**self).write(addr, val);
    }
}

impl<O: OutputSink + ?Sized> OutputSink for &mut O {
    fn print_value(&mut self, value: u8) {
        (**self).print_value(value);
    }

    fn report_fault(&mut self, fault: &Fault) {
        (**self).report_fault(fault);
    }
}

impl<O: OutputSink + ?Sized> OutputSink for Box<O> {
    fn print_value(&mut self, value: u8) {
        (**self).print_value(value);
    }

    fn report_fault(&mut self, fault: &Fault) {
        (**self).report_fault(fault);
    }
}
