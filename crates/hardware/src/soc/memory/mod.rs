//! System Memory (RAM).
//!
//! This module implements the default [`Memory`] for the simulator: a flat
//! byte array. Addresses are reduced modulo the array length, so the stack
//! and the program counter wrap instead of faulting.

use crate::common::constants::{Addr, DEFAULT_RAM_SIZE};
use crate::soc::traits::Memory;

/// Flat byte-addressable RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    data: Vec<u8>,
}

impl Ram {
    /// Creates zero-filled RAM of `size` bytes (at least one byte).
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size.max(1)],
        }
    }

    /// Maps an address into the backing array.
    #[inline(always)]
    fn index(&self, addr: Addr) -> usize {
        usize::from(addr) % self.data.len()
    }

    /// Returns the raw contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Zero-fills the whole array.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Default for Ram {
    /// Creates the stock 256-byte LS-8 RAM.
    fn default() -> Self {
        Self::new(DEFAULT_RAM_SIZE)
    }
}

impl Memory for Ram {
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn read(&mut self, addr: Addr) -> u8 {
        self.data[self.index(addr)]
    }

    #[inline(always)]
    fn write(&mut self, addr: Addr, val: u8) {
        let i = self.index(addr);
        self.data[i] = val;
    }
}
