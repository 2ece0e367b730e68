//! FL: the comparison flags register.
//!
//! FL is a byte-wide bit set. Only three bits are architected:
//! `E` (bit 0, equal), `G` (bit 1, greater) and `L` (bit 2, less).
//! Setting a flag ORs in `1 << bit`; clearing ANDs out `!(1 << bit)`,
//! so each flag can be changed without disturbing the others.

use std::fmt;

use crate::common::constants::{E_FLAG_BIT, G_FLAG_BIT, L_FLAG_BIT};

/// A named bit of the FL register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Set when the last comparison found both operands equal.
    Equal,
    /// Set when the first operand of the last comparison was greater.
    Greater,
    /// Set when the first operand of the last comparison was less.
    Less,
}

impl Flag {
    /// All architected flags, in bit order.
    pub const ALL: [Self; 3] = [Self::Equal, Self::Greater, Self::Less];

    /// Bit position of this flag within FL.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Equal => E_FLAG_BIT,
            Self::Greater => G_FLAG_BIT,
            Self::Less => L_FLAG_BIT,
        }
    }

    /// Single-bit mask of this flag within FL.
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

/// The FL register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Creates a cleared flags register.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns the raw register value.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Overwrites the whole register.
    #[inline(always)]
    pub const fn set_bits(&mut self, bits: u8) {
        self.0 = bits;
    }

    /// Returns whether `flag` is set.
    #[inline(always)]
    pub const fn get(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears `flag`, leaving every other bit unchanged.
    #[inline(always)]
    pub const fn set(&mut self, flag: Flag, on: bool) {
        if on {
            self.0 |= flag.mask();
        } else {
            self.0 &= !flag.mask();
        }
    }
}

impl fmt::Display for Flags {
    /// Formats as `FL=0b00000001 [E]`, listing the set flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FL={:#010b} [", self.0)?;
        for flag in Flag::ALL {
            if self.get(flag) {
                let c = match flag {
                    Flag::Equal => 'E',
                    Flag::Greater => 'G',
                    Flag::Less => 'L',
                };
                write!(f, "{c}")?;
            }
        }
        write!(f, "]")
    }
}
