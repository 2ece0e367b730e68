//! ALU arithmetic operations.
//!
//! Registers are 8 bits wide, so every result is the true result
//! truncated to 8 bits. There is no carry or overflow flag.

/// Returns `(a + b) mod 256`.
#[inline(always)]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// Returns `(a * b) mod 256`.
#[inline(always)]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}
