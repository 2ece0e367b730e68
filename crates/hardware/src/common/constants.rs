//! Global System Constants.
//!
//! This module defines machine-wide constants for the LS-8. It includes:
//! 1. **Register Constants:** Register count and the stack pointer alias.
//! 2. **Stack Constants:** The reset value of SP (empty stack, grows downward).
//! 3. **Memory Constants:** Default RAM size and the address type.
//! 4. **Flag Constants:** Bit positions of the comparison flags in FL.

/// Address type used for the program counter and memory accesses.
///
/// The datapath is 8 bits wide; the PC is wider so it can step past `0xFF`
/// at the end of memory. Memories reduce addresses modulo their size.
pub type Addr = u16;

/// Number of general-purpose registers (R0-R7).
pub const NUM_REGS: usize = 8;

/// Register index used as the stack pointer (R7).
pub const SP: usize = 7;

/// Reset value of SP: an empty stack just below the reserved top of memory.
pub const STACK_BASE: u8 = 0xF4;

/// Default size of attached RAM in bytes.
pub const DEFAULT_RAM_SIZE: usize = 256;

/// Bit position of the Equal flag in FL.
pub const E_FLAG_BIT: u8 = 0;

/// Bit position of the Greater flag in FL.
pub const G_FLAG_BIT: u8 = 1;

/// Bit position of the Less flag in FL.
pub const L_FLAG_BIT: u8 = 2;

/// Mask selecting the operand-count field (bits 6-7) of an opcode, after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Shift that brings the operand-count field of an opcode down to bit 0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;
