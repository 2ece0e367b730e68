//! # RAM Tests

use ls8_core::soc::{Memory, Ram};
use proptest::prelude::*;

#[test]
fn test_default_ram_is_256_zero_bytes() {
    let ram = Ram::default();
    assert_eq!(ram.size(), 256);
    assert!(ram.as_slice().iter().all(|b| *b == 0));
}

#[test]
fn test_zero_size_rounds_up_to_one() {
    assert_eq!(Ram::new(0).size(), 1);
}

#[test]
fn test_read_write() {
    let mut ram = Ram::default();
    ram.write(0x10, 0xAB);
    assert_eq!(ram.read(0x10), 0xAB);
}

#[test]
fn test_addresses_wrap_modulo_size() {
    let mut ram = Ram::new(16);
    ram.write(0x13, 7);
    assert_eq!(ram.read(0x03), 7);
    assert_eq!(ram.read(0x103), 7);
}

#[test]
fn test_load_wraps_past_end() {
    let mut ram = Ram::new(4);
    ram.load(&[1, 2, 3], 3);
    assert_eq!(ram.as_slice(), &[2, 3, 0, 1]);
}

#[test]
fn test_clear() {
    let mut ram = Ram::new(8);
    ram.load(&[9; 8], 0);
    ram.clear();
    assert_eq!(ram.as_slice(), &[0; 8]);
}

#[test]
fn test_forwarding_impls() {
    let mut ram = Ram::default();
    {
        let by_ref: &mut Ram = &mut ram;
        by_ref.write(1, 5);
        assert_eq!(Memory::size(&by_ref), 256);
    }
    let mut boxed: Box<dyn Memory> = Box::new(ram);
    assert_eq!(boxed.read(1), 5);
}

proptest! {
    #[test]
    fn prop_write_then_read(addr in any::<u16>(), val in any::<u8>()) {
        let mut ram = Ram::default();
        ram.write(addr, val);
        prop_assert_eq!(ram.read(addr), val);
        prop_assert_eq!(ram.as_slice()[usize::from(addr) % 256], val);
    }
}
