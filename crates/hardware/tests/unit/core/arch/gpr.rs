//! # General-Purpose Register Tests
//!
//! Tests for the LS-8 register file R0-R7.

use ls8_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_zeroes_all_but_sp() {
    let gpr = Gpr::new();
    for i in 0..7 {
        assert_eq!(gpr.read(i), 0);
    }
    assert_eq!(gpr.read(7), 0xF4);
    assert_eq!(gpr.sp(), 0xF4);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 0..8 {
        gpr.write(i, (i as u8) * 3 + 1);
    }
    for i in 0..8 {
        assert_eq!(gpr.read(i), (i as u8) * 3 + 1);
    }
}

#[test]
fn test_gpr_sp_aliases_r7() {
    let mut gpr = Gpr::new();
    gpr.set_sp(0x10);
    assert_eq!(gpr.read(7), 0x10);
    gpr.write(7, 0x20);
    assert_eq!(gpr.sp(), 0x20);
}

#[test]
fn test_gpr_checked_access_rejects_out_of_range() {
    let mut gpr = Gpr::new();
    assert_eq!(gpr.get(7), Some(0xF4));
    assert_eq!(gpr.get(8), None);
    assert_eq!(gpr.get(255), None);
    assert!(gpr.get_mut(8).is_none());
}

#[test]
fn test_gpr_get_mut_writes_through() {
    let mut gpr = Gpr::new();
    if let Some(r) = gpr.get_mut(3) {
        *r = 99;
    }
    assert_eq!(gpr.read(3), 99);
}

#[test]
#[should_panic]
fn test_gpr_unchecked_read_out_of_range_panics() {
    let gpr = Gpr::new();
    let _ = gpr.read(8);
}

#[test]
fn test_gpr_display_lists_pairs() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0x48);
    let text = gpr.to_string();
    assert!(text.starts_with("R0=0x48 R1=0x00"));
    assert!(text.contains("R6=0x00 R7=0xf4"));
    assert_eq!(text.lines().count(), 4);
}
