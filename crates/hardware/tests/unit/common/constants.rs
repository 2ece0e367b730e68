use ls8_core::common::constants::{DEFAULT_RAM_SIZE, NUM_REGS, SP, STACK_BASE};

#[test]
fn test_register_file_shape() {
    assert_eq!(NUM_REGS, 8);
    assert_eq!(SP, 7);
}

#[test]
fn test_stack_base_is_f4() {
    assert_eq!(STACK_BASE, 0xF4);
}

#[test]
fn test_stack_base_inside_default_ram() {
    assert!(usize::from(STACK_BASE) < DEFAULT_RAM_SIZE);
}
