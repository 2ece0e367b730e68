//! # ALU Tests
//!
//! Arithmetic wraps at 8 bits; comparison sets exactly one of E/G/L.

use ls8_core::core::arch::{Flag, Flags};
use ls8_core::core::units::alu::{Alu, AluOp, arithmetic};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Mul, 8, 9, 72)]
#[case(AluOp::Mul, 16, 16, 0)]
#[case(AluOp::Mul, 255, 255, 1)]
#[case(AluOp::Add, 1, 2, 3)]
#[case(AluOp::Add, 200, 100, 44)]
#[case(AluOp::Add, 255, 1, 0)]
fn test_arithmetic(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    let mut fl = Flags::new();
    assert_eq!(Alu::execute(op, a, b, &mut fl), Some(expected));
    assert_eq!(fl.bits(), 0, "arithmetic must not touch FL");
}

#[rstest]
#[case(5, 5, Flag::Equal)]
#[case(9, 3, Flag::Greater)]
#[case(3, 9, Flag::Less)]
#[case(0, 255, Flag::Less)]
fn test_compare(#[case] a: u8, #[case] b: u8, #[case] expected: Flag) {
    let mut fl = Flags::new();
    assert_eq!(Alu::execute(AluOp::Cmp, a, b, &mut fl), None);
    for flag in Flag::ALL {
        assert_eq!(fl.get(flag), flag == expected, "{flag:?} after CMP {a},{b}");
    }
}

#[test]
fn test_compare_clears_previous_result() {
    let mut fl = Flags::new();
    let _ = Alu::execute(AluOp::Cmp, 1, 2, &mut fl);
    let _ = Alu::execute(AluOp::Cmp, 2, 2, &mut fl);
    assert_eq!(fl.bits(), Flag::Equal.mask());
}

#[rstest]
#[case(0, 0, 0, 0)]
#[case(128, 2, 130, 0)]
#[case(255, 255, 254, 1)]
#[case(17, 15, 32, 255)]
fn test_arithmetic_functions(
    #[case] a: u8,
    #[case] b: u8,
    #[case] sum: u8,
    #[case] product: u8,
) {
    assert_eq!(arithmetic::add(a, b), sum);
    assert_eq!(arithmetic::mul(a, b), product);
}

proptest! {
    #[test]
    fn prop_mul_add_wrap(a in any::<u8>(), b in any::<u8>()) {
        let mut fl = Flags::new();
        prop_assert_eq!(
            Alu::execute(AluOp::Mul, a, b, &mut fl),
            Some(((u16::from(a) * u16::from(b)) % 256) as u8)
        );
        prop_assert_eq!(
            Alu::execute(AluOp::Add, a, b, &mut fl),
            Some(((u16::from(a) + u16::from(b)) % 256) as u8)
        );
    }

    #[test]
    fn prop_cmp_sets_exactly_one(a in any::<u8>(), b in any::<u8>(), junk in any::<u8>()) {
        let mut fl = Flags::new();
        fl.set_bits(junk & 0b111);
        let _ = Alu::execute(AluOp::Cmp, a, b, &mut fl);
        let set = Flag::ALL.iter().filter(|f| fl.get(**f)).count();
        prop_assert_eq!(set, 1);
        prop_assert_eq!(fl.get(Flag::Equal), a == b);
        prop_assert_eq!(fl.get(Flag::Greater), a > b);
        prop_assert_eq!(fl.get(Flag::Less), a < b);
    }
}
