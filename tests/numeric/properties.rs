use std::cmp::Ordering;

use proptest::prelude::*;
use qlnum::{BigDecimal, BigInt, BinaryOp, NumericConfig, NumericKind, Scalar};
use qlnum_test_utils::{any_scalar, fixed_scalar, scalar_of};

fn integral_scalar() -> impl Strategy<Value = Scalar> {
    proptest::sample::select(vec![
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Char16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::BigInt,
    ])
    .prop_flat_map(scalar_of)
}

fn half_up(a: i64, b: i64) -> i128 {
    let (a, b) = (a as i128, b as i128);
    let (q, r) = (a / b, a % b);
    if 2 * r.abs() >= b.abs() {
        if (a < 0) != (b < 0) { q - 1 } else { q + 1 }
    } else {
        q
    }
}

proptest! {
    #[test]
    fn prop_predicates_follow_compare_to(a in any_scalar(), b in any_scalar()) {
        let ord = a.compare_to(&b);
        prop_assert_eq!(a.less(&b), ord == Ordering::Less);
        prop_assert_eq!(a.greater(&b), ord == Ordering::Greater);
        prop_assert_eq!(a.less_equals(&b), ord != Ordering::Greater);
        prop_assert_eq!(a.greater_equals(&b), ord != Ordering::Less);
    }

    #[test]
    fn prop_compare_to_is_antisymmetric(a in any_scalar(), b in any_scalar()) {
        prop_assert_eq!(a.compare_to(&b), b.compare_to(&a).reverse());
    }

    #[test]
    fn prop_equals_agrees_with_ordering_without_nan(a in any_scalar(), b in any_scalar()) {
        prop_assume!(!a.is_nan() && !b.is_nan());
        prop_assert_eq!(a.equals(&b), a.compare_to(&b) == Ordering::Equal);
        prop_assert_eq!(a.equals(&b), b.equals(&a));
    }

    #[test]
    fn prop_equals_is_reflexive_except_nan(a in any_scalar()) {
        prop_assert_eq!(a.equals(&a), !a.is_nan());
        prop_assert_eq!(a.compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn prop_null_absorbs_arithmetic(a in fixed_scalar(), b in fixed_scalar()) {
        prop_assume!(a.is_null() || b.is_null());
        let config = NumericConfig::default();
        for op in [BinaryOp::Plus, BinaryOp::Minus, BinaryOp::Multiply, BinaryOp::Divide, BinaryOp::Remainder] {
            let out = a.binary(op, &b, &config).unwrap();
            prop_assert!(out.is_null(), "{} {} {} gave {}", a, op, b, out);
        }
    }

    #[test]
    fn prop_integral_round_trips_through_big_int(a in integral_scalar()) {
        prop_assert_eq!(a.cast_to(NumericKind::BigInt).cast_to(a.kind()), a);
    }

    #[test]
    fn prop_mixed_comparison_matches_big_int_route(
        a in any::<i64>().prop_filter("null", |v| *v != i64::MIN),
        b in any::<f64>().prop_filter("finite", |v| v.is_finite() && *v != -f64::MAX),
    ) {
        let fixed = Scalar::Int64(a).compare_to(&Scalar::Float64(b));
        let big = Scalar::BigInt(Some(BigInt::from(a))).compare_to(&Scalar::Float64(b));
        prop_assert_eq!(fixed, big);
    }

    #[test]
    fn prop_big_int_and_big_decimal_rank_floats_alike(
        x in any::<i128>(),
        f in any::<f64>().prop_filter("finite", |v| v.is_finite()),
    ) {
        let float = Scalar::Float64(f);
        let as_int = Scalar::BigInt(Some(BigInt::from(x)));
        let as_dec = Scalar::BigDec(Some(BigDecimal::from(BigInt::from(x))));
        prop_assert_eq!(as_int.compare_to(&float), as_dec.compare_to(&float));
        prop_assert_eq!(as_int.equals(&float), as_dec.equals(&float));
    }

    #[test]
    fn prop_big_int_and_big_decimal_rank_large_floats_alike(
        x in any::<i64>(),
        shift in 0u32..40,
    ) {
        // Mostly integer-valued doubles past 2^53, next to integers of the same size.
        let f = (x as f64) * (1u64 << shift) as f64;
        let near = BigInt::from(x) * BigInt::from(1u64 << shift) + BigInt::from(x % 1000);
        let float = Scalar::Float64(f);
        let as_int = Scalar::BigInt(Some(near.clone()));
        let as_dec = Scalar::BigDec(Some(BigDecimal::from(near)));
        prop_assert_eq!(as_int.compare_to(&float), as_dec.compare_to(&float));
    }

    #[test]
    fn prop_decimal_division_rounds_half_up(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let config = NumericConfig::with_default_scale(0).unwrap();
        let q = Scalar::BigInt(Some(BigInt::from(a)))
            .binary(BinaryOp::Divide, &Scalar::BigInt(Some(BigInt::from(b))), &config)
            .unwrap();
        prop_assert_eq!(q.to_big_int(), Some(BigInt::from(half_up(a, b))));
    }
}
