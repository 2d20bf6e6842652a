use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use proptest::prelude::*;
use qlnum_common::{NumericKind, Result};
use qlnum_scalar::Scalar;

pub fn dec(s: &str) -> Scalar {
    Scalar::BigDec(Some(parse_decimal(s)))
}

pub fn big(s: &str) -> Scalar {
    Scalar::BigInt(Some(parse_big_int(s)))
}

pub fn parse_decimal(s: &str) -> BigDecimal {
    s.parse()
        .unwrap_or_else(|e| panic!("invalid decimal literal {s:?}: {e}"))
}

pub fn parse_big_int(s: &str) -> BigInt {
    s.parse()
        .unwrap_or_else(|e| panic!("invalid integer literal {s:?}: {e}"))
}

pub fn assert_error_contains<T>(result: Result<T>, keywords: &[&str]) {
    assert_error_contains_with_context(result, keywords, "operation");
}

pub fn assert_error_contains_with_context<T>(result: Result<T>, keywords: &[&str], context: &str) {
    match result {
        Ok(_) => panic!("{}: Expected error but got Ok result", context),
        Err(e) => {
            let error_msg = e.to_string().to_lowercase();
            let found = keywords
                .iter()
                .any(|keyword| error_msg.contains(&keyword.to_lowercase()));
            assert!(
                found,
                "{}: Error '{}' does not contain any of the expected keywords: {:?}",
                context, e, keywords
            );
        }
    }
}

pub fn assert_null(value: &Scalar, kind: NumericKind) {
    assert!(value.is_null(), "expected NULL {}, got {} ({})", kind, value, value.kind());
    assert_eq!(value.kind(), kind, "null of the wrong kind: {value:?}");
}

/// Values of one fixed-width kind, sentinel and float edge cases included.
pub fn scalar_of(kind: NumericKind) -> BoxedStrategy<Scalar> {
    let null = Just(Scalar::null(kind));
    match kind {
        NumericKind::Int8 => prop_oneof![1 => null, 8 => any::<i8>().prop_map(Scalar::Int8)].boxed(),
        NumericKind::Int16 => prop_oneof![1 => null, 8 => any::<i16>().prop_map(Scalar::Int16)].boxed(),
        NumericKind::Char16 => prop_oneof![1 => null, 8 => any::<u16>().prop_map(Scalar::Char16)].boxed(),
        NumericKind::Int32 => prop_oneof![1 => null, 8 => any::<i32>().prop_map(Scalar::Int32)].boxed(),
        NumericKind::Int64 => prop_oneof![
            1 => null,
            1 => Just(Scalar::Int64(i64::MAX)),
            8 => any::<i64>().prop_map(Scalar::Int64),
        ]
        .boxed(),
        NumericKind::Float32 => prop_oneof![
            1 => null,
            1 => Just(Scalar::Float32(f32::NAN)),
            1 => Just(Scalar::Float32(-0.0)),
            8 => any::<f32>().prop_map(Scalar::Float32),
        ]
        .boxed(),
        NumericKind::Float64 => prop_oneof![
            1 => null,
            1 => Just(Scalar::Float64(f64::NAN)),
            1 => Just(Scalar::Float64(9_223_372_036_854_775_808.0)),
            8 => any::<f64>().prop_map(Scalar::Float64),
        ]
        .boxed(),
        NumericKind::BigInt => prop_oneof![
            1 => null,
            8 => any::<i128>().prop_map(|v| Scalar::BigInt(Some(BigInt::from(v)))),
        ]
        .boxed(),
        NumericKind::BigDec => prop_oneof![
            1 => null,
            8 => (any::<i64>(), 0i64..12).prop_map(|(m, s)| Scalar::BigDec(Some(BigDecimal::new(BigInt::from(m), s)))),
        ]
        .boxed(),
    }
}

pub fn any_kind() -> impl Strategy<Value = NumericKind> {
    proptest::sample::select(NumericKind::ALL.to_vec())
}

pub fn fixed_kind() -> impl Strategy<Value = NumericKind> {
    proptest::sample::select(NumericKind::FIXED_WIDTH.to_vec())
}

pub fn any_scalar() -> impl Strategy<Value = Scalar> {
    any_kind().prop_flat_map(scalar_of)
}

pub fn fixed_scalar() -> impl Strategy<Value = Scalar> {
    fixed_kind().prop_flat_map(scalar_of)
}
