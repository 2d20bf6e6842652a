use qlnum::cast::{cast, from_big_decimal, from_big_int, to_big_decimal, to_big_int};
use qlnum::object::{object_cast, object_to_big_decimal, object_to_big_int, object_to_scalar};
use qlnum::{
    Error, NULL_BYTE, NULL_CHAR, NULL_DOUBLE, NULL_FLOAT, NULL_INT, NULL_LONG, NULL_SHORT,
    NumberObject, NumericKind, Scalar,
};
use qlnum_test_utils::{assert_error_contains, assert_null, big, dec, parse_big_int, parse_decimal};
use rust_decimal::Decimal;

#[test]
fn test_null_maps_to_destination_null() {
    assert_eq!(cast::<i8, u16>(NULL_BYTE), NULL_CHAR);
    assert_eq!(cast::<u16, f32>(NULL_CHAR), NULL_FLOAT);
    assert_eq!(cast::<f32, i64>(NULL_FLOAT), NULL_LONG);
    assert_eq!(cast::<i64, i16>(NULL_LONG), NULL_SHORT);
    assert_eq!(cast::<f64, i32>(NULL_DOUBLE), NULL_INT);
    assert_eq!(to_big_int(NULL_INT), None);
    assert_eq!(to_big_decimal(NULL_DOUBLE), None);
}

#[test]
fn test_fixed_width_cast_uses_as_semantics() {
    assert_eq!(cast::<i32, i8>(300), 44);
    assert_eq!(cast::<i8, u16>(-2), 65534);
    assert_eq!(cast::<f64, i32>(1e20), i32::MAX);
    assert_eq!(cast::<f64, i16>(-2.9), -2);
    assert_eq!(cast::<f64, i64>(f64::NAN), 0);
    assert_eq!(cast::<i64, f32>(16_777_217), 16_777_216.0);
}

#[test]
fn test_big_int_conversions() {
    assert_eq!(to_big_int(-7.9f64), Some(parse_big_int("-7")));
    assert_eq!(to_big_int(f32::INFINITY), None);
    assert_eq!(to_big_int(f64::NAN), None);
    assert_eq!(to_big_int(u16::MAX - 1), Some(parse_big_int("65534")));
    assert_eq!(from_big_int::<i64>(Some(&parse_big_int("-42"))), -42);
    assert_eq!(from_big_int::<i32>(None), NULL_INT);
}

#[test]
fn test_leaving_arbitrary_precision_never_wraps() {
    assert_eq!(from_big_int::<i8>(Some(&parse_big_int("128"))), NULL_BYTE);
    assert_eq!(from_big_int::<u16>(Some(&parse_big_int("-1"))), NULL_CHAR);
    assert_eq!(from_big_int::<i64>(Some(&parse_big_int("9223372036854775808"))), NULL_LONG);
    assert_eq!(from_big_decimal::<i32>(Some(&parse_decimal("1000000000000"))), NULL_INT);
}

#[test]
fn test_value_landing_on_sentinel_is_null() {
    // -128 is representable as an i8, but it is the INT8 null.
    let out: i8 = from_big_int(Some(&parse_big_int("-128")));
    assert_eq!(out, NULL_BYTE);
    assert_null(&big("65535").cast_to(NumericKind::Char16), NumericKind::Char16);
}

#[test]
fn test_big_decimal_from_float_uses_shortest_form() {
    assert_eq!(to_big_decimal(0.1f64), Some(parse_decimal("0.1")));
    assert_eq!(to_big_decimal(-2.5f32), Some(parse_decimal("-2.5")));
    assert_eq!(to_big_decimal(f64::NEG_INFINITY), None);
    assert_eq!(from_big_decimal::<f64>(Some(&parse_decimal("0.25"))), 0.25);
}

#[test]
fn test_scalar_cast_to() {
    assert_eq!(Scalar::Float64(3.99).cast_to(NumericKind::Int16), Scalar::Int16(3));
    assert_eq!(Scalar::Int32(70000).cast_to(NumericKind::Char16), Scalar::Char16(4464));
    assert_eq!(dec("12.75").cast_to(NumericKind::BigInt), big("12"));
    assert_eq!(dec("-12.75").cast_to(NumericKind::BigInt), big("-12"));
    assert_eq!(Scalar::Int64(5).cast_to(NumericKind::BigDec), dec("5"));
    for from in NumericKind::ALL {
        for to in NumericKind::ALL {
            assert_null(&Scalar::null(from).cast_to(to), to);
        }
    }
}

#[test]
fn test_object_cast_of_absent_object_is_null() {
    assert_eq!(object_cast::<i16>(None).unwrap(), NULL_SHORT);
    assert_eq!(object_to_big_int(None).unwrap(), None);
    assert_eq!(object_to_big_decimal(None).unwrap(), None);
    assert_null(&object_to_scalar(None, NumericKind::Float32).unwrap(), NumericKind::Float32);
}

#[test]
fn test_object_cast_of_numbers() {
    let boxed: Vec<Box<dyn NumberObject>> = vec![
        Box::new(42i8),
        Box::new(42u16),
        Box::new(42.0f64),
        Box::new(parse_big_int("42")),
        Box::new(parse_decimal("42.00")),
        Box::new(Decimal::new(4200, 2)),
        Box::new(Scalar::Int64(42)),
    ];
    for object in &boxed {
        assert_eq!(object_cast::<i32>(Some(object.as_ref())).unwrap(), 42, "{}", object.type_name());
        assert_eq!(object_to_big_int(Some(object.as_ref())).unwrap(), Some(parse_big_int("42")));
        let scalar = object_to_scalar(Some(object.as_ref()), NumericKind::Float32).unwrap();
        assert_eq!(scalar, Scalar::Float32(42.0));
    }
}

#[test]
fn test_object_cast_of_char() {
    assert_eq!(object_cast::<i32>(Some(&'A')).unwrap(), 65);
    assert_eq!(object_to_scalar(Some(&'A'), NumericKind::Char16).unwrap(), Scalar::Char16(65));
    assert_error_contains(object_cast::<i32>(Some(&'\u{1F600}')), &["char"]);
}

#[test]
fn test_object_cast_of_non_numeric_fails() {
    let err = object_cast::<i64>(Some(&true)).unwrap_err();
    assert_eq!(err, Error::invalid_argument_kind("INT64", "bool"));
    assert_error_contains(object_to_big_decimal(Some(&String::from("1.5"))), &["String"]);
    let text = "12";
    assert_error_contains(object_to_scalar(Some(&text), NumericKind::Int8), &["INT8", "str"]);
}
