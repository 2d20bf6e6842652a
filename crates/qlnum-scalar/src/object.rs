//! Casts from values the caller only knows as "some object".
//!
//! An absent object (`None`) is null and casts to the destination's null. A
//! present object is asked for its numeric value through [`NumberObject`]; an
//! object that has none is an [`Error::InvalidArgumentKind`].

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use qlnum_common::{Error, NumericKind, Result};

use crate::scalar::Scalar;
use crate::tower::Numeric;

pub trait NumberObject {
    fn type_name(&self) -> &'static str;

    /// The object's value as a tagged scalar, `None` when it is not numeric.
    fn numeric_value(&self) -> Option<Scalar>;
}

fn numeric_value(object: &dyn NumberObject, target: NumericKind) -> Result<Scalar> {
    object
        .numeric_value()
        .ok_or_else(|| Error::invalid_argument_kind(target.name(), object.type_name()))
}

pub fn object_cast<D: Numeric>(object: Option<&dyn NumberObject>) -> Result<D> {
    match object {
        None => Ok(D::NULL),
        Some(o) => Ok(numeric_value(o, D::KIND)?.to_fixed()),
    }
}

pub fn object_to_big_int(object: Option<&dyn NumberObject>) -> Result<Option<BigInt>> {
    match object {
        None => Ok(None),
        Some(o) => Ok(numeric_value(o, NumericKind::BigInt)?.to_big_int()),
    }
}

pub fn object_to_big_decimal(object: Option<&dyn NumberObject>) -> Result<Option<BigDecimal>> {
    match object {
        None => Ok(None),
        Some(o) => Ok(numeric_value(o, NumericKind::BigDec)?.to_big_decimal()),
    }
}

pub fn object_to_scalar(object: Option<&dyn NumberObject>, kind: NumericKind) -> Result<Scalar> {
    match object {
        None => Ok(Scalar::null(kind)),
        Some(o) => Ok(numeric_value(o, kind)?.cast_to(kind)),
    }
}

impl NumberObject for Scalar {
    fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    fn numeric_value(&self) -> Option<Scalar> {
        Some(self.clone())
    }
}

macro_rules! impl_number_object {
    ($($t:ty),*) => {
        $(
            impl NumberObject for $t {
                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }

                fn numeric_value(&self) -> Option<Scalar> {
                    Some(Scalar::from(*self))
                }
            }
        )*
    };
}

impl_number_object!(i8, i16, u16, i32, i64, f32, f64);

impl NumberObject for BigInt {
    fn type_name(&self) -> &'static str {
        "BigInt"
    }

    fn numeric_value(&self) -> Option<Scalar> {
        Some(Scalar::BigInt(Some(self.clone())))
    }
}

impl NumberObject for BigDecimal {
    fn type_name(&self) -> &'static str {
        "BigDecimal"
    }

    fn numeric_value(&self) -> Option<Scalar> {
        Some(Scalar::BigDec(Some(self.clone())))
    }
}

impl NumberObject for rust_decimal::Decimal {
    fn type_name(&self) -> &'static str {
        "Decimal"
    }

    fn numeric_value(&self) -> Option<Scalar> {
        let value = BigDecimal::new(BigInt::from(self.mantissa()), i64::from(self.scale()));
        Some(Scalar::from(value))
    }
}

/// Characters up to U+FFFF are `Char16` values, U+FFFF itself being the `Char16`
/// null. Anything wider has no 16-bit code unit.
impl NumberObject for char {
    fn type_name(&self) -> &'static str {
        "char"
    }

    fn numeric_value(&self) -> Option<Scalar> {
        u16::try_from(u32::from(*self)).ok().map(Scalar::Char16)
    }
}

macro_rules! impl_non_numeric {
    ($($t:ty),*) => {
        $(
            impl NumberObject for $t {
                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }

                fn numeric_value(&self) -> Option<Scalar> {
                    None
                }
            }
        )*
    };
}

impl_non_numeric!(bool, String);

impl NumberObject for &str {
    fn type_name(&self) -> &'static str {
        "str"
    }

    fn numeric_value(&self) -> Option<Scalar> {
        None
    }
}
