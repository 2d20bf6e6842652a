//! Null-aware conversions between kinds.
//!
//! A sentinel always maps onto the destination's sentinel, never onto the
//! destination's reading of the same bits. Between fixed-width kinds the value
//! otherwise converts with `as` semantics. Leaving arbitrary precision never
//! wraps: a value the destination cannot hold becomes null.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::bignum::decimal_from_f64;
use crate::tower::{Exact, Numeric};

#[inline]
pub fn cast<S: Numeric, D: Numeric>(value: S) -> D {
    if value.is_null() {
        D::NULL
    } else {
        D::from_exact(value.to_exact())
    }
}

/// Floats truncate toward zero; NaN, infinities and null give `None`.
pub fn to_big_int<S: Numeric>(value: S) -> Option<BigInt> {
    if value.is_null() {
        return None;
    }
    match value.to_exact() {
        Exact::Int(v) => Some(BigInt::from(v)),
        Exact::Float(f) => BigInt::from_f64(f.trunc()),
    }
}

/// Floats convert through [`decimal_from_f64`]; NaN and infinities give `None`.
pub fn to_big_decimal<S: Numeric>(value: S) -> Option<BigDecimal> {
    if value.is_null() {
        return None;
    }
    match value.to_exact() {
        Exact::Int(v) => Some(BigDecimal::from(v)),
        Exact::Float(f) => decimal_from_f64(f),
    }
}

pub fn from_big_int<D: Numeric>(value: Option<&BigInt>) -> D {
    value.and_then(D::from_big_int).filter(|v| !v.is_null()).unwrap_or(D::NULL)
}

/// Integral destinations truncate toward zero.
pub fn from_big_decimal<D: Numeric>(value: Option<&BigDecimal>) -> D {
    value.and_then(D::from_big_decimal).filter(|v| !v.is_null()).unwrap_or(D::NULL)
}
