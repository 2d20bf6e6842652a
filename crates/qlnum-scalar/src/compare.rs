//! Total ordering and equality over mixed fixed-width operands.
//!
//! Comparison never routes an `i64` through a float. Mixed integral/floating
//! pairs use [`compare_long_double`], which truncates the float and compares in
//! the integer domain, then breaks ties on the fractional part.
//!
//! Ordering rules of [`compare_to`], checked in this order:
//!
//! 1. NaN ranks above everything, null included; two NaNs are equal.
//! 2. Null ranks below every other value; two nulls are equal.
//! 3. Otherwise numeric order, with `-0.0 == 0.0`.
//!
//! [`equals`] is a separate relation: null equals only null and NaN equals
//! nothing, not even itself.

use std::cmp::Ordering;

use crate::tower::{Exact, Numeric};

/// 2^63 as an `f64`; the first double above every `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// A fixed-width value reduced to its exact view, `None` for null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand(pub Option<Exact>);

impl Operand {
    pub const NULL: Operand = Operand(None);

    pub fn of<T: Numeric>(value: T) -> Self {
        if value.is_null() {
            Operand(None)
        } else {
            Operand(Some(value.to_exact()))
        }
    }

    pub fn is_null(self) -> bool {
        self.0.is_none()
    }

    pub fn is_nan(self) -> bool {
        matches!(self.0, Some(e) if e.is_nan())
    }
}

/// Exact order of an `i64` against an `f64`; `None` when `b` is NaN.
pub fn compare_long_double(a: i64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b >= TWO_POW_63 {
        return Some(Ordering::Less);
    }
    if b < -TWO_POW_63 {
        return Some(Ordering::Greater);
    }
    let whole = b.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0f64.partial_cmp(&(b - whole)),
        other => Some(other),
    }
}

/// Numeric order of two non-null exact values; `None` if either is NaN.
pub fn cmp_exact(a: Exact, b: Exact) -> Option<Ordering> {
    match (a, b) {
        (Exact::Int(x), Exact::Int(y)) => Some(x.cmp(&y)),
        (Exact::Float(x), Exact::Float(y)) => x.partial_cmp(&y),
        (Exact::Int(x), Exact::Float(y)) => compare_long_double(x, y),
        (Exact::Float(x), Exact::Int(y)) => compare_long_double(y, x).map(Ordering::reverse),
    }
}

pub fn compare_operands(a: Operand, b: Operand) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    match (a.0, b.0) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => cmp_exact(x, y).unwrap_or(Ordering::Equal),
    }
}

pub fn operands_equal(a: Operand, b: Operand) -> bool {
    match (a.0, b.0) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(x), Some(y)) => cmp_exact(x, y) == Some(Ordering::Equal),
    }
}

#[inline]
pub fn compare_to<L: Numeric, R: Numeric>(a: L, b: R) -> Ordering {
    compare_operands(Operand::of(a), Operand::of(b))
}

#[inline]
pub fn equals<L: Numeric, R: Numeric>(a: L, b: R) -> bool {
    operands_equal(Operand::of(a), Operand::of(b))
}

#[inline]
pub fn less<L: Numeric, R: Numeric>(a: L, b: R) -> bool {
    compare_to(a, b) == Ordering::Less
}

#[inline]
pub fn greater<L: Numeric, R: Numeric>(a: L, b: R) -> bool {
    compare_to(a, b) == Ordering::Greater
}

#[inline]
pub fn less_equals<L: Numeric, R: Numeric>(a: L, b: R) -> bool {
    compare_to(a, b) != Ordering::Greater
}

#[inline]
pub fn greater_equals<L: Numeric, R: Numeric>(a: L, b: R) -> bool {
    compare_to(a, b) != Ordering::Less
}
