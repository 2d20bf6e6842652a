//! Promotion rules: which kind a binary operation is carried out in.
//!
//! The rules live twice, once as static tables indexed by [`NumericKind`] for
//! runtime dispatch, and once at the type level through [`Promote`] for the
//! monomorphised operators. The two must agree for every fixed-width pair.

#![cfg_attr(rustfmt, rustfmt_skip)]

use qlnum_common::NumericKind;

use crate::tower::{Carrier, FloatCarrier, Numeric};

/// How a comparison between two kinds is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareDomain {
    /// Both integral: compare as `i64`.
    Integral,
    /// Both floating: compare as `f64`.
    Floating,
    /// One integral, one floating: exact truncate-and-compare, never through a float.
    MixedExact,
    /// At least one arbitrary-precision side.
    Arbitrary,
}

const fn arithmetic_rule(l: NumericKind, r: NumericKind) -> NumericKind {
    use NumericKind::*;
    match (l, r) {
        (BigDec, _) | (_, BigDec) => BigDec,
        (BigInt, other) | (other, BigInt) => {
            if other.is_floating() { BigDec } else { BigInt }
        }
        (Float64, _) | (_, Float64) => Float64,
        (Float32, _) | (_, Float32) => Float32,
        (Int64, _) | (_, Int64) => Int64,
        (Int8 | Int16 | Char16 | Int32, Int8 | Int16 | Char16 | Int32) => Int32,
    }
}

const fn quotient_rule(l: NumericKind, r: NumericKind) -> NumericKind {
    if l.is_arbitrary_precision() || r.is_arbitrary_precision() {
        NumericKind::BigDec
    } else if l.is_integral() && r.is_integral() {
        NumericKind::Float64
    } else {
        arithmetic_rule(l, r)
    }
}

const fn build_table(quotient: bool) -> [[NumericKind; 9]; 9] {
    let mut table = [[NumericKind::Int32; 9]; 9];
    let mut i = 0;
    while i < 9 {
        let mut j = 0;
        while j < 9 {
            let (l, r) = (NumericKind::ALL[i], NumericKind::ALL[j]);
            table[i][j] = if quotient { quotient_rule(l, r) } else { arithmetic_rule(l, r) };
            j += 1;
        }
        i += 1;
    }
    table
}

/// Result kind of `plus`, `minus`, `multiply`, `remainder` and the bitwise operators.
pub static ARITHMETIC_PROMOTION: [[NumericKind; 9]; 9] = build_table(false);

/// Result kind of `divide`.
pub static QUOTIENT_PROMOTION: [[NumericKind; 9]; 9] = build_table(true);

#[inline]
pub fn arithmetic_kind(l: NumericKind, r: NumericKind) -> NumericKind {
    ARITHMETIC_PROMOTION[l.index()][r.index()]
}

#[inline]
pub fn quotient_kind(l: NumericKind, r: NumericKind) -> NumericKind {
    QUOTIENT_PROMOTION[l.index()][r.index()]
}

/// `None` when either side is not integral.
#[inline]
pub fn bitwise_kind(l: NumericKind, r: NumericKind) -> Option<NumericKind> {
    if l.supports_bitwise() && r.supports_bitwise() {
        Some(arithmetic_kind(l, r))
    } else {
        None
    }
}

pub fn comparison_domain(l: NumericKind, r: NumericKind) -> CompareDomain {
    if l.is_arbitrary_precision() || r.is_arbitrary_precision() {
        CompareDomain::Arbitrary
    } else if l.is_integral() && r.is_integral() {
        CompareDomain::Integral
    } else if l.is_floating() && r.is_floating() {
        CompareDomain::Floating
    } else {
        CompareDomain::MixedExact
    }
}

/// Type-level promotion of a fixed-width pair.
///
/// Widening here is a bare `as` conversion; callers test both operands for
/// their sentinels first.
pub trait Promote<R: Numeric>: Numeric {
    type Output: Carrier;
    type Quotient: FloatCarrier;

    fn promote(self, rhs: R) -> (Self::Output, Self::Output);
    fn promote_quotient(self, rhs: R) -> (Self::Quotient, Self::Quotient);
}

macro_rules! promotion_table {
    ($($l:ty, $r:ty => $out:ty, $quot:ty;)*) => {
        $(
            impl Promote<$r> for $l {
                type Output = $out;
                type Quotient = $quot;

                #[inline]
                fn promote(self, rhs: $r) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }

                #[inline]
                fn promote_quotient(self, rhs: $r) -> ($quot, $quot) {
                    (self as $quot, rhs as $quot)
                }
            }
        )*
    };
}

promotion_table! {
    i8,  i8  => i32, f64;   i8,  i16 => i32, f64;   i8,  u16 => i32, f64;   i8,  i32 => i32, f64;
    i8,  i64 => i64, f64;   i8,  f32 => f32, f32;   i8,  f64 => f64, f64;

    i16, i8  => i32, f64;   i16, i16 => i32, f64;   i16, u16 => i32, f64;   i16, i32 => i32, f64;
    i16, i64 => i64, f64;   i16, f32 => f32, f32;   i16, f64 => f64, f64;

    u16, i8  => i32, f64;   u16, i16 => i32, f64;   u16, u16 => i32, f64;   u16, i32 => i32, f64;
    u16, i64 => i64, f64;   u16, f32 => f32, f32;   u16, f64 => f64, f64;

    i32, i8  => i32, f64;   i32, i16 => i32, f64;   i32, u16 => i32, f64;   i32, i32 => i32, f64;
    i32, i64 => i64, f64;   i32, f32 => f32, f32;   i32, f64 => f64, f64;

    i64, i8  => i64, f64;   i64, i16 => i64, f64;   i64, u16 => i64, f64;   i64, i32 => i64, f64;
    i64, i64 => i64, f64;   i64, f32 => f32, f32;   i64, f64 => f64, f64;

    f32, i8  => f32, f32;   f32, i16 => f32, f32;   f32, u16 => f32, f32;   f32, i32 => f32, f32;
    f32, i64 => f32, f32;   f32, f32 => f32, f32;   f32, f64 => f64, f64;

    f64, i8  => f64, f64;   f64, i16 => f64, f64;   f64, u16 => f64, f64;   f64, i32 => f64, f64;
    f64, i64 => f64, f64;   f64, f32 => f64, f64;   f64, f64 => f64, f64;
}
