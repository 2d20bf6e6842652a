//! The numeric tower over Rust's primitive carriers.
//!
//! Every fixed-width kind maps onto one primitive type:
//!
//! ```text
//! Int8 -> i8   Int16 -> i16   Char16 -> u16   Int32 -> i32
//! Int64 -> i64   Float32 -> f32   Float64 -> f64
//! ```
//!
//! [`Numeric`] is what the generic operators are written against. Values are
//! viewed through [`Exact`], a lossless carrier: every integral value fits an
//! `i64` and every float widens to `f64` without rounding.

use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use qlnum_common::NumericKind;

use crate::null::Nullable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exact {
    Int(i64),
    Float(f64),
}

impl Exact {
    pub fn is_nan(self) -> bool {
        matches!(self, Exact::Float(f) if f.is_nan())
    }
}

pub trait Numeric: Nullable + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    const KIND: NumericKind;

    fn to_exact(self) -> Exact;

    /// Plain `as` conversion from the exact view. Floats saturate into integers, NaN becomes 0.
    fn from_exact(value: Exact) -> Self;

    fn from_big_int(value: &BigInt) -> Option<Self>;

    /// Truncates toward zero for integral carriers.
    fn from_big_decimal(value: &BigDecimal) -> Option<Self>;

    #[inline]
    fn is_nan(self) -> bool {
        false
    }
}

/// Integral carriers; the only ones bitwise operators accept.
pub trait Integral: Numeric {}

pub trait Floating: Numeric {}

/// Kinds an arithmetic operator can produce (`Int32`, `Int64`, `Float32`, `Float64`).
pub trait Carrier: Numeric {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    /// Returns the sentinel when an integral divisor is zero.
    fn rem(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
}

pub trait IntegralCarrier: Carrier + Integral {
    fn bit_or(self, rhs: Self) -> Self;
    fn bit_and(self, rhs: Self) -> Self;
    fn bit_xor(self, rhs: Self) -> Self;
}

pub trait FloatCarrier: Carrier + Floating {
    fn div(self, rhs: Self) -> Self;
}

macro_rules! impl_integral {
    ($($t:ty => $kind:ident, $to:ident);* $(;)?) => {
        $(
            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::$kind;

                #[inline]
                fn to_exact(self) -> Exact {
                    Exact::Int(self as i64)
                }

                #[inline]
                fn from_exact(value: Exact) -> Self {
                    match value {
                        Exact::Int(v) => v as $t,
                        Exact::Float(v) => v as $t,
                    }
                }

                fn from_big_int(value: &BigInt) -> Option<Self> {
                    value.$to()
                }

                fn from_big_decimal(value: &BigDecimal) -> Option<Self> {
                    value.$to()
                }
            }

            impl Integral for $t {}
        )*
    };
}

macro_rules! impl_floating {
    ($($t:ty => $kind:ident, $to:ident);* $(;)?) => {
        $(
            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::$kind;

                #[inline]
                fn to_exact(self) -> Exact {
                    Exact::Float(self as f64)
                }

                #[inline]
                fn from_exact(value: Exact) -> Self {
                    match value {
                        Exact::Int(v) => v as $t,
                        Exact::Float(v) => v as $t,
                    }
                }

                fn from_big_int(value: &BigInt) -> Option<Self> {
                    value.$to()
                }

                fn from_big_decimal(value: &BigDecimal) -> Option<Self> {
                    value.$to()
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
            }

            impl Floating for $t {}
        )*
    };
}

impl_integral! {
    i8 => Int8, to_i8;
    i16 => Int16, to_i16;
    u16 => Char16, to_u16;
    i32 => Int32, to_i32;
    i64 => Int64, to_i64;
}

impl_floating! {
    f32 => Float32, to_f32;
    f64 => Float64, to_f64;
}

macro_rules! impl_integral_carrier {
    ($($t:ty),*) => {
        $(
            impl Carrier for $t {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    if rhs == 0 {
                        Self::NULL
                    } else {
                        self.wrapping_rem(rhs)
                    }
                }

                #[inline]
                fn neg(self) -> Self {
                    self.wrapping_neg()
                }
            }

            impl IntegralCarrier for $t {
                #[inline]
                fn bit_or(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline]
                fn bit_and(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline]
                fn bit_xor(self, rhs: Self) -> Self {
                    self ^ rhs
                }
            }
        )*
    };
}

macro_rules! impl_float_carrier {
    ($($t:ty),*) => {
        $(
            impl Carrier for $t {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline]
                fn neg(self) -> Self {
                    -self
                }
            }

            impl FloatCarrier for $t {
                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_integral_carrier!(i32, i64);
impl_float_carrier!(f32, f64);
