//! Runtime-tagged numeric value.
//!
//! [`Scalar`] carries its kind alongside the value and dispatches every
//! operator to the same generic code the typed API uses. Pairs that involve
//! an arbitrary-precision kind go through [`crate::bignum`].

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use qlnum_common::{Error, NumericConfig, NumericKind, Result};

use crate::arithmetic;
use crate::bignum::{self, BigNumber, Comparand};
use crate::cast::{self, cast};
use crate::compare::{self, Operand};
use crate::null::*;
use crate::op::{BinaryOp, CompareOp};
use crate::promote::{CompareDomain, arithmetic_kind, comparison_domain, quotient_kind};
use crate::tower::Numeric;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int8(i8),
    Int16(i16),
    Char16(u16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    BigInt(Option<BigInt>),
    BigDec(Option<BigDecimal>),
}

/// Matches both operands against the listed variants and evaluates `$body`
/// with the unwrapped carriers bound; anything else evaluates `$fallback`.
macro_rules! dispatch_pair {
    (@lhs $lhs:expr, $rhs:expr, [$($kind:ident)*], $all:tt, $a:ident, $b:ident, $body:expr, $fallback:expr) => {
        match *$lhs {
            $(Scalar::$kind($a) => dispatch_pair!(@rhs $rhs, $all, $b, $body, $fallback),)*
            _ => $fallback,
        }
    };
    (@rhs $rhs:expr, [$($kind:ident)*], $b:ident, $body:expr, $fallback:expr) => {
        match *$rhs {
            $(Scalar::$kind($b) => $body,)*
            _ => $fallback,
        }
    };
    ($lhs:expr, $rhs:expr, $kinds:tt, |$a:ident, $b:ident| $body:expr, else $fallback:expr) => {
        dispatch_pair!(@lhs $lhs, $rhs, $kinds, $kinds, $a, $b, $body, $fallback)
    };
}

macro_rules! fixed_binary {
    ($lhs:expr, $rhs:expr, $f:path, else $fallback:expr) => {
        dispatch_pair!(
            $lhs, $rhs, [Int8 Int16 Char16 Int32 Int64 Float32 Float64],
            |a, b| Scalar::from($f(a, b)),
            else $fallback
        )
    };
}

macro_rules! integral_binary {
    ($lhs:expr, $rhs:expr, $f:path, else $fallback:expr) => {
        dispatch_pair!(
            $lhs, $rhs, [Int8 Int16 Char16 Int32 Int64],
            |a, b| Scalar::from($f(a, b)),
            else $fallback
        )
    };
}

impl Scalar {
    pub fn null(kind: NumericKind) -> Scalar {
        match kind {
            NumericKind::Int8 => Scalar::Int8(NULL_BYTE),
            NumericKind::Int16 => Scalar::Int16(NULL_SHORT),
            NumericKind::Char16 => Scalar::Char16(NULL_CHAR),
            NumericKind::Int32 => Scalar::Int32(NULL_INT),
            NumericKind::Int64 => Scalar::Int64(NULL_LONG),
            NumericKind::Float32 => Scalar::Float32(NULL_FLOAT),
            NumericKind::Float64 => Scalar::Float64(NULL_DOUBLE),
            NumericKind::BigInt => Scalar::BigInt(None),
            NumericKind::BigDec => Scalar::BigDec(None),
        }
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            Scalar::Int8(_) => NumericKind::Int8,
            Scalar::Int16(_) => NumericKind::Int16,
            Scalar::Char16(_) => NumericKind::Char16,
            Scalar::Int32(_) => NumericKind::Int32,
            Scalar::Int64(_) => NumericKind::Int64,
            Scalar::Float32(_) => NumericKind::Float32,
            Scalar::Float64(_) => NumericKind::Float64,
            Scalar::BigInt(_) => NumericKind::BigInt,
            Scalar::BigDec(_) => NumericKind::BigDec,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Scalar::Int8(v) => v.is_null(),
            Scalar::Int16(v) => v.is_null(),
            Scalar::Char16(v) => v.is_null(),
            Scalar::Int32(v) => v.is_null(),
            Scalar::Int64(v) => v.is_null(),
            Scalar::Float32(v) => v.is_null(),
            Scalar::Float64(v) => v.is_null(),
            Scalar::BigInt(v) => v.is_none(),
            Scalar::BigDec(v) => v.is_none(),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Scalar::Float32(v) => v.is_nan(),
            Scalar::Float64(v) => v.is_nan(),
            Scalar::Int8(_)
            | Scalar::Int16(_)
            | Scalar::Char16(_)
            | Scalar::Int32(_)
            | Scalar::Int64(_)
            | Scalar::BigInt(_)
            | Scalar::BigDec(_) => false,
        }
    }

    /// Null-aware conversion into a fixed-width carrier.
    pub fn to_fixed<D: Numeric>(&self) -> D {
        match self {
            Scalar::Int8(v) => cast(*v),
            Scalar::Int16(v) => cast(*v),
            Scalar::Char16(v) => cast(*v),
            Scalar::Int32(v) => cast(*v),
            Scalar::Int64(v) => cast(*v),
            Scalar::Float32(v) => cast(*v),
            Scalar::Float64(v) => cast(*v),
            Scalar::BigInt(v) => cast::from_big_int(v.as_ref()),
            Scalar::BigDec(v) => cast::from_big_decimal(v.as_ref()),
        }
    }

    pub fn to_big_int(&self) -> Option<BigInt> {
        match self {
            Scalar::Int8(v) => cast::to_big_int(*v),
            Scalar::Int16(v) => cast::to_big_int(*v),
            Scalar::Char16(v) => cast::to_big_int(*v),
            Scalar::Int32(v) => cast::to_big_int(*v),
            Scalar::Int64(v) => cast::to_big_int(*v),
            Scalar::Float32(v) => cast::to_big_int(*v),
            Scalar::Float64(v) => cast::to_big_int(*v),
            Scalar::BigInt(v) => v.clone(),
            Scalar::BigDec(v) => v.as_ref().map(|d| d.with_scale(0).into_bigint_and_exponent().0),
        }
    }

    pub fn to_big_decimal(&self) -> Option<BigDecimal> {
        match self {
            Scalar::Int8(v) => cast::to_big_decimal(*v),
            Scalar::Int16(v) => cast::to_big_decimal(*v),
            Scalar::Char16(v) => cast::to_big_decimal(*v),
            Scalar::Int32(v) => cast::to_big_decimal(*v),
            Scalar::Int64(v) => cast::to_big_decimal(*v),
            Scalar::Float32(v) => cast::to_big_decimal(*v),
            Scalar::Float64(v) => cast::to_big_decimal(*v),
            Scalar::BigInt(v) => v.clone().map(BigDecimal::from),
            Scalar::BigDec(v) => v.clone(),
        }
    }

    pub fn cast_to(&self, kind: NumericKind) -> Scalar {
        match kind {
            NumericKind::Int8 => Scalar::Int8(self.to_fixed()),
            NumericKind::Int16 => Scalar::Int16(self.to_fixed()),
            NumericKind::Char16 => Scalar::Char16(self.to_fixed()),
            NumericKind::Int32 => Scalar::Int32(self.to_fixed()),
            NumericKind::Int64 => Scalar::Int64(self.to_fixed()),
            NumericKind::Float32 => Scalar::Float32(self.to_fixed()),
            NumericKind::Float64 => Scalar::Float64(self.to_fixed()),
            NumericKind::BigInt => Scalar::BigInt(self.to_big_int()),
            NumericKind::BigDec => Scalar::BigDec(self.to_big_decimal()),
        }
    }

    /// Arbitrary-precision view for arithmetic; floats without a decimal value are null.
    fn to_big_number(&self) -> Option<BigNumber> {
        match self {
            Scalar::Float32(_) | Scalar::Float64(_) | Scalar::BigDec(_) => self.to_big_decimal().map(BigNumber::Dec),
            Scalar::Int8(_)
            | Scalar::Int16(_)
            | Scalar::Char16(_)
            | Scalar::Int32(_)
            | Scalar::Int64(_)
            | Scalar::BigInt(_) => self.to_big_int().map(BigNumber::Int),
        }
    }

    fn operand(&self) -> Option<Operand> {
        match *self {
            Scalar::Int8(v) => Some(Operand::of(v)),
            Scalar::Int16(v) => Some(Operand::of(v)),
            Scalar::Char16(v) => Some(Operand::of(v)),
            Scalar::Int32(v) => Some(Operand::of(v)),
            Scalar::Int64(v) => Some(Operand::of(v)),
            Scalar::Float32(v) => Some(Operand::of(v)),
            Scalar::Float64(v) => Some(Operand::of(v)),
            Scalar::BigInt(_) | Scalar::BigDec(_) => None,
        }
    }

    fn comparand(&self) -> Comparand {
        match self {
            Scalar::Float32(v) if !v.is_null() => Comparand::Float(*v as f64),
            Scalar::Float64(v) if !v.is_null() => Comparand::Float(*v),
            _ => Comparand::from(self.to_big_number()),
        }
    }

    #[allow(clippy::wildcard_enum_match_arm)]
    pub fn binary(&self, op: BinaryOp, rhs: &Scalar, config: &NumericConfig) -> Result<Scalar> {
        if op.is_bitwise() {
            for kind in [self.kind(), rhs.kind()] {
                if !kind.supports_bitwise() {
                    return Err(Error::not_integral(op.name(), kind));
                }
            }
        }
        if self.kind().is_arbitrary_precision() || rhs.kind().is_arbitrary_precision() {
            return Ok(self.binary_big(op, rhs, config));
        }

        Ok(match op {
            BinaryOp::Plus => fixed_binary!(self, rhs, arithmetic::plus, else self.binary_big(op, rhs, config)),
            BinaryOp::Minus => fixed_binary!(self, rhs, arithmetic::minus, else self.binary_big(op, rhs, config)),
            BinaryOp::Multiply => fixed_binary!(self, rhs, arithmetic::multiply, else self.binary_big(op, rhs, config)),
            BinaryOp::Divide => fixed_binary!(self, rhs, arithmetic::divide, else self.binary_big(op, rhs, config)),
            BinaryOp::Remainder => fixed_binary!(self, rhs, arithmetic::remainder, else self.binary_big(op, rhs, config)),
            BinaryOp::BitOr => integral_binary!(self, rhs, arithmetic::bit_or, else self.binary_big(op, rhs, config)),
            BinaryOp::BitAnd => integral_binary!(self, rhs, arithmetic::bit_and, else self.binary_big(op, rhs, config)),
            BinaryOp::BitXor => integral_binary!(self, rhs, arithmetic::bit_xor, else self.binary_big(op, rhs, config)),
        })
    }

    #[allow(clippy::wildcard_enum_match_arm)]
    fn binary_big(&self, op: BinaryOp, rhs: &Scalar, config: &NumericConfig) -> Scalar {
        let (lk, rk) = (self.kind(), rhs.kind());
        let (a, b) = (self.to_big_number(), rhs.to_big_number());
        let (a, b) = (a.as_ref(), b.as_ref());
        let value = match op {
            BinaryOp::Plus => bignum::plus(a, b),
            BinaryOp::Minus => bignum::minus(a, b),
            BinaryOp::Multiply => bignum::multiply(a, b),
            BinaryOp::Remainder => bignum::remainder(a, b),
            BinaryOp::Divide => return Scalar::from_big(quotient_kind(lk, rk), bignum::divide(a, b, config)),
            BinaryOp::BitOr | BinaryOp::BitAnd | BinaryOp::BitXor => {
                let (x, y) = (self.to_big_int(), rhs.to_big_int());
                let (x, y) = (x.as_ref(), y.as_ref());
                return Scalar::BigInt(match op {
                    BinaryOp::BitOr => bignum::bit_or(x, y),
                    BinaryOp::BitAnd => bignum::bit_and(x, y),
                    _ => bignum::bit_xor(x, y),
                });
            }
        };
        Scalar::from_big(arithmetic_kind(lk, rk), value)
    }

    fn from_big(kind: NumericKind, value: Option<BigNumber>) -> Scalar {
        match value {
            None => Scalar::null(kind),
            Some(BigNumber::Int(i)) if kind == NumericKind::BigInt => Scalar::BigInt(Some(i)),
            Some(n) => Scalar::BigDec(Some(n.into_decimal())),
        }
    }

    pub fn negate(&self) -> Scalar {
        match *self {
            Scalar::Int8(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::Int16(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::Char16(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::Int32(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::Int64(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::Float32(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::Float64(v) => Scalar::from(arithmetic::negate(v)),
            Scalar::BigInt(_) | Scalar::BigDec(_) => {
                Scalar::from_big(self.kind(), bignum::negate(self.to_big_number().as_ref()))
            }
        }
    }

    pub fn compare_to(&self, rhs: &Scalar) -> Ordering {
        match comparison_domain(self.kind(), rhs.kind()) {
            CompareDomain::Arbitrary => bignum::compare(&self.comparand(), &rhs.comparand()),
            CompareDomain::Integral | CompareDomain::Floating | CompareDomain::MixedExact => {
                match (self.operand(), rhs.operand()) {
                    (Some(a), Some(b)) => compare::compare_operands(a, b),
                    _ => bignum::compare(&self.comparand(), &rhs.comparand()),
                }
            }
        }
    }

    pub fn equals(&self, rhs: &Scalar) -> bool {
        match (self.operand(), rhs.operand()) {
            (Some(a), Some(b)) => compare::operands_equal(a, b),
            _ => bignum::equals(&self.comparand(), &rhs.comparand()),
        }
    }

    pub fn less(&self, rhs: &Scalar) -> bool {
        self.compare_to(rhs) == Ordering::Less
    }

    pub fn greater(&self, rhs: &Scalar) -> bool {
        self.compare_to(rhs) == Ordering::Greater
    }

    pub fn less_equals(&self, rhs: &Scalar) -> bool {
        self.compare_to(rhs) != Ordering::Greater
    }

    pub fn greater_equals(&self, rhs: &Scalar) -> bool {
        self.compare_to(rhs) != Ordering::Less
    }

    pub fn compare(&self, op: CompareOp, rhs: &Scalar) -> bool {
        match op {
            CompareOp::Equals => self.equals(rhs),
            CompareOp::Less => self.less(rhs),
            CompareOp::Greater => self.greater(rhs),
            CompareOp::LessEquals => self.less_equals(rhs),
            CompareOp::GreaterEquals => self.greater_equals(rhs),
        }
    }
}

macro_rules! impl_from_carrier {
    ($($t:ty => $variant:ident),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

impl_from_carrier!(
    i8 => Int8, i16 => Int16, u16 => Char16, i32 => Int32, i64 => Int64,
    f32 => Float32, f64 => Float64, Option<BigInt> => BigInt, Option<BigDecimal> => BigDec
);

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Self {
        Scalar::BigInt(Some(value))
    }
}

impl From<BigDecimal> for Scalar {
    fn from(value: BigDecimal) -> Self {
        Scalar::BigDec(Some(value))
    }
}

impl From<BigNumber> for Scalar {
    fn from(value: BigNumber) -> Self {
        match value {
            BigNumber::Int(i) => Scalar::BigInt(Some(i)),
            BigNumber::Dec(d) => Scalar::BigDec(Some(d)),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("NULL");
        }
        match self {
            Scalar::Int8(v) => write!(f, "{v}"),
            Scalar::Int16(v) => write!(f, "{v}"),
            Scalar::Char16(v) => write!(f, "{v}"),
            Scalar::Int32(v) => write!(f, "{v}"),
            Scalar::Int64(v) => write!(f, "{v}"),
            Scalar::Float32(v) => write!(f, "{v}"),
            Scalar::Float64(v) => write!(f, "{v}"),
            Scalar::BigInt(Some(v)) => write!(f, "{v}"),
            Scalar::BigDec(Some(v)) => write!(f, "{v}"),
            Scalar::BigInt(None) | Scalar::BigDec(None) => f.write_str("NULL"),
        }
    }
}
