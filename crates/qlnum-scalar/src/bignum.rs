//! Arbitrary-precision arithmetic and comparison.
//!
//! Null is `None` throughout. Fixed-width operands are converted to a
//! [`BigNumber`] before they get here; a float that has no decimal value
//! (NaN or infinite) cannot take part in arithmetic and turns the result null.
//! Comparison keeps floats as they are, see [`Comparand`].

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, Zero};
use qlnum_common::{NumericConfig, NumericKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigNumber {
    Int(BigInt),
    Dec(BigDecimal),
}

impl BigNumber {
    pub fn kind(&self) -> NumericKind {
        match self {
            BigNumber::Int(_) => NumericKind::BigInt,
            BigNumber::Dec(_) => NumericKind::BigDec,
        }
    }

    /// Digits after the decimal point; integers have scale 0.
    pub fn scale(&self) -> i64 {
        match self {
            BigNumber::Int(_) => 0,
            BigNumber::Dec(d) => d.as_bigint_and_exponent().1,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            BigNumber::Int(i) => i.is_zero(),
            BigNumber::Dec(d) => d.is_zero(),
        }
    }

    pub fn to_decimal(&self) -> BigDecimal {
        match self {
            BigNumber::Int(i) => BigDecimal::from(i.clone()),
            BigNumber::Dec(d) => d.clone(),
        }
    }

    pub fn into_decimal(self) -> BigDecimal {
        match self {
            BigNumber::Int(i) => BigDecimal::from(i),
            BigNumber::Dec(d) => d,
        }
    }
}

impl From<BigInt> for BigNumber {
    fn from(value: BigInt) -> Self {
        BigNumber::Int(value)
    }
}

impl From<BigDecimal> for BigNumber {
    fn from(value: BigDecimal) -> Self {
        BigNumber::Dec(value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumber::Int(i) => write!(f, "{i}"),
            BigNumber::Dec(d) => write!(f, "{d}"),
        }
    }
}

/// 2^53. Every double at or beyond it is an integer whose shortest form drops digits.
const EXACT_INTEGER_BOUND: f64 = 9_007_199_254_740_992.0;

/// Decimal value of a float. Below 2^53 this is the shortest round-trip
/// representation, so `0.1` becomes exactly `0.1`; from 2^53 on it is the
/// float's exact integer value. `None` for NaN and infinities.
///
/// The mapping is strictly increasing and agrees with the exact value on every
/// integer, so ordering decimals against floats matches ordering integers
/// against them.
pub fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    if value.abs() >= EXACT_INTEGER_BOUND {
        return BigInt::from_f64(value).map(BigDecimal::from);
    }
    value.to_string().parse().ok()
}

fn lift<F, G>(a: Option<&BigNumber>, b: Option<&BigNumber>, int_op: F, dec_op: G) -> Option<BigNumber>
where
    F: FnOnce(&BigInt, &BigInt) -> Option<BigInt>,
    G: FnOnce(BigDecimal, BigDecimal) -> Option<BigDecimal>,
{
    match (a?, b?) {
        (BigNumber::Int(x), BigNumber::Int(y)) => int_op(x, y).map(BigNumber::Int),
        (x, y) => dec_op(x.to_decimal(), y.to_decimal()).map(BigNumber::Dec),
    }
}

pub fn plus(a: Option<&BigNumber>, b: Option<&BigNumber>) -> Option<BigNumber> {
    lift(a, b, |x, y| Some(x + y), |x, y| Some(x + y))
}

pub fn minus(a: Option<&BigNumber>, b: Option<&BigNumber>) -> Option<BigNumber> {
    lift(a, b, |x, y| Some(x - y), |x, y| Some(x - y))
}

pub fn multiply(a: Option<&BigNumber>, b: Option<&BigNumber>) -> Option<BigNumber> {
    lift(a, b, |x, y| Some(x * y), |x, y| Some(x * y))
}

/// Truncated remainder, sign of the dividend. Null on a zero divisor.
pub fn remainder(a: Option<&BigNumber>, b: Option<&BigNumber>) -> Option<BigNumber> {
    lift(
        a,
        b,
        |x, y| if y.is_zero() { None } else { Some(x % y) },
        |x, y| {
            if y.is_zero() {
                return None;
            }
            let scale = x.as_bigint_and_exponent().1.max(y.as_bigint_and_exponent().1);
            let (xm, _) = x.with_scale(scale).into_bigint_and_exponent();
            let (ym, _) = y.with_scale(scale).into_bigint_and_exponent();
            Some(BigDecimal::new(xm % ym, scale))
        },
    )
}

/// Decimal quotient at scale `max(scale(a), scale(b), default_scale)`, rounded half up.
/// Null on a zero divisor.
pub fn divide(a: Option<&BigNumber>, b: Option<&BigNumber>, config: &NumericConfig) -> Option<BigNumber> {
    let (a, b) = (a?, b?);
    if b.is_zero() {
        return None;
    }
    let (am, a_scale) = a.to_decimal().into_bigint_and_exponent();
    let (bm, b_scale) = b.to_decimal().into_bigint_and_exponent();
    let scale = a_scale.max(b_scale).max(config.default_scale);

    // a / b * 10^scale = am * 10^(scale - a_scale + b_scale) / bm
    let shift = scale - a_scale + b_scale;
    let (num, den) = if shift >= 0 {
        (am * pow10(shift), bm)
    } else {
        (am, bm * pow10(-shift))
    };
    Some(BigNumber::Dec(BigDecimal::new(div_half_up(&num, &den), scale)))
}

fn pow10(exp: i64) -> BigInt {
    BigInt::from(10u8).pow(exp as u32)
}

fn div_half_up(num: &BigInt, den: &BigInt) -> BigInt {
    let quotient = num / den;
    let rest = num % den;
    if rest.abs() * 2u32 >= den.abs() {
        if num.is_negative() != den.is_negative() {
            quotient - BigInt::one()
        } else {
            quotient + BigInt::one()
        }
    } else {
        quotient
    }
}

pub fn negate(a: Option<&BigNumber>) -> Option<BigNumber> {
    Some(match a? {
        BigNumber::Int(i) => BigNumber::Int(-i),
        BigNumber::Dec(d) => BigNumber::Dec(-d.clone()),
    })
}

/// Two's complement bitwise or.
pub fn bit_or(a: Option<&BigInt>, b: Option<&BigInt>) -> Option<BigInt> {
    Some(a? | b?)
}

pub fn bit_and(a: Option<&BigInt>, b: Option<&BigInt>) -> Option<BigInt> {
    Some(a? & b?)
}

pub fn bit_xor(a: Option<&BigInt>, b: Option<&BigInt>) -> Option<BigInt> {
    Some(a? ^ b?)
}

/// One side of a comparison that involves an arbitrary-precision value.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparand {
    Null,
    Big(BigNumber),
    Float(f64),
}

impl Comparand {
    fn is_nan(&self) -> bool {
        matches!(self, Comparand::Float(f) if f.is_nan())
    }
}

impl From<Option<BigNumber>> for Comparand {
    fn from(value: Option<BigNumber>) -> Self {
        value.map_or(Comparand::Null, Comparand::Big)
    }
}

fn cmp_big(a: &BigNumber, b: &BigNumber) -> Ordering {
    match (a, b) {
        (BigNumber::Int(x), BigNumber::Int(y)) => x.cmp(y),
        (x, y) => x.to_decimal().cmp(&y.to_decimal()),
    }
}

/// `b` is never NaN here.
fn cmp_big_float(a: &BigNumber, b: f64) -> Ordering {
    if b == f64::INFINITY {
        return Ordering::Less;
    }
    if b == f64::NEG_INFINITY {
        return Ordering::Greater;
    }
    match a {
        BigNumber::Int(x) => {
            let whole = b.trunc();
            match BigInt::from_f64(whole).map(|w| x.cmp(&w)) {
                Some(Ordering::Equal) | None => 0.0f64.partial_cmp(&(b - whole)).unwrap_or(Ordering::Equal),
                Some(other) => other,
            }
        }
        BigNumber::Dec(x) => match decimal_from_f64(b) {
            Some(d) => x.cmp(&d),
            None => Ordering::Equal,
        },
    }
}

fn cmp_values(a: &Comparand, b: &Comparand) -> Ordering {
    match (a, b) {
        (Comparand::Big(x), Comparand::Big(y)) => cmp_big(x, y),
        (Comparand::Big(x), Comparand::Float(y)) => cmp_big_float(x, *y),
        (Comparand::Float(x), Comparand::Big(y)) => cmp_big_float(y, *x).reverse(),
        (Comparand::Float(x), Comparand::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Comparand::Null, Comparand::Null) => Ordering::Equal,
        (Comparand::Null, _) => Ordering::Less,
        (_, Comparand::Null) => Ordering::Greater,
    }
}

/// Same ordering rules as the fixed-width comparison: NaN first, then null.
pub fn compare(a: &Comparand, b: &Comparand) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => cmp_values(a, b),
    }
}

pub fn equals(a: &Comparand, b: &Comparand) -> bool {
    match (a, b) {
        (Comparand::Null, Comparand::Null) => true,
        (Comparand::Null, _) | (_, Comparand::Null) => false,
        _ if a.is_nan() || b.is_nan() => false,
        _ => cmp_values(a, b) == Ordering::Equal,
    }
}
