//! Null-propagating binary arithmetic over the fixed-width tower.
//!
//! Each operator has one generic body. The result kind comes from
//! [`Promote`]: if either operand is its kind's sentinel the result is the
//! sentinel of the promoted kind and nothing is computed, otherwise both sides
//! are widened and the carrier's native operator applies. Integer arithmetic
//! wraps.

use crate::null::Nullable;
use crate::promote::Promote;
use crate::tower::{Carrier, FloatCarrier, Integral, IntegralCarrier, Numeric};

#[inline]
fn apply<L, R, F>(a: L, b: R, op: F) -> L::Output
where
    L: Promote<R>,
    R: Numeric,
    F: FnOnce(L::Output, L::Output) -> L::Output,
{
    if a.is_null() || b.is_null() {
        return <L::Output as Nullable>::NULL;
    }
    let (x, y) = a.promote(b);
    op(x, y)
}

#[inline]
pub fn plus<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R>,
    R: Numeric,
{
    apply(a, b, Carrier::add)
}

#[inline]
pub fn minus<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R>,
    R: Numeric,
{
    apply(a, b, Carrier::sub)
}

#[inline]
pub fn multiply<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R>,
    R: Numeric,
{
    apply(a, b, Carrier::mul)
}

/// Integral remainder by zero yields the sentinel.
#[inline]
pub fn remainder<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R>,
    R: Numeric,
{
    apply(a, b, Carrier::rem)
}

/// Always a floating quotient; integers are never truncated.
#[inline]
pub fn divide<L, R>(a: L, b: R) -> L::Quotient
where
    L: Promote<R>,
    R: Numeric,
{
    if a.is_null() || b.is_null() {
        return <L::Quotient as Nullable>::NULL;
    }
    let (x, y) = a.promote_quotient(b);
    FloatCarrier::div(x, y)
}

#[inline]
pub fn bit_or<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R> + Integral,
    R: Integral,
    L::Output: IntegralCarrier,
{
    apply(a, b, IntegralCarrier::bit_or)
}

#[inline]
pub fn bit_and<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R> + Integral,
    R: Integral,
    L::Output: IntegralCarrier,
{
    apply(a, b, IntegralCarrier::bit_and)
}

#[inline]
pub fn bit_xor<L, R>(a: L, b: R) -> L::Output
where
    L: Promote<R> + Integral,
    R: Integral,
    L::Output: IntegralCarrier,
{
    apply(a, b, IntegralCarrier::bit_xor)
}

/// Unary minus; narrow integrals promote to `i32` like their binary counterparts.
pub trait Negate: Numeric {
    type Output: Carrier;

    fn widen(self) -> Self::Output;
}

macro_rules! impl_negate {
    ($($t:ty => $out:ty),*) => {
        $(
            impl Negate for $t {
                type Output = $out;

                #[inline]
                fn widen(self) -> $out {
                    self as $out
                }
            }
        )*
    };
}

impl_negate!(i8 => i32, i16 => i32, u16 => i32, i32 => i32, i64 => i64, f32 => f32, f64 => f64);

#[inline]
pub fn negate<T: Negate>(a: T) -> T::Output {
    if a.is_null() {
        return <T::Output as Nullable>::NULL;
    }
    a.widen().neg()
}
