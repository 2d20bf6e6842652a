//! Element-wise operators over slices.
//!
//! Every scalar operator comes in three shapes: `op_array` (slice with
//! slice), `op_array_scalar` (slice with one right operand) and
//! `op_scalar_array` (one left operand with a slice). Only the slice/slice
//! shape can fail, when the lengths differ.

mod dynamic;

pub use dynamic::{
    binary, binary_array_scalar, binary_scalar_array, compare, compare_array_scalar,
    compare_scalar_array,
};
use qlnum_common::{Error, Result};
use qlnum_scalar::{Integral, IntegralCarrier, Numeric, Promote, arithmetic, compare as cmp};
use tracing::debug;

pub fn validate_lengths(op: &str, left_len: usize, right_len: usize) -> Result<()> {
    if left_len != right_len {
        debug!(op, left_len, right_len, "Broadcast shape mismatch");
        return Err(Error::shape_mismatch(op, left_len, right_len));
    }
    Ok(())
}

pub fn zip_with<L, R, O, F>(op: &str, left: &[L], right: &[R], f: F) -> Result<Vec<O>>
where
    L: Copy,
    R: Copy,
    F: Fn(L, R) -> O,
{
    validate_lengths(op, left.len(), right.len())?;
    Ok(left.iter().zip(right).map(|(&l, &r)| f(l, r)).collect())
}

pub fn map_left<L, R, O, F>(left: &[L], right: R, f: F) -> Vec<O>
where
    L: Copy,
    R: Copy,
    F: Fn(L, R) -> O,
{
    left.iter().map(|&l| f(l, right)).collect()
}

pub fn map_right<L, R, O, F>(left: L, right: &[R], f: F) -> Vec<O>
where
    L: Copy,
    R: Copy,
    F: Fn(L, R) -> O,
{
    right.iter().map(|&r| f(left, r)).collect()
}

macro_rules! broadcast_arithmetic {
    ($($op:ident => $array:ident, $array_scalar:ident, $scalar_array:ident;)*) => {
        $(
            pub fn $array<L, R>(left: &[L], right: &[R]) -> Result<Vec<L::Output>>
            where
                L: Promote<R>,
                R: Numeric,
            {
                zip_with(stringify!($op), left, right, arithmetic::$op)
            }

            pub fn $array_scalar<L, R>(left: &[L], right: R) -> Vec<L::Output>
            where
                L: Promote<R>,
                R: Numeric,
            {
                map_left(left, right, arithmetic::$op)
            }

            pub fn $scalar_array<L, R>(left: L, right: &[R]) -> Vec<L::Output>
            where
                L: Promote<R>,
                R: Numeric,
            {
                map_right(left, right, arithmetic::$op)
            }
        )*
    };
}

macro_rules! broadcast_bitwise {
    ($($op:ident => $array:ident, $array_scalar:ident, $scalar_array:ident;)*) => {
        $(
            pub fn $array<L, R>(left: &[L], right: &[R]) -> Result<Vec<L::Output>>
            where
                L: Promote<R> + Integral,
                R: Integral,
                L::Output: IntegralCarrier,
            {
                zip_with(stringify!($op), left, right, arithmetic::$op)
            }

            pub fn $array_scalar<L, R>(left: &[L], right: R) -> Vec<L::Output>
            where
                L: Promote<R> + Integral,
                R: Integral,
                L::Output: IntegralCarrier,
            {
                map_left(left, right, arithmetic::$op)
            }

            pub fn $scalar_array<L, R>(left: L, right: &[R]) -> Vec<L::Output>
            where
                L: Promote<R> + Integral,
                R: Integral,
                L::Output: IntegralCarrier,
            {
                map_right(left, right, arithmetic::$op)
            }
        )*
    };
}

macro_rules! broadcast_comparison {
    ($($op:ident => $array:ident, $array_scalar:ident, $scalar_array:ident;)*) => {
        $(
            pub fn $array<L: Numeric, R: Numeric>(left: &[L], right: &[R]) -> Result<Vec<bool>> {
                zip_with(stringify!($op), left, right, cmp::$op)
            }

            pub fn $array_scalar<L: Numeric, R: Numeric>(left: &[L], right: R) -> Vec<bool> {
                map_left(left, right, cmp::$op)
            }

            pub fn $scalar_array<L: Numeric, R: Numeric>(left: L, right: &[R]) -> Vec<bool> {
                map_right(left, right, cmp::$op)
            }
        )*
    };
}

broadcast_arithmetic! {
    plus => plus_array, plus_array_scalar, plus_scalar_array;
    minus => minus_array, minus_array_scalar, minus_scalar_array;
    multiply => multiply_array, multiply_array_scalar, multiply_scalar_array;
    remainder => remainder_array, remainder_array_scalar, remainder_scalar_array;
}

broadcast_bitwise! {
    bit_or => bit_or_array, bit_or_array_scalar, bit_or_scalar_array;
    bit_and => bit_and_array, bit_and_array_scalar, bit_and_scalar_array;
    bit_xor => bit_xor_array, bit_xor_array_scalar, bit_xor_scalar_array;
}

broadcast_comparison! {
    equals => eq_array, eq_array_scalar, eq_scalar_array;
    less => less_array, less_array_scalar, less_scalar_array;
    greater => greater_array, greater_array_scalar, greater_scalar_array;
    less_equals => less_equals_array, less_equals_array_scalar, less_equals_scalar_array;
    greater_equals => greater_equals_array, greater_equals_array_scalar, greater_equals_scalar_array;
}

pub fn divide_array<L, R>(left: &[L], right: &[R]) -> Result<Vec<L::Quotient>>
where
    L: Promote<R>,
    R: Numeric,
{
    zip_with("divide", left, right, arithmetic::divide)
}

pub fn divide_array_scalar<L, R>(left: &[L], right: R) -> Vec<L::Quotient>
where
    L: Promote<R>,
    R: Numeric,
{
    map_left(left, right, arithmetic::divide)
}

pub fn divide_scalar_array<L, R>(left: L, right: &[R]) -> Vec<L::Quotient>
where
    L: Promote<R>,
    R: Numeric,
{
    map_right(left, right, arithmetic::divide)
}

/// Three-way comparison per element, see [`qlnum_scalar::compare::compare_to`].
pub fn compare_to_array<L: Numeric, R: Numeric>(
    left: &[L],
    right: &[R],
) -> Result<Vec<std::cmp::Ordering>> {
    zip_with("compare_to", left, right, cmp::compare_to)
}
