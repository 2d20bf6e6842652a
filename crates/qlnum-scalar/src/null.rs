//! Reserved "no value" markers, one per fixed-width kind.
//!
//! A sentinel is an ordinary bit pattern of its type, so every operation must
//! test for it before touching the value. Arbitrary-precision kinds use
//! `Option::None` instead.

use qlnum_common::NumericKind;

pub const NULL_BYTE: i8 = i8::MIN;
pub const NULL_SHORT: i16 = i16::MIN;
pub const NULL_CHAR: u16 = u16::MAX;
pub const NULL_INT: i32 = i32::MIN;
pub const NULL_LONG: i64 = i64::MIN;
pub const NULL_FLOAT: f32 = -f32::MAX;
pub const NULL_DOUBLE: f64 = -f64::MAX;

pub trait Nullable: Copy + PartialEq {
    const NULL: Self;

    /// Exact equality with the sentinel; NaN is never null.
    #[inline]
    fn is_null(self) -> bool {
        self == Self::NULL
    }
}

macro_rules! impl_nullable {
    ($($t:ty => $null:expr),* $(,)?) => {
        $(
            impl Nullable for $t {
                const NULL: Self = $null;
            }
        )*
    };
}

impl_nullable! {
    i8 => NULL_BYTE,
    i16 => NULL_SHORT,
    u16 => NULL_CHAR,
    i32 => NULL_INT,
    i64 => NULL_LONG,
    f32 => NULL_FLOAT,
    f64 => NULL_DOUBLE,
}

#[inline]
pub fn is_null<T: Nullable>(value: T) -> bool {
    value.is_null()
}

/// Whether a fixed-width kind reserves a sentinel. Arbitrary-precision kinds do not.
pub fn has_sentinel(kind: NumericKind) -> bool {
    kind.is_fixed_width()
}
