use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Every numeric representation the scalar core understands.
///
/// Declaration order follows the widening tower, so the derived `Ord` ranks
/// kinds from narrowest to widest. `Char16` sits beside the narrow signed
/// integers: it is unsigned 16-bit for arithmetic but keeps its own sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NumericKind {
    Int8,
    Int16,
    Char16,
    Int32,
    Int64,
    Float32,
    Float64,
    BigInt,
    BigDec,
}

impl NumericKind {
    pub const ALL: [NumericKind; 9] = [
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Char16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
        NumericKind::BigInt,
        NumericKind::BigDec,
    ];

    pub const FIXED_WIDTH: [NumericKind; 7] = [
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Char16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::Float32,
        NumericKind::Float64,
    ];

    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            NumericKind::Int8
                | NumericKind::Int16
                | NumericKind::Char16
                | NumericKind::Int32
                | NumericKind::Int64
                | NumericKind::BigInt
        )
    }

    pub const fn is_floating(self) -> bool {
        matches!(self, NumericKind::Float32 | NumericKind::Float64)
    }

    pub const fn is_arbitrary_precision(self) -> bool {
        matches!(self, NumericKind::BigInt | NumericKind::BigDec)
    }

    pub const fn is_fixed_width(self) -> bool {
        !self.is_arbitrary_precision()
    }

    pub const fn supports_bitwise(self) -> bool {
        self.is_integral()
    }

    /// Integral kinds narrower than `Int32`; arithmetic on them always yields at least `Int32`.
    pub const fn is_narrow_integral(self) -> bool {
        matches!(
            self,
            NumericKind::Int8 | NumericKind::Int16 | NumericKind::Char16
        )
    }

    /// Position of the kind in [`NumericKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::Int8 => "INT8",
            NumericKind::Int16 => "INT16",
            NumericKind::Char16 => "CHAR16",
            NumericKind::Int32 => "INT32",
            NumericKind::Int64 => "INT64",
            NumericKind::Float32 => "FLOAT32",
            NumericKind::Float64 => "FLOAT64",
            NumericKind::BigInt => "BIGINT",
            NumericKind::BigDec => "BIGDEC",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NumericKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_argument_kind("numeric kind name", s))
    }
}
