//! qlnum - the numeric core of a query-language evaluator.
//!
//! Nine numeric kinds (`INT8`, `INT16`, `CHAR16`, `INT32`, `INT64`,
//! `FLOAT32`, `FLOAT64`, `BIGINT`, `BIGDEC`) with one reserved null value per
//! fixed-width kind. Operators promote their operands, propagate nulls without
//! computing, and compare mixed integer/float pairs exactly.
//!
//! # Architecture
//!
//! ```text
//! qlnum-common     NumericKind, NumericConfig, Error
//! qlnum-scalar     sentinels, promotion, arithmetic, comparison, casts, Scalar
//! qlnum-broadcast  element-wise forms of every operator
//! ```
//!
//! # Example
//!
//! ```rust
//! use qlnum::{NULL_INT, NumericConfig, Scalar, BinaryOp, arithmetic, compare};
//! use std::cmp::Ordering;
//!
//! let sum: i32 = arithmetic::plus(40i8, 2u16);
//! assert_eq!(sum, 42);
//! assert_eq!(arithmetic::plus(NULL_INT, 1i32), NULL_INT);
//!
//! assert_eq!(compare::compare_to(i64::MAX, 9_223_372_036_854_775_808.0f64), Ordering::Less);
//!
//! let ten: Scalar = "10.00".parse::<qlnum::BigDecimal>().unwrap().into();
//! let third = ten.binary(BinaryOp::Divide, &Scalar::Int32(3), &NumericConfig::default()).unwrap();
//! assert_eq!(third.to_string(), "3.33333333");
//! ```

pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
pub use qlnum_broadcast as broadcast;
pub use qlnum_common::{
    DEFAULT_SCALE, Error, NumericConfig, NumericKind, ROUNDING_MODE, Result,
};
pub use qlnum_scalar::{
    BigNumber, BinaryOp, Carrier, CompareDomain, CompareOp, Exact, FloatCarrier, Floating,
    Integral, IntegralCarrier, NULL_BYTE, NULL_CHAR, NULL_DOUBLE, NULL_FLOAT, NULL_INT, NULL_LONG,
    NULL_SHORT, NumberObject, Nullable, Numeric, Promote, Scalar, arithmetic, bignum, cast,
    compare, has_sentinel, is_null, object, promote,
};
