//! Null-sentinel numeric tower.
//!
//! The typed API ([`arithmetic`], [`compare`], [`cast`]) works on Rust
//! primitives and resolves promotion at compile time. [`Scalar`] is the
//! runtime-tagged counterpart, and [`bignum`] covers the arbitrary-precision
//! kinds both of them fall back to.

pub mod arithmetic;
pub mod bignum;
pub mod cast;
pub mod compare;
pub mod null;
pub mod object;
pub mod op;
pub mod promote;
pub mod scalar;
pub mod tower;

pub use bignum::{BigNumber, Comparand};
pub use null::{
    NULL_BYTE, NULL_CHAR, NULL_DOUBLE, NULL_FLOAT, NULL_INT, NULL_LONG, NULL_SHORT, Nullable,
    has_sentinel, is_null,
};
pub use object::NumberObject;
pub use op::{BinaryOp, CompareOp};
pub use promote::{CompareDomain, Promote, arithmetic_kind, comparison_domain, quotient_kind};
pub use scalar::Scalar;
pub use tower::{Carrier, Exact, FloatCarrier, Floating, Integral, IntegralCarrier, Numeric};
