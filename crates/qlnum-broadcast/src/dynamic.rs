//! Broadcasting over runtime-tagged [`Scalar`] slices.
//!
//! Elements need not share a kind; each pair is promoted on its own.

use qlnum_common::{NumericConfig, Result};
use qlnum_scalar::{BinaryOp, CompareOp, Scalar};

use crate::validate_lengths;

pub fn binary(
    op: BinaryOp,
    left: &[Scalar],
    right: &[Scalar],
    config: &NumericConfig,
) -> Result<Vec<Scalar>> {
    validate_lengths(op.name(), left.len(), right.len())?;
    left.iter()
        .zip(right)
        .map(|(l, r)| l.binary(op, r, config))
        .collect()
}

pub fn binary_array_scalar(
    op: BinaryOp,
    left: &[Scalar],
    right: &Scalar,
    config: &NumericConfig,
) -> Result<Vec<Scalar>> {
    left.iter().map(|l| l.binary(op, right, config)).collect()
}

pub fn binary_scalar_array(
    op: BinaryOp,
    left: &Scalar,
    right: &[Scalar],
    config: &NumericConfig,
) -> Result<Vec<Scalar>> {
    right.iter().map(|r| left.binary(op, r, config)).collect()
}

pub fn compare(op: CompareOp, left: &[Scalar], right: &[Scalar]) -> Result<Vec<bool>> {
    validate_lengths(op.name(), left.len(), right.len())?;
    Ok(left.iter().zip(right).map(|(l, r)| l.compare(op, r)).collect())
}

pub fn compare_array_scalar(op: CompareOp, left: &[Scalar], right: &Scalar) -> Vec<bool> {
    left.iter().map(|l| l.compare(op, right)).collect()
}

pub fn compare_scalar_array(op: CompareOp, left: &Scalar, right: &[Scalar]) -> Vec<bool> {
    right.iter().map(|r| left.compare(op, r)).collect()
}
