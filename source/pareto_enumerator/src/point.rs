// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::Error;

/// One location in objective space: an ordered tuple of signed integers.
pub type Point = Vec<i64>;

/// True iff `a` is componentwise less than or equal to `b`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the points have different lengths.
pub fn leq(a: &[i64], b: &[i64]) -> Result<bool, Error> {
    if a.len() == b.len() {
        Ok(le(a, b))
    } else {
        Err(Error::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        })
    }
}

/// True iff `a` is componentwise less than or equal to `b` and differs
/// from `b` in at least one coordinate.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the points have different lengths.
pub fn strict_lt(a: &[i64], b: &[i64]) -> Result<bool, Error> {
    if a.len() == b.len() {
        Ok(lt(a, b))
    } else {
        Err(Error::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        })
    }
}

/// Componentwise `a ≤ b` for equal-length points.
pub(crate) fn le(a: &[i64], b: &[i64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(x, y)| x <= y)
}

/// Strict order `a < b` for equal-length points: `a ≤ b` and `a ≠ b`.
pub(crate) fn lt(a: &[i64], b: &[i64]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut strict = false;
    for (x, y) in a.iter().zip(b) {
        if x > y {
            return false;
        }
        strict |= x < y;
    }
    strict
}
