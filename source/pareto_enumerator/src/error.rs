// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the enumeration. None of them is recovered from
/// internally; every error aborts the enumeration without a partial front.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A coordinate range has its lower bound above its upper bound.
    #[error("invalid bounds in dimension {dimension}: lower bound {lo} exceeds upper bound {hi}")]
    #[diagnostic(code("ParetoEnumerator.InvalidBounds"))]
    InvalidBounds {
        dimension: usize,
        lo: i64,
        hi: i64,
    },

    /// A coordinate range does not fit 64-bit midpoint arithmetic.
    ///
    /// The descent computes `hi + 1` and interval widths in `i64`; ranges
    /// for which these overflow are rejected up front.
    #[error("bounds in dimension {dimension} exceed the supported i64 range")]
    #[diagnostic(code("ParetoEnumerator.BoundsTooWide"))]
    BoundsTooWide { dimension: usize },

    /// Two points of different lengths were compared.
    #[error("shape mismatch: expected {expected} coordinates, got {actual}")]
    #[diagnostic(code("ParetoEnumerator.ShapeMismatch"))]
    ShapeMismatch { expected: usize, actual: usize },

    /// The feasibility oracle reported an error. The message is passed on
    /// unchanged.
    #[error("oracle failure: {0}")]
    #[diagnostic(code("ParetoEnumerator.OracleFailure"))]
    OracleFailure(String),
}
