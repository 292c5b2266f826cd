// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Complete enumeration of the Pareto front of a monotone feasibility
//! oracle over a bounded integer domain.
//!
//! The caller supplies a predicate that classifies integer points in a
//! product of closed intervals as feasible or infeasible. The predicate
//! must be monotone: growing a feasible point componentwise keeps it
//! feasible. [`enumerate`] returns the set of minimal feasible points.
//!
//! The enumeration never asks the oracle about a point whose answer
//! already follows from earlier answers under monotonicity, and it never
//! asks about the same point twice.

mod antichain;
pub use antichain::{InfeasibleSet, filter_out_dominated};
mod error;
pub use error::Error;
mod point;
pub use point::{Point, leq, strict_lt};
mod search;
pub use search::{FrontEnumeration, Oracle, enumerate};
