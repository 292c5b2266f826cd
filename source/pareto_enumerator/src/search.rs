// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use log::{debug, trace};

use crate::{
    Error,
    antichain::{InfeasibleSet, filter_out_dominated},
    point::{Point, le},
};

/// A feasibility oracle over integer points.
///
/// Implementations classify a point as feasible (`true`) or infeasible
/// (`false`) and must be monotone: if a point is feasible, every point
/// componentwise greater or equal is feasible as well. They must also be
/// referentially consistent for the duration of one enumeration: asking
/// about the same point twice would have to yield the same answer (the
/// enumeration never does). Violating either contract makes the
/// enumeration return a wrong front; it is not detected.
pub trait Oracle {
    /// Classifies `point`. Errors abort the enumeration and are passed on
    /// to the caller unchanged.
    fn is_feasible(&mut self, point: &[i64]) -> Result<bool, String>;
}

/// Infallible closures are oracles.
impl<F: FnMut(&[i64]) -> bool> Oracle for F {
    fn is_feasible(&mut self, point: &[i64]) -> Result<bool, String> {
        Ok(self(point))
    }
}

/// Enumerates the minimal feasible points of `oracle` over the domain
/// given by `bounds`, the product of the closed intervals `[lo, hi]`.
///
/// The returned front is in discovery order, which is deterministic for a
/// deterministic oracle.
///
/// # Errors
///
/// Returns [`Error::InvalidBounds`] or [`Error::BoundsTooWide`] for
/// malformed bounds and [`Error::OracleFailure`] if the oracle reports an
/// error; no partial front is returned.
pub fn enumerate<O: Oracle>(oracle: O, bounds: &[(i64, i64)]) -> Result<Vec<Point>, Error> {
    FrontEnumeration::new(oracle, bounds)?.enumerate()
}

/// One enumeration of the Pareto front of a monotone feasibility oracle.
///
/// The enumeration maintains three working sets: the discovered front, a
/// cover of upper witnesses such that every undiscovered Pareto point is
/// componentwise below some cover member, and an antichain of maximal
/// known-infeasible points that prunes oracle calls. Candidates are taken
/// from the front of the cover; a feasible candidate is descended to a
/// Pareto point, which then refines the cover.
pub struct FrontEnumeration<O> {
    oracle: O,
    bounds: Vec<(i64, i64)>,
    queries: u64,
}

impl<O: Oracle> FrontEnumeration<O> {
    /// Creates an enumeration over the domain `∏ [lo_i, hi_i]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if some `lo > hi` and
    /// [`Error::BoundsTooWide`] if a range does not fit 64-bit midpoint
    /// arithmetic.
    pub fn new(oracle: O, bounds: impl Into<Vec<(i64, i64)>>) -> Result<Self, Error> {
        let bounds = bounds.into();
        for (dimension, &(lo, hi)) in bounds.iter().enumerate() {
            if lo > hi {
                return Err(Error::InvalidBounds { dimension, lo, hi });
            }
            let too_wide = hi.checked_add(1).is_none()
                || hi.checked_sub(lo).and_then(|w| w.checked_add(1)).is_none();
            if too_wide {
                return Err(Error::BoundsTooWide { dimension });
            }
        }
        Ok(Self {
            oracle,
            bounds,
            queries: 0,
        })
    }

    /// Runs the enumeration to completion and returns the Pareto front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OracleFailure`] if the oracle reports an error.
    pub fn enumerate(mut self) -> Result<Vec<Point>, Error> {
        debug!(
            "enumerating over {} dimensions, bounds {:?}",
            self.bounds.len(),
            self.bounds
        );

        let mut front: Vec<Point> = Vec::new();
        let mut infeasible = InfeasibleSet::new();
        // The cover starts as the top corner, which dominates the whole
        // domain, and is an antichain throughout.
        let mut cover: Vec<Point> = vec![self.bounds.iter().map(|&(_, hi)| hi).collect()];

        while let Some(candidate) = cover.first().cloned() {
            if infeasible.contains(&candidate) {
                cover.remove(0);
                continue;
            }

            if !self.query(&candidate)? {
                infeasible.add(candidate);
                cover.remove(0);
                continue;
            }

            let x = self.descend(candidate, &mut infeasible)?;
            trace!("pareto point {x:?}");

            // Refine the cover. A member dominated by `x` has the region
            // between `x` and itself exhausted; the up-to-d shrunk
            // descendants cover exactly the points below the member that
            // are not above `x` (each one caps a single coordinate at
            // x_i - 1). The candidate itself is dominated by `x`, so this
            // also retires it.
            let mut refined = Vec::with_capacity(cover.len() + self.bounds.len());
            for s in cover.drain(..) {
                if le(&x, &s) {
                    for (i, &(lo, _)) in self.bounds.iter().enumerate() {
                        if x[i] > lo {
                            let mut shrunk = s.clone();
                            shrunk[i] = x[i] - 1;
                            refined.push(shrunk);
                        }
                    }
                } else {
                    refined.push(s);
                }
            }
            cover = filter_out_dominated(&refined);

            front.push(x);
        }

        debug!(
            "front complete: {} points after {} oracle calls",
            front.len(),
            self.queries
        );
        Ok(front)
    }

    /// Pushes each coordinate of the feasible point `x` to its minimum
    /// feasible value, holding the other coordinates fixed, and returns the
    /// result: a minimal feasible point below `x`.
    ///
    /// Coordinates are processed in ascending index order, each localized
    /// by bisection over the half-open interval `[min, max)`. Negative
    /// probe answers are recorded in `infeasible`; probes whose answer is
    /// already deducible skip the oracle.
    fn descend(&mut self, mut x: Point, infeasible: &mut InfeasibleSet) -> Result<Point, Error> {
        for i in 0..self.bounds.len() {
            let mut min = self.bounds[i].0;
            let mut max = x[i] + 1;
            while max - min > 1 {
                // Floored midpoint in the overflow-safe form.
                let mid = min + (max - min - 1) / 2;
                x[i] = mid;
                let feasible = if infeasible.contains(&x) {
                    // Subsumed by a stored witness; nothing new to record.
                    false
                } else if self.query(&x)? {
                    true
                } else {
                    infeasible.add(x.clone());
                    false
                };
                if feasible {
                    max = mid + 1;
                } else {
                    min = mid + 1;
                }
            }
            x[i] = min;
        }
        Ok(x)
    }

    fn query(&mut self, point: &[i64]) -> Result<bool, Error> {
        self.queries += 1;
        self.oracle.is_feasible(point).map_err(Error::OracleFailure)
    }
}
