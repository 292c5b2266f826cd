// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::point::{Point, le, lt};

/// Reduces `points` to the members that no other member strictly dominates,
/// preserving their order.
///
/// A point is dropped iff some other member is componentwise `>=` and
/// differs in at least one coordinate. Equal points do not strictly
/// dominate each other, so duplicates survive a pass.
///
/// Quadratic in the number of points; the collections this is applied to
/// stay small relative to the objective space.
#[must_use]
pub fn filter_out_dominated(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .filter(|p| !points.iter().any(|q| lt(p, q)))
        .cloned()
        .collect()
}

/// Maximal points known to be infeasible, kept as an antichain under the
/// componentwise order.
///
/// By monotonicity every point below a stored witness is infeasible as
/// well, so storing only the maximal witnesses loses no deducible answer
/// while keeping [`contains`](InfeasibleSet::contains) cheap.
#[derive(Debug, Default)]
pub struct InfeasibleSet {
    witnesses: Vec<Point>,
}

impl InfeasibleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff infeasibility of `point` follows from a stored witness,
    /// i.e. some witness is componentwise `>= point`. A `true` answer means
    /// the oracle must not be asked about `point`.
    #[must_use]
    pub fn contains(&self, point: &[i64]) -> bool {
        self.witnesses.iter().any(|n| le(point, n))
    }

    /// Records `point` as infeasible, dropping every stored witness it
    /// subsumes. Stored witnesses stay pairwise incomparable.
    pub fn add(&mut self, point: Point) {
        self.witnesses.retain(|n| !le(n, &point));
        self.witnesses.push(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.witnesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.witnesses.is_empty()
    }
}
