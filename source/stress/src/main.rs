// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Randomized self-check for the Pareto front enumeration.
//!
//! Each iteration draws a random antichain in a random bounded integer
//! domain and enumerates the front of the induced monotone oracle behind a
//! proxy that rejects redundant oracle calls. The returned front must
//! equal the minimal elements of the antichain. Exits with code 1 on the
//! first failure, printing the seed so the run can be replayed.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use pareto_enumerator::{Oracle, Point, enumerate, leq, strict_lt};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rustc_hash::FxHashSet;

#[derive(Debug, Parser)]
#[command(arg_required_else_help(false))]
struct Cli {
    /// Seed for the instance generator; nondeterministic if omitted.
    seed: Option<u64>,

    /// Number of random instances to check.
    #[arg(long, default_value_t = 100)]
    iterations: u32,
}

/// Answers `∃a ∈ anchors. a ≤ p` while verifying that the enumeration
/// never issues a redundant query: no repeated point, no point implied
/// feasible by an earlier positive answer, no point implied infeasible by
/// an earlier negative answer.
struct CheckingOracle {
    anchors: Vec<Point>,
    queried: FxHashSet<Point>,
    positives: Vec<Point>,
    negatives: Vec<Point>,
}

impl CheckingOracle {
    fn new(anchors: Vec<Point>) -> Self {
        Self {
            anchors,
            queried: FxHashSet::default(),
            positives: Vec::new(),
            negatives: Vec::new(),
        }
    }
}

impl Oracle for CheckingOracle {
    fn is_feasible(&mut self, point: &[i64]) -> Result<bool, String> {
        if !self.queried.insert(point.to_vec()) {
            return Err(format!("oracle queried twice on {point:?}"));
        }
        if let Some(q) = self
            .positives
            .iter()
            .find(|q| leq(q, point).expect("equal-length points"))
        {
            return Err(format!(
                "query {point:?} was already implied feasible by {q:?}"
            ));
        }
        if let Some(q) = self
            .negatives
            .iter()
            .find(|q| leq(point, q).expect("equal-length points"))
        {
            return Err(format!(
                "query {point:?} was already implied infeasible by {q:?}"
            ));
        }

        let answer = self
            .anchors
            .iter()
            .any(|a| leq(a, point).expect("equal-length points"));
        if answer {
            self.positives.push(point.to_vec());
        } else {
            self.negatives.push(point.to_vec());
        }
        Ok(answer)
    }
}

fn random_instance(rng: &mut StdRng) -> (Vec<(i64, i64)>, Vec<Point>) {
    let d = rng.gen_range(5..=11);
    let bounds: Vec<(i64, i64)> = (0..d)
        .map(|_| {
            let lo = rng.gen_range(-20..=20);
            let width = rng.gen_range(1..=25);
            (lo, lo + width)
        })
        .collect();
    let count = rng.gen_range(1..=15);
    let anchors: Vec<Point> = (0..count)
        .map(|_| {
            bounds
                .iter()
                .map(|&(lo, hi)| rng.gen_range(lo..=hi))
                .collect()
        })
        .collect();
    (bounds, anchors)
}

/// The minimal elements of `points`, deduplicated: the expected front for
/// the oracle induced by `points`.
fn minimal_elements(points: &[Point]) -> Vec<Point> {
    let mut minimal: Vec<Point> = Vec::new();
    for p in points {
        let dominated = points
            .iter()
            .any(|q| strict_lt(q, p).expect("equal-length points"));
        if !dominated && !minimal.contains(p) {
            minimal.push(p.clone());
        }
    }
    minimal
}

fn check_instance(rng: &mut StdRng) -> Result<(), String> {
    let (bounds, anchors) = random_instance(rng);
    debug!("instance: {} dimensions, {} anchors", bounds.len(), anchors.len());

    let oracle = CheckingOracle::new(anchors.clone());
    let mut front = enumerate(oracle, &bounds).map_err(|error| error.to_string())?;
    front.sort_unstable();

    let mut expected = minimal_elements(&anchors);
    expected.sort_unstable();

    if front == expected {
        Ok(())
    } else {
        Err(format!("front {front:?} does not match expected {expected:?}"))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("running {} iterations with seed {seed}", cli.iterations);
    let mut rng = StdRng::seed_from_u64(seed);

    for iteration in 0..cli.iterations {
        if let Err(message) = check_instance(&mut rng) {
            eprintln!("iteration {iteration} failed (seed {seed}): {message}");
            return ExitCode::FAILURE;
        }
    }

    println!("{} iterations passed (seed {seed})", cli.iterations);
    ExitCode::SUCCESS
}
