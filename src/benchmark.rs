//! Heuristic comparison over random solvable instances.
//!
//! Instances are drawn by shuffling the goal's tiles and keeping only
//! solvable, non-goal, previously unseen boards. The caller owns the RNG, so a
//! seeded generator reproduces the same instance set.

use std::fmt::Write;

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{PuzzleError, Result};
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::solvability::is_solvable_towards;
use crate::solver::{search_with, Outcome, SearchOptions};

/// Number of distinct boards that can reach `goal` and are not `goal` itself.
///
/// Saturates at `usize::MAX` for boards too large to count.
pub fn distinct_instances(goal: &Board) -> usize {
    let cells = goal.tiles().len();
    (2..=cells)
        .try_fold(1usize, |acc, n| acc.checked_mul(n))
        .map_or(usize::MAX, |permutations| (permutations / 2).saturating_sub(1))
}

/// Draws `count` pairwise-distinct, solvable, non-goal boards.
pub fn generate_instances<R: Rng + ?Sized>(
    rng: &mut R,
    goal: &Board,
    count: usize,
) -> Result<Vec<Board>> {
    let available = distinct_instances(goal);
    if count > available {
        return Err(PuzzleError::TooManyInstances {
            requested: count,
            available,
        });
    }

    let mut tiles = goal.tiles().to_vec();
    let mut seen: FxHashSet<Board> = FxHashSet::default();
    let mut instances = Vec::with_capacity(count);
    let mut draws = 0usize;

    while instances.len() < count {
        tiles.shuffle(rng);
        draws += 1;
        let candidate = Board::new(tiles.clone())?;
        if candidate != *goal
            && is_solvable_towards(&candidate, goal)
            && seen.insert(candidate.clone())
        {
            instances.push(candidate);
        }
    }

    debug!(event = "instances_generated", count, draws);
    Ok(instances)
}

/// `expanded^(1/depth)`, or 0 for a zero-depth solution.
pub fn effective_branching_factor(expanded: usize, depth: usize) -> f64 {
    if depth == 0 {
        return 0.0;
    }
    (expanded as f64).powf(1.0 / depth as f64)
}

/// Statistics of one heuristic on one instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub move_count: usize,
    pub expanded_count: usize,
    pub ebf: f64,
}

/// Both heuristics measured on the same instance.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub instance: Board,
    pub misplaced: Measurement,
    pub manhattan: Measurement,
}

fn measure(
    start: &Board,
    goal: &Board,
    kind: HeuristicKind,
    options: &SearchOptions,
) -> Result<Measurement> {
    let result = search_with(start, goal, &kind, options);
    match result.outcome {
        Outcome::Solved => Ok(Measurement {
            move_count: result.move_count,
            expanded_count: result.expanded_count,
            ebf: effective_branching_factor(result.expanded_count, result.move_count),
        }),
        Outcome::Exhausted => Err(PuzzleError::NoSolution {
            expanded: result.expanded_count,
        }),
        Outcome::LimitReached => Err(PuzzleError::LimitReached {
            expanded: result.expanded_count,
        }),
    }
}

/// Solves every instance once per heuristic.
///
/// Fails on the first instance that does not solve. Generated instances are
/// always solvable, so in practice this is `LimitReached` when the expansion
/// cap in `options` is too low.
pub fn compare_heuristics(
    instances: &[Board],
    goal: &Board,
    options: &SearchOptions,
) -> Result<Vec<Comparison>> {
    let mut rows = Vec::with_capacity(instances.len());

    for (index, instance) in instances.iter().enumerate() {
        let misplaced = measure(instance, goal, HeuristicKind::Misplaced, options)?;
        let manhattan = measure(instance, goal, HeuristicKind::Manhattan, options)?;
        info!(
            event = "instance_compared",
            instance = index + 1,
            depth = manhattan.move_count,
            misplaced_expanded = misplaced.expanded_count,
            manhattan_expanded = manhattan.expanded_count,
        );
        rows.push(Comparison {
            instance: instance.clone(),
            misplaced,
            manhattan,
        });
    }

    Ok(rows)
}

/// Formats comparison rows as a table with a mean-EBF footer.
pub fn format_comparison(rows: &[Comparison]) -> String {
    let misplaced = HeuristicKind::Misplaced.name();
    let manhattan = HeuristicKind::Manhattan.name();

    let mut output = String::new();
    // writing to a String cannot fail
    let _ = writeln!(
        output,
        "{:>4} {:>5} {:>18} {:>8} {:>18} {:>8}",
        "#", "depth", misplaced, "EBF", manhattan, "EBF"
    );

    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:>4} {:>5} {:>18} {:>8.4} {:>18} {:>8.4}",
            index + 1,
            row.manhattan.move_count,
            row.misplaced.expanded_count,
            row.misplaced.ebf,
            row.manhattan.expanded_count,
            row.manhattan.ebf,
        );
    }

    if !rows.is_empty() {
        let count = rows.len() as f64;
        let mean_misplaced = rows.iter().map(|r| r.misplaced.ebf).sum::<f64>() / count;
        let mean_manhattan = rows.iter().map(|r| r.manhattan.ebf).sum::<f64>() / count;
        let _ = writeln!(
            output,
            "{:>4} {:>5} {:>18} {:>8.4} {:>18} {:>8.4}",
            "mean", "", "", mean_misplaced, "", mean_manhattan
        );
    }

    output
}
