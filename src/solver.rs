//! A* search over board configurations.
//!
//! Key design points:
//! - Nodes live in an arena; parent links are arena indices, so the search
//!   tree needs no reference counting
//! - The frontier orders entries by `(priority, heuristic, insertion order)`,
//!   making every run reproducible
//! - FxHashSet of closed boards, keyed by value
//!
//! The engine does no solvability reasoning. Callers gate it with
//! `solvability::is_solvable_towards`, or an unsolvable start will exhaust the
//! whole reachable half of the state space before giving up.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::Board;
use crate::heuristic::Heuristic;
use crate::moves::{neighbors, Move};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was popped from the frontier.
    Solved,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// `SearchOptions::max_expansions` was reached first.
    LimitReached,
}

/// What to do when a popped node's board has already been expanded.
///
/// Such a node is a stale duplicate: it was pushed before a cheaper copy of
/// the same board was expanded. It is counted as expanded either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Discard it without generating successors.
    #[default]
    Skip,
    /// Expand it again. Reproduces the node counts of implementations that
    /// only check the closed set when pushing.
    Reexpand,
}

/// Tuning knobs for a single search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Stop after this many frontier pops.
    pub max_expansions: Option<usize>,
    pub stale: StalePolicy,
}

/// The outcome of a search and its statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Boards from start to goal inclusive; empty unless solved.
    pub path: Vec<Board>,
    /// Number of moves in `path`.
    pub move_count: usize,
    /// Number of nodes popped from the frontier, stale duplicates included.
    pub expanded_count: usize,
    pub outcome: Outcome,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// The blank moves that walk `path`.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    fn unsolved(outcome: Outcome, expanded_count: usize) -> Self {
        Self {
            path: Vec::new(),
            move_count: 0,
            expanded_count,
            outcome,
        }
    }
}

/// A board reached during search, with its bookkeeping.
struct SearchNode {
    board: Board,
    /// Arena index of the node this one was generated from.
    parent: Option<usize>,
    /// Moves from the start.
    path_cost: u32,
    /// Estimated moves to the goal.
    heuristic: u32,
}

impl SearchNode {
    #[inline]
    fn priority(&self) -> u32 {
        self.path_cost + self.heuristic
    }
}

/// Frontier entry: `(priority, heuristic, arena index)`, smallest first.
///
/// Arena indices grow with every push, so the last component breaks remaining
/// ties in insertion order.
type FrontierEntry = Reverse<(u32, u32, usize)>;

/// Searches for a shortest path from `start` to `goal` with default options.
pub fn search<H: Heuristic + ?Sized>(start: &Board, goal: &Board, heuristic: &H) -> SearchResult {
    search_with(start, goal, heuristic, &SearchOptions::default())
}

/// Searches for a shortest path from `start` to `goal`.
///
/// With an admissible heuristic the returned path is optimal. Every pop from
/// the frontier counts towards `expanded_count`, including the pop of the
/// goal itself and of stale duplicates.
pub fn search_with<H: Heuristic + ?Sized>(
    start: &Board,
    goal: &Board,
    heuristic: &H,
    options: &SearchOptions,
) -> SearchResult {
    debug_assert_eq!(
        start.dim(),
        goal.dim(),
        "start and goal must have the same size"
    );
    let started = Instant::now();
    debug!(
        event = "search_start",
        heuristic = heuristic.name(),
        dim = start.dim(),
        max_expansions = ?options.max_expansions,
    );

    let root_estimate = heuristic.estimate(start, goal);
    let mut nodes = vec![SearchNode {
        board: start.clone(),
        parent: None,
        path_cost: 0,
        heuristic: root_estimate,
    }];
    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    frontier.push(Reverse((root_estimate, root_estimate, 0)));
    let mut closed: FxHashSet<Board> = FxHashSet::default();
    let mut expanded = 0usize;

    let result = loop {
        if options.max_expansions.is_some_and(|cap| expanded >= cap) {
            break SearchResult::unsolved(Outcome::LimitReached, expanded);
        }
        let Some(Reverse((_, _, current))) = frontier.pop() else {
            break SearchResult::unsolved(Outcome::Exhausted, expanded);
        };
        expanded += 1;

        if nodes[current].board == *goal {
            let path = reconstruct_path(&nodes, current);
            break SearchResult {
                move_count: path.len() - 1,
                path,
                expanded_count: expanded,
                outcome: Outcome::Solved,
            };
        }

        let newly_closed = closed.insert(nodes[current].board.clone());
        if !newly_closed && options.stale == StalePolicy::Skip {
            continue;
        }

        let path_cost = nodes[current].path_cost + 1;
        for successor in neighbors(&nodes[current].board) {
            if closed.contains(&successor) {
                continue;
            }
            let node = SearchNode {
                heuristic: heuristic.estimate(&successor, goal),
                board: successor,
                parent: Some(current),
                path_cost,
            };
            frontier.push(Reverse((node.priority(), node.heuristic, nodes.len())));
            nodes.push(node);
        }
    };

    debug!(
        event = "search_end",
        heuristic = heuristic.name(),
        outcome = ?result.outcome,
        moves = result.move_count,
        expanded = result.expanded_count,
        generated = nodes.len(),
        closed = closed.len(),
        duration_ms = started.elapsed().as_millis() as u64,
    );

    result
}

/// Walks parent links from `index` back to the root, returning start-to-goal order.
fn reconstruct_path(nodes: &[SearchNode], index: usize) -> Vec<Board> {
    let mut path: Vec<Board> = std::iter::successors(Some(index), |&i| nodes[i].parent)
        .map(|i| nodes[i].board.clone())
        .collect();
    path.reverse();
    path
}
