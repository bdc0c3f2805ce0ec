//! Sliding Puzzle Solver
//!
//! Solves 8-puzzle boards with A* under the Manhattan-distance and
//! misplaced-tiles heuristics, and compares how many nodes each heuristic
//! expands across random solvable instances.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use slider::benchmark::{compare_heuristics, format_comparison, generate_instances};
use slider::board::{parse_board, read_board, Board, MAX_DIM};
use slider::error::Result;
use slider::heuristic::{Heuristic, HeuristicKind};
use slider::render::{format_board, format_path, format_summary};
use slider::solvability::is_solvable;
use slider::solver::{search, SearchOptions, StalePolicy};
use slider::solve_puzzle;

/// Solves sliding-tile puzzles with A* and compares heuristics.
#[derive(Parser)]
#[command(name = "slider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board given with --board or read from standard input.
    Solve(SolveArgs),
    /// Compare both heuristics on random solvable instances.
    Compare(CompareArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Tiles in reading order, 0 for the blank, e.g. "1 2 3 5 6 0 7 8 4".
    #[arg(long)]
    board: Option<String>,
    /// Side length when reading rows from standard input.
    #[arg(long, default_value_t = 3, value_parser = dim_parser())]
    dim: usize,
    /// Heuristic to use; both are run when omitted.
    #[arg(long, value_enum)]
    heuristic: Option<HeuristicKind>,
    /// Print only the statistics, not every step.
    #[arg(long)]
    quiet: bool,
    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct CompareArgs {
    /// Number of random instances.
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// Seed for reproducible instances.
    #[arg(long)]
    seed: Option<u64>,
    /// Side length of the generated boards.
    #[arg(long, default_value_t = 3, value_parser = dim_parser())]
    dim: usize,
    #[command(flatten)]
    search: SearchArgs,
}

/// Accepts side lengths whose tiles all fit in a `u8`.
fn dim_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_DIM as u64)
}

#[derive(Args)]
struct SearchArgs {
    /// Give up after this many node expansions.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Expand stale frontier duplicates again instead of skipping them.
    #[arg(long)]
    reexpand: bool,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            max_expansions: self.max_expansions,
            stale: if self.reexpand {
                StalePolicy::Reexpand
            } else {
                StalePolicy::Skip
            },
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Command::Solve(args)) => run_solve(&args),
        Some(Command::Compare(args)) => run_compare(&args),
        None => demo_report().map(|report| print!("{}", report)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the start board and solves it with the requested heuristics.
fn run_solve(args: &SolveArgs) -> Result<()> {
    let start = match &args.board {
        Some(text) => parse_board(text)?,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!(
                    "Enter {} rows of {} numbers, 0 for the blank:",
                    args.dim, args.dim
                );
            }
            read_board(stdin.lock(), args.dim)?
        }
    };
    let goal = Board::goal(start.dim())?;

    println!("Initial State:\n{}", format_board(&start));
    if !is_solvable(&start) {
        println!("Puzzle is not solvable.");
        return Ok(());
    }

    let kinds = match args.heuristic {
        Some(kind) => vec![kind],
        None => HeuristicKind::ALL.to_vec(),
    };
    let options = args.search.options();

    for kind in kinds {
        info!(event = "solve", heuristic = kind.name());
        let result = solve_puzzle(&start, &goal, &kind, &options)?;
        if !args.quiet {
            println!("{}", format_path(&result));
        }
        println!("{}", format_summary(kind.name(), &result));
    }

    Ok(())
}

/// Generates random instances and prints the EBF table.
fn run_compare(args: &CompareArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let goal = Board::goal(args.dim)?;

    let instances = generate_instances(&mut rng, &goal, args.count)?;
    let rows = compare_heuristics(&instances, &goal, &args.search.options())?;
    print!("{}", format_comparison(&rows));

    Ok(())
}

/// Solves a fixed 22-move instance with both heuristics.
fn demo_report() -> Result<String> {
    let start = Board::from_rows(&[vec![5, 2, 8], vec![4, 1, 7], vec![0, 3, 6]])?;
    let goal = Board::goal(3)?;

    let mut output = format!(
        "Initial State:\n{}\nGoal State:\n{}\n",
        format_board(&start),
        format_board(&goal)
    );
    for kind in HeuristicKind::ALL {
        let result = search(&start, &goal, &kind);
        output.push_str(&format_summary(kind.name(), &result));
    }
    Ok(output)
}
