//! Command-line front end for the deduce solver.
//!
//! # Usage
//!
//! Solve a single Sudoku grid (`.`, `_` or `0` for blanks):
//!
//! ```sh
//! cargo run -- sudoku "5.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//! ```
//!
//! Solve every grid of a file, one per line, in parallel:
//!
//! ```sh
//! cargo run -- file puzzles.txt --diagonal
//! ```
//!
//! Color the map of Australia, optionally fixing some regions:
//!
//! ```sh
//! cargo run -- australia --color SA=B --color WA=R
//! ```
//!
//! Set `RUST_LOG=debug` to follow the search.
//!
//! # Exit status
//!
//! `0` when every puzzle was solved, `1` when a puzzle has no solution or a
//! search limit was hit, `2` on invalid input.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use deduce_puzzles::{
    LoadError, MapColoring, PuzzleError, Render, Sudoku, SudokuOptions, load_puzzles_from_path,
};
use deduce_solver::{SearchLimits, SolveError, SolveStats, Solver};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Give up after visiting this many search nodes.
    #[arg(long, global = true, value_name = "COUNT")]
    max_nodes: Option<usize>,

    /// Give up when the search has to branch deeper than this.
    #[arg(long, global = true, value_name = "DEPTH")]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a single Sudoku grid.
    Sudoku {
        /// The 81 cells, row by row.
        grid: String,
        #[command(flatten)]
        options: SudokuArgs,
    },
    /// Solve every Sudoku grid listed in a file.
    File {
        /// File with one grid per line; `#` starts a comment line.
        path: PathBuf,
        #[command(flatten)]
        options: SudokuArgs,
    },
    /// Color the map of Australia with red (R), green (G) and blue (B).
    Australia {
        /// Fix the candidate colors of a region, e.g. `SA=B` or `WA=RG`.
        /// Repeatable.
        #[arg(long = "color", value_name = "REGION=SYMBOLS", value_parser = parse_assignment)]
        colors: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
struct SudokuArgs {
    /// Also require both main diagonals to hold distinct digits.
    #[arg(long)]
    diagonal: bool,

    /// Run only the built-in rules.
    #[arg(long)]
    no_naked_twins: bool,
}

impl SudokuArgs {
    fn options(self) -> SudokuOptions {
        SudokuOptions {
            diagonal: self.diagonal,
        }
    }

    fn solver(self, limits: SearchLimits) -> Solver {
        let mut solver = Solver::with_limits(limits);
        if !self.no_naked_twins {
            for rule in Sudoku::rules() {
                solver.register_rule(rule);
            }
        }
        solver
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Puzzle(#[from] PuzzleError),
    #[display("{_0}")]
    Load(#[from] LoadError),
    #[display("{_0}")]
    Solve(#[from] SolveError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Solve(_) => 1,
            Self::Puzzle(_) | Self::Load(_) => 2,
        }
    }
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((region, symbols)) if !region.is_empty() && !symbols.is_empty() => {
            Ok((region.to_owned(), symbols.to_owned()))
        }
        _ => Err(format!("expected REGION=SYMBOLS, got `{s}`")),
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let mut limits = SearchLimits::new();
    if let Some(nodes) = cli.max_nodes {
        limits = limits.max_nodes(nodes);
    }
    if let Some(depth) = cli.max_depth {
        limits = limits.max_depth(depth);
    }

    let result = match cli.command {
        Command::Sudoku { grid, options } => solve_sudoku(&grid, options, limits),
        Command::File { path, options } => solve_file(&path, options, limits),
        Command::Australia { colors } => solve_australia(&colors, limits),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn format_stats(stats: &SolveStats) -> String {
    format!(
        "propagations: {}, passes: {}, nodes: {}, branches: {}, max depth: {}",
        stats.propagations(),
        stats.passes(),
        stats.nodes(),
        stats.branches(),
        stats.max_depth()
    )
}

fn solve_sudoku(grid: &str, options: SudokuArgs, limits: SearchLimits) -> Result<(), CliError> {
    let sudoku = Sudoku::parse(grid, options.options())?;
    println!("{}", sudoku.render_original());

    let mut solver = options.solver(limits);
    let solution = solver.solve(sudoku.problem());
    if let Ok(solution) = &solution {
        println!("{}", sudoku.render_state(solution.state()));
    }
    println!("{}", format_stats(solver.stats()));
    solution?;
    Ok(())
}

fn solve_one(grid: &str, options: SudokuArgs, limits: SearchLimits) -> Result<String, CliError> {
    let sudoku = Sudoku::parse(grid, options.options())?;
    let mut solver = options.solver(limits);
    let solution = solver.solve(sudoku.problem())?;
    Ok(format!(
        "{}{}\n",
        sudoku.render_state(solution.state()),
        format_stats(solution.stats())
    ))
}

fn solve_file(path: &Path, options: SudokuArgs, limits: SearchLimits) -> Result<(), CliError> {
    let grids = load_puzzles_from_path(path)?;
    log::info!("solving {} puzzles from {}", grids.len(), path.display());

    let reports = grids
        .par_iter()
        .map(|grid| solve_one(grid, options, limits))
        .collect::<Vec<_>>();

    let mut solved = 0;
    let mut worst: Option<CliError> = None;
    for (i, report) in reports.into_iter().enumerate() {
        println!("puzzle {}", i + 1);
        match report {
            Ok(text) => {
                solved += 1;
                println!("{text}");
            }
            Err(err) => {
                println!("error: {err}\n");
                if worst.as_ref().is_none_or(|w| err.exit_code() > w.exit_code()) {
                    worst = Some(err);
                }
            }
        }
    }
    println!("solved {solved} of {}", grids.len());
    worst.map_or(Ok(()), Err)
}

fn solve_australia(colors: &[(String, String)], limits: SearchLimits) -> Result<(), CliError> {
    let initial = colors
        .iter()
        .map(|(region, symbols)| (region.as_str(), symbols.as_str()))
        .collect::<Vec<_>>();
    let map = MapColoring::australia(&initial)?;
    let original = map.render_original();
    if !original.is_empty() {
        println!("{original}");
    }

    let mut solver = Solver::with_limits(limits);
    let solution = solver.solve(map.problem());
    if let Ok(solution) = &solution {
        println!("{}", map.render_state(solution.state()));
    }
    println!("{}", format_stats(solver.stats()));
    solution?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use deduce_solver::Limit;

    use super::*;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sudoku_command() {
        let args = ["deduce", "sudoku", "..3", "--diagonal", "--max-nodes", "50"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.max_nodes, Some(50));
        assert_eq!(cli.max_depth, None);
        let Command::Sudoku { grid, options } = cli.command else {
            panic!("expected the sudoku command");
        };
        assert_eq!(grid, "..3");
        assert!(options.diagonal);
        assert!(!options.no_naked_twins);
    }

    #[test]
    fn test_parse_australia_colors() {
        let cli =
            Cli::try_parse_from(["deduce", "australia", "--color", "SA=B", "--color", "WA=RG"])
                .unwrap();
        let Command::Australia { colors } = cli.command else {
            panic!("expected the australia command");
        };
        assert_eq!(
            colors,
            [
                ("SA".to_owned(), "B".to_owned()),
                ("WA".to_owned(), "RG".to_owned())
            ]
        );
        assert!(Cli::try_parse_from(["deduce", "australia", "--color", "SA"]).is_err());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("NSW=G"),
            Ok(("NSW".to_owned(), "G".to_owned()))
        );
        assert!(parse_assignment("=G").is_err());
        assert!(parse_assignment("NSW=").is_err());
        assert!(parse_assignment("NSW").is_err());
    }

    #[test]
    fn test_naked_twins_flag() {
        let with = SudokuArgs {
            diagonal: false,
            no_naked_twins: false,
        };
        let without = SudokuArgs {
            no_naked_twins: true,
            ..with
        };
        assert_eq!(with.solver(SearchLimits::new()).propagator().rules().len(), 3);
        assert_eq!(without.solver(SearchLimits::new()).propagator().rules().len(), 2);
    }

    #[test]
    fn test_exit_codes() {
        let options = SudokuArgs {
            diagonal: false,
            no_naked_twins: false,
        };
        let grid = format!("11{}", ".".repeat(79));
        let unsolvable = solve_one(&grid, options, SearchLimits::new()).unwrap_err();
        assert_eq!(unsolvable.exit_code(), 1);

        let limited = CliError::from(SolveError::LimitExceeded {
            limit: Limit::Nodes(1),
        });
        assert_eq!(limited.exit_code(), 1);

        let invalid = solve_australia(&[("TAS".to_owned(), "R".to_owned())], SearchLimits::new())
            .unwrap_err();
        assert_eq!(invalid.exit_code(), 2);
    }
}
