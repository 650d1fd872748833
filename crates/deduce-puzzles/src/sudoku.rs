//! The 9×9 Sudoku front end.
//!
//! Cells are named `A1`..`I9`: the letter is the row from the top, the digit
//! the column from the left.

use std::fmt::Write as _;

use deduce_core::{Problem, State};
use deduce_solver::{BoxedRule, rule::NakedTwins};

use crate::{PuzzleError, Render};

const ROWS: &str = "ABCDEFGHI";
const COLS: &str = "123456789";
const DIGITS: &str = COLS;
const SIZE: usize = 9;
const CELLS: usize = SIZE * SIZE;

/// Options for [`Sudoku::parse`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SudokuOptions {
    /// Also require both main diagonals to hold distinct digits.
    pub diagonal: bool,
}

/// A parsed Sudoku puzzle.
///
/// # Examples
///
/// ```
/// use deduce_puzzles::{Sudoku, SudokuOptions};
/// use deduce_solver::Solver;
///
/// let grid = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
/// let sudoku = Sudoku::parse(grid, SudokuOptions::default())?;
///
/// let mut solver = Solver::new();
/// for rule in Sudoku::rules() {
///     solver.register_rule(rule);
/// }
/// let solution = solver.solve(sudoku.problem())?;
/// assert_eq!(solution.value(sudoku.problem(), "A1"), Some('4'));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sudoku {
    problem: Problem,
    givens: Vec<Option<char>>,
    options: SudokuOptions,
}

/// Returns the name of the cell at `row` and `col`, both counted from 0.
///
/// # Panics
///
/// Panics if `row` or `col` is 9 or more.
#[must_use]
pub fn cell_name(row: usize, col: usize) -> String {
    assert!(row < SIZE && col < SIZE, "cell out of range");
    format!("{}{}", &ROWS[row..=row], &COLS[col..=col])
}

fn groups(diagonal: bool) -> Vec<Vec<String>> {
    let rows = (0..SIZE).map(|r| (0..SIZE).map(|c| cell_name(r, c)).collect::<Vec<_>>());
    let cols = (0..SIZE).map(|c| (0..SIZE).map(|r| cell_name(r, c)).collect::<Vec<_>>());
    let boxes = (0..SIZE).map(|b| {
        (0..SIZE)
            .map(|i| cell_name(b / 3 * 3 + i / 3, b % 3 * 3 + i % 3))
            .collect::<Vec<_>>()
    });
    let mut groups: Vec<Vec<String>> = rows.chain(cols).chain(boxes).collect();
    if diagonal {
        groups.push((0..SIZE).map(|i| cell_name(i, i)).collect());
        groups.push((0..SIZE).map(|i| cell_name(i, SIZE - 1 - i)).collect());
    }
    groups
}

impl Sudoku {
    /// Parses a grid given row by row, top-left first.
    ///
    /// Digits `1`-`9` are givens and `.`, `_` or `0` mark a blank cell.
    /// Whitespace is ignored, so a grid may be split over several lines.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::InvalidCharacter`] for any other character.
    /// - [`PuzzleError::WrongCellCount`] if the grid does not have 81 cells.
    pub fn parse(grid: &str, options: SudokuOptions) -> Result<Self, PuzzleError> {
        let mut givens = Vec::with_capacity(CELLS);
        for (position, character) in grid.chars().enumerate() {
            match character {
                '1'..='9' => givens.push(Some(character)),
                '.' | '_' | '0' => givens.push(None),
                c if c.is_whitespace() => {}
                _ => {
                    return Err(PuzzleError::InvalidCharacter {
                        character,
                        position,
                    });
                }
            }
        }
        if givens.len() != CELLS {
            return Err(PuzzleError::WrongCellCount {
                count: givens.len(),
            });
        }

        let initial = givens
            .iter()
            .enumerate()
            .filter_map(|(i, given)| {
                given.map(|digit| (cell_name(i / SIZE, i % SIZE), digit.to_string()))
            });
        let problem = Problem::builder()
            .variables((0..CELLS).map(|i| cell_name(i / SIZE, i % SIZE)))
            .alphabet(DIGITS)
            .groups(groups(options.diagonal))
            .initial_values(initial)
            .build()?;
        log::debug!(
            "parsed sudoku with {} givens",
            givens.iter().filter(|g| g.is_some()).count()
        );

        Ok(Self {
            problem,
            givens,
            options,
        })
    }

    /// Returns the extra rules worth running on Sudoku, in order.
    #[must_use]
    pub fn rules() -> Vec<BoxedRule> {
        vec![Box::new(NakedTwins::new())]
    }

    /// Returns the underlying problem.
    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the options the puzzle was parsed with.
    #[must_use]
    pub fn options(&self) -> SudokuOptions {
        self.options
    }

    /// Returns the given digit of the cell at `row` and `col`, if any.
    #[must_use]
    pub fn given(&self, row: usize, col: usize) -> Option<char> {
        self.givens.get(row * SIZE + col).copied().flatten()
    }

    fn render_cells(cells: &[String]) -> String {
        let width = 1 + cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let rule = vec!["-".repeat(width * 3); 3].join("+");
        let mut out = String::new();
        for (r, row) in cells.chunks(SIZE).enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let _ = write!(out, "{cell:^width$}");
                if c == 2 || c == 5 {
                    out.push('|');
                }
            }
            out.push('\n');
            if r == 2 || r == 5 {
                out.push_str(&rule);
                out.push('\n');
            }
        }
        out
    }
}

impl Render for Sudoku {
    fn render_state(&self, state: &State) -> String {
        let cells: Vec<_> = self
            .problem
            .variables()
            .map(|var| self.problem.format_candidates(state, var))
            .collect();
        Self::render_cells(&cells)
    }

    fn render_original(&self) -> String {
        let cells: Vec<_> = self
            .givens
            .iter()
            .map(|given| given.unwrap_or('.').to_string())
            .collect();
        Self::render_cells(&cells)
    }
}

#[cfg(test)]
mod tests {
    use deduce_solver::{SolveError, Solver};
    use proptest::prelude::*;

    use super::*;

    const SPARSE: &str =
        "5.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
    const EASY: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    const EASY_SOLVED: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    fn solver() -> Solver {
        let mut solver = Solver::new();
        for rule in Sudoku::rules() {
            solver.register_rule(rule);
        }
        solver
    }

    fn digits(sudoku: &Sudoku, state: &State) -> String {
        sudoku
            .problem()
            .variables()
            .map(|var| sudoku.problem().format_candidates(state, var))
            .collect()
    }

    #[test]
    fn test_layout() {
        let sudoku = Sudoku::parse(EASY, SudokuOptions::default()).unwrap();
        let problem = sudoku.problem();

        assert_eq!(problem.num_variables(), 81);
        assert_eq!(problem.groups().len(), 27);
        assert_eq!(problem.name(problem.variables().next().unwrap()), "A1");
        let c2 = problem.var("C2").unwrap();
        assert_eq!(problem.peers(c2).len(), 20);
        assert_eq!(problem.groups_of(c2), [2, 10, 18]);
        assert_eq!(sudoku.given(0, 2), Some('3'));
        assert_eq!(sudoku.given(0, 0), None);
    }

    #[test]
    fn test_diagonal_layout() {
        let sudoku = Sudoku::parse(EASY, SudokuOptions { diagonal: true }).unwrap();
        let problem = sudoku.problem();

        assert_eq!(problem.groups().len(), 29);
        assert_eq!(problem.peers(problem.var("E5").unwrap()).len(), 32);
        assert_eq!(problem.peers(problem.var("A2").unwrap()).len(), 20);
        let diagonal: Vec<_> = problem.groups()[28]
            .members()
            .iter()
            .map(|&var| problem.name(var))
            .collect();
        assert_eq!(diagonal, ["A9", "B8", "C7", "D6", "E5", "F4", "G3", "H2", "I1"]);
    }

    #[test]
    fn test_parse_accepts_blank_markers_and_whitespace() {
        let grid = EASY.replacen('.', "0", 3).replacen('.', "_", 3);
        let lines: String = grid
            .as_bytes()
            .chunks(9)
            .map(|row| format!("{}\n", std::str::from_utf8(row).unwrap()))
            .collect();
        let split = Sudoku::parse(&lines, SudokuOptions::default()).unwrap();
        let plain = Sudoku::parse(EASY, SudokuOptions::default()).unwrap();
        assert_eq!(split.render_original(), plain.render_original());
        assert_eq!(split.problem().initial_state(), plain.problem().initial_state());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            Sudoku::parse("12x", SudokuOptions::default()).unwrap_err(),
            PuzzleError::InvalidCharacter {
                character: 'x',
                position: 2
            }
        );
        assert_eq!(
            Sudoku::parse(&EASY[1..], SudokuOptions::default()).unwrap_err(),
            PuzzleError::WrongCellCount { count: 80 }
        );
        assert_eq!(
            Sudoku::parse("", SudokuOptions::default()).unwrap_err(),
            PuzzleError::WrongCellCount { count: 0 }
        );
    }

    #[test]
    fn test_solves_easy_grid_by_propagation() {
        let sudoku = Sudoku::parse(EASY, SudokuOptions::default()).unwrap();
        let mut solver = solver();
        let solution = solver.solve(sudoku.problem()).unwrap();

        assert_eq!(digits(&sudoku, solution.state()), EASY_SOLVED);
        assert_eq!(solution.stats().branches(), 0);
        assert_eq!(solution.stats().nodes(), 1);
    }

    #[test]
    fn test_solves_sparse_grid() {
        let sudoku = Sudoku::parse(SPARSE, SudokuOptions::default()).unwrap();
        let mut solver = solver();
        let solution = solver.solve(sudoku.problem()).unwrap();

        assert!(sudoku.problem().is_solution(solution.state()));
        let solved = digits(&sudoku, solution.state());
        for (given, digit) in SPARSE.chars().zip(solved.chars()) {
            if given != '.' {
                assert_eq!(given, digit);
            }
        }
        assert!(solution.stats().branches() > 0);

        let again = solver.solve(sudoku.problem()).unwrap();
        assert_eq!(again.state(), solution.state());
        assert_eq!(again.stats(), solution.stats());
    }

    #[test]
    fn test_solves_empty_diagonal_grid() {
        let sudoku = Sudoku::parse(&".".repeat(81), SudokuOptions { diagonal: true }).unwrap();
        let solution = solver().solve(sudoku.problem()).unwrap();
        let state = solution.state();

        assert!(sudoku.problem().is_solution(state));
        let main: String = (0..9)
            .map(|i| sudoku.problem().value_of(state, &cell_name(i, i)).unwrap())
            .collect();
        let mut sorted: Vec<_> = main.chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), DIGITS);
    }

    #[test]
    fn test_repeated_given_in_row_is_unsolvable() {
        let mut grid = ".".repeat(81);
        grid.replace_range(0..1, "7");
        grid.replace_range(5..6, "7");
        let sudoku = Sudoku::parse(&grid, SudokuOptions::default()).unwrap();

        assert_eq!(
            solver().solve(sudoku.problem()).unwrap_err(),
            SolveError::Unsolvable
        );
    }

    #[test]
    fn test_render_original() {
        let sudoku = Sudoku::parse(SPARSE, SudokuOptions::default()).unwrap();
        let rendered = sudoku.render_original();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 . . |. . . |. . . ");
        assert_eq!(lines[1], ". . . |. . 6 |2 . . ");
        assert_eq!(lines[3], "------+------+------");
        assert_eq!(lines[10], ". . . |. . . |. . 3 ");
    }

    #[test]
    fn test_render_state_uses_widest_cell() {
        let sudoku = Sudoku::parse(SPARSE, SudokuOptions::default()).unwrap();
        let rendered = sudoku.render_state(sudoku.problem().initial_state());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[3], format!("{0}+{0}+{0}", "-".repeat(30)));
        assert!(lines[0].starts_with("    5     123456789 "));
    }

    proptest! {
        #[test]
        fn test_parse_counts_cells(grid in "[1-9._0 \n]{0,100}") {
            let cells = grid.chars().filter(|c| !c.is_whitespace()).count();
            match Sudoku::parse(&grid, SudokuOptions::default()) {
                Ok(sudoku) => prop_assert_eq!(sudoku.problem().num_variables(), cells),
                Err(err) => prop_assert_eq!(err, PuzzleError::WrongCellCount { count: cells }),
            }
        }
    }
}
