//! Puzzle front ends for the deduce solver.
//!
//! Each front end turns puzzle-specific input into a
//! [`Problem`](deduce_core::Problem) and implements [`Render`] to print
//! states back in the puzzle's own layout.
//!
//! - [`Sudoku`]: 9×9 grids, optionally with diagonal constraints.
//! - [`MapColoring`]: region maps, with [`MapColoring::australia`] as a
//!   preset.
//! - [`load_puzzles`]: reads puzzle lists, one puzzle per line.

pub use self::{
    error::{LoadError, PuzzleError},
    loader::{load_puzzles, load_puzzles_from_path},
    map_coloring::MapColoring,
    render::Render,
    sudoku::{Sudoku, SudokuOptions, cell_name},
};

mod error;
mod loader;
pub mod map_coloring;
mod render;
pub mod sudoku;
