//! Core data structures for finite-domain constraint problems.
//!
//! This crate describes *what* is being solved; the solving itself lives in
//! `deduce-solver`.
//!
//! # Overview
//!
//! - [`Alphabet`] and [`SymbolSet`]: the shared domain of single-character
//!   symbols and per-variable candidate sets over it.
//! - [`VarId`] and [`Group`]: variables and the all-different constraint
//!   groups over them.
//! - [`Problem`] and [`ProblemBuilder`]: an immutable, validated description
//!   with derived peer lists.
//! - [`State`]: the candidate set of every variable, the only thing that
//!   changes while solving.
//!
//! # Examples
//!
//! ```
//! use deduce_core::{Problem, SymbolSet};
//!
//! let problem = Problem::builder()
//!     .variables(["a", "b"])
//!     .alphabet("xy")
//!     .group(["a", "b"])
//!     .build()?;
//!
//! let a = problem.var("a").unwrap();
//! let state = problem.assign(problem.initial_state().clone(), a, SymbolSet::from_elem(1))?;
//! assert_eq!(problem.value_of(&state, "a"), Some('y'));
//! # Ok::<(), deduce_core::ProblemError>(())
//! ```

pub use self::{
    error::ProblemError,
    problem::{Problem, ProblemBuilder},
    state::State,
    symbol::{Alphabet, SymbolSet, SymbolSetIter},
    variable::{Group, VarId},
};

mod error;
pub mod problem;
pub mod state;
pub mod symbol;
mod variable;
