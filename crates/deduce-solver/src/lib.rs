//! Constraint propagation and backtracking search over `deduce-core`
//! problems.
//!
//! # Overview
//!
//! - [`rule`]: the [`Rule`] trait, the built-in elimination and only-choice
//!   rules, and the optional naked-twins rule.
//! - [`Propagator`]: runs an ordered rule list to a fixed point.
//! - [`Solver`]: depth-first search that propagates at every node and
//!   branches on the most constrained variable.
//!
//! # Examples
//!
//! ```
//! use deduce_core::Problem;
//! use deduce_solver::{Solver, rule::NakedTwins};
//!
//! let problem = Problem::builder()
//!     .variables(["a", "b", "c", "d"])
//!     .alphabet("1234")
//!     .group(["a", "b", "c", "d"])
//!     .initial("a", "4")
//!     .build()?;
//!
//! let mut solver = Solver::new();
//! solver.register_rule(Box::new(NakedTwins::new()));
//! let solution = solver.solve(&problem)?;
//! assert!(problem.is_solution(solution.state()));
//! assert_eq!(solution.value(&problem, "a"), Some('4'));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::{Limit, SolveError},
    propagator::{Propagation, Propagator},
    rule::{BoxedRule, Rule},
    solver::{SearchLimits, Solution, SolveStats, Solver},
};

mod error;
mod propagator;
pub mod rule;
mod solver;
#[cfg(test)]
mod testing;
