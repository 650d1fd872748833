use deduce_core::{Problem, State};

use super::{BoxedRule, Rule};

const NAME: &str = "elimination";

/// Removes the value of every solved variable from the candidates of its
/// peers.
///
/// Two solved peers holding the same value leave one of them with no
/// candidate, which the propagator reports as infeasible.
///
/// # Examples
///
/// ```
/// use deduce_core::Problem;
/// use deduce_solver::rule::{Elimination, Rule};
///
/// let problem = Problem::builder()
///     .variables(["a", "b"])
///     .alphabet("xy")
///     .group(["a", "b"])
///     .initial("a", "x")
///     .build()?;
///
/// let mut state = problem.initial_state().clone();
/// assert!(Elimination::new().apply(&problem, &mut state));
/// assert_eq!(problem.value_of(&state, "b"), Some('y'));
/// # Ok::<(), deduce_core::ProblemError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Elimination;

impl Elimination {
    /// Creates a new `Elimination` rule.
    #[must_use]
    pub const fn new() -> Self {
        Elimination
    }
}

impl Rule for Elimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, problem: &Problem, state: &mut State) -> bool {
        let mut changed = false;
        for var in problem.variables() {
            if !state.is_decided(var) {
                continue;
            }
            let value = state.candidates(var);
            for &peer in problem.peers(var) {
                changed |= state.remove(peer, value);
            }
        }
        changed
    }
}
