use deduce_core::{Problem, State};

use crate::rule::{self, BoxedRule};

/// Result of running a [`Propagator`] to its fixed point.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Propagation {
    /// No pass solved another variable; `state` is the fixed point.
    FixedPoint {
        /// The narrowed state.
        state: State,
        /// Number of passes run.
        passes: usize,
    },
    /// Some variable ran out of candidates.
    Infeasible {
        /// Number of passes run, including the one that failed.
        passes: usize,
    },
}

impl Propagation {
    /// Returns the number of passes run.
    #[must_use]
    pub fn passes(&self) -> usize {
        match self {
            Self::FixedPoint { passes, .. } | Self::Infeasible { passes } => *passes,
        }
    }

    /// Returns the fixed-point state, or `None` if propagation failed.
    #[must_use]
    pub fn into_state(self) -> Option<State> {
        match self {
            Self::FixedPoint { state, .. } => Some(state),
            Self::Infeasible { .. } => None,
        }
    }
}

/// Applies an ordered list of rules until a fixed point is reached.
///
/// The list always starts with [`rule::builtin_rules`]; rules added with
/// [`register`](Self::register) run after them in registration order.
///
/// One pass applies every rule once, each seeing the previous rule's output.
/// Passes repeat until a pass leaves the number of solved variables
/// unchanged. As soon as a variable has no candidate left, propagation stops
/// with [`Propagation::Infeasible`].
///
/// # Examples
///
/// ```
/// use deduce_core::Problem;
/// use deduce_solver::Propagator;
///
/// let problem = Problem::builder()
///     .variables(["a", "b", "c"])
///     .alphabet("123")
///     .group(["a", "b", "c"])
///     .initial("a", "1")
///     .initial("b", "2")
///     .build()?;
///
/// let propagation = Propagator::new().propagate(&problem, problem.initial_state().clone());
/// let state = propagation.into_state().unwrap();
/// assert_eq!(problem.value_of(&state, "c"), Some('3'));
/// # Ok::<(), deduce_core::ProblemError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    rules: Vec<BoxedRule>,
}

impl Default for Propagator {
    fn default() -> Self {
        Self::new()
    }
}

impl Propagator {
    /// Creates a propagator with only the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: rule::builtin_rules(),
        }
    }

    /// Creates a propagator with the built-in rules followed by `extra`.
    #[must_use]
    pub fn with_rules(extra: Vec<BoxedRule>) -> Self {
        let mut propagator = Self::new();
        for rule in extra {
            propagator.register(rule);
        }
        propagator
    }

    /// Appends a rule after every rule registered so far.
    pub fn register(&mut self, rule: BoxedRule) {
        log::debug!("registering rule `{}`", rule.name());
        self.rules.push(rule);
    }

    /// Returns the rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Runs passes over `state` until a fixed point or a contradiction.
    #[must_use]
    pub fn propagate(&self, problem: &Problem, mut state: State) -> Propagation {
        let mut passes = 0;
        loop {
            passes += 1;
            let solved_before = state.solved_count();
            for rule in &self.rules {
                rule.apply(problem, &mut state);
                if state.has_contradiction() {
                    log::trace!("pass {passes}: `{}` emptied a candidate set", rule.name());
                    return Propagation::Infeasible { passes };
                }
            }
            let solved_after = state.solved_count();
            log::trace!("pass {passes}: {solved_before} -> {solved_after} solved");
            if solved_after == solved_before {
                return Propagation::FixedPoint { state, passes };
            }
        }
    }
}
