use deduce_core::{Problem, State, SymbolSet, VarId};

use crate::{
    Limit, Propagator, SolveError,
    rule::{BoxedRule, FnRule},
};

/// Optional bounds on the search.
///
/// Both limits are unset by default, which lets the search run until it
/// finds a solution or exhausts every branch.
///
/// # Examples
///
/// ```
/// use deduce_solver::SearchLimits;
///
/// let limits = SearchLimits::new().max_nodes(10_000).max_depth(40);
/// assert_eq!(limits.nodes(), Some(10_000));
/// assert_eq!(limits.depth(), Some(40));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    max_nodes: Option<usize>,
    max_depth: Option<usize>,
}

impl SearchLimits {
    /// Creates limits with nothing bounded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_nodes: None,
            max_depth: None,
        }
    }

    /// Bounds the number of search nodes visited.
    #[must_use]
    pub const fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Bounds the number of nested branch decisions.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Returns the node bound, if any.
    #[must_use]
    pub const fn nodes(self) -> Option<usize> {
        self.max_nodes
    }

    /// Returns the depth bound, if any.
    #[must_use]
    pub const fn depth(self) -> Option<usize> {
        self.max_depth
    }
}

/// Counters collected during one [`Solver::solve`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    propagations: usize,
    passes: usize,
    nodes: usize,
    branches: usize,
    max_depth: usize,
}

impl SolveStats {
    /// Returns how many times the propagator was run.
    #[must_use]
    pub fn propagations(&self) -> usize {
        self.propagations
    }

    /// Returns the number of propagation passes over all runs.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the number of search nodes visited, the root included.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns how many times the search had to pick a variable and branch.
    #[must_use]
    pub fn branches(&self) -> usize {
        self.branches
    }

    /// Returns the deepest branch depth reached. The root is at depth 0.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// A fully assigned state together with the stats of the search that found
/// it.
#[derive(Debug, Clone)]
pub struct Solution {
    state: State,
    stats: SolveStats,
}

impl Solution {
    /// Returns the solved state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Consumes the solution, returning the solved state.
    #[must_use]
    pub fn into_state(self) -> State {
        self.state
    }

    /// Returns the candidate set of `var`, which holds a single symbol.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of range.
    #[must_use]
    pub fn candidates(&self, var: VarId) -> SymbolSet {
        self.state.candidates(var)
    }

    /// Returns the symbol assigned to the variable called `name`.
    #[must_use]
    pub fn value(&self, problem: &Problem, name: &str) -> Option<char> {
        problem.value_of(&self.state, name)
    }

    /// Returns the stats of the search.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

/// Depth-first search over propagated states.
///
/// Every search node runs the [`Propagator`] first. A node whose state
/// propagates to a contradiction is dead; a node where every variable is
/// solved is a solution. Otherwise the solver branches on the unsolved
/// variable with the fewest candidates (the lowest [`VarId`] among equals),
/// trying its symbols in alphabet order on a clone of the state.
///
/// # Examples
///
/// ```
/// use deduce_core::Problem;
/// use deduce_solver::Solver;
///
/// let problem = Problem::builder()
///     .variables(["WA", "NT", "SA"])
///     .alphabet("RGB")
///     .group(["WA", "NT", "SA"])
///     .build()?;
///
/// let mut solver = Solver::new();
/// let solution = solver.solve(&problem)?;
/// assert_eq!(solution.value(&problem, "WA"), Some('R'));
/// assert_eq!(solution.value(&problem, "NT"), Some('G'));
/// assert_eq!(solution.value(&problem, "SA"), Some('B'));
/// assert_eq!(solver.stats().branches(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    propagator: Propagator,
    limits: SearchLimits,
    stats: SolveStats,
}

impl Solver {
    /// Creates an unbounded solver using the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver bounded by `limits`.
    #[must_use]
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Appends a rule to the propagator.
    pub fn register_rule(&mut self, rule: BoxedRule) -> &mut Self {
        self.propagator.register(rule);
        self
    }

    /// Appends a closure to the propagator as a rule called `name`.
    pub fn register_fn<F>(&mut self, name: &'static str, f: F) -> &mut Self
    where
        F: Fn(&Problem, &mut State) -> bool + Send + Sync + 'static,
    {
        self.register_rule(Box::new(FnRule::new(name, f)))
    }

    /// Returns the propagator used at every node.
    #[must_use]
    pub fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    /// Returns the configured limits.
    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Returns the stats of the last [`solve`](Self::solve) call, whether it
    /// succeeded or not.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Searches for an assignment satisfying every group of `problem`,
    /// starting from its initial state.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Unsolvable`] if every branch ends in a contradiction.
    /// - [`SolveError::LimitExceeded`] if a [`SearchLimits`] bound is hit.
    pub fn solve(&mut self, problem: &Problem) -> Result<Solution, SolveError> {
        self.stats = SolveStats::default();
        let result = self.search(problem, problem.initial_state().clone(), 0);
        log::debug!(
            "search finished after {} nodes and {} branches",
            self.stats.nodes,
            self.stats.branches
        );
        match result? {
            Some(state) => Ok(Solution {
                state,
                stats: self.stats,
            }),
            None => Err(SolveError::Unsolvable),
        }
    }

    fn search(
        &mut self,
        problem: &Problem,
        state: State,
        depth: usize,
    ) -> Result<Option<State>, SolveError> {
        self.stats.nodes += 1;
        if let Some(max) = self.limits.max_nodes.filter(|&max| self.stats.nodes > max) {
            return Err(SolveError::LimitExceeded {
                limit: Limit::Nodes(max),
            });
        }
        if let Some(max) = self.limits.max_depth.filter(|&max| depth > max) {
            return Err(SolveError::LimitExceeded {
                limit: Limit::Depth(max),
            });
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let propagation = self.propagator.propagate(problem, state);
        self.stats.propagations += 1;
        self.stats.passes += propagation.passes();
        let Some(state) = propagation.into_state() else {
            log::trace!("dead branch at depth {depth}");
            return Ok(None);
        };

        let Some(var) = select_variable(&state) else {
            // every variable is solved; a rule that skips a group may leave
            // a clash behind, which still makes this branch dead
            return Ok(problem.is_solution(&state).then_some(state));
        };

        self.stats.branches += 1;
        for symbol in state.candidates(var) {
            log::debug!(
                "depth {depth}: trying {} = {}",
                problem.name(var),
                problem.alphabet().symbol(symbol).unwrap_or('?')
            );
            let mut child = state.clone();
            child.set(var, SymbolSet::from_elem(symbol));
            if let Some(solved) = self.search(problem, child, depth + 1)? {
                return Ok(Some(solved));
            }
        }
        Ok(None)
    }
}

fn select_variable(state: &State) -> Option<VarId> {
    state
        .iter()
        .filter(|(_, set)| set.len() > 1)
        .min_by_key(|&(var, set)| (set.len(), var))
        .map(|(var, _)| var)
}
