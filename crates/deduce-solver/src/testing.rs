//! Test utilities for rule implementations.
//!
//! [`RuleTester`] keeps the state a problem starts from next to the state
//! after applying rules, so tests can assert on what changed.
//!
//! # Example
//!
//! ```ignore
//! let problem = latin_square(3).initial("r0c0", "1").build().unwrap();
//!
//! RuleTester::new(problem)
//!     .apply_once(&Elimination::new())
//!     .assert_removed_exact("r0c1", "1");
//! ```

use deduce_core::{Problem, ProblemBuilder, State, SymbolSet, VarId};

use crate::Rule;

/// Returns a builder for an `n`×`n` Latin square.
///
/// Variables are named `r{row}c{col}` in row-major order, the alphabet is
/// `1..=n`, and the groups are every row followed by every column.
pub fn latin_square(n: usize) -> ProblemBuilder {
    assert!((1..=9).contains(&n));
    let name = |r: usize, c: usize| format!("r{r}c{c}");
    let rows = (0..n).map(|r| (0..n).map(move |c| name(r, c)).collect::<Vec<_>>());
    let cols = (0..n).map(|c| (0..n).map(move |r| name(r, c)).collect::<Vec<_>>());
    Problem::builder()
        .variables((0..n).flat_map(|r| (0..n).map(move |c| name(r, c))))
        .alphabet(&"123456789"[..n])
        .groups(rows.chain(cols))
}

/// A test harness for verifying rule implementations.
///
/// All methods return `self`, and every assertion panics with a message
/// naming the variable involved, reported at the caller's location.
#[derive(Debug)]
pub struct RuleTester {
    problem: Problem,
    initial: State,
    current: State,
}

impl RuleTester {
    /// Creates a tester starting from the problem's initial state.
    pub fn new(problem: Problem) -> Self {
        let initial = problem.initial_state().clone();
        Self::with_state(problem, initial)
    }

    /// Creates a tester starting from `state`.
    pub fn with_state(problem: Problem, state: State) -> Self {
        Self {
            problem,
            current: state.clone(),
            initial: state,
        }
    }

    /// Returns the state after the rules applied so far.
    pub fn current(&self) -> &State {
        &self.current
    }

    /// Applies the rule once.
    ///
    /// # Panics
    ///
    /// Panics if the rule's change report disagrees with the state.
    #[track_caller]
    pub fn apply_once<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        let before = self.current.clone();
        let changed = rule.apply(&self.problem, &mut self.current);
        assert_eq!(
            changed,
            before != self.current,
            "{} reported changed={changed} but the state says otherwise",
            rule.name()
        );
        self.assert_narrowed(&before);
        self
    }

    /// Applies the rule until it stops changing the state.
    #[track_caller]
    pub fn apply_until_stuck<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        loop {
            let before = self.current.clone();
            if !rule.apply(&self.problem, &mut self.current) {
                return self;
            }
            self.assert_narrowed(&before);
        }
    }

    #[track_caller]
    fn assert_narrowed(&self, before: &State) {
        for (var, set) in self.current.iter() {
            assert!(
                set.is_subset(before.candidates(var)),
                "candidates of {} grew",
                self.problem.name(var)
            );
        }
    }

    #[track_caller]
    fn var(&self, name: &str) -> VarId {
        self.problem
            .var(name)
            .unwrap_or_else(|| panic!("no variable named {name}"))
    }

    #[track_caller]
    fn set(&self, symbols: &str) -> SymbolSet {
        self.problem
            .alphabet()
            .parse_set(symbols)
            .unwrap_or_else(|c| panic!("{c} is not in the alphabet"))
    }

    /// Asserts that exactly `symbols` were removed from `name`.
    #[track_caller]
    pub fn assert_removed_exact(self, name: &str, symbols: &str) -> Self {
        let var = self.var(name);
        let removed = self
            .initial
            .candidates(var)
            .difference(self.current.candidates(var));
        let expected = self.set(symbols);
        assert_eq!(
            removed,
            expected,
            "{name}: removed {:?}, expected {:?}",
            self.problem.alphabet().format_set(removed),
            symbols
        );
        self
    }

    /// Asserts that `name` still has its initial candidates.
    #[track_caller]
    pub fn assert_no_change(self, name: &str) -> Self {
        let var = self.var(name);
        assert_eq!(
            self.initial.candidates(var),
            self.current.candidates(var),
            "{name} changed"
        );
        self
    }

    /// Asserts that no variable changed.
    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        for var in self.problem.variables() {
            assert_eq!(
                self.initial.candidates(var),
                self.current.candidates(var),
                "{} changed",
                self.problem.name(var)
            );
        }
        self
    }

    /// Asserts that `name` is solved with `symbol`.
    #[track_caller]
    pub fn assert_value(self, name: &str, symbol: char) -> Self {
        assert_eq!(
            self.problem.value_of(&self.current, name),
            Some(symbol),
            "{name}: candidates are {:?}",
            self.problem.format_candidates(&self.current, self.var(name))
        );
        self
    }

    /// Asserts that the candidates of `name` are exactly `symbols`.
    #[track_caller]
    pub fn assert_candidates(self, name: &str, symbols: &str) -> Self {
        let var = self.var(name);
        assert_eq!(
            self.problem.format_candidates(&self.current, var),
            self.problem.alphabet().format_set(self.set(symbols)),
            "{name}"
        );
        self
    }

    /// Asserts that some variable has no candidate left.
    #[track_caller]
    pub fn assert_contradiction(self) -> Self {
        assert!(
            self.current.has_contradiction(),
            "expected a variable without candidates"
        );
        self
    }
}
