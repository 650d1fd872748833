//! Per-variable candidate sets.

use crate::{SymbolSet, VarId};

/// The candidate set of every variable of a problem.
///
/// This is the only data mutated while solving. Search branches clone it, so
/// sibling branches never see each other's changes.
///
/// # Panics
///
/// Methods taking a [`VarId`] panic if the identifier does not belong to the
/// problem this state was created for. Use
/// [`Problem::assign`](crate::Problem::assign) for a checked update.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    candidates: Vec<SymbolSet>,
}

impl State {
    /// Creates a state from one candidate set per variable, in declaration
    /// order.
    #[must_use]
    pub fn from_candidates(candidates: Vec<SymbolSet>) -> Self {
        Self { candidates }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the state has no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the candidate set of `var`.
    #[must_use]
    pub fn candidates(&self, var: VarId) -> SymbolSet {
        self.candidates[var.index()]
    }

    /// Returns the value of `var` if it is solved.
    #[must_use]
    pub fn value(&self, var: VarId) -> Option<u8> {
        self.candidates(var).as_single()
    }

    /// Returns `true` if `var` has exactly one candidate.
    #[must_use]
    pub fn is_decided(&self, var: VarId) -> bool {
        self.candidates(var).len() == 1
    }

    /// Replaces the candidate set of `var`, returning `true` if it changed.
    pub fn set(&mut self, var: VarId, candidates: SymbolSet) -> bool {
        let slot = &mut self.candidates[var.index()];
        let changed = *slot != candidates;
        *slot = candidates;
        changed
    }

    /// Removes `symbols` from the candidates of `var`, returning `true` if any
    /// was present.
    pub fn remove(&mut self, var: VarId, symbols: SymbolSet) -> bool {
        let current = self.candidates(var);
        self.set(var, current.difference(symbols))
    }

    /// Iterates over every variable and its candidate set.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VarId, SymbolSet)> + '_ {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, set)| (VarId::new(i), *set))
    }

    /// Returns the number of solved variables.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.candidates.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns the total number of candidates over all variables.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.candidates.iter().map(|set| set.len()).sum()
    }

    /// Returns `true` if some variable has no candidate left.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.candidates.iter().any(|set| set.is_empty())
    }

    /// Returns `true` if every variable has exactly one candidate.
    ///
    /// This says nothing about whether the values respect the constraint
    /// groups; see [`Problem::is_solution`](crate::Problem::is_solution).
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.iter().all(|set| set.len() == 1)
    }
}
