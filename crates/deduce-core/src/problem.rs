//! Immutable problem descriptions.
//!
//! A [`Problem`] holds the variables, the shared [`Alphabet`], the
//! all-different constraint [`Group`]s and the peer lists derived from them,
//! together with the initial [`State`]. It is assembled with a
//! [`ProblemBuilder`], which validates everything up front.

use std::collections::HashMap;

use tinyvec::TinyVec;

use crate::{Alphabet, Group, ProblemError, State, SymbolSet, VarId};

/// An immutable constraint-satisfaction problem.
///
/// # Examples
///
/// ```
/// use deduce_core::Problem;
///
/// let problem = Problem::builder()
///     .variables(["WA", "NT", "SA"])
///     .alphabet("RGB")
///     .group(["WA", "NT", "SA"])
///     .initial("WA", "R")
///     .build()?;
///
/// let wa = problem.var("WA").unwrap();
/// let nt = problem.var("NT").unwrap();
/// assert_eq!(problem.peers(wa).len(), 2);
/// assert_eq!(problem.initial_state().value(wa), Some(0));
/// assert_eq!(problem.initial_state().candidates(nt).len(), 3);
/// # Ok::<(), deduce_core::ProblemError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    names: Vec<String>,
    index: HashMap<String, VarId>,
    alphabet: Alphabet,
    groups: Vec<Group>,
    memberships: Vec<Vec<usize>>,
    peers: Vec<Vec<VarId>>,
    initial: State,
}

impl Problem {
    /// Starts describing a new problem.
    #[must_use]
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.names.len()
    }

    /// Iterates over all variables in declaration order.
    pub fn variables(&self) -> impl ExactSizeIterator<Item = VarId> + use<> {
        (0..self.names.len()).map(VarId::new)
    }

    /// Returns the identifier of the variable called `name`.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<VarId> {
        self.index.get(name).copied()
    }

    /// Returns the name of `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not belong to this problem.
    #[must_use]
    pub fn name(&self, var: VarId) -> &str {
        &self.names[var.index()]
    }

    /// Returns the shared alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the constraint groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the indices of the groups `var` belongs to.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not belong to this problem.
    #[must_use]
    pub fn groups_of(&self, var: VarId) -> &[usize] {
        &self.memberships[var.index()]
    }

    /// Returns every variable sharing a group with `var`, sorted, excluding
    /// `var` itself.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not belong to this problem.
    #[must_use]
    pub fn peers(&self, var: VarId) -> &[VarId] {
        &self.peers[var.index()]
    }

    /// Returns the state the problem was built with.
    #[must_use]
    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    /// Replaces the candidate set of one variable.
    ///
    /// Only the existence of `var` is checked; whether the result is feasible
    /// is for propagation and search to find out.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::UnknownVariable`] if `var` is out of range.
    pub fn assign(
        &self,
        mut state: State,
        var: VarId,
        candidates: SymbolSet,
    ) -> Result<State, ProblemError> {
        if var.index() >= self.num_variables() || var.index() >= state.len() {
            return Err(ProblemError::UnknownVariable {
                name: var.to_string(),
            });
        }
        state.set(var, candidates);
        Ok(state)
    }

    /// Returns the value of the variable called `name` in `state`, if that
    /// variable exists and is solved.
    #[must_use]
    pub fn value_of(&self, state: &State, name: &str) -> Option<char> {
        let var = self.var(name)?;
        state.value(var).and_then(|i| self.alphabet.symbol(i))
    }

    /// Formats the candidates of `var` as alphabet symbols.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not belong to this problem.
    #[must_use]
    pub fn format_candidates(&self, state: &State, var: VarId) -> String {
        self.alphabet.format_set(state.candidates(var))
    }

    /// Returns `true` if every variable of `state` is solved and every group
    /// holds pairwise-distinct values.
    #[must_use]
    pub fn is_solution(&self, state: &State) -> bool {
        if state.len() != self.num_variables() || !state.is_solved() {
            return false;
        }
        self.groups.iter().all(|group| {
            let mut seen = SymbolSet::EMPTY;
            group.members().iter().all(|&var| {
                let value = state.candidates(var);
                let fresh = seen.intersection(value).is_empty();
                seen |= value;
                fresh
            })
        })
    }
}

/// Collects the pieces of a [`Problem`] and validates them in
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    variables: Vec<String>,
    alphabet: Vec<String>,
    groups: Vec<Vec<String>>,
    initial: Vec<(String, String)>,
}

impl ProblemBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one variable.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variables.push(name.into());
        self
    }

    /// Declares several variables, in order.
    #[must_use]
    pub fn variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the alphabet, one symbol per character.
    #[must_use]
    pub fn alphabet(mut self, symbols: &str) -> Self {
        self.alphabet = symbols.chars().map(String::from).collect();
        self
    }

    /// Sets the alphabet from individual entries, each of which must be a
    /// single character.
    #[must_use]
    pub fn alphabet_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alphabet = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an all-different constraint group.
    #[must_use]
    pub fn group<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .push(members.into_iter().map(Into::into).collect());
        self
    }

    /// Adds several constraint groups, in order.
    #[must_use]
    pub fn groups<I, G, S>(self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        groups.into_iter().fold(self, Self::group)
    }

    /// Gives `variable` an initial value.
    ///
    /// A single symbol fixes the variable; several symbols restrict it to
    /// that candidate set. Variables without an initial value start with the
    /// whole alphabet.
    #[must_use]
    pub fn initial(mut self, variable: impl Into<String>, value: impl Into<String>) -> Self {
        self.initial.push((variable.into(), value.into()));
        self
    }

    /// Gives several variables an initial value.
    #[must_use]
    pub fn initial_values<I, V, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (V, S)>,
        V: Into<String>,
        S: Into<String>,
    {
        values
            .into_iter()
            .fold(self, |builder, (var, value)| builder.initial(var, value))
    }

    /// Validates the description and builds the problem.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError`] if there are no variables, a variable is
    /// declared twice, the alphabet is invalid, a group references an unknown
    /// variable or repeats one, or an initial value is empty, targets an
    /// unknown variable or uses a symbol outside the alphabet.
    pub fn build(self) -> Result<Problem, ProblemError> {
        let Self {
            variables,
            alphabet,
            groups,
            initial,
        } = self;

        if variables.is_empty() {
            return Err(ProblemError::NoVariables);
        }
        let mut index = HashMap::with_capacity(variables.len());
        for (i, name) in variables.iter().enumerate() {
            if index.insert(name.clone(), VarId::new(i)).is_some() {
                return Err(ProblemError::DuplicateVariable { name: name.clone() });
            }
        }

        let alphabet = Alphabet::new(&alphabet)?;

        let mut memberships = vec![Vec::new(); variables.len()];
        let mut resolved = Vec::with_capacity(groups.len());
        for (group_index, names) in groups.iter().enumerate() {
            let mut members = TinyVec::<[VarId; 9]>::new();
            for name in names {
                let Some(&var) = index.get(name) else {
                    return Err(ProblemError::UnknownGroupMember {
                        group: group_index,
                        name: name.clone(),
                    });
                };
                if members.contains(&var) {
                    return Err(ProblemError::DuplicateGroupMember {
                        group: group_index,
                        name: name.clone(),
                    });
                }
                members.push(var);
                memberships[var.index()].push(group_index);
            }
            resolved.push(Group::new(members));
        }

        let peers = memberships
            .iter()
            .enumerate()
            .map(|(i, group_ids)| {
                let mut peers: Vec<VarId> = group_ids
                    .iter()
                    .flat_map(|&g| resolved[g].members().iter().copied())
                    .filter(|peer| peer.index() != i)
                    .collect();
                peers.sort_unstable();
                peers.dedup();
                peers
            })
            .collect();

        let mut state = State::from_candidates(vec![alphabet.full(); variables.len()]);
        for (name, value) in initial {
            let Some(&var) = index.get(&name) else {
                return Err(ProblemError::UnknownVariable { name });
            };
            let candidates = alphabet.parse_set(&value).map_err(|symbol| {
                ProblemError::SymbolOutsideAlphabet {
                    variable: name.clone(),
                    symbol,
                }
            })?;
            if candidates.is_empty() {
                return Err(ProblemError::EmptyInitialValue { variable: name });
            }
            state.set(var, candidates);
        }

        Ok(Problem {
            names: variables,
            index,
            alphabet,
            groups: resolved,
            memberships,
            peers,
            initial: state,
        })
    }
}
