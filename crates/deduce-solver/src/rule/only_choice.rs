use deduce_core::{Problem, State, SymbolSet, VarId};

use super::{BoxedRule, Rule};

const NAME: &str = "only choice";

/// Assigns a symbol to the only member of a group that can still take it.
///
/// The rule is applied to groups with at least as many members as the
/// alphabet has symbols. Such a group has to use every symbol, so a symbol
/// with a single remaining place must go there. A smaller group may leave
/// symbols out and is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

fn single_place(state: &State, members: &[VarId], symbol: u8) -> Option<VarId> {
    let mut places = members
        .iter()
        .copied()
        .filter(|&var| state.candidates(var).contains(symbol));
    match (places.next(), places.next()) {
        (Some(var), None) => Some(var),
        _ => None,
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, problem: &Problem, state: &mut State) -> bool {
        let alphabet = problem.alphabet();
        let mut changed = false;
        for group in problem.groups() {
            if group.len() < alphabet.len() {
                continue;
            }
            for symbol in alphabet.full() {
                if let Some(var) = single_place(state, group.members(), symbol) {
                    changed |= state.set(var, SymbolSet::from_elem(symbol));
                }
            }
        }
        changed
    }
}
