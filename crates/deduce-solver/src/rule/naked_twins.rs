use deduce_core::{Problem, State};

use super::{BoxedRule, Rule};

const NAME: &str = "naked twins";

/// Removes candidates using naked twins within a group.
///
/// When exactly two members of a group share the same two-symbol candidate
/// set, those two symbols must go to those two members, so they are removed
/// from every other member of the group.
///
/// This rule is not part of [`builtin_rules`](super::builtin_rules); it is
/// registered by front ends that want it, such as the Sudoku adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, problem: &Problem, state: &mut State) -> bool {
        let mut changed = false;
        for group in problem.groups() {
            let members = group.members();
            for (i, &var) in members.iter().enumerate() {
                let pair = state.candidates(var);
                if pair.len() != 2 {
                    continue;
                }
                // each twin set is handled at its first holder
                if members[..i].iter().any(|&m| state.candidates(m) == pair) {
                    continue;
                }
                let holders = members
                    .iter()
                    .filter(|&&m| state.candidates(m) == pair)
                    .count();
                if holders != 2 {
                    continue;
                }
                for &other in members {
                    if state.candidates(other) != pair {
                        changed |= state.remove(other, pair);
                    }
                }
            }
        }
        changed
    }
}
