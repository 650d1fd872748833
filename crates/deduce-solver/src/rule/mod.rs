//! Local deduction rules.
//!
//! A rule looks at a [`State`] and narrows candidate sets without guessing.
//! Each rule implements the [`Rule`] trait; the
//! [`Propagator`](crate::Propagator) runs its rules in order until no rule
//! solves another variable.

use std::{fmt, sync::Arc};

use deduce_core::{Problem, State};

pub use self::{elimination::Elimination, naked_twins::NakedTwins, only_choice::OnlyChoice};

mod elimination;
mod naked_twins;
mod only_choice;

/// Returns the built-in rules, in the order they are applied.
///
/// - **Elimination**: a solved variable's value is removed from its peers
/// - **Only choice**: a symbol that fits only one member of a group is
///   assigned to that member
///
/// Every [`Propagator`](crate::Propagator) starts with these; extra rules
/// are appended after them.
///
/// # Examples
///
/// ```
/// use deduce_solver::rule;
///
/// let rules = rule::builtin_rules();
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[0].name(), "elimination");
/// ```
#[must_use]
pub fn builtin_rules() -> Vec<BoxedRule> {
    vec![Box::new(Elimination::new()), Box::new(OnlyChoice::new())]
}

/// A deduction rule over candidate states.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule once to `state`.
    ///
    /// A rule only narrows candidate sets and never fails: a variable left
    /// with no candidate is how a contradiction shows up, and the caller
    /// checks for it.
    ///
    /// # Returns
    ///
    /// * `true` - some candidate set changed
    /// * `false` - the state is unchanged
    fn apply(&self, problem: &Problem, state: &mut State) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

type RuleFn = dyn Fn(&Problem, &mut State) -> bool + Send + Sync;

/// A rule backed by a closure.
///
/// # Examples
///
/// ```
/// use deduce_solver::rule::{FnRule, Rule};
///
/// let rule = FnRule::new("noop", |_, _| false);
/// assert_eq!(rule.name(), "noop");
/// ```
#[derive(Clone)]
pub struct FnRule {
    name: &'static str,
    f: Arc<RuleFn>,
}

impl FnRule {
    /// Wraps `f` as a rule called `name`.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&Problem, &mut State) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            f: Arc::new(f),
        }
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

impl Rule for FnRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(self.clone())
    }

    fn apply(&self, problem: &Problem, state: &mut State) -> bool {
        (self.f)(problem, state)
    }
}
