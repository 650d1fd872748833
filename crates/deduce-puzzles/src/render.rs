use deduce_core::State;

/// Console rendering of a puzzle.
///
/// Implementors know how to lay out their own variables; the solver only
/// hands back a [`State`].
pub trait Render {
    /// Renders `state`, showing every remaining candidate of each variable.
    fn render_state(&self, state: &State) -> String;

    /// Renders the puzzle as it was given, before any solving.
    fn render_original(&self) -> String;
}
