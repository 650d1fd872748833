/// Search limit that stopped a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Limit {
    /// More search nodes were needed than allowed.
    #[display("node limit of {_0}")]
    Nodes(usize),
    /// The search had to branch deeper than allowed.
    #[display("depth limit of {_0}")]
    Depth(usize),
}

/// Errors returned by [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum SolveError {
    /// Every branch of the search ended in a contradiction.
    #[display("no assignment satisfies every constraint")]
    Unsolvable,
    /// The search gave up after hitting a configured limit.
    #[display("search stopped at the {limit}")]
    LimitExceeded {
        /// The limit that was hit.
        limit: Limit,
    },
}
