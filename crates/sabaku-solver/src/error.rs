use derive_more::{Display, Error, From};
use sabaku_core::ParseGridError;

/// Error signalled by the constraint propagator.
///
/// There is only one failure mode: a contradiction, meaning some square or
/// some unit-digit was left with zero remaining possibilities. It carries
/// no further diagnostic; callers treat it as "this partial assignment is
/// unsatisfiable" and discard the candidate grid it arose in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// A square or a unit-digit has no remaining candidate.
    #[display("contradiction: a square or unit was left with no candidate")]
    Contradiction,
}

/// Error returned by the top-level solve entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// The input text is not a valid grid string.
    #[display("invalid puzzle: {_0}")]
    #[from]
    Parse(ParseGridError),
    /// The clues admit no completed grid: either they contradict each
    /// other outright or the search exhausted every branch.
    #[display("puzzle has no solution")]
    Unsolvable,
}
