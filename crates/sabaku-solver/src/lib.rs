//! Constraint-propagation Sudoku solver.
//!
//! The solver is the classic propagate-then-branch design: every deduction
//! that follows mechanically from the rules is applied by the mutually
//! recursive [`assign`] / [`eliminate`] pair, and only when no deduction
//! remains does [`search`] branch, cloning the candidate state and trying
//! each digit of the most constrained square in turn.
//!
//! # Examples
//!
//! ```
//! let puzzle = "53..7....6..195....98....6.8...6...34..8.3..1\
//!               7...2...6.6....28....419..5....8..79";
//! let solution = sabaku_solver::solve(puzzle)?;
//! assert!(solution.is_complete());
//! # Ok::<(), sabaku_solver::SolveError>(())
//! ```

pub use self::{candidate_grid::*, error::*, propagate::*, search::*};

mod candidate_grid;
mod error;
mod propagate;
mod search;

#[cfg(test)]
mod testing;
