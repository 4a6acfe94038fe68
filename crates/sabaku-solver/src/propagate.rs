//! Constraint propagation: the mutually recursive `assign` / `eliminate`
//! pair.
//!
//! Together the two functions enforce arc consistency for the "each unit
//! holds every digit exactly once" constraint network. Each productive
//! call removes at least one candidate from the grid and the total
//! candidate count is bounded below, so the recursion always terminates;
//! a no-op elimination returns immediately.

use log::trace;
use sabaku_core::{Digit, Square, topology};
use tinyvec::ArrayVec;

use crate::{CandidateGrid, SolverError};

/// Forces `square` to hold `digit` by eliminating every other candidate.
///
/// # Errors
///
/// Returns [`SolverError::Contradiction`] if any elimination does. The
/// grid may be partially mutated on error and must be discarded by the
/// caller; the search engine only ever assigns into clones, and clue
/// seeding fails the whole load.
pub fn assign(
    grid: &mut CandidateGrid,
    square: Square,
    digit: Digit,
) -> Result<(), SolverError> {
    trace!("assign {digit} to {square}");
    let others = grid.candidates(square).difference(digit.into());
    for other in others {
        eliminate(grid, square, other)?;
    }
    Ok(())
}

/// Removes `digit` from `square`'s candidates and chases the deductions
/// that follow.
///
/// A no-op if the digit is already absent. After removal, two rules fire
/// in order:
///
/// 1. **Singleton**: if `square` is down to one candidate, that digit is
///    eliminated from all 20 peers.
/// 2. **Unique placement**: for each unit of `square`, if `digit` now has
///    exactly one place left in that unit, it is assigned there.
///
/// # Errors
///
/// Returns [`SolverError::Contradiction`] when `square` runs out of
/// candidates or a unit runs out of places for `digit`. Same partial
/// mutation caveat as [`assign`].
pub fn eliminate(
    grid: &mut CandidateGrid,
    square: Square,
    digit: Digit,
) -> Result<(), SolverError> {
    if !grid.remove_candidate(square, digit) {
        return Ok(());
    }
    let remaining = grid.candidates(square);
    trace!("eliminate {digit} from {square}, leaving {{{remaining}}}");

    if remaining.is_empty() {
        return Err(SolverError::Contradiction);
    }
    if let Some(forced) = remaining.as_single() {
        for peer in topology::peers_of(square) {
            eliminate(grid, peer, forced)?;
        }
    }

    for unit in topology::units_of(square) {
        let mut places: ArrayVec<[Square; 9]> = ArrayVec::new();
        for &candidate in unit.squares() {
            if grid.candidates(candidate).contains(digit) {
                places.push(candidate);
            }
        }
        match places.as_slice() {
            [] => return Err(SolverError::Contradiction),
            &[only] => assign(grid, only, digit)?,
            _ => {}
        }
    }
    Ok(())
}
