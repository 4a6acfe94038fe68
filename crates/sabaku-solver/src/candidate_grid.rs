use std::fmt::{self, Display};

use sabaku_core::{Digit, DigitGrid, DigitSet, Square};

use crate::{SolverError, propagate};

/// The full propagation state: one candidate set per square.
///
/// A `CandidateGrid` is one node of the search tree. Exactly one instance
/// is mutated per search branch, and branching clones the whole grid: the
/// backing store is 81 `Copy` bitmasks, so `Clone` is a full deep copy and
/// sibling branches can never observe each other's eliminations.
///
/// Candidates only ever shrink within one instance. The propagator removes
/// them and signals [`SolverError::Contradiction`] when a square runs out;
/// a digit is only ever "restored" by backtracking to an earlier clone.
///
/// # Examples
///
/// ```
/// use sabaku_core::{Digit, DigitGrid, Square};
/// use sabaku_solver::CandidateGrid;
///
/// let clues: DigitGrid = "53..7....6..195....98....6.8...6...34..8.3..1\
///                         7...2...6.6....28....419..5....8..79"
///     .parse()?;
/// let grid = CandidateGrid::from_clues(&clues)?;
///
/// // The blank at A3 is already forced to 4 by the givens.
/// assert_eq!(grid.solved_digit(Square::new(2, 0)), Some(Digit::D4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Creates a grid where every square can still hold every digit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Seeds a grid from parsed clues.
    ///
    /// Starts from a blank grid and assigns each clue in turn, so all of
    /// the propagation that follows from the givens happens here, before
    /// any search.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the clues contradict each
    /// other, e.g. the same digit twice in one unit.
    pub fn from_clues(clues: &DigitGrid) -> Result<Self, SolverError> {
        let mut grid = Self::new();
        for (square, digit) in clues.iter() {
            if let Some(digit) = digit {
                propagate::assign(&mut grid, square, digit)?;
            }
        }
        Ok(grid)
    }

    /// Returns the candidate set of `square`.
    #[must_use]
    pub const fn candidates(&self, square: Square) -> DigitSet {
        self.cells[square.index() as usize]
    }

    /// Returns the digit at `square` if that square is decided.
    #[must_use]
    pub const fn solved_digit(&self, square: Square) -> Option<Digit> {
        self.candidates(square).as_single()
    }

    /// Returns `true` if every square has exactly one candidate left.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Extracts the decided squares into a [`DigitGrid`].
    ///
    /// Undecided squares are left blank; on a solved grid the result is
    /// complete.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for square in Square::ALL {
            grid.set(square, self.solved_digit(square));
        }
        grid
    }

    /// Removes `digit` from `square`'s candidates, reporting whether it
    /// was present. This is the only mutation the propagator performs.
    pub(crate) const fn remove_candidate(&mut self, square: Square, digit: Digit) -> bool {
        self.cells[square.index() as usize].remove(digit)
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CandidateGrid {
    /// Renders every square's remaining candidates, padded into columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.cells.iter().map(|set| set.len()).max().unwrap_or(1)) + 1;
        for y in 0..9 {
            if y == 3 || y == 6 {
                let dashes = "-".repeat(width * 3 + 1);
                writeln!(f, "{dashes}+{dashes}+{dashes}")?;
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    write!(f, "| ")?;
                }
                let set = self.candidates(Square::new(x, y)).to_string();
                write!(f, "{set:<width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_new_grid_is_uninformed() {
        let grid = CandidateGrid::new();
        for square in Square::ALL {
            assert_eq!(grid.candidates(square), DigitSet::FULL);
        }
        assert!(!grid.is_solved());
        assert_eq!(grid.to_digit_grid(), DigitGrid::new());
    }

    #[test]
    fn test_from_clues_keeps_givens() {
        let clues: DigitGrid = testing::EASY.parse().unwrap();
        let grid = CandidateGrid::from_clues(&clues).unwrap();
        for (square, digit) in clues.iter() {
            if let Some(digit) = digit {
                assert_eq!(grid.solved_digit(square), Some(digit));
            }
        }
    }

    #[test]
    fn test_from_clues_rejects_duplicate_in_row() {
        let mut clues = DigitGrid::new();
        clues.set(Square::new(0, 0), Some(Digit::D5));
        clues.set(Square::new(4, 0), Some(Digit::D5));
        assert_eq!(
            CandidateGrid::from_clues(&clues),
            Err(SolverError::Contradiction)
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let grid = CandidateGrid::new();
        let mut branch = grid.clone();
        branch.remove_candidate(Square::new(0, 0), Digit::D1);
        assert_eq!(grid.candidates(Square::new(0, 0)), DigitSet::FULL);
        assert_eq!(branch.candidates(Square::new(0, 0)).len(), 8);
    }

    #[test]
    fn test_from_clues_propagates_beyond_givens() {
        let clues: DigitGrid = testing::EASY.parse().unwrap();
        let grid = CandidateGrid::from_clues(&clues).unwrap();
        let givens = clues.iter().filter(|(_, digit)| digit.is_some()).count();
        let decided = Square::ALL
            .iter()
            .filter(|square| grid.solved_digit(**square).is_some())
            .count();
        assert!(decided > givens, "decided {decided} of {givens} givens");
    }

    #[test]
    fn test_display_lists_each_squares_candidates() {
        let mut grid = CandidateGrid::new();
        for digit in Digit::ALL {
            if digit != Digit::D7 {
                grid.remove_candidate(Square::new(0, 0), digit);
            }
        }
        let rendered = grid.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("7 "));
        assert!(lines[0].contains("123456789"));
        assert!(lines[3].contains('+'));
    }

    #[test]
    fn test_easy_puzzle_is_decided_by_propagation_alone() {
        let clues: DigitGrid = testing::EASY.parse().unwrap();
        let grid = CandidateGrid::from_clues(&clues).unwrap();
        assert!(grid.is_solved());
        assert_eq!(grid.to_digit_grid().to_line(), testing::EASY_SOLUTION);
    }
}
