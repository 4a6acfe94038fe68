//! Shared fixtures and assertions for solver tests.

use sabaku_core::{DigitGrid, DigitSet, topology::Unit};

/// The Wikipedia example puzzle; unique solution, little to no search.
pub(crate) const EASY: &str = "53..7....6..195....98....6.8...6...34..8.3..1\
                               7...2...6.6....28....419..5....8..79";

/// The unique solution of [`EASY`].
pub(crate) const EASY_SOLUTION: &str = "534678912672195348198342567859761423426853791\
                                        713924856961537284287419635345286179";

/// A puzzle that constraint propagation alone cannot finish; exercises
/// the backtracking layer.
pub(crate) const HARD: &str = "4.....8.5.3..........7......2.....6.....8.4..\
                               ....1.......6.3.7.5..2.....1.4......";

/// Asserts the grid is complete and every unit holds each digit once.
#[track_caller]
pub(crate) fn assert_valid(grid: &DigitGrid) {
    assert!(grid.is_complete(), "grid has blank cells:\n{grid}");
    for unit in &Unit::ALL {
        let digits: DigitSet = unit
            .squares()
            .iter()
            .filter_map(|square| grid.get(*square))
            .collect();
        assert_eq!(
            digits,
            DigitSet::FULL,
            "{unit} holds {{{digits}}}, not a permutation of 1-9:\n{grid}"
        );
    }
}

/// Asserts every given clue survives unchanged in the solution.
#[track_caller]
pub(crate) fn assert_preserves_clues(clues: &DigitGrid, solution: &DigitGrid) {
    for (square, digit) in clues.iter() {
        if let Some(digit) = digit {
            assert_eq!(
                solution.get(square),
                Some(digit),
                "clue {digit} at {square} was not preserved"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lengths() {
        assert_eq!(EASY.chars().filter(|c| !c.is_whitespace()).count(), 81);
        assert_eq!(
            EASY_SOLUTION.chars().filter(|c| !c.is_whitespace()).count(),
            81
        );
        assert_eq!(HARD.chars().filter(|c| !c.is_whitespace()).count(), 81);
    }

    #[test]
    fn test_easy_solution_is_valid() {
        let grid: DigitGrid = EASY_SOLUTION.parse().unwrap();
        assert_valid(&grid);
        let clues: DigitGrid = EASY.parse().unwrap();
        assert_preserves_clues(&clues, &grid);
    }
}
