//! Depth-first search over candidate grids.

use log::{debug, trace};
use sabaku_core::{DigitGrid, DigitSet, Square};

use crate::{CandidateGrid, SolveError, propagate};

/// Searches for a solved grid by propagate-then-branch backtracking.
///
/// If the grid is already fully decided it is returned as is. Otherwise
/// the square with the fewest remaining candidates (more than one) is
/// chosen, with ties broken by row-major order so the search is fully
/// deterministic, and each of its candidates is tried in ascending order
/// against a fresh clone of the grid. The first branch that reaches a
/// solution wins; a branch whose assignment or sub-search fails is
/// discarded and the next digit is tried.
///
/// Returns `None` when every branch is exhausted.
#[must_use]
pub fn search(grid: CandidateGrid) -> Option<CandidateGrid> {
    let Some((square, candidates)) = branch_square(&grid) else {
        return Some(grid);
    };
    debug!(
        "branching on {square} with {} candidates {{{candidates}}}",
        candidates.len()
    );
    trace!("remaining candidates:\n{grid}");
    for digit in candidates {
        let mut branch = grid.clone();
        if propagate::assign(&mut branch, square, digit).is_ok()
            && let Some(solution) = search(branch)
        {
            return Some(solution);
        }
    }
    None
}

/// Picks the branch square: minimum remaining candidates among undecided
/// squares, first in row-major order on ties. `None` means the grid is
/// fully decided.
fn branch_square(grid: &CandidateGrid) -> Option<(Square, DigitSet)> {
    let mut best: Option<(Square, DigitSet)> = None;
    for square in Square::ALL {
        let candidates = grid.candidates(square);
        if candidates.len() > 1
            && best.is_none_or(|(_, smallest)| candidates.len() < smallest.len())
        {
            best = Some((square, candidates));
        }
    }
    best
}

/// Solves a puzzle given as a clue string.
///
/// The string must contain 81 cells: `'1'`-`'9'` are clues and any other
/// cell character is a blank (whitespace and grid decoration ignored).
///
/// # Errors
///
/// Returns [`SolveError::Parse`] when the text does not hold 81 cells, and
/// [`SolveError::Unsolvable`] when the clues contradict each other or no
/// completion exists. Unsolvable is an expected outcome for contradictory
/// puzzles, not a crash.
///
/// # Examples
///
/// ```
/// let solution = sabaku_solver::solve(
///     "53..7....6..195....98....6.8...6...34..8.3..1\
///      7...2...6.6....28....419..5....8..79",
/// )?;
/// assert!(solution.is_complete());
/// assert_eq!(
///     sabaku_solver::solve(&"9".repeat(81)),
///     Err(sabaku_solver::SolveError::Unsolvable),
/// );
/// # Ok::<(), sabaku_solver::SolveError>(())
/// ```
pub fn solve(clues: &str) -> Result<DigitGrid, SolveError> {
    let grid: DigitGrid = clues.parse()?;
    solve_grid(&grid)
}

/// Solves an already-parsed clue grid. See [`solve`].
///
/// # Errors
///
/// Returns [`SolveError::Unsolvable`] when the clues contradict each other
/// or the search exhausts every branch.
pub fn solve_grid(clues: &DigitGrid) -> Result<DigitGrid, SolveError> {
    let seeded = parse_grid(clues).map_err(|_| SolveError::Unsolvable)?;
    let solution = search(seeded).ok_or(SolveError::Unsolvable)?;
    Ok(solution.to_digit_grid())
}

/// Seeds a candidate grid from clues, running initial propagation.
///
/// This is [`CandidateGrid::from_clues`] under its traditional name; use
/// it directly to inspect the propagation fixed point before any search.
///
/// # Errors
///
/// Returns [`crate::SolverError::Contradiction`] if the clues contradict
/// each other.
pub fn parse_grid(clues: &DigitGrid) -> Result<CandidateGrid, crate::SolverError> {
    CandidateGrid::from_clues(clues)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sabaku_core::Digit;

    use super::*;
    use crate::testing;

    #[test]
    fn test_easy_puzzle_has_known_solution() {
        let solution = solve(testing::EASY).unwrap();
        testing::assert_valid(&solution);
        assert_eq!(solution.to_line(), testing::EASY_SOLUTION);
    }

    #[test]
    fn test_hard_puzzle_requires_search_and_solves() {
        let clues: DigitGrid = testing::HARD.parse().unwrap();
        // Propagation alone must not finish this one, otherwise the test
        // would not exercise the search layer.
        let seeded = parse_grid(&clues).unwrap();
        assert!(!seeded.is_solved());

        let solution = solve(testing::HARD).unwrap();
        testing::assert_valid(&solution);
        testing::assert_preserves_clues(&clues, &solution);
    }

    #[test]
    fn test_solutions_preserve_clues() {
        for puzzle in [testing::EASY, testing::HARD] {
            let clues: DigitGrid = puzzle.parse().unwrap();
            let solution = solve(puzzle).unwrap();
            testing::assert_preserves_clues(&clues, &solution);
        }
    }

    #[test]
    fn test_solving_is_deterministic() {
        assert_eq!(solve(testing::HARD), solve(testing::HARD));
        assert_eq!(solve(&".".repeat(81)), solve(&".".repeat(81)));
    }

    #[test]
    fn test_duplicate_clues_are_unsolvable() {
        // Same digit twice in a row, a column, and a box.
        let row = format!("55{}", ".".repeat(79));
        let column = format!("5{}5{}", ".".repeat(8), ".".repeat(71));
        let boxed = format!("5{}5{}", ".".repeat(9), ".".repeat(70));
        for puzzle in [row, column, boxed] {
            assert_eq!(solve(&puzzle), Err(SolveError::Unsolvable));
        }
    }

    #[test]
    fn test_single_clue_solves() {
        // One clue and 80 blanks: propagation must not over-eliminate.
        let puzzle = format!("7{}", ".".repeat(80));
        let clues: DigitGrid = puzzle.parse().unwrap();
        let solution = solve(&puzzle).unwrap();
        testing::assert_valid(&solution);
        testing::assert_preserves_clues(&clues, &solution);
    }

    #[test]
    fn test_blank_grid_terminates_with_valid_completion() {
        let solution = solve(&".".repeat(81)).unwrap();
        testing::assert_valid(&solution);
    }

    #[test]
    fn test_wrong_length_input_is_a_parse_error() {
        assert!(matches!(solve("123"), Err(SolveError::Parse(_))));
        assert!(matches!(solve(&".".repeat(82)), Err(SolveError::Parse(_))));
    }

    #[test]
    fn test_nondigit_cells_solve_as_blanks() {
        // 81 unknown markers of any kind are just an empty puzzle.
        let solution = solve(&"x".repeat(81)).unwrap();
        testing::assert_valid(&solution);
        assert_eq!(solve(&"x".repeat(81)), solve(&".".repeat(81)));
    }

    #[test]
    fn test_branch_square_prefers_fewest_candidates() {
        let mut grid = CandidateGrid::new();
        // Make A1 a 3-way choice and B5 a 2-way choice.
        for digit in [Digit::D4, Digit::D5, Digit::D6, Digit::D7, Digit::D8, Digit::D9] {
            grid.remove_candidate(Square::new(0, 0), digit);
        }
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                grid.remove_candidate(Square::new(4, 1), digit);
            }
        }
        let (square, candidates) = branch_square(&grid).unwrap();
        assert_eq!(square, Square::new(4, 1));
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_branch_square_ties_break_row_major() {
        let mut grid = CandidateGrid::new();
        for square in [Square::new(6, 2), Square::new(1, 5)] {
            for digit in Digit::ALL {
                if digit != Digit::D1 && digit != Digit::D2 {
                    grid.remove_candidate(square, digit);
                }
            }
        }
        let (square, _) = branch_square(&grid).unwrap();
        assert_eq!(square, Square::new(6, 2));
    }

    proptest! {
        // Shuffle blanks into the solved easy grid and re-solve: the hole
        // pattern must not break validity or clue preservation.
        #[test]
        fn prop_punched_solution_resolves(holes in proptest::collection::hash_set(0..81usize, 0..40)) {
            let mut clues: DigitGrid = testing::EASY_SOLUTION.parse().unwrap();
            for hole in holes {
                clues.set(Square::ALL[hole], None);
            }
            let solution = solve_grid(&clues).unwrap();
            testing::assert_valid(&solution);
            testing::assert_preserves_clues(&clues, &solution);
        }
    }
}
