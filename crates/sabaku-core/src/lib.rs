//! Core data structures for the sabaku Sudoku solver.
//!
//! This crate holds the pure data model: digits, squares, candidate sets,
//! the fixed 9×9 topology (units and peers), and the clue grid with its
//! text representation. It contains no solving logic; the propagator and
//! search live in `sabaku-solver`.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`square`]: board cells, `A1`..`I9`
//! - [`digit_set`]: bitset of candidate digits for one square
//! - [`square_set`]: bitset of board squares
//! - [`topology`]: the 27 units and per-square peer sets, computed once
//!   at compile time
//! - [`grid`]: the 81-cell clue/solution grid and its string formats
//!
//! # Examples
//!
//! ```
//! use sabaku_core::{Digit, DigitGrid, Square, topology};
//!
//! let grid: DigitGrid = "53..7....6..195....98....6.8...6...34..8.3..1\
//!                        7...2...6.6....28....419..5....8..79"
//!     .parse()?;
//! assert_eq!(grid.get(Square::new(0, 0)), Some(Digit::D5));
//! assert_eq!(topology::peers_of(Square::new(0, 0)).len(), 20);
//! # Ok::<(), sabaku_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod square;
pub mod square_set;
pub mod topology;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    square::Square,
    square_set::SquareSet,
    topology::{Unit, UnitKind},
};
