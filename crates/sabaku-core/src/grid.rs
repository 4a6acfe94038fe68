//! The 81-cell clue/solution grid and its text formats.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{digit::Digit, square::Square};

/// A 9×9 grid of decided digits, with `None` for blank cells.
///
/// This is the external form of a puzzle: the parsed clues on the way in,
/// and the completed solution on the way out. Candidate tracking during a
/// solve lives in the solver crate.
///
/// # Text format
///
/// [`FromStr`] accepts exactly 81 cells after whitespace and the grid
/// decoration characters `|`, `-`, and `+` are stripped: `'1'`-`'9'` are
/// clues and any other cell character (conventionally `'.'`, `'_'`, or
/// `'0'`) is a blank. The single-line form, a laid-out multi-line form,
/// and the [`Display`] output all parse the same way.
///
/// # Examples
///
/// ```
/// use sabaku_core::{Digit, DigitGrid, Square};
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// assert_eq!(grid.get(Square::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Square::new(2, 0)), None);
/// # Ok::<(), sabaku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

/// Error parsing a grid string: the text does not contain exactly 81
/// cells once whitespace and decoration are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
#[display("expected 81 cells, found {len}")]
pub struct ParseGridError {
    /// Number of cells found.
    pub len: usize,
}

impl DigitGrid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `square`, or `None` if the cell is blank.
    #[must_use]
    pub const fn get(&self, square: Square) -> Option<Digit> {
        self.cells[square.index() as usize]
    }

    /// Sets or clears the cell at `square`.
    pub const fn set(&mut self, square: Square, digit: Option<Digit>) {
        self.cells[square.index() as usize] = digit;
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Digit>)> + '_ {
        Square::ALL.into_iter().map(|square| (square, self.get(square)))
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the canonical 81-character single-line form, blanks as `.`.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('.', Digit::to_char))
            .collect()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0usize;
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '|' | '-' | '+'));
        for (index, c) in cells.enumerate() {
            if index < 81 {
                grid.set(Square::ALL[index], Digit::from_char(c));
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError { len: count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Renders the grid as 9 lines of 9 cells with box separators:
    ///
    /// ```text
    /// 5 3 . | . 7 . | . . .
    /// 6 . . | 1 9 5 | . . .
    /// . 9 8 | . . . | . 6 .
    /// ------+-------+------
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y == 3 || y == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    write!(f, "| ")?;
                }
                let cell = self.get(Square::new(x, y)).map_or('.', Digit::to_char);
                if x == 8 {
                    writeln!(f, "{cell}")?;
                } else {
                    write!(f, "{cell} ")?;
                }
            }
        }
        Ok(())
    }
}
