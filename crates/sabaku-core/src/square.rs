//! Board squares.

use std::fmt::{self, Display};

/// One of the 81 cells of the board.
///
/// A square wraps a row-major index in the range 0-80. Rows are labelled
/// `A`-`I` top to bottom and columns `1`-`9` left to right, so the top-left
/// square displays as `A1` and the bottom-right as `I9`.
///
/// # Examples
///
/// ```
/// use sabaku_core::Square;
///
/// let square = Square::new(4, 0);
/// assert_eq!(square.x(), 4);
/// assert_eq!(square.y(), 0);
/// assert_eq!(square.to_string(), "A5");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    index: u8,
}

impl Square {
    /// All 81 squares in row-major order.
    ///
    /// This order is the deterministic iteration order used everywhere a
    /// "first square" tie-break is needed.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { index: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a square from column `x` and row `y`, both in the range 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { index: y * 9 + x }
    }

    /// Creates a square from its row-major index in the range 0-80.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self { index }
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.index % 9
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.index / 9
    }

    /// Returns the index of the 3×3 box containing this square (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y() / 3) * 3 + self.x() / 3
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.y()) as char;
        let col = (b'1' + self.x()) as char;
        write!(f, "{row}{col}")
    }
}
