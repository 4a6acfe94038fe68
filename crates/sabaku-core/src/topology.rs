//! The fixed 9×9 board topology: units and peers.
//!
//! A *unit* is one of the 27 groups of 9 squares (a row, a column, or a
//! 3×3 box) that must contain every digit exactly once. The *peers* of a
//! square are the 20 other squares sharing at least one unit with it.
//!
//! All of this is input-independent combinatorics, so the tables are built
//! once in const blocks and shared by reference for the lifetime of the
//! process; nothing here is ever recomputed per solve.
//!
//! # Examples
//!
//! ```
//! use sabaku_core::{Square, topology};
//!
//! let square = Square::new(2, 0);
//! let [row, column, boxed] = topology::units_of(square);
//! assert!(row.members().contains(Square::new(8, 0)));
//! assert!(column.members().contains(Square::new(2, 8)));
//! assert!(boxed.members().contains(Square::new(0, 2)));
//! assert_eq!(topology::peers_of(square).len(), 20);
//! ```

use std::fmt::{self, Display};

use crate::{square::Square, square_set::SquareSet};

/// The kind of a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A horizontal row.
    Row,
    /// A vertical column.
    Column,
    /// A 3×3 box.
    Box,
}

/// One of the 27 groups of 9 squares that must hold each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    index: u8,
    squares: [Square; 9],
    members: SquareSet,
}

impl Unit {
    /// All 27 units: rows 0-8, then columns 0-8, then boxes 0-8.
    pub const ALL: [Self; 27] = {
        let placeholder = Unit {
            kind: UnitKind::Row,
            index: 0,
            squares: [Square::from_index(0); 9],
            members: SquareSet::EMPTY,
        };
        let mut all = [placeholder; 27];
        let mut k = 0;
        #[expect(clippy::cast_possible_truncation)]
        while k < 27 {
            let kind = if k < 9 {
                UnitKind::Row
            } else if k < 18 {
                UnitKind::Column
            } else {
                UnitKind::Box
            };
            let index = (k % 9) as u8;
            let mut squares = [Square::from_index(0); 9];
            let mut members = SquareSet::EMPTY;
            let mut i = 0u8;
            while i < 9 {
                let square = match kind {
                    UnitKind::Row => Square::new(i, index),
                    UnitKind::Column => Square::new(index, i),
                    UnitKind::Box => {
                        Square::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
                    }
                };
                squares[i as usize] = square;
                members.insert(square);
                i += 1;
            }
            all[k] = Unit {
                kind,
                index,
                squares,
                members,
            };
            k += 1;
        }
        all
    };

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the index of this unit within its kind (0-8).
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the squares of this unit in reading order.
    #[must_use]
    pub const fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the squares of this unit as a set.
    #[must_use]
    pub const fn members(&self) -> SquareSet {
        self.members
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnitKind::Row => write!(f, "row {}", (b'A' + self.index) as char),
            UnitKind::Column => write!(f, "column {}", self.index + 1),
            UnitKind::Box => write!(f, "box {}", self.index + 1),
        }
    }
}

/// Peer sets: `PEERS[i]` holds the 20 squares sharing a unit with square `i`.
const PEERS: [SquareSet; 81] = {
    let mut peers = [SquareSet::EMPTY; 81];
    let mut k = 0;
    while k < 27 {
        let squares = &Unit::ALL[k].squares;
        let mut i = 0;
        while i < 9 {
            let square = squares[i];
            let mut set = peers[square.index() as usize];
            let mut j = 0;
            while j < 9 {
                if squares[j].index() != square.index() {
                    set.insert(squares[j]);
                }
                j += 1;
            }
            peers[square.index() as usize] = set;
            i += 1;
        }
        k += 1;
    }
    peers
};

/// Returns the three units containing `square`: its row, column, and box.
#[must_use]
pub fn units_of(square: Square) -> [&'static Unit; 3] {
    [
        &Unit::ALL[usize::from(square.y())],
        &Unit::ALL[9 + usize::from(square.x())],
        &Unit::ALL[18 + usize::from(square.box_index())],
    ]
}

/// Returns the 20 squares that share a unit with `square`, excluding
/// `square` itself.
#[must_use]
pub fn peers_of(square: Square) -> SquareSet {
    PEERS[usize::from(square.index())]
}
