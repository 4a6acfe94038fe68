//! Sets of board squares.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::square::Square;

/// A set of board squares, backed by a 128-bit mask.
///
/// Bit `i` represents the square with row-major index `i`. Peer sets and
/// unit membership are represented this way so that containment tests and
/// unions are single bit operations.
///
/// # Examples
///
/// ```
/// use sabaku_core::{Square, SquareSet};
///
/// let mut set = SquareSet::new();
/// set.insert(Square::new(0, 0));
/// set.insert(Square::new(8, 8));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Square::new(0, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareSet {
    bits: u128,
}

const MASK: u128 = (1u128 << 81) - 1;

impl SquareSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 squares.
    pub const ALL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing only `square`.
    #[must_use]
    pub const fn from_elem(square: Square) -> Self {
        Self {
            bits: 1 << square.index(),
        }
    }

    /// Inserts a square. Returns `true` if it was not already present.
    pub const fn insert(&mut self, square: Square) -> bool {
        let bit = Self::from_elem(square).bits;
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a square. Returns `true` if it was present.
    pub const fn remove(&mut self, square: Square) -> bool {
        let bit = Self::from_elem(square).bits;
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains `square`.
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        self.bits & Self::from_elem(square).bits != 0
    }

    /// Returns the number of squares in the set.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn len(self) -> u8 {
        self.bits.count_ones() as u8
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the squares in ascending row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Default for SquareSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BitAnd for SquareSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for SquareSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for SquareSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = Self::new();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`], in row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Square::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
