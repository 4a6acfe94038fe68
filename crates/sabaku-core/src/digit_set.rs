//! Candidate digit sets.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::digit::Digit;

/// A set of digits 1-9, backed by a 16-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively. This is the candidate set of
/// a single square during solving: it can never contain duplicates, and its
/// length ranges from 0 (a contradiction) to 9 (no information).
///
/// # Examples
///
/// ```
/// use sabaku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// A set with exactly one digit left is a decided square:
///
/// ```
/// use sabaku_core::{Digit, DigitSet};
///
/// let set = DigitSet::from_iter([Digit::D4]);
/// assert_eq!(set.as_single(), Some(Digit::D4));
/// assert_eq!(DigitSet::FULL.as_single(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing only `digit`.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: 1 << (digit.value() - 1),
        }
    }

    /// Inserts a digit. Returns `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::from_elem(digit).bits;
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a digit. Returns `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::from_elem(digit).bits;
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::from_elem(digit).bits != 0
    }

    /// Returns the number of digits in the set.
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

    /// Returns the sole digit if the set contains exactly one, else `None`.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.bits != 0 && self.bits.is_power_of_two() {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.bits.trailing_zeros() as u8 + 1;
            Some(Digit::from_value(value))
        } else {
            None
        }
    }

    /// Returns `true` if every digit of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns the digits of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Iterates over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & MASK,
        }
    }
}

impl From<Digit> for DigitSet {
    fn from(digit: Digit) -> Self {
        Self::from_elem(digit)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.bits.trailing_zeros() as u8 + 1);
        self.bits &= self.bits - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
