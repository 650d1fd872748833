//! Domain alphabets and candidate sets.
//!
//! An [`Alphabet`] is the ordered list of single-character symbols every
//! variable of a problem draws its value from. A [`SymbolSet`] is a set of
//! positions in that alphabet, stored as a 64-bit mask.
//!
//! # Examples
//!
//! ```
//! use deduce_core::{Alphabet, SymbolSet};
//!
//! let alphabet = Alphabet::from_chars("RGB")?;
//! let mut set = alphabet.full();
//! set.remove(alphabet.index_of('G').unwrap());
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(alphabet.format_set(set), "RB");
//! # Ok::<(), deduce_core::ProblemError>(())
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::ProblemError;

/// A set of alphabet positions.
///
/// Bit `i` is set when the `i`-th symbol of the owning [`Alphabet`] is still a
/// candidate. Iteration yields positions in ascending order, which is the
/// alphabet order.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSet {
    bits: u64,
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl SymbolSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the set containing positions `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`Alphabet::MAX_LEN`].
    #[must_use]
    pub const fn full(len: usize) -> Self {
        assert!(len <= Alphabet::MAX_LEN, "symbol set holds at most 64 symbols");
        if len == Alphabet::MAX_LEN {
            Self { bits: u64::MAX }
        } else {
            Self {
                bits: (1u64 << len) - 1,
            }
        }
    }

    /// Returns the set containing only `index`.
    #[must_use]
    pub const fn from_elem(index: u8) -> Self {
        Self {
            bits: 1 << check(index),
        }
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Returns the number of symbols in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no symbol.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the only member if the set has exactly one.
    #[must_use]
    pub const fn as_single(self) -> Option<u8> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        Some(index)
    }

    /// Returns `true` if `index` is in the set.
    #[must_use]
    pub const fn contains(self, index: u8) -> bool {
        self.bits & (1 << check(index)) != 0
    }

    /// Inserts `index`, returning `true` if it was not present.
    pub fn insert(&mut self, index: u8) -> bool {
        let before = self.bits;
        self.bits |= 1 << check(index);
        before != self.bits
    }

    /// Removes `index`, returning `true` if it was present.
    pub fn remove(&mut self, index: u8) -> bool {
        let before = self.bits;
        self.bits &= !(1 << check(index));
        before != self.bits
    }

    /// Returns the symbols in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the symbols in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the symbols in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns `true` if every symbol of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterates over the members in ascending order.
    #[must_use]
    pub const fn iter(self) -> SymbolSetIter {
        SymbolSetIter { bits: self.bits }
    }
}

const fn check(index: u8) -> u8 {
    assert!(
        (index as usize) < Alphabet::MAX_LEN,
        "symbol index out of range"
    );
    index
}

impl BitOr for SymbolSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for SymbolSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for SymbolSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAndAssign for SymbolSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<u8> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl IntoIterator for SymbolSet {
    type Item = u8;
    type IntoIter = SymbolSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`SymbolSet`], lowest index first.
#[derive(Debug, Clone)]
pub struct SymbolSetIter {
    bits: u64,
}

impl Iterator for SymbolSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SymbolSetIter {}
impl FusedIterator for SymbolSetIter {}

/// The ordered, duplicate-free set of symbols shared by every variable of a
/// problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Largest alphabet a [`SymbolSet`] can represent.
    pub const MAX_LEN: usize = 64;

    /// Builds an alphabet from a list of symbols, each of which must be
    /// exactly one character.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError`] if the list is empty, an entry is not a single
    /// character, an entry repeats, or there are more than
    /// [`MAX_LEN`](Self::MAX_LEN) entries.
    pub fn new<I, S>(symbols: I) -> Result<Self, ProblemError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = Vec::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            let mut it = symbol.chars();
            let (Some(c), None) = (it.next(), it.next()) else {
                return Err(ProblemError::MultiSymbolValue {
                    symbol: symbol.to_owned(),
                });
            };
            chars.push(c);
        }
        Self::from_vec(chars)
    }

    /// Builds an alphabet where every character of `symbols` is one symbol.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new), except that multi-character entries
    /// cannot occur.
    pub fn from_chars(symbols: &str) -> Result<Self, ProblemError> {
        Self::from_vec(symbols.chars().collect())
    }

    fn from_vec(symbols: Vec<char>) -> Result<Self, ProblemError> {
        if symbols.is_empty() {
            return Err(ProblemError::EmptyAlphabet);
        }
        if symbols.len() > Self::MAX_LEN {
            return Err(ProblemError::AlphabetTooLarge {
                len: symbols.len(),
                max: Self::MAX_LEN,
            });
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(ProblemError::DuplicateSymbol { symbol: *c });
            }
        }
        Ok(Self { symbols })
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: construction rejects empty alphabets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols in alphabet order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol at `index`, if any.
    #[must_use]
    pub fn symbol(&self, index: u8) -> Option<char> {
        self.symbols.get(usize::from(index)).copied()
    }

    /// Returns the position of `symbol`, if it belongs to the alphabet.
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&c| c == symbol)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Returns the set of every symbol.
    #[must_use]
    pub fn full(&self) -> SymbolSet {
        SymbolSet::full(self.symbols.len())
    }

    /// Converts a string of symbols into a set.
    ///
    /// # Errors
    ///
    /// Returns the first character that is not part of the alphabet.
    pub fn parse_set(&self, symbols: &str) -> Result<SymbolSet, char> {
        symbols
            .chars()
            .map(|c| self.index_of(c).ok_or(c))
            .collect()
    }

    /// Formats a set as its symbols in alphabet order.
    #[must_use]
    pub fn format_set(&self, set: SymbolSet) -> String {
        set.iter().filter_map(|i| self.symbol(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_full_set_sizes() {
        assert_eq!(SymbolSet::full(0), SymbolSet::EMPTY);
        assert_eq!(SymbolSet::full(3).len(), 3);
        assert_eq!(SymbolSet::full(64).len(), 64);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(SymbolSet::from_elem(5).as_single(), Some(5));
        assert_eq!(SymbolSet::EMPTY.as_single(), None);
        assert_eq!(SymbolSet::full(2).as_single(), None);
    }

    #[test]
    fn test_insert_remove_report_change() {
        let mut set = SymbolSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let set = SymbolSet::from_iter([9, 1, 5, 3]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_set_operations() {
        let a = SymbolSet::from_iter([1, 2, 3]);
        let b = SymbolSet::from_iter([2, 3, 4]);

        assert_eq!(a | b, SymbolSet::from_iter([1, 2, 3, 4]));
        assert_eq!(a & b, SymbolSet::from_iter([2, 3]));
        assert_eq!(a.difference(b), SymbolSet::from_elem(1));
        assert!((a & b).is_subset(a));
        assert!(!a.is_subset(b));
    }

    #[test]
    #[should_panic(expected = "symbol index out of range")]
    fn test_rejects_index_64() {
        let mut set = SymbolSet::new();
        set.insert(64);
    }

    #[test]
    fn test_alphabet_rejects_multi_symbol_entry() {
        assert_eq!(
            Alphabet::new(["R", "GB"]),
            Err(ProblemError::MultiSymbolValue {
                symbol: "GB".to_owned()
            })
        );
        assert_eq!(
            Alphabet::new(["R", ""]),
            Err(ProblemError::MultiSymbolValue {
                symbol: String::new()
            })
        );
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        assert_eq!(
            Alphabet::from_chars("RGR"),
            Err(ProblemError::DuplicateSymbol { symbol: 'R' })
        );
    }

    #[test]
    fn test_alphabet_rejects_empty_and_oversized() {
        assert_eq!(Alphabet::from_chars(""), Err(ProblemError::EmptyAlphabet));

        let too_many: String = (0..65u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert_eq!(
            Alphabet::from_chars(&too_many),
            Err(ProblemError::AlphabetTooLarge { len: 65, max: 64 })
        );
    }

    #[test]
    fn test_parse_and_format() {
        let alphabet = Alphabet::from_chars("123456789").unwrap();
        let set = alphabet.parse_set("931").unwrap();
        assert_eq!(alphabet.format_set(set), "139");
        assert_eq!(alphabet.parse_set("1x"), Err('x'));
    }

    proptest! {
        #[test]
        fn test_len_matches_iteration(bits in any::<u64>()) {
            let set: SymbolSet = (0..64u8).filter(|i| bits & (1 << i) != 0).collect();
            prop_assert_eq!(set.bits(), bits);
            prop_assert_eq!(set.len(), set.iter().count());
        }
    }
}
