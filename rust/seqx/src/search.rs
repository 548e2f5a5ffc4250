//! Positional search over arbitrary iterators.

use crate::comparer::{DefaultComparer, EqualityComparer};

/// Extension trait for locating elements by value.
///
/// Positions are 0-based and counted from the first element of the source.
/// `None` means that no element matched.
pub trait SearchExt: Iterator + Sized {
    /// Returns the position of the first element equal to `value`.
    fn index_of(self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.index_of_by(value, DefaultComparer, 0)
    }

    /// Returns the position of the first element at or after `start_index` that
    /// `comparer` considers equal to `value`.
    ///
    /// Pulling stops at the first match, so this works on infinite sources as long
    /// as a match exists.
    fn index_of_by<C>(self, value: &Self::Item, comparer: C, start_index: usize) -> Option<usize>
    where
        C: EqualityComparer<Self::Item>,
    {
        self.enumerate()
            .skip(start_index)
            .find(|(_, item)| comparer.equals(item, value))
            .map(|(position, _)| position)
    }

    /// Returns the position of the last element equal to `value`.
    fn last_index_of(self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.last_index_of_by(value, DefaultComparer)
    }

    /// Returns the position of the last element that `comparer` considers equal
    /// to `value`.
    ///
    /// The whole source is consumed; elements are not retained.
    fn last_index_of_by<C>(self, value: &Self::Item, comparer: C) -> Option<usize>
    where
        C: EqualityComparer<Self::Item>,
    {
        self.enumerate()
            .filter(|(_, item)| comparer.equals(item, value))
            .last()
            .map(|(position, _)| position)
    }
}

impl<I: Iterator> SearchExt for I {}

#[cfg(test)]
mod tests {
    use crate::{OrdinalIgnoreCase, SearchExt};

    #[test]
    fn test_index_of() {
        assert_eq!((0..5).index_of(&-1), None);
        assert_eq!((0..5).index_of(&6), None);
        assert_eq!((0..5).index_of(&0), Some(0));
        assert_eq!((0..5).index_of(&1), Some(1));
        assert_eq!((0..).index_of(&1000), Some(1000));
    }

    #[test]
    fn test_index_of_ignore_case() {
        let a = || std::iter::repeat_n("a", 5);
        assert_eq!(a().index_of(&"A"), None);
        assert_eq!(a().index_of_by(&"A", OrdinalIgnoreCase, 0), Some(0));
        assert_eq!(a().index_of_by(&"A", OrdinalIgnoreCase, 2), Some(2));
        assert_eq!(a().index_of_by(&"A", OrdinalIgnoreCase, 5), None);
    }

    #[test]
    fn test_last_index_of() {
        assert_eq!((0..5).last_index_of(&-1), None);
        assert_eq!((0..5).last_index_of(&6), None);
        assert_eq!((0..5).last_index_of(&0), Some(0));
        assert_eq!((0..5).last_index_of(&1), Some(1));
        assert_eq!(std::iter::repeat_n(0, 5).last_index_of(&0), Some(4));
        assert_eq!(
            std::iter::repeat_n(0, 5).chain(0..5).last_index_of(&1),
            Some(6)
        );
    }

    #[test]
    fn test_last_index_of_ignore_case() {
        let a = || std::iter::repeat_n("a", 5);
        assert_eq!(a().last_index_of(&"A"), None);
        assert_eq!(a().last_index_of_by(&"A", OrdinalIgnoreCase), Some(4));
    }
}
