//! Equality comparers used by the search and removal operations.
//!
//! A comparer decides whether two elements are "the same" for the purpose of a
//! query. [`DefaultComparer`] falls back to `PartialEq`; [`OrdinalIgnoreCase`]
//! compares text per character without regard to case; [`FnComparer`] adapts an
//! arbitrary closure.

use itertools::{EitherOrBoth, Itertools};

/// Decides whether two values of type `T` are equal.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T, C> EqualityComparer<T> for &C
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }
}

/// Natural equality, as defined by `PartialEq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultComparer {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Case-insensitive comparison of text, character by character.
///
/// Two strings are equal when they have the same number of characters and each
/// pair of characters is equal after upper-case mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalIgnoreCase;

impl<T: AsRef<str> + ?Sized> EqualityComparer<T> for OrdinalIgnoreCase {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        str_ignore_case_equal(left.as_ref(), right.as_ref())
    }
}

/// Wraps a closure `Fn(&T, &T) -> bool` as a comparer.
#[derive(Debug, Clone, Copy)]
pub struct FnComparer<F>(pub F);

impl<T, F> EqualityComparer<T> for FnComparer<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.0)(left, right)
    }
}

/// States whether `s1` and `s2` are equal when every character is mapped to upper case.
pub fn str_ignore_case_equal(s1: &str, s2: &str) -> bool {
    s1.chars().zip_longest(s2.chars()).all(|eob| match eob {
        EitherOrBoth::Both(c1, c2) => c1 == c2 || c1.to_uppercase().eq(c2.to_uppercase()),
        _ => false,
    })
}
