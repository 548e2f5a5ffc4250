//! List-like positional edits over arbitrary iterators.
//!
//! These adapters turn an `Iterator<Item = T>` into an `Iterator<Item = Result<T>>`.
//! The source is pulled lazily and never restarted. Out-of-range positions are
//! handled according to [`Mode`]:
//!
//! - [`Mode::Strict`] yields a single `Err` item at the point where the violation
//!   becomes known (the first pull for a negative index, the end of the source
//!   for an index past the end), after which the adapter is exhausted.
//! - [`Mode::Normalize`] clamps the position to the nearest valid boundary.
//! - [`Mode::Ignore`] passes the source through unchanged.
//!
//! # Provided Adapters
//!
//! - [`Insert`]: inserts a value before a position.
//! - [`RemoveAt`]: removes the element at a position.
//! - [`Remove`]: removes the first element equal to a value.
//! - [`RemoveAll`]: removes every element equal to a value.

use crate::comparer::{DefaultComparer, EqualityComparer};
use crate::mode::Mode;

pub mod insert;
pub mod remove;
pub mod remove_at;

pub use insert::Insert;
pub use remove::{Remove, RemoveAll};
pub use remove_at::RemoveAt;

/// Extension trait providing list-like edits on any iterator.
pub trait ListQueryExt: Iterator + Sized {
    /// Yields `value` immediately before position `index`.
    ///
    /// The valid range is `0..=len`; `index == len` appends `value` at the end.
    /// A too-large index can only be detected once the source is exhausted, so in
    /// [`Mode::Strict`] every source element is yielded before the error.
    fn insert(self, index: isize, value: Self::Item, mode: Mode) -> Insert<Self> {
        Insert::new(self, index, value, mode)
    }

    /// Skips the element at position `index`.
    ///
    /// The valid range is `0..len`. In [`Mode::Normalize`], an index past the end
    /// removes the last element and a negative index removes the first one.
    fn remove_at(self, index: isize, mode: Mode) -> RemoveAt<Self> {
        RemoveAt::new(self, index, mode)
    }

    /// Skips the first element equal to `value`.
    ///
    /// If no element matches, [`Mode::Strict`] fails with an error naming `remove`;
    /// the other modes leave the source unchanged.
    fn remove(self, value: Self::Item, mode: Mode) -> Remove<Self, DefaultComparer>
    where
        Self::Item: PartialEq,
    {
        Remove::new(self, value, DefaultComparer, mode)
    }

    /// Like [`ListQueryExt::remove`], using `comparer` to match `value`.
    fn remove_by<C>(self, value: Self::Item, comparer: C, mode: Mode) -> Remove<Self, C>
    where
        C: EqualityComparer<Self::Item>,
    {
        Remove::new(self, value, comparer, mode)
    }

    /// Skips every element equal to `value`.
    ///
    /// If no element matches, [`Mode::Strict`] fails with an error naming `remove`;
    /// the other modes leave the source unchanged.
    fn remove_all(self, value: Self::Item, mode: Mode) -> RemoveAll<Self, DefaultComparer>
    where
        Self::Item: PartialEq,
    {
        RemoveAll::new(self, value, DefaultComparer, mode)
    }

    /// Like [`ListQueryExt::remove_all`], using `comparer` to match `value`.
    fn remove_all_by<C>(self, value: Self::Item, comparer: C, mode: Mode) -> RemoveAll<Self, C>
    where
        C: EqualityComparer<Self::Item>,
    {
        RemoveAll::new(self, value, comparer, mode)
    }
}

impl<I: Iterator> ListQueryExt for I {}
