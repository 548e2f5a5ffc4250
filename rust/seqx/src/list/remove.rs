//! Iterator adapters that remove elements equal to a value.
use seqx_common::{Error, Result};

use crate::comparer::EqualityComparer;
use crate::mode::Mode;

/// Reports a value that matched nothing, according to `mode`.
fn not_found<T>(mode: Mode) -> Option<Result<T>> {
    match mode {
        Mode::Strict => Some(Err(Error::out_of_range(
            "remove",
            "no element of the sequence matches the value",
        ))),
        Mode::Normalize | Mode::Ignore => {
            log::trace!("remove: value not found, source left unchanged (mode {mode})");
            None
        }
    }
}

/// Iterator adapter that skips the first element matching a value.
///
/// Elements are matched with an [`EqualityComparer`]. Whether a match exists is
/// only known once the source is exhausted, so [`Mode::Strict`] yields its error
/// after the last element. [`Mode::Normalize`] and [`Mode::Ignore`] have no valid
/// position to fall back to and leave the source unchanged.
#[derive(Debug, Clone)]
pub struct Remove<I: Iterator, C> {
    inner: I,
    value: I::Item,
    comparer: C,
    mode: Mode,
    removed: bool,
    done: bool,
}

impl<I, C> Remove<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    /// Creates a new `Remove` adapter.
    pub fn new(inner: I, value: I::Item, comparer: C, mode: Mode) -> Self {
        Self {
            inner,
            value,
            comparer,
            mode,
            removed: false,
            done: false,
        }
    }
}

impl<I, C> Iterator for Remove<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for item in self.inner.by_ref() {
            if !self.removed && self.comparer.equals(&item, &self.value) {
                self.removed = true;
                continue;
            }
            return Some(Ok(item));
        }
        self.done = true;
        if self.removed {
            None
        } else {
            not_found(self.mode)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.inner.size_hint();
        if self.removed {
            (lower, upper)
        } else {
            (
                lower.saturating_sub(1),
                upper.and_then(|n| n.checked_add(1)),
            )
        }
    }
}

/// Iterator adapter that skips every element matching a value.
///
/// The scan covers the whole logical stream, whatever it is composed of (for
/// example a `chain` of several sources). If nothing matched by the end,
/// [`Mode::Strict`] yields an error naming `remove`; the other modes leave the
/// source unchanged.
#[derive(Debug, Clone)]
pub struct RemoveAll<I: Iterator, C> {
    inner: I,
    value: I::Item,
    comparer: C,
    mode: Mode,
    found: bool,
    done: bool,
}

impl<I, C> RemoveAll<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    /// Creates a new `RemoveAll` adapter.
    pub fn new(inner: I, value: I::Item, comparer: C, mode: Mode) -> Self {
        Self {
            inner,
            value,
            comparer,
            mode,
            found: false,
            done: false,
        }
    }
}

impl<I, C> Iterator for RemoveAll<I, C>
where
    I: Iterator,
    C: EqualityComparer<I::Item>,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for item in self.inner.by_ref() {
            if self.comparer.equals(&item, &self.value) {
                self.found = true;
            } else {
                return Some(Ok(item));
            }
        }
        self.done = true;
        if self.found {
            None
        } else {
            not_found(self.mode)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (_, upper) = self.inner.size_hint();
        let extra = usize::from(!self.found);
        (0, upper.and_then(|n| n.checked_add(extra)))
    }
}
