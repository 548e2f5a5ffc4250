//! An iterator adapter that inserts a value at a position.

use seqx_common::{Error, Result};

use crate::mode::Mode;

/// Iterator adapter that yields the source with one extra value inserted
/// before a given position.
///
/// Behavior
/// - Elements before `index` pass through unchanged, then the inserted value,
///   then the rest of the source.
/// - `index == len` appends the value after the last element.
/// - A negative `index` is known to be invalid up front: [`Mode::Strict`] fails on
///   the first pull, [`Mode::Normalize`] inserts at the front, [`Mode::Ignore`]
///   passes the source through.
/// - An `index` past the end is detected when the source runs out:
///   [`Mode::Strict`] yields the error after the last element,
///   [`Mode::Normalize`] appends the value, [`Mode::Ignore`] drops it.
#[derive(Debug, Clone)]
pub struct Insert<I: Iterator> {
    inner: I,
    /// Target position, counted in source elements.
    index: usize,
    /// The value still waiting to be inserted.
    value: Option<I::Item>,
    /// Number of source elements yielded so far.
    position: usize,
    mode: Mode,
    /// Error to report on the first pull.
    pending: Option<Error>,
    done: bool,
}

impl<I: Iterator> Insert<I> {
    /// Creates a new `Insert` adapter.
    pub fn new(inner: I, index: isize, value: I::Item, mode: Mode) -> Self {
        let mut insert = Insert {
            inner,
            index: 0,
            value: Some(value),
            position: 0,
            mode,
            pending: None,
            done: false,
        };
        match usize::try_from(index) {
            Ok(index) => insert.index = index,
            Err(_) => match mode {
                Mode::Strict => {
                    insert.value = None;
                    insert.pending = Some(Error::out_of_range(
                        "index",
                        format!("{index} is negative"),
                    ));
                }
                Mode::Normalize => log::trace!("insert: clamping index {index} to 0"),
                Mode::Ignore => {
                    log::trace!("insert: ignoring negative index {index}");
                    insert.value = None;
                }
            },
        }
        insert
    }

    fn finish(&mut self) -> Option<Result<I::Item>> {
        self.done = true;
        let value = self.value.take()?;
        match self.mode {
            Mode::Strict => Some(Err(Error::out_of_range(
                "index",
                format!("{} is greater than length {}", self.index, self.position),
            ))),
            Mode::Normalize => {
                log::trace!(
                    "insert: clamping index {} to length {}",
                    self.index,
                    self.position
                );
                Some(Ok(value))
            }
            Mode::Ignore => {
                log::trace!(
                    "insert: ignoring index {} past length {}",
                    self.index,
                    self.position
                );
                None
            }
        }
    }
}

impl<I: Iterator> Iterator for Insert<I> {
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(e) = self.pending.take() {
            self.done = true;
            return Some(Err(e));
        }
        if self.position == self.index {
            if let Some(value) = self.value.take() {
                return Some(Ok(value));
            }
        }
        match self.inner.next() {
            Some(item) => {
                self.position += 1;
                Some(Ok(item))
            }
            None => self.finish(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if self.pending.is_some() {
            return (1, Some(1));
        }
        let (lower, upper) = self.inner.size_hint();
        let extra = usize::from(self.value.is_some());
        (lower, upper.and_then(|n| n.checked_add(extra)))
    }
}
