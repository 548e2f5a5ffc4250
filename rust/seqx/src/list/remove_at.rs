//! An iterator adapter that removes the element at a position.

use std::iter::Peekable;

use seqx_common::{Error, Result};

use crate::mode::Mode;

/// Iterator adapter that skips the element at a given position.
///
/// Behavior
/// - A negative `index`: [`Mode::Strict`] fails on the first pull,
///   [`Mode::Normalize`] removes the first element, [`Mode::Ignore`] passes the
///   source through.
/// - An `index` at or past the end is detected when the source runs out:
///   [`Mode::Strict`] yields the error after the last element,
///   [`Mode::Ignore`] yields nothing more, and [`Mode::Normalize`] drops the last
///   element. Recognizing the last element takes a one-element lookahead, which is
///   only performed in [`Mode::Normalize`].
/// - An empty source never fails in [`Mode::Normalize`].
pub struct RemoveAt<I: Iterator> {
    inner: Peekable<I>,
    /// Position to skip; `None` when the source passes through unchanged.
    target: Option<usize>,
    /// Number of source elements pulled so far.
    position: usize,
    mode: Mode,
    /// Error to report on the first pull.
    pending: Option<Error>,
    done: bool,
}

impl<I> Clone for RemoveAt<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        RemoveAt {
            inner: self.inner.clone(),
            target: self.target,
            position: self.position,
            mode: self.mode,
            pending: self.pending.clone(),
            done: self.done,
        }
    }
}

impl<I> std::fmt::Debug for RemoveAt<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoveAt")
            .field("inner", &self.inner)
            .field("target", &self.target)
            .field("position", &self.position)
            .field("mode", &self.mode)
            .field("pending", &self.pending)
            .field("done", &self.done)
            .finish()
    }
}

impl<I: Iterator> RemoveAt<I> {
    /// Creates a new `RemoveAt` adapter.
    pub fn new(inner: I, index: isize, mode: Mode) -> Self {
        let mut pending = None;
        let target = match usize::try_from(index) {
            Ok(index) => Some(index),
            Err(_) => match mode {
                Mode::Strict => {
                    pending = Some(Error::out_of_range("index", format!("{index} is negative")));
                    None
                }
                Mode::Normalize => {
                    log::trace!("remove_at: clamping index {index} to 0");
                    Some(0)
                }
                Mode::Ignore => {
                    log::trace!("remove_at: ignoring negative index {index}");
                    None
                }
            },
        };
        RemoveAt {
            inner: inner.peekable(),
            target,
            position: 0,
            mode,
            pending,
            done: false,
        }
    }

    fn finish(&mut self) -> Option<Result<I::Item>> {
        self.done = true;
        match self.target {
            Some(index) if index >= self.position => match self.mode {
                Mode::Strict => Some(Err(Error::out_of_range(
                    "index",
                    format!("{index} is not less than length {}", self.position),
                ))),
                _ => {
                    log::trace!(
                        "remove_at: index {index} past length {}, mode {}",
                        self.position,
                        self.mode
                    );
                    None
                }
            },
            _ => None,
        }
    }
}

impl<I: Iterator> Iterator for RemoveAt<I> {
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(e) = self.pending.take() {
            self.done = true;
            return Some(Err(e));
        }
        loop {
            let Some(item) = self.inner.next() else {
                return self.finish();
            };
            let position = self.position;
            self.position += 1;
            let target = self.target;
            match target {
                Some(index) if position == index => {
                    self.target = None;
                    continue;
                }
                Some(index)
                    if position < index
                        && self.mode == Mode::Normalize
                        && self.inner.peek().is_none() =>
                {
                    log::trace!("remove_at: clamping index {index} to last position {position}");
                    self.target = None;
                    self.done = true;
                    return None;
                }
                _ => return Some(Ok(item)),
            }
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
        match self.target {
            Some(_) => (
                lower.saturating_sub(1),
                upper.and_then(|n| n.checked_add(1)),
            ),
            None => (lower, upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ListQueryExt, Mode, Result};

    fn remove_at(index: isize, mode: Mode) -> Result<Vec<i32>> {
        (0..5).remove_at(index, mode).collect()
    }

    #[test]
    fn test_remove_at_strict() {
        assert_eq!(remove_at(0, Mode::Strict).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(remove_at(1, Mode::Strict).unwrap(), vec![0, 2, 3, 4]);
        assert_eq!(remove_at(2, Mode::Strict).unwrap(), vec![0, 1, 3, 4]);
        assert_eq!(remove_at(3, Mode::Strict).unwrap(), vec![0, 1, 2, 4]);
        assert_eq!(remove_at(4, Mode::Strict).unwrap(), vec![0, 1, 2, 3]);
        for index in [-1, 5, 6] {
            assert_eq!(
                remove_at(index, Mode::Strict).unwrap_err().param_name(),
                Some("index")
            );
        }
    }

    #[test]
    fn test_remove_at_normalize() {
        assert_eq!(remove_at(-1, Mode::Normalize).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(remove_at(0, Mode::Normalize).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(remove_at(2, Mode::Normalize).unwrap(), vec![0, 1, 3, 4]);
        assert_eq!(remove_at(4, Mode::Normalize).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(remove_at(5, Mode::Normalize).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(remove_at(6, Mode::Normalize).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_at_ignore() {
        assert_eq!(remove_at(-1, Mode::Ignore).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(remove_at(0, Mode::Ignore).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(remove_at(4, Mode::Ignore).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(remove_at(5, Mode::Ignore).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(remove_at(6, Mode::Ignore).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_at_empty() {
        for mode in [Mode::Normalize, Mode::Ignore] {
            let v: Vec<i32> = std::iter::empty::<i32>()
                .remove_at(3, mode)
                .collect::<Result<_>>()
                .unwrap();
            assert!(v.is_empty());
        }
        let r: Result<Vec<i32>> = std::iter::empty::<i32>().remove_at(0, Mode::Strict).collect();
        assert!(r.unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_remove_at_clone_restarts() {
        let it = (0..4).remove_at(1, Mode::Strict);
        let mut fork = it.clone();
        assert_eq!(fork.next().unwrap().unwrap(), 0);
        assert_eq!(fork.next().unwrap().unwrap(), 2);
        assert_eq!(it.collect::<Result<Vec<_>>>().unwrap(), vec![0, 2, 3]);
        assert_eq!(fork.collect::<Result<Vec<_>>>().unwrap(), vec![3]);
    }

    #[test]
    fn test_remove_at_infinite() {
        let head: Vec<u64> = (0u64..)
            .remove_at(1, Mode::Normalize)
            .take(4)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(head, vec![0, 2, 3, 4]);
    }
}
