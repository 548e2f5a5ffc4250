//! Producing and recovering fallible sequences.
//!
//! A fallible sequence is an iterator of `Result<T, E>`. An `Err` item is treated
//! as the failure of the whole sequence: the adapters here either restart the
//! source ([`Retry`]) or end it ([`Catch`]) when one shows up.

/// Creates an infinite sequence that calls `factory` on every pull.
///
/// # Examples
///
/// ```
/// use seqx::generate::create;
///
/// let mut next = 0;
/// let evens: Vec<Result<i32, ()>> = create(|| {
///     next += 2;
///     Ok(next)
/// })
/// .take(3)
/// .collect();
/// assert_eq!(evens, vec![Ok(2), Ok(4), Ok(6)]);
/// ```
pub fn create<T, E, F>(factory: F) -> Create<F>
where
    F: FnMut() -> Result<T, E>,
{
    Create { factory }
}

/// Infinite sequence produced by a factory. Created by [`create`].
#[derive(Debug, Clone)]
pub struct Create<F> {
    factory: F,
}

impl<T, E, F> Iterator for Create<F>
where
    F: FnMut() -> Result<T, E>,
{
    type Item = Result<T, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.factory)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Iterator adapter that restarts a failed sequence from a fresh clone of it.
///
/// Behavior
/// - Each attempt iterates a clone of the original source.
/// - When an attempt yields an `Err` accepted by the predicate and attempts
///   remain, the error is discarded and a new attempt starts from the beginning.
///   Items already yielded by the failed attempt are not retracted, so they are
///   produced again.
/// - An `Err` rejected by the predicate is yielded at once, then the adapter ends.
/// - The error of the last attempt is yielded, then the adapter ends.
/// - Zero attempts yield nothing.
#[derive(Debug, Clone)]
pub struct Retry<I, P> {
    source: I,
    current: I,
    retryable: P,
    /// 1-based number of the running attempt.
    attempt: usize,
    attempts: usize,
    done: bool,
}

impl<I: Clone, P> Retry<I, P> {
    pub fn new(source: I, attempts: usize, retryable: P) -> Self {
        Retry {
            current: source.clone(),
            source,
            retryable,
            attempt: 1,
            attempts,
            done: attempts == 0,
        }
    }
}

impl<T, E, I, P> Iterator for Retry<I, P>
where
    I: Iterator<Item = Result<T, E>> + Clone,
    P: FnMut(&E) -> bool,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.current.next() {
                Some(Err(e)) if self.attempt < self.attempts && (self.retryable)(&e) => {
                    self.attempt += 1;
                    log::debug!("retry: attempt {} of {}", self.attempt, self.attempts);
                    self.current = self.source.clone();
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok(item)) => return Some(Ok(item)),
                None => self.done = true,
            }
        }
        None
    }
}

/// Iterator adapter that ends a sequence at its first error.
///
/// The handler inspects the error and decides its fate: `true` yields the error
/// (after which the adapter ends), `false` swallows it and ends the sequence
/// quietly.
#[derive(Debug, Clone)]
pub struct Catch<I, F> {
    inner: I,
    handler: F,
    done: bool,
}

impl<I, F> Catch<I, F> {
    pub fn new(inner: I, handler: F) -> Self {
        Catch {
            inner,
            handler,
            done: false,
        }
    }
}

impl<T, E, I, F> Iterator for Catch<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    F: FnMut(&E) -> bool,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(item)) => Some(Ok(item)),
            Some(Err(e)) => {
                self.done = true;
                if (self.handler)(&e) {
                    Some(Err(e))
                } else {
                    log::trace!("catch: error swallowed, sequence ended");
                    None
                }
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Extension trait for iterators of `Result<T, E>`.
pub trait FallibleIteratorsExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Restarts the sequence after an error, for at most `attempts` attempts in total.
    ///
    /// See [`Retry`] for details.
    fn retry(self, attempts: usize) -> Retry<Self, fn(&E) -> bool>
    where
        Self: Clone,
    {
        let retry_any: fn(&E) -> bool = |_| true;
        self.retry_if(attempts, retry_any)
    }

    /// Restarts the sequence after an error accepted by `retryable`, for at most
    /// `attempts` attempts in total. Any other error ends the sequence.
    fn retry_if<P>(self, attempts: usize, retryable: P) -> Retry<Self, P>
    where
        Self: Clone,
        P: FnMut(&E) -> bool,
    {
        Retry::new(self, attempts, retryable)
    }

    /// Ends the sequence at its first error, letting `handler` decide whether that
    /// error is propagated (`true`) or swallowed (`false`).
    fn catch<F>(self, handler: F) -> Catch<Self, F>
    where
        F: FnMut(&E) -> bool,
    {
        Catch::new(self, handler)
    }
}

impl<T, E, I> FallibleIteratorsExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}
