//! List-like and statistical queries over arbitrary iterators.
//!
//! Every operation is an extension-trait method on `Iterator`, so it applies to
//! any sequence: finite or infinite, re-iterable collections or single-pass
//! producers. Nothing is buffered or restarted behind the caller's back.
//!
//! - **Positional edits**: [`ListQueryExt`] adapters (`insert`, `remove_at`,
//!   `remove`, `remove_all`). They yield `Result<T>` items, since an out-of-range
//!   position can only be detected once enough of the source has been pulled.
//!   The [`Mode`] argument selects whether such a position fails, is clamped,
//!   or turns the operation into a no-op.
//! - **Search**: [`SearchExt`] (`index_of`, `last_index_of`) with pluggable
//!   [`EqualityComparer`]s.
//! - **Statistics**: [`StatisticsExt`] percentiles (exclusive and inclusive
//!   methods), variance and standard deviation.
//! - **Fallible sequences**: [`generate::create`] and [`FallibleIteratorsExt`]
//!   (`retry`, `catch`) for iterators of `Result<T, E>`.
//!
//! # Examples
//!
//! ```
//! use seqx::{ListQueryExt, Mode, SearchExt, StatisticsExt};
//!
//! let inserted = (0..5).insert(2, 5, Mode::Strict).collect::<seqx::Result<Vec<_>>>();
//! assert_eq!(inserted.unwrap(), vec![0, 1, 5, 2, 3, 4]);
//!
//! let clamped = (0..5).insert(-1, 5, Mode::Normalize).collect::<seqx::Result<Vec<_>>>();
//! assert_eq!(clamped.unwrap(), vec![5, 0, 1, 2, 3, 4]);
//!
//! assert_eq!((0..5).index_of(&3), Some(3));
//! assert_eq!((0..5).percentile(|x| x, 0.5).unwrap(), 2.0);
//! ```

pub mod comparer;
pub mod generate;
pub mod list;
pub mod mode;
pub mod search;
pub mod stats;

pub use comparer::{DefaultComparer, EqualityComparer, FnComparer, OrdinalIgnoreCase};
pub use generate::FallibleIteratorsExt;
pub use list::ListQueryExt;
pub use mode::Mode;
pub use search::SearchExt;
pub use seqx_common::{Error, ErrorKind, Result};
pub use stats::StatisticsExt;
