//! Core definitions (error type, result alias, argument checks), relied upon by all seqx-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
