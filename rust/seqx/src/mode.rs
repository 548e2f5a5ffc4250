//! Out-of-range policy for positional operations.

use std::fmt;
use std::str::FromStr;

use seqx_common::Error;

/// Governs what a positional operation does with a position outside of the
/// sequence's valid range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// The position is reported as an [`ErrorKind::OutOfRange`](seqx_common::ErrorKind::OutOfRange)
    /// error.
    #[default]
    Strict,
    /// The position is clamped to the nearest valid boundary.
    Normalize,
    /// The operation degrades to a no-op and the source passes through unchanged.
    Ignore,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Normalize => "normalize",
            Mode::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("strict") {
            Ok(Mode::Strict)
        } else if s.eq_ignore_ascii_case("normalize") {
            Ok(Mode::Normalize)
        } else if s.eq_ignore_ascii_case("ignore") {
            Ok(Mode::Ignore)
        } else {
            Err(Error::invalid_operation(
                "parse mode",
                format!("unknown mode '{s}', expected strict, normalize or ignore"),
            ))
        }
    }
}
