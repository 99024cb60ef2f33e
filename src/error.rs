use core::fmt;

use thiserror::Error;

/// Why a constructor argument was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Bit words and bit indexes must be non-negative.
    Negative,
    /// No bit position can hold the index: it does not fit in `usize`, or the
    /// bit word needed to reach it cannot be allocated.
    OutOfRange,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Negative => f.write_str("must be non-negative"),
            Rejection::OutOfRange => f.write_str("exceeds the addressable bit index range"),
        }
    }
}

/// Errors from [`BitSet`](crate::BitSet) construction.
///
/// Set algebra, relations, accessors and iteration are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor was handed an integer it cannot encode as a bit word or bit index.
    #[error("{op}: invalid argument {value}: {rejection}")]
    InvalidArgument {
        /// Name of the constructor that refused the argument.
        op: &'static str,
        /// The offending value, rendered in decimal.
        value: String,
        rejection: Rejection,
    },
}

impl Error {
    pub(crate) fn invalid_argument(
        op: &'static str,
        value: impl fmt::Display,
        rejection: Rejection,
    ) -> Self {
        let value = value.to_string();
        log::debug!("{op}: rejecting argument {value} ({rejection})");
        Error::InvalidArgument {
            op,
            value,
            rejection,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
