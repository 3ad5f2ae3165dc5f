use alloy_primitives::{Address, B256};
use core::fmt;
use rlp::{MalformedEncoding, UnexpectedShape};
use thiserror::Error;

/// Part of the receipt in which a shape error was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Top level receipt list or its logs field.
    Receipt,
    /// Log entry at the given index within the logs field.
    Log(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receipt => f.write_str("receipt"),
            Self::Log(index) => write!(f, "log {index}"),
        }
    }
}

/// Receipt verification errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Length prefixes are inconsistent with the receipt bytes.
    #[error("malformed receipt encoding: {0}")]
    MalformedEncoding(#[from] MalformedEncoding),
    /// Receipt decoded but a field is a list where bytes were expected, has the wrong width,
    /// or is missing.
    #[error("unexpected shape in {location}: {shape}")]
    UnexpectedShape {
        /// Where the error was found.
        location: Location,
        /// What was wrong.
        shape: UnexpectedShape,
    },
    /// Receipt is well formed but no log satisfies both criteria.
    #[error("no log with signature {signature} emitted by {emitter}")]
    NoMatch {
        /// Requested event signature.
        signature: B256,
        /// Requested emitter.
        emitter: Address,
    },
}

/// Coarse classification of a [`VerifyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// See [`VerifyError::MalformedEncoding`].
    MalformedEncoding,
    /// See [`VerifyError::UnexpectedShape`].
    UnexpectedShape,
    /// See [`VerifyError::NoMatch`].
    NoMatch,
}

impl VerifyError {
    pub(crate) const fn shape(location: Location, shape: UnexpectedShape) -> Self {
        Self::UnexpectedShape { location, shape }
    }

    /// Returns the kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedEncoding(_) => ErrorKind::MalformedEncoding,
            Self::UnexpectedShape { .. } => ErrorKind::UnexpectedShape,
            Self::NoMatch { .. } => ErrorKind::NoMatch,
        }
    }

    /// Returns `true` if the receipt itself is corrupt, as opposed to merely not matching.
    pub const fn is_malformed_input(&self) -> bool {
        !matches!(self, Self::NoMatch { .. })
    }
}
