use thiserror::Error;

/// The byte framing of the input is inconsistent with its own length prefixes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedEncoding {
    /// A prefix is truncated, overlong, non-canonical or claims more bytes than remain.
    #[error("invalid RLP framing: {0}")]
    Framing(alloy_rlp::Error),
    /// Bytes remain after the root item was decoded.
    #[error("{remaining} trailing bytes after the root item")]
    TrailingBytes {
        /// Number of bytes that were not consumed.
        remaining: usize,
    },
    /// Lists are nested deeper than the configured limit.
    #[error("list nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// Maximum depth that was configured.
        limit: usize,
    },
}

impl From<alloy_rlp::Error> for MalformedEncoding {
    fn from(error: alloy_rlp::Error) -> Self {
        Self::Framing(error)
    }
}

/// A well-framed item was accessed as something it is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UnexpectedShape {
    /// Item is a byte string where a list was expected.
    #[error("expected a list, found a byte string")]
    ExpectedList,
    /// Item is a list where a byte string was expected.
    #[error("expected a byte string, found a list")]
    ExpectedBytes,
    /// Byte string does not have the required fixed width.
    #[error("expected {expected} bytes, found {actual}")]
    WrongWidth {
        /// Required width.
        expected: usize,
        /// Width of the decoded payload.
        actual: usize,
    },
    /// List has no child at the requested index.
    #[error("missing field {index} in a list of {len} items")]
    MissingField {
        /// Requested index.
        index: usize,
        /// Number of children in the list.
        len: usize,
    },
    /// List does not have the exact number of children required.
    #[error("expected a list of {expected} items, found {actual}")]
    FieldCount {
        /// Required number of children.
        expected: usize,
        /// Number of children in the list.
        actual: usize,
    },
}
