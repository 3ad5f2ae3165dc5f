//! Receipt log verification for cross-chain message relays.
//!
//! Re-exports the RLP decoder as [`rlp`] and the receipt log matcher as [`receipt`]. The
//! commonly used items of both are available at the crate root.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub use receipt;
pub use rlp;

pub use receipt::{
    decode_receipt_logs, find_matching_logs, verify_log_emitted, EnvelopePolicy, ErrorKind,
    Location, LogEntry, LogMatcher, MatchCriteria, VerifierConfig, VerifyError,
};
pub use rlp::{DecodeLimits, MalformedEncoding, RlpItem, UnexpectedShape};
