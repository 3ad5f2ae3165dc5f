//! Receipt log matcher.
//!
//! Given the RLP encoding of a transaction receipt, an event signature and the address of
//! the contract expected to emit it, [`find_matching_logs`] returns every log of the receipt
//! whose first topic equals the signature and whose address equals the emitter, in receipt
//! order.
//!
//! The receipt is untrusted input. Any framing or shape error anywhere in it aborts the
//! whole verification with [`VerifyError`]; an empty result is only returned when the receipt
//! decoded cleanly and simply contains no matching log.
//!
//! The receipt bytes are assumed to be authentic already. Inclusion in a block is checked
//! elsewhere.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod config;
mod criteria;
mod envelope;
mod error;
mod log;
mod matcher;

pub use config::VerifierConfig;
pub use criteria::MatchCriteria;
pub use envelope::{split_typed_receipt, EnvelopePolicy};
pub use error::{ErrorKind, Location, VerifyError};
pub use log::{LogEntry, LOG_FIELD_COUNT};
pub use matcher::{
    decode_receipt_logs, find_matching_logs, verify_log_emitted, LogMatcher, RECEIPT_LOGS_INDEX,
};

/// Re-export of the RLP decoder used by this crate.
pub use rlp;
