use crate::{split_typed_receipt, Location, LogEntry, MatchCriteria, VerifierConfig, VerifyError};
use alloy_primitives::{Address, B256};
use rlp::RlpItem;
use std::vec::Vec;
use tracing::{debug, trace};

/// Index of the logs list within a receipt: status, cumulative gas used, bloom, logs.
pub const RECEIPT_LOGS_INDEX: usize = 3;

/// Returns every log in `receipt` emitted by `emitter` whose first topic is `signature`.
///
/// Logs are returned in receipt order, duplicates included. An empty vector means the receipt
/// is well formed but nothing matched.
pub fn find_matching_logs(
    signature: B256,
    emitter: Address,
    receipt: &[u8],
) -> Result<Vec<LogEntry>, VerifyError> {
    LogMatcher::new(MatchCriteria::new(signature, emitter)).find(receipt)
}

/// Same as [`find_matching_logs`] but fails with [`VerifyError::NoMatch`] if nothing matched.
pub fn verify_log_emitted(
    signature: B256,
    emitter: Address,
    receipt: &[u8],
) -> Result<Vec<LogEntry>, VerifyError> {
    LogMatcher::new(MatchCriteria::new(signature, emitter)).verify(receipt)
}

/// Decodes every log in `receipt` without filtering.
pub fn decode_receipt_logs(receipt: &[u8]) -> Result<Vec<LogEntry>, VerifyError> {
    decode_logs(receipt, &VerifierConfig::default())
}

/// Matches receipts against fixed criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogMatcher {
    criteria: MatchCriteria,
    config: VerifierConfig,
}

impl LogMatcher {
    /// Creates a matcher with the default configuration.
    pub fn new(criteria: MatchCriteria) -> Self {
        Self {
            criteria,
            config: VerifierConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the criteria.
    pub fn criteria(&self) -> &MatchCriteria {
        &self.criteria
    }

    /// Returns the configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Returns the matching logs of `receipt`, possibly none.
    ///
    /// Every log is decoded and checked before filtering, so a malformed log fails the call
    /// even if it would not have matched.
    pub fn find(&self, receipt: &[u8]) -> Result<Vec<LogEntry>, VerifyError> {
        let logs = decode_logs(receipt, &self.config)?;
        let total = logs.len();
        let matched: Vec<LogEntry> = logs
            .into_iter()
            .filter(|log| self.criteria.matches(log))
            .collect();

        debug!(
            target: "logproof::receipt",
            signature = %self.criteria.signature,
            emitter = %self.criteria.emitter,
            total,
            matched = matched.len(),
            "Matched receipt logs"
        );
        Ok(matched)
    }

    /// Returns the matching logs of `receipt`, failing with [`VerifyError::NoMatch`] if there
    /// are none.
    pub fn verify(&self, receipt: &[u8]) -> Result<Vec<LogEntry>, VerifyError> {
        let matched = self.find(receipt)?;
        if matched.is_empty() {
            return Err(VerifyError::NoMatch {
                signature: self.criteria.signature,
                emitter: self.criteria.emitter,
            });
        }
        Ok(matched)
    }
}

fn decode_logs(receipt: &[u8], config: &VerifierConfig) -> Result<Vec<LogEntry>, VerifyError> {
    let payload = config.envelope.receipt_payload(receipt);
    if payload.len() != receipt.len() {
        trace!(
            target: "logproof::receipt",
            ty = ?split_typed_receipt(receipt).0,
            "Unwrapped typed receipt"
        );
    }

    let root = RlpItem::decode_with_limits(payload, config.limits).inspect_err(|err| {
        debug!(target: "logproof::receipt", %err, len = receipt.len(), "Rejected receipt encoding")
    })?;

    // the receipt may carry more than four fields, only the logs are used
    let logs = root
        .field(RECEIPT_LOGS_INDEX)
        .and_then(RlpItem::as_list)
        .map_err(|shape| VerifyError::shape(Location::Receipt, shape))?;

    logs.iter()
        .enumerate()
        .map(|(index, item)| {
            let log = LogEntry::from_rlp(item).map_err(|shape| {
                debug!(target: "logproof::receipt", index, %shape, "Rejected receipt log");
                VerifyError::shape(Location::Log(index), shape)
            })?;
            trace!(
                target: "logproof::receipt",
                index,
                address = %log.address,
                topics = log.topics.len(),
                data_len = log.data.len(),
                "Decoded log"
            );
            Ok(log)
        })
        .collect()
}
