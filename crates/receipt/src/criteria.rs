use crate::LogEntry;
use alloy_primitives::{keccak256, Address, B256};

/// Event signature and emitter a log has to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchCriteria {
    /// Expected first topic of the log.
    pub signature: B256,
    /// Expected address of the emitting contract.
    pub emitter: Address,
}

impl MatchCriteria {
    /// Creates criteria from a raw signature hash and an emitter.
    pub const fn new(signature: B256, emitter: Address) -> Self {
        Self { signature, emitter }
    }

    /// Creates criteria from an event declaration such as
    /// `Transfer(address,address,uint256)`, hashing it with keccak256.
    pub fn from_event(declaration: &str, emitter: Address) -> Self {
        Self::new(keccak256(declaration.as_bytes()), emitter)
    }

    /// Returns `true` if the log was emitted by the expected contract with the expected
    /// signature. Both have to match.
    #[inline]
    pub fn matches(&self, log: &LogEntry) -> bool {
        log.address == self.emitter && log.signature() == Some(&self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, Bytes};

    const TRANSFER: B256 =
        b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");
    const TOKEN: Address = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

    #[test]
    fn from_event_hashes_declaration() {
        let criteria = MatchCriteria::from_event("Transfer(address,address,uint256)", TOKEN);
        assert_eq!(criteria, MatchCriteria::new(TRANSFER, TOKEN));
    }

    #[test]
    fn requires_signature_and_emitter() {
        let criteria = MatchCriteria::new(TRANSFER, TOKEN);
        let log = LogEntry {
            address: TOKEN,
            topics: vec![TRANSFER, B256::ZERO],
            data: Bytes::new(),
        };
        assert!(criteria.matches(&log));

        let other_emitter = LogEntry {
            address: Address::ZERO,
            ..log.clone()
        };
        assert!(!criteria.matches(&other_emitter));

        // signature only counts in first position
        let other_signature = LogEntry {
            topics: vec![B256::ZERO, TRANSFER],
            ..log.clone()
        };
        assert!(!criteria.matches(&other_signature));

        let no_topics = LogEntry {
            topics: vec![],
            ..log
        };
        assert!(!criteria.matches(&no_topics));
    }
}
