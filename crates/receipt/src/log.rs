use alloy_primitives::{Address, Bytes, Log, B256};
use rlp::{RlpItem, UnexpectedShape};
use std::vec::Vec;

/// Number of fields in an encoded log: address, topics and data.
pub const LOG_FIELD_COUNT: usize = 3;

/// A log entry decoded from a receipt, exactly as encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Contract that emitted the log.
    pub address: Address,
    /// Indexed topics. The first one is the event signature.
    pub topics: Vec<B256>,
    /// Opaque event data.
    pub data: Bytes,
}

impl LogEntry {
    /// Decodes a log from its RLP item.
    ///
    /// The item must be a list of exactly three fields: a 20 byte address, a non-empty list of
    /// 32 byte topics and a data byte string.
    pub fn from_rlp(item: &RlpItem) -> Result<Self, UnexpectedShape> {
        let fields = item.expect_fields(LOG_FIELD_COUNT)?;

        let topics = fields[1].as_list()?;
        // topicless logs cannot carry a signature and are rejected
        if topics.is_empty() {
            return Err(UnexpectedShape::MissingField { index: 0, len: 0 });
        }
        let topics = topics
            .iter()
            .map(RlpItem::as_b256)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            address: fields[0].as_address()?,
            topics,
            data: fields[2].as_bytes()?.clone(),
        })
    }

    /// Returns the event signature, the first topic.
    #[inline]
    pub fn signature(&self) -> Option<&B256> {
        self.topics.first()
    }
}

impl From<LogEntry> for Log {
    fn from(entry: LogEntry) -> Self {
        Log::new_unchecked(entry.address, entry.topics, entry.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};
    use rstest::rstest;

    const SIG: B256 = b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");
    const ADDR: Address = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

    fn bytes(data: &[u8]) -> RlpItem {
        RlpItem::Bytes(Bytes::copy_from_slice(data))
    }

    fn log_item(address: RlpItem, topics: RlpItem, data: RlpItem) -> RlpItem {
        RlpItem::List(vec![address, topics, data])
    }

    #[test]
    fn decodes_log() {
        let item = log_item(
            bytes(ADDR.as_slice()),
            RlpItem::List(vec![bytes(SIG.as_slice()), bytes(&[7; 32])]),
            bytes(&[1, 2]),
        );
        let log = LogEntry::from_rlp(&item).unwrap();
        assert_eq!(log.address, ADDR);
        assert_eq!(log.topics, vec![SIG, B256::repeat_byte(7)]);
        assert_eq!(log.data, Bytes::from_static(&[1, 2]));
        assert_eq!(log.signature(), Some(&SIG));

        let log = Log::from(log);
        assert_eq!(log.address, ADDR);
        assert_eq!(log.topics(), &[SIG, B256::repeat_byte(7)]);
    }

    #[rstest]
    #[case::not_a_list(bytes(&[1]), UnexpectedShape::ExpectedList)]
    #[case::two_fields(
        RlpItem::List(vec![bytes(ADDR.as_slice()), RlpItem::List(vec![bytes(SIG.as_slice())])]),
        UnexpectedShape::FieldCount { expected: 3, actual: 2 }
    )]
    #[case::no_topics(
        log_item(bytes(ADDR.as_slice()), RlpItem::List(vec![]), bytes(&[])),
        UnexpectedShape::MissingField { index: 0, len: 0 }
    )]
    #[case::short_signature(
        log_item(bytes(ADDR.as_slice()), RlpItem::List(vec![bytes(&SIG[..31])]), bytes(&[])),
        UnexpectedShape::WrongWidth { expected: 32, actual: 31 }
    )]
    #[case::short_second_topic(
        log_item(
            bytes(ADDR.as_slice()),
            RlpItem::List(vec![bytes(SIG.as_slice()), bytes(&[1; 8])]),
            bytes(&[])
        ),
        UnexpectedShape::WrongWidth { expected: 32, actual: 8 }
    )]
    #[case::topics_not_a_list(
        log_item(bytes(ADDR.as_slice()), bytes(SIG.as_slice()), bytes(&[])),
        UnexpectedShape::ExpectedList
    )]
    #[case::long_address(
        log_item(bytes(&[0xaa; 21]), RlpItem::List(vec![bytes(SIG.as_slice())]), bytes(&[])),
        UnexpectedShape::WrongWidth { expected: 20, actual: 21 }
    )]
    #[case::data_is_a_list(
        log_item(bytes(ADDR.as_slice()), RlpItem::List(vec![bytes(SIG.as_slice())]), RlpItem::List(vec![])),
        UnexpectedShape::ExpectedBytes
    )]
    fn rejects_malformed_log(#[case] item: RlpItem, #[case] expected: UnexpectedShape) {
        assert_eq!(LogEntry::from_rlp(&item), Err(expected));
    }
}
