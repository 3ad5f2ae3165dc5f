//! Decoded RLP item tree.

use crate::{decode, DecodeLimits, MalformedEncoding, UnexpectedShape};
use alloy_primitives::{hex, Address, Bytes, B256};
use alloy_rlp::{BufMut, Encodable, Header};
use core::fmt;
use std::vec::Vec;

/// A single decoded RLP item: either a byte string or a list of items.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RlpItem {
    /// Byte string payload, without its prefix.
    Bytes(Bytes),
    /// Ordered list of child items.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Decodes `input` as exactly one item using [`DecodeLimits::default`].
    pub fn decode(input: &[u8]) -> Result<Self, MalformedEncoding> {
        Self::decode_with_limits(input, DecodeLimits::default())
    }

    /// Decodes `input` as exactly one item.
    pub fn decode_with_limits(
        input: &[u8],
        limits: DecodeLimits,
    ) -> Result<Self, MalformedEncoding> {
        decode::decode_root(input, limits)
    }

    /// Returns `true` if the item is a list.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the children of a list.
    #[inline]
    pub fn as_list(&self) -> Result<&[RlpItem], UnexpectedShape> {
        match self {
            Self::List(items) => Ok(items),
            Self::Bytes(_) => Err(UnexpectedShape::ExpectedList),
        }
    }

    /// Consumes the item and returns the children of a list.
    pub fn into_list(self) -> Result<Vec<RlpItem>, UnexpectedShape> {
        match self {
            Self::List(items) => Ok(items),
            Self::Bytes(_) => Err(UnexpectedShape::ExpectedList),
        }
    }

    /// Returns the raw payload of a byte string.
    #[inline]
    pub fn as_bytes(&self) -> Result<&Bytes, UnexpectedShape> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::List(_) => Err(UnexpectedShape::ExpectedBytes),
        }
    }

    /// Returns the payload of a byte string that is exactly `N` bytes long.
    pub fn as_fixed<const N: usize>(&self) -> Result<[u8; N], UnexpectedShape> {
        let bytes = self.as_bytes()?;
        <[u8; N]>::try_from(&bytes[..]).map_err(|_| UnexpectedShape::WrongWidth {
            expected: N,
            actual: bytes.len(),
        })
    }

    /// Returns the payload of a 32 byte string.
    #[inline]
    pub fn as_b256(&self) -> Result<B256, UnexpectedShape> {
        self.as_fixed().map(B256::new)
    }

    /// Returns the payload of a 20 byte string.
    #[inline]
    pub fn as_address(&self) -> Result<Address, UnexpectedShape> {
        self.as_fixed().map(Address::new)
    }

    /// Returns the child of a list at `index`.
    pub fn field(&self, index: usize) -> Result<&RlpItem, UnexpectedShape> {
        let items = self.as_list()?;
        items.get(index).ok_or(UnexpectedShape::MissingField {
            index,
            len: items.len(),
        })
    }

    /// Returns the children of a list that has exactly `count` of them.
    pub fn expect_fields(&self, count: usize) -> Result<&[RlpItem], UnexpectedShape> {
        let items = self.as_list()?;
        if items.len() != count {
            return Err(UnexpectedShape::FieldCount {
                expected: count,
                actual: items.len(),
            });
        }
        Ok(items)
    }

    fn payload_length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => <[u8] as Encodable>::length(bytes),
            Self::List(items) => items.iter().map(Encodable::length).sum(),
        }
    }
}

impl Encodable for RlpItem {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::Bytes(bytes) => <[u8] as Encodable>::encode(bytes, out),
            Self::List(items) => {
                Header {
                    list: true,
                    payload_length: self.payload_length(),
                }
                .encode(out);
                for item in items {
                    item.encode(out);
                }
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            // byte strings carry their own header
            Self::Bytes(_) => self.payload_length(),
            Self::List(_) => {
                let payload_length = self.payload_length();
                Header {
                    list: true,
                    payload_length,
                }
                .length()
                    + payload_length
            }
        }
    }
}

impl From<Bytes> for RlpItem {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<RlpItem>) -> Self {
        Self::List(items)
    }
}

/// Prints byte strings as `0x` prefixed hex and lists in brackets.
impl fmt::Display for RlpItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => f.write_str(&hex::encode_prefixed(bytes)),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}
