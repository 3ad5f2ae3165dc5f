use crate::{MalformedEncoding, RlpItem};
use alloy_primitives::Bytes;
use alloy_rlp::Header;
use std::vec::Vec;

/// Default maximum list nesting accepted by the decoder.
///
/// A transaction receipt nests four lists deep (receipt, logs, log, topics).
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Hard ceiling on the configurable list nesting.
///
/// The decoder recurses once per nested list, so larger limits are clamped to this value to
/// keep the call stack bounded regardless of configuration.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Bounds applied while decoding untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeLimits {
    /// Maximum number of nested lists. Zero rejects any list. Values above
    /// [`MAX_DEPTH_LIMIT`] are treated as [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeLimits {
    /// Creates limits with the given maximum list nesting, clamped to [`MAX_DEPTH_LIMIT`].
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth: clamp_depth(max_depth),
        }
    }

    /// Sets the maximum list nesting, clamped to [`MAX_DEPTH_LIMIT`].
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = clamp_depth(max_depth);
        self
    }
}

const fn clamp_depth(max_depth: usize) -> usize {
    if max_depth > MAX_DEPTH_LIMIT {
        MAX_DEPTH_LIMIT
    } else {
        max_depth
    }
}

/// Decodes exactly one item from `input`.
///
/// Returns `MalformedEncoding::TrailingBytes` if bytes are left after the root item.
pub(crate) fn decode_root(
    input: &[u8],
    limits: DecodeLimits,
) -> Result<RlpItem, MalformedEncoding> {
    // the field is public, so limits built by hand or deserialized are clamped here too
    let limits = DecodeLimits::new(limits.max_depth);
    let mut buf = input;
    let item = decode_item(&mut buf, 0, limits)?;
    if !buf.is_empty() {
        return Err(MalformedEncoding::TrailingBytes {
            remaining: buf.len(),
        });
    }
    Ok(item)
}

/// Consumes a single item from the front of `buf`.
///
/// `depth` is the number of lists enclosing the item. The payload is split off before any
/// child is decoded, so a child can never read past the end of its parent.
fn decode_item(
    buf: &mut &[u8],
    depth: usize,
    limits: DecodeLimits,
) -> Result<RlpItem, MalformedEncoding> {
    // `Header::decode` rejects truncated and non-canonical prefixes.
    let header = Header::decode(buf)?;
    let data: &[u8] = *buf;
    let (payload, rest) = data
        .split_at_checked(header.payload_length)
        .ok_or(alloy_rlp::Error::InputTooShort)?;
    *buf = rest;

    if !header.list {
        return Ok(RlpItem::Bytes(Bytes::copy_from_slice(payload)));
    }

    if depth >= limits.max_depth {
        return Err(MalformedEncoding::DepthExceeded {
            limit: limits.max_depth,
        });
    }

    let mut payload = payload;
    let mut children = Vec::new();
    while !payload.is_empty() {
        children.push(decode_item(&mut payload, depth + 1, limits)?);
    }
    Ok(RlpItem::List(children))
}
