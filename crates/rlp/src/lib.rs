//! Strict decoder for Recursive Length Prefix (RLP) encoded data.
//!
//! Input is decoded eagerly into a tree of [`RlpItem`]s. Every length prefix is checked
//! against the bytes that remain before any child item is visited, list nesting is bounded
//! by [`DecodeLimits`] and non-canonical framing is rejected.
//!
//! Accessors on [`RlpItem`] give typed views into the tree and fail with
//! [`UnexpectedShape`] when the item is not what the caller expects.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod decode;
mod error;
pub mod item;

pub use alloy_primitives::{Address, Bytes, B256};
pub use decode::{DecodeLimits, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use error::{MalformedEncoding, UnexpectedShape};
pub use item::RlpItem;
