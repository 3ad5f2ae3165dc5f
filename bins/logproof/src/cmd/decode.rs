use super::Error;
use crate::input::read_hex;
use clap::Parser;
use logproof::{rlp::DecodeLimits, RlpItem};
use std::path::PathBuf;

/// Decode command prints the item tree of arbitrary RLP.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded RLP
    #[arg(required_unless_present = "path")]
    bytes: Option<String>,
    /// Path to a file containing the hex-encoded RLP
    #[arg(long)]
    path: Option<PathBuf>,
    /// Maximum list nesting accepted while decoding, capped at 1024
    #[arg(long, default_value_t = logproof::rlp::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Print the tree as JSON
    #[arg(long)]
    json: bool,
}

impl Cmd {
    /// Runs decode command.
    pub fn run(&self) -> Result<(), Error> {
        let bytes = read_hex(self.bytes.as_deref(), self.path.as_deref())?;
        let item = RlpItem::decode_with_limits(&bytes, DecodeLimits::new(self.max_depth))?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&item)?);
        } else {
            println!("{item}");
        }
        Ok(())
    }
}
