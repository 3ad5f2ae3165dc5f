//! Subcommands.

/// `decode` subcommand.
pub mod decode;
/// `match` subcommand.
pub mod matchlogs;

use clap::Subcommand;
use logproof::{MalformedEncoding, VerifyError};
use std::io::Error as IoError;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum MainCmd {
    /// Find logs with a given signature and emitter in a receipt.
    #[command(name = "match")]
    Match(matchlogs::Cmd),
    /// Decode an RLP item and print its tree.
    Decode(decode::Cmd),
}

/// Command errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file does not exist.
    #[error("The specified path does not exist")]
    PathNotExists,
    /// Neither inline input nor a path was given.
    #[error("No input given")]
    MissingInput,
    /// Neither a signature nor an event declaration was given.
    #[error("Either --signature or --event is required")]
    MissingSignature,
    /// Input is not valid hex.
    #[error("Invalid hex input")]
    InvalidHex,
    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] IoError),
    /// Receipt did not verify.
    #[error(transparent)]
    Verify(#[from] VerifyError),
    /// Input is not valid RLP.
    #[error(transparent)]
    Decode(#[from] MalformedEncoding),
    /// Output serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MainCmd {
    /// Runs the selected subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Match(cmd) => cmd.run(),
            Self::Decode(cmd) => cmd.run(),
        }
    }
}
