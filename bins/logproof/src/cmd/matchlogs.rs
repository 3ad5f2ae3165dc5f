use super::Error;
use crate::input::read_hex;
use alloy_primitives::{Address, B256};
use clap::Parser;
use logproof::{EnvelopePolicy, LogEntry, LogMatcher, MatchCriteria, VerifierConfig};
use std::path::PathBuf;
use tracing::info;

/// Match command finds the logs of a receipt emitted by a contract with a given signature.
///
/// The receipt can be provided from cli or from file with `--path` option. Matches are printed
/// as a JSON array.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex-encoded RLP receipt
    #[arg(required_unless_present = "path")]
    receipt: Option<String>,
    /// Path to a file containing the hex-encoded RLP receipt
    ///
    /// Overrides the positional `receipt` argument.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Event signature hash, the expected first topic
    #[arg(long, required_unless_present = "event", conflicts_with = "event")]
    signature: Option<B256>,
    /// Event declaration to hash into the signature, e.g. `Transfer(address,address,uint256)`
    #[arg(long)]
    event: Option<String>,
    /// Address of the contract expected to emit the log
    #[arg(long)]
    emitter: Address,

    /// Accept EIP-2718 typed receipts
    #[arg(long)]
    typed: bool,
    /// Maximum list nesting accepted while decoding, capped at 1024
    #[arg(long, default_value_t = logproof::rlp::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Fail if no log matches
    #[arg(long)]
    require: bool,
}

impl Cmd {
    /// Runs match command.
    pub fn run(&self) -> Result<(), Error> {
        let receipt = read_hex(self.receipt.as_deref(), self.path.as_deref())?;
        let matcher = LogMatcher::new(self.criteria()?).with_config(self.config());

        let logs = if self.require {
            matcher.verify(&receipt)?
        } else {
            matcher.find(&receipt)?
        };
        info!(matched = logs.len(), "Receipt verified");

        println!("{}", render(&logs)?);
        Ok(())
    }

    fn criteria(&self) -> Result<MatchCriteria, Error> {
        match (&self.signature, &self.event) {
            (Some(signature), _) => Ok(MatchCriteria::new(*signature, self.emitter)),
            (None, Some(event)) => Ok(MatchCriteria::from_event(event, self.emitter)),
            (None, None) => Err(Error::MissingSignature),
        }
    }

    fn config(&self) -> VerifierConfig {
        let envelope = if self.typed {
            EnvelopePolicy::Typed
        } else {
            EnvelopePolicy::Untyped
        };
        VerifierConfig::default()
            .with_envelope(envelope)
            .with_max_depth(self.max_depth)
    }
}

fn render(logs: &[LogEntry]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(logs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, Bytes};

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("match").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_signature_or_event() {
        let emitter = "0x2222222222222222222222222222222222222222";
        let cmd = parse(&[
            "--signature",
            "0x1111111111111111111111111111111111111111111111111111111111111111",
            "--emitter",
            emitter,
            "c0",
        ]);
        assert_eq!(
            cmd.criteria().unwrap(),
            MatchCriteria::new(
                b256!("0x1111111111111111111111111111111111111111111111111111111111111111"),
                address!("0x2222222222222222222222222222222222222222"),
            )
        );
        assert_eq!(cmd.config(), VerifierConfig::default());

        let cmd = parse(&[
            "--event",
            "Transfer(address,address,uint256)",
            "--emitter",
            emitter,
            "--typed",
            "c0",
        ]);
        assert_eq!(
            cmd.criteria().unwrap().signature,
            b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
        assert_eq!(cmd.config().envelope, EnvelopePolicy::Typed);
    }

    #[test]
    fn requires_a_signature() {
        let res = Cmd::try_parse_from([
            "match",
            "--emitter",
            "0x2222222222222222222222222222222222222222",
            "c0",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn caps_max_depth() {
        let cmd = parse(&[
            "--signature",
            "0x1111111111111111111111111111111111111111111111111111111111111111",
            "--emitter",
            "0x2222222222222222222222222222222222222222",
            "--max-depth",
            "18446744073709551615",
            "c0",
        ]);
        assert_eq!(
            cmd.config().limits.max_depth,
            logproof::rlp::MAX_DEPTH_LIMIT
        );
    }

    #[test]
    fn renders_json() {
        let logs = vec![LogEntry {
            address: Address::repeat_byte(0x22),
            topics: vec![B256::repeat_byte(0x11)],
            data: Bytes::from_static(&[0xab]),
        }];
        let json: serde_json::Value = serde_json::from_str(&render(&logs).unwrap()).unwrap();
        assert_eq!(json[0]["data"], "0xab");
        assert_eq!(json[0]["topics"].as_array().unwrap().len(), 1);
    }
}
