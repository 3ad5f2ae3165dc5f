//! Command line front end for `logproof`.

pub mod cmd;
mod input;

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

pub use cmd::{Error, MainCmd};

/// Top level arguments.
#[derive(Parser, Debug)]
#[command(name = "logproof", version, about = "Match event logs in RLP encoded receipts")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub cmd: MainCmd,
    /// Raise log verbosity, repeat for more (`-v` debug, `-vv` trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `verbosity`, defaulting to `warn`.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // a subscriber may already be installed when embedded, keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
