use clap::Parser;
use eyre::Result;
use logproof_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logproof_cli::init_tracing(cli.verbosity);
    cli.cmd.run()?;
    Ok(())
}
