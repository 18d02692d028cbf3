use anyhow::Result;
use clap::Parser;
use recall_calc::ReplBuilder;
use std::io;
use tracing_subscriber::EnvFilter;

/// Interactive calculator that keeps a history of calculation sessions.
#[derive(Parser, Debug)]
#[command(name = "recall-calc", version, about)]
struct Cli {
    /// Log filter for diagnostics on stderr (e.g. `debug`, `recall_calc=trace`)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the console protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut repl = ReplBuilder::new()
        .input(io::stdin().lock())
        .output(io::stdout().lock())
        .banner(!cli.no_banner)
        .build()?;

    let outcome = repl.run()?;
    tracing::debug!(?outcome, sessions = repl.store().len(), "calculator finished");
    Ok(())
}
