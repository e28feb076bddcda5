use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod group;
mod input;

fn main() -> Result<()> {
    init_tracing()?;
    let _cli = cli::Cli::parse();

    tracing::info!(
        "Packs {} hex byte values into {} three-byte row literals",
        group::SEQUENCE_LEN,
        group::GROUP_COUNT
    );
    tracing::info!(
        "Enter the values on one line, separated by spaces or commas (e.g. 01 02 03 ... 5F)"
    );

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    let mut bytes = input::parse_byte_line(&line)?;
    if bytes.is_empty() {
        tracing::info!("No input supplied, using the demo sequence 0x00..=0x5F");
        bytes = group::demo_sequence();
    }

    let groups = group::render_groups(&bytes)?;
    tracing::info!("Rendered {} groups", groups.len());
    for formatted in &groups {
        println!("{formatted}");
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // Logs go to stderr so stdout carries only the rendered groups.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Can't initialize tracing subscriber: {e}"))?;
    Ok(())
}
