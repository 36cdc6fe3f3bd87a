// src/lib.rs

pub mod cli;
pub mod command;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod message;
pub mod mux;
pub mod sink;

use tracing::info;

use crate::cli::CliArgs;
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - command parsing and validation
/// - one aggregator per command, all feeding the fan-in channel
/// - the output sink draining that channel until it closes
pub async fn run(args: CliArgs) -> Result<()> {
    let commands = mux::parse_commands(&args.commands)?;
    info!(count = commands.len(), "launching processes");

    let (merged, aggregators) = mux::spawn_aggregators(commands);
    let sink = tokio::spawn(sink::drain(merged));

    mux::join_aggregators(aggregators).await?;
    sink.await.map_err(anyhow::Error::new)??;

    Ok(())
}
