// src/mux.rs

//! Global multiplexer.
//!
//! Spawns one aggregator per command and fans every per-process sequence
//! into a single mpsc channel. Each aggregator task owns a clone of the
//! fan-in sender for its whole lifetime, so the channel closes exactly
//! once: when the last aggregator has both exhausted its output and reaped
//! its child. No shared counter, no explicit close.

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::info;

use crate::command::Command;
use crate::errors::{OutmuxError, Result};
use crate::exec;
use crate::message::Message;

/// Capacity 1 keeps the hand-off close to a rendezvous: a slow consumer
/// stalls every producer.
const CHANNEL_CAPACITY: usize = 1;

/// Parse and validate the raw command strings.
///
/// Fewer than two commands, or a blank command string, is a configuration
/// error; nothing is spawned in that case.
pub fn parse_commands(inputs: &[String]) -> Result<Vec<Command>> {
    if inputs.len() < 2 {
        return Err(OutmuxError::TooFewCommands);
    }
    inputs
        .iter()
        .enumerate()
        .map(|(position, input)| Command::parse(input, position))
        .collect()
}

/// Spawn one aggregator per command and return the fan-in receiver together
/// with the set of aggregator tasks.
///
/// No ordering is guaranteed between messages of different processes; lines
/// from a single pipe keep their relative order.
pub fn spawn_aggregators(
    commands: Vec<Command>,
) -> (mpsc::Receiver<Message>, JoinSet<Result<()>>) {
    let (tx, rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    let mut aggregators = JoinSet::new();
    for (id, command) in commands.into_iter().enumerate() {
        aggregators.spawn(exec::run_process(command, id, tx.clone()));
    }

    // The only senders left are the ones held by the aggregators; the
    // channel closes when the last of them finishes.
    drop(tx);

    (rx, aggregators)
}

/// Wait for every aggregator, surfacing the first fatal launch error.
///
/// Dropping the set on that error path aborts the remaining aggregators;
/// their children are killed on drop.
pub async fn join_aggregators(mut aggregators: JoinSet<Result<()>>) -> Result<()> {
    while let Some(joined) = aggregators.join_next().await {
        joined.map_err(anyhow::Error::new)??;
    }
    info!("all processes finished");
    Ok(())
}
