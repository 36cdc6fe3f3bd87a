// src/exec/aggregator.rs

use std::process::Stdio;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::command::Command;
use crate::errors::{OutmuxError, Result};
use crate::exec::reader;
use crate::message::{Destination, Message};

/// Own the full lifecycle of one child process.
///
/// Connects both pipes, spawns the child, announces the start, runs one
/// reader per pipe concurrently until both are exhausted, then reaps the
/// child and emits exactly one exit summary.
///
/// Pipe or spawn failures are fatal to the whole run and propagate as
/// `Err`; a child that exits nonzero or dies to a signal is recovered
/// locally and surfaced only as a lifecycle message.
pub async fn run_process(
    command: Command,
    id: usize,
    merged: mpsc::Sender<Message>,
) -> Result<()> {
    let identifier = command.identifier();

    let mut child = tokio::process::Command::new(&command.program)
        .args(&command.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| OutmuxError::Spawn {
            id: identifier.clone(),
            source,
        })?;

    let stdout = child.stdout.take().ok_or(OutmuxError::PipeMissing {
        stream: "stdout",
        id: identifier.clone(),
    })?;
    let stderr = child.stderr.take().ok_or(OutmuxError::PipeMissing {
        stream: "stderr",
        id: identifier.clone(),
    })?;

    let pid = child.id().unwrap_or(0);
    info!(id, identifier = %identifier, pid, "process started");

    // Announced before the readers start, so the start line always precedes
    // any output line of this process.
    send_lifecycle(&merged, format!("Started '{identifier}' ({pid})"), id).await;

    // The two pipes are read independently; no ordering is imposed between
    // a stdout line and a stderr line, only within each pipe.
    let out_reader = tokio::spawn(reader::read_pipe(
        stdout,
        Destination::Stdout,
        id,
        merged.clone(),
    ));
    let err_reader = tokio::spawn(reader::read_pipe(
        stderr,
        Destination::Stderr,
        id,
        merged.clone(),
    ));
    let _ = out_reader.await;
    let _ = err_reader.await;

    let summary = match child.wait().await {
        Ok(status) if status.success() => {
            format!("Process '{identifier}' ({pid}) exited successfully")
        }
        Ok(status) => match status.code() {
            Some(code) => {
                format!("Process '{identifier}' ({pid}) exited with status {code}")
            }
            // No exit code means the child was killed by a signal.
            None => {
                format!("Process '{identifier}' ({pid}) exited abnormally. Details: {status}")
            }
        },
        Err(err) => {
            format!("Process '{identifier}' ({pid}) exited abnormally. Details: {err}")
        }
    };

    debug!(id, pid, "process reaped");
    send_lifecycle(&merged, summary, id).await;

    Ok(())
}

/// Lifecycle announcements always go to the tool's stdout, whichever stream
/// the child's own output used.
async fn send_lifecycle(merged: &mpsc::Sender<Message>, content: String, id: usize) {
    let _ = merged.send(Message::new(content, id, Destination::Stdout)).await;
}
