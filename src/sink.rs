// src/sink.rs

//! Output sink.
//!
//! Drains the fan-in channel and writes each message to the tool's stdout
//! or stderr, colorized when that stream is an interactive terminal.

use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use tokio::sync::mpsc;

use crate::errors::Result;
use crate::message::{Destination, Message};

/// Whether `destination` is attached to an interactive terminal.
///
/// Probed once per destination and cached; repeated calls never reach the
/// OS again.
pub fn is_terminal(destination: Destination) -> bool {
    static STDOUT_TTY: OnceLock<bool> = OnceLock::new();
    static STDERR_TTY: OnceLock<bool> = OnceLock::new();

    match destination {
        Destination::Stdout => *STDOUT_TTY.get_or_init(|| io::stdout().is_terminal()),
        Destination::Stderr => *STDERR_TTY.get_or_init(|| io::stderr().is_terminal()),
    }
}

/// Drain `merged` until every producer is gone, writing each message to its
/// destination. Terminates exactly when the channel closes.
pub async fn drain(mut merged: mpsc::Receiver<Message>) -> Result<()> {
    while let Some(message) = merged.recv().await {
        write_message(&message)?;
    }
    Ok(())
}

fn write_message(message: &Message) -> Result<()> {
    let rendered = message.render(is_terminal(message.destination));
    match message.destination {
        Destination::Stdout => writeln!(io::stdout().lock(), "{rendered}")?,
        Destination::Stderr => writeln!(io::stderr().lock(), "{rendered}")?,
    }
    Ok(())
}
