// src/exec/reader.rs

//! Line-oriented pipe reader with color stripping.

use std::sync::OnceLock;

use regex::Regex;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::trace;

use crate::message::{Destination, Message};

fn color_codes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("\x1b\\[[^m]*m").expect("valid color pattern"))
}

/// Strip embedded terminal color escapes from one line.
///
/// A child whose own output is already colorized would otherwise corrupt
/// the recoloring applied by the sink.
pub fn strip_colors(line: &str) -> String {
    color_codes().replace_all(line, "").into_owned()
}

/// Forward every line of `pipe` into `merged`, tagged with `sender` and
/// `destination`, as soon as it is scanned.
///
/// Read errors are treated the same as end-of-stream: the sequence simply
/// ends. Returns when the pipe is exhausted or the receiving side is gone.
pub async fn read_pipe<R>(
    pipe: R,
    destination: Destination,
    sender: usize,
    merged: mpsc::Sender<Message>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(pipe).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let msg = Message::new(strip_colors(&line), sender, destination);
        if merged.send(msg).await.is_err() {
            trace!(sender, "merge channel gone; dropping remaining output");
            return;
        }
    }
}
