// src/message.rs

//! Messages flowing through the merge pipeline.

/// Which of the tool's own output streams a message is written to.
///
/// Lines read from a child's stdout keep `Stdout`, lines from its stderr
/// keep `Stderr`; lifecycle announcements are always `Stdout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Stdout,
    Stderr,
}

/// One tagged, destination-routed line of text.
///
/// `sender` is the dense 0-based id of the originating process, stable for
/// the run; the sink uses it to pick a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content: String,
    pub sender: usize,
    pub destination: Destination,
}

/// Six rotating foreground colors (ANSI 31..=36), reused cyclically.
const NUM_COLORS: usize = 6;

impl Message {
    pub fn new(content: impl Into<String>, sender: usize, destination: Destination) -> Self {
        Self {
            content: content.into(),
            sender,
            destination,
        }
    }

    /// Render the line for output. With `colorize`, wraps the content in one
    /// of six rotating foreground colors chosen by sender id, plus a reset.
    pub fn render(&self, colorize: bool) -> String {
        if colorize {
            format!(
                "\x1b[3{}m{}\x1b[0m",
                (self.sender % NUM_COLORS) + 1,
                self.content
            )
        } else {
            self.content.clone()
        }
    }
}
