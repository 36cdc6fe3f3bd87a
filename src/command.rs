// src/command.rs

//! Parsed command values.

use crate::errors::{OutmuxError, Result};

/// Longest identifier shown in lifecycle messages before truncation.
const IDENTIFIER_MAX: usize = 60;

/// One requested external program plus its arguments, parsed from a single
/// whitespace-separated input string. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub program: String,
    pub args: Vec<String>,
}

impl Command {
    /// Split `input` on whitespace into an executable and its arguments.
    ///
    /// A blank string is a configuration error; `position` is the command's
    /// index in the invocation and only appears in the error message.
    pub fn parse(input: &str, position: usize) -> Result<Self> {
        let mut fields = input.split_whitespace().map(str::to_string);
        let program = fields
            .next()
            .ok_or(OutmuxError::EmptyCommand(position))?;
        Ok(Self {
            program,
            args: fields.collect(),
        })
    }

    /// Display identifier: the space-joined argument vector, truncated to
    /// [`IDENTIFIER_MAX`] characters with a trailing ellipsis when longer.
    pub fn identifier(&self) -> String {
        let full = if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        };
        if full.chars().count() <= IDENTIFIER_MAX {
            full
        } else {
            let head: String = full.chars().take(IDENTIFIER_MAX).collect();
            format!("{head}...")
        }
    }
}
