// src/errors.rs

//! Crate-wide error types.
//!
//! Fatal errors here are configuration or launch failures: they terminate
//! the whole run with exit code 1. A child that merely exits nonzero is not
//! an error at this level; it is reported as a lifecycle message instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutmuxError {
    #[error("must supply at least two commands to run")]
    TooFewCommands,

    #[error("command {0} is empty")]
    EmptyCommand(usize),

    #[error("could not start process '{id}'. Details: {source}")]
    Spawn {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not connect to {stream} of process '{id}'")]
    PipeMissing { stream: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OutmuxError>;
