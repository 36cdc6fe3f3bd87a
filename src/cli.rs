// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `outmux`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "outmux",
    version,
    about = "Run several commands in parallel and merge their output streams.",
    long_about = None
)]
pub struct CliArgs {
    /// Commands to run, each one quoted shell-style string (e.g. "cargo test").
    ///
    /// Each string is whitespace-split into an executable and its arguments.
    /// At least two commands are required.
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `OUTMUX_LOG` or a default level will be used. Diagnostics
    /// go to stderr so they interleave with, but never replace, the merged
    /// process output.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
