// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the requested commands,
//! using `tokio::process::Command`, and reporting everything back to the
//! multiplexer as `Message`s.
//!
//! - [`reader`] turns one child pipe into a stream of cleaned lines.
//! - [`aggregator`] owns a single child's full lifecycle: spawn, merge both
//!   pipes, reap, and emit the start/exit lifecycle messages.

pub mod aggregator;
pub mod reader;

pub use aggregator::run_process;
