//! # CLI Layer
//!
//! One possible UI client for foco. This is the only place that knows about
//! stdout/stderr, exit codes and argument parsing.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `render`: terminal output for `CmdResult`s

mod commands;
mod render;
mod setup;

pub use commands::run;
