//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `ping` - Probe the upstream API

pub mod args;

pub use args::{Cli, Commands};
