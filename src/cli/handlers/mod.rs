//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.
//! Handlers write to any `io::Write` so their output can be captured.

pub mod channels;
pub mod demo;
pub mod send;

pub use channels::ChannelsCommandHandler;
pub use demo::DemoCommandHandler;
pub use send::SendCommandHandler;
