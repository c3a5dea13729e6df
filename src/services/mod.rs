//! Service layer.
//!
//! Services hold the domain logic that the CLI handlers drive.

pub mod notifications;

pub use notifications::{ChainBuilder, ChannelKind, Notifier, Transcript};
