//! Notification chain built from stackable channel decorators.
//!
//! The core trait `Notifier` is implemented by the base sender and by every
//! channel decorator, so decorators nest around one another. Adding a channel
//! means adding a `Channel` marker; the base sender never changes.

mod base_provider;
mod chain;
mod channels;
mod decorator;
mod provider;

pub use base_provider::BaseNotifier;
pub use chain::{ChainBuilder, DEFAULT_CHANNELS, DEFAULT_MESSAGE};
pub use channels::{ChannelKind, Email, Facebook, Slack, Sms, WhatsApp};
pub use decorator::{Channel, Decorated, NotifierExt};
pub use provider::{Notifier, Transcript};
