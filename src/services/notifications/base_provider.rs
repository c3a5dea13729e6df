//! Base notifier, the innermost layer of every chain.

use super::provider::{Notifier, Transcript};

/// Prefix of the line emitted by the base notifier
pub const STANDARD_PREFIX: &str = "Notificación estándar";

/// Base notifier
///
/// Performs the default notification action. Every chain terminates at exactly
/// one of these, since decorators can only be built around an existing notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseNotifier;

impl BaseNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for BaseNotifier {
    fn send(&self, message: &str, transcript: &mut Transcript) {
        tracing::debug!(layer = self.name(), "Emitting standard notification");
        transcript.emit(format!("{}: {}", STANDARD_PREFIX, message));
    }

    fn name(&self) -> &'static str {
        "base"
    }
}
