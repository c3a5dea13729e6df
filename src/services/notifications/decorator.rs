//! Channel decorator.
//!
//! A `Decorated` notifier owns exactly one inner notifier. On send it
//! delegates inward first, then emits its own channel line, so output always
//! unwinds innermost-first. The channel is a type parameter rather than data.

use std::fmt;
use std::marker::PhantomData;

use super::provider::{Notifier, Transcript};

/// Prefix of every channel line
pub const CHANNEL_PREFIX: &str = "Enviando notificación por";

/// A notification channel known at compile time
pub trait Channel: Send + Sync + 'static {
    /// Upper-case channel label printed in the emitted line (e.g. "SMS")
    const LABEL: &'static str;

    /// Identifier used in logs and configuration (e.g. "sms")
    const NAME: &'static str;

    /// The channel's own action, run after the inner chain has sent
    fn emit(message: &str, transcript: &mut Transcript) {
        transcript.emit(format!("{} {}: {}", CHANNEL_PREFIX, Self::LABEL, message));
    }
}

/// Notifier decorated with one channel
pub struct Decorated<C: Channel, N: Notifier> {
    inner: N,
    _channel: PhantomData<fn() -> C>,
}

impl<C: Channel, N: Notifier> Decorated<C, N> {
    /// Wraps `inner` with channel `C`
    pub fn new(inner: N) -> Self {
        Self {
            inner,
            _channel: PhantomData,
        }
    }
}

impl<C: Channel, N: Notifier> Notifier for Decorated<C, N> {
    fn send(&self, message: &str, transcript: &mut Transcript) {
        self.inner.send(message, transcript);
        tracing::debug!(layer = C::NAME, "Emitting channel notification");
        C::emit(message, transcript);
    }

    fn name(&self) -> &'static str {
        C::NAME
    }
}

impl<C: Channel, N: Notifier + fmt::Debug> fmt::Debug for Decorated<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated")
            .field("channel", &C::NAME)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Extension for wrapping any notifier with a compile-time channel
///
/// ```ignore
/// let chain = BaseNotifier.decorate::<Email>().decorate::<Sms>();
/// chain.deliver("hola");
/// ```
pub trait NotifierExt: Notifier + Sized {
    fn decorate<C: Channel>(self) -> Decorated<C, Self> {
        Decorated::new(self)
    }
}

impl<N: Notifier> NotifierExt for N {}
