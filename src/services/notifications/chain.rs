//! Runtime composition of notification chains.

use super::base_provider::BaseNotifier;
use super::channels::ChannelKind;
use super::provider::Notifier;

/// Message sent when none is configured
pub const DEFAULT_MESSAGE: &str = "¡Alerta de seguridad!";

/// Wrapping order of the default chain, innermost first
pub const DEFAULT_CHANNELS: [ChannelKind; 5] = ChannelKind::ALL;

/// Builds a chain by wrapping a base notifier, one channel at a time
///
/// Channels are recorded in wrapping order: the first channel added sits
/// directly around the base notifier and the last one becomes outermost.
/// Sending through the built chain emits the base line first, followed by
/// one line per channel in this same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainBuilder {
    channels: Vec<ChannelKind>,
}

impl ChainBuilder {
    /// Starts a chain containing only the base notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a chain with the given channels in wrapping order
    pub fn from_channels(channels: &[ChannelKind]) -> Self {
        Self {
            channels: channels.to_vec(),
        }
    }

    /// Base → Email → SMS → Facebook → Slack → WhatsApp
    pub fn default_chain() -> Self {
        Self::from_channels(&DEFAULT_CHANNELS)
    }

    /// Wraps the current chain with one more channel
    pub fn wrap(mut self, channel: ChannelKind) -> Self {
        self.channels.push(channel);
        self
    }

    /// Channels in wrapping order
    pub fn channels(&self) -> &[ChannelKind] {
        &self.channels
    }

    /// Describes the order in which layers emit, e.g. `Base → Email → SMS`
    pub fn execution_order(&self) -> String {
        std::iter::once("Base")
            .chain(self.channels.iter().map(|c| c.display_name()))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Assembles the chain, returning its outermost layer
    pub fn build(&self) -> Box<dyn Notifier> {
        let chain = self
            .channels
            .iter()
            .fold(Box::new(BaseNotifier::new()) as Box<dyn Notifier>, |inner, channel| {
                channel.decorate(inner)
            });

        tracing::debug!(
            layers = self.channels.len() + 1,
            order = %self.execution_order(),
            "Notification chain assembled"
        );

        chain
    }
}
