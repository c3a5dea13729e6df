//! Concrete notification channels.
//!
//! Each channel is a zero-sized marker implementing [`Channel`]. [`ChannelKind`]
//! is the runtime counterpart used when chains are assembled from
//! configuration or command-line arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::decorator::{Channel, Decorated};
use super::provider::Notifier;
use crate::error::AppError;

/// Email channel
#[derive(Debug, Clone, Copy)]
pub struct Email;

/// SMS channel
#[derive(Debug, Clone, Copy)]
pub struct Sms;

/// Facebook channel
#[derive(Debug, Clone, Copy)]
pub struct Facebook;

/// Slack channel
#[derive(Debug, Clone, Copy)]
pub struct Slack;

/// WhatsApp channel
#[derive(Debug, Clone, Copy)]
pub struct WhatsApp;

impl Channel for Email {
    const LABEL: &'static str = "CORREO";
    const NAME: &'static str = "email";
}

impl Channel for Sms {
    const LABEL: &'static str = "SMS";
    const NAME: &'static str = "sms";
}

impl Channel for Facebook {
    const LABEL: &'static str = "FACEBOOK";
    const NAME: &'static str = "facebook";
}

impl Channel for Slack {
    const LABEL: &'static str = "SLACK";
    const NAME: &'static str = "slack";
}

impl Channel for WhatsApp {
    const LABEL: &'static str = "WHATSAPP";
    const NAME: &'static str = "whatsapp";
}

/// Runtime selection of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelKind {
    Email,
    Sms,
    Facebook,
    Slack,
    WhatsApp,
}

impl ChannelKind {
    /// All channels in declaration order
    pub const ALL: [ChannelKind; 5] = [
        ChannelKind::Email,
        ChannelKind::Sms,
        ChannelKind::Facebook,
        ChannelKind::Slack,
        ChannelKind::WhatsApp,
    ];

    /// Identifier accepted in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => Email::NAME,
            ChannelKind::Sms => Sms::NAME,
            ChannelKind::Facebook => Facebook::NAME,
            ChannelKind::Slack => Slack::NAME,
            ChannelKind::WhatsApp => WhatsApp::NAME,
        }
    }

    /// Upper-case label printed in channel lines
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Email => Email::LABEL,
            ChannelKind::Sms => Sms::LABEL,
            ChannelKind::Facebook => Facebook::LABEL,
            ChannelKind::Slack => Slack::LABEL,
            ChannelKind::WhatsApp => WhatsApp::LABEL,
        }
    }

    /// Human-readable name used when describing execution order
    pub fn display_name(&self) -> &'static str {
        match self {
            ChannelKind::Email => "Email",
            ChannelKind::Sms => "SMS",
            ChannelKind::Facebook => "Facebook",
            ChannelKind::Slack => "Slack",
            ChannelKind::WhatsApp => "WhatsApp",
        }
    }

    /// Wraps `inner` with this channel, erasing the concrete chain type
    pub fn decorate(self, inner: Box<dyn Notifier>) -> Box<dyn Notifier> {
        match self {
            ChannelKind::Email => Box::new(Decorated::<Email, _>::new(inner)),
            ChannelKind::Sms => Box::new(Decorated::<Sms, _>::new(inner)),
            ChannelKind::Facebook => Box::new(Decorated::<Facebook, _>::new(inner)),
            ChannelKind::Slack => Box::new(Decorated::<Slack, _>::new(inner)),
            ChannelKind::WhatsApp => Box::new(Decorated::<WhatsApp, _>::new(inner)),
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChannelKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" | "correo" => Ok(ChannelKind::Email),
            "sms" => Ok(ChannelKind::Sms),
            "facebook" => Ok(ChannelKind::Facebook),
            "slack" => Ok(ChannelKind::Slack),
            "whatsapp" => Ok(ChannelKind::WhatsApp),
            _ => Err(AppError::UnknownChannel {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ChannelKind {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelKind> for String {
    fn from(kind: ChannelKind) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::base_provider::BaseNotifier;

    #[test]
    fn test_channel_kind_from_str() {
        assert_eq!("email".parse::<ChannelKind>().unwrap(), ChannelKind::Email);
        assert_eq!("correo".parse::<ChannelKind>().unwrap(), ChannelKind::Email);
        assert_eq!("sms".parse::<ChannelKind>().unwrap(), ChannelKind::Sms);
        assert_eq!("facebook".parse::<ChannelKind>().unwrap(), ChannelKind::Facebook);
        assert_eq!("slack".parse::<ChannelKind>().unwrap(), ChannelKind::Slack);
        assert_eq!("whatsapp".parse::<ChannelKind>().unwrap(), ChannelKind::WhatsApp);
    }

    #[test]
    fn test_channel_kind_case_insensitive() {
        assert_eq!("WhatsApp".parse::<ChannelKind>().unwrap(), ChannelKind::WhatsApp);
        assert_eq!(" SMS ".parse::<ChannelKind>().unwrap(), ChannelKind::Sms);
    }

    #[test]
    fn test_channel_kind_unknown() {
        let err = "telegram".parse::<ChannelKind>().unwrap_err();
        assert!(matches!(err, AppError::UnknownChannel { ref name } if name == "telegram"));
    }

    #[test]
    fn test_labels_are_upper_case() {
        for kind in ChannelKind::ALL {
            assert_eq!(kind.label(), kind.label().to_uppercase());
        }
        assert_eq!(ChannelKind::Email.label(), "CORREO");
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for kind in ChannelKind::ALL {
            assert_eq!(kind.to_string().parse::<ChannelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_decorate_appends_channel_line() {
        let chain = ChannelKind::Slack.decorate(Box::new(BaseNotifier));
        let lines = chain.deliver("m").into_lines();
        assert_eq!(lines[1], "Enviando notificación por SLACK: m");
        assert_eq!(chain.name(), "slack");
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&ChannelKind::WhatsApp).unwrap();
        assert_eq!(json, "\"whatsapp\"");
        let parsed: ChannelKind = serde_json::from_str("\"Correo\"").unwrap();
        assert_eq!(parsed, ChannelKind::Email);
        assert!(serde_json::from_str::<ChannelKind>("\"fax\"").is_err());
    }
}
