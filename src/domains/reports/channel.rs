//! Messaging channels supported by the campaign summary reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A messaging delivery medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
    Apn,
    Whatsapp,
}

impl Channel {
    /// All channels, in the order the aggregate lookup reports them by default.
    pub const ALL: [Channel; 4] = [Channel::Email, Channel::Sms, Channel::Apn, Channel::Whatsapp];

    /// Wire literal sent to the analytics service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Apn => "apn",
            Self::Whatsapp => "whatsapp",
        }
    }

    /// Upper-cased name used in tool output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
            Self::Apn => "APN",
            Self::Whatsapp => "WHATSAPP",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_serializes_lowercase() {
        let json = serde_json::to_string(&Channel::Whatsapp).unwrap();
        assert_eq!(json, r#""whatsapp""#);

        let channel: Channel = serde_json::from_str(r#""apn""#).unwrap();
        assert_eq!(channel, Channel::Apn);
    }

    #[test]
    fn test_channel_rejects_unknown_literal() {
        assert!(serde_json::from_str::<Channel>(r#""fax""#).is_err());
        assert!(serde_json::from_str::<Channel>(r#""EMAIL""#).is_err());
    }

    #[test]
    fn test_wire_literal_matches_serde() {
        for channel in Channel::ALL {
            let json = serde_json::to_string(&channel).unwrap();
            assert_eq!(json, format!("\"{}\"", channel.as_str()));
        }
    }

    #[test]
    fn test_channel_label() {
        assert_eq!(Channel::Email.label(), "EMAIL");
        assert_eq!(Channel::Whatsapp.label(), "WHATSAPP");
    }
}
