//! Tool Registry - the static tool table.
//!
//! Channel tools are described once here and the router iterates the table
//! to register them, so every channel shares one implementation.

use crate::domains::reports::Channel;

use super::definitions::{AllChannelSentCountsTool, MauLookupTool};

// ============================================================================
// Channel Tool Table
// ============================================================================

/// Name and description of the sent-count tool for one channel.
#[derive(Debug)]
pub struct ChannelToolDescriptor {
    pub channel: Channel,
    pub name: &'static str,
    pub description: &'static str,
}

/// One sent-count tool per supported channel.
pub static CHANNEL_TOOLS: [ChannelToolDescriptor; 4] = [
    ChannelToolDescriptor {
        channel: Channel::Email,
        name: "getEmailSentCount",
        description: "Get the broadcast EMAIL sent count for a client ID. Optional date range and timezone \
             (defaults: 2025-03-18 00:00:00 to 2025-03-18 23:59:59, Asia/Jakarta).",
    },
    ChannelToolDescriptor {
        channel: Channel::Sms,
        name: "getSmsSentCount",
        description: "Get the broadcast SMS sent count for a client ID. Optional date range and timezone \
             (defaults: 2025-03-18 00:00:00 to 2025-03-18 23:59:59, Asia/Jakarta).",
    },
    ChannelToolDescriptor {
        channel: Channel::Apn,
        name: "getApnSentCount",
        description: "Get the broadcast APN push sent count for a client ID. Optional date range and timezone \
             (defaults: 2025-03-18 00:00:00 to 2025-03-18 23:59:59, Asia/Jakarta).",
    },
    ChannelToolDescriptor {
        channel: Channel::Whatsapp,
        name: "getWhatsappSentCount",
        description: "Get the broadcast WHATSAPP sent count for a client ID. Optional date range and timezone \
             (defaults: 2025-03-18 00:00:00 to 2025-03-18 23:59:59, Asia/Jakarta).",
    },
];

// ============================================================================
// Tool Registry
// ============================================================================

/// Listing of every tool the server exposes.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        CHANNEL_TOOLS
            .iter()
            .map(|d| d.name)
            .chain([AllChannelSentCountsTool::NAME, MauLookupTool::NAME])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(
            names,
            vec![
                "getEmailSentCount",
                "getSmsSentCount",
                "getApnSentCount",
                "getWhatsappSentCount",
                "getAllChannelSentCounts",
                "getMauDataByClientName",
            ]
        );
    }

    #[test]
    fn test_every_channel_has_a_tool() {
        for channel in Channel::ALL {
            let descriptor = CHANNEL_TOOLS.iter().find(|d| d.channel == channel).unwrap();
            assert!(descriptor.name.starts_with("get"));
            assert!(descriptor.name.ends_with("SentCount"));
            assert!(descriptor.description.contains(channel.label()));
        }
    }
}
