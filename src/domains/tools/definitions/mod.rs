//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod all_channels;
pub mod channel_sent_count;
pub mod common;
pub mod mau;

pub use all_channels::{AllChannelSentCountsParams, AllChannelSentCountsTool};
pub use channel_sent_count::{ChannelSentCountParams, ChannelSentCountTool};
pub use mau::{MauLookup, MauLookupParams, MauLookupTool};
