//! Campaign summary report client.
//!
//! Builds the fixed-shape report request for one client/channel/window and
//! POSTs it to the analytics endpoint. Every outcome is folded into a
//! [`ReportResponse`]; nothing here returns an error to the caller.

use async_trait::async_trait;
use reqwest::Client;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::channel::Channel;
use super::error::ReportError;
use crate::core::config::ReportsConfig;

/// Campaign type sent with every request.
pub const CAMPAIGN_TYPE: &str = "broadcast";

pub const DEFAULT_START: &str = "2025-03-18 00:00:00";
pub const DEFAULT_END: &str = "2025-03-18 23:59:59";
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_end() -> String {
    DEFAULT_END.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

// ============================================================================
// Request
// ============================================================================

/// Reporting window. Values are passed to the service untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ReportWindow {
    /// Window start, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default = "default_start")]
    #[schemars(description = "Start of the window, YYYY-MM-DD HH:MM:SS (default: 2025-03-18 00:00:00)")]
    pub start: String,

    /// Window end, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default = "default_end")]
    #[schemars(description = "End of the window, YYYY-MM-DD HH:MM:SS (default: 2025-03-18 23:59:59)")]
    pub end: String,

    /// IANA zone name.
    #[serde(default = "default_timezone")]
    #[schemars(description = "IANA timezone name (default: Asia/Jakarta)")]
    pub timezone: String,
}

impl Default for ReportWindow {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            timezone: default_timezone(),
        }
    }
}

/// One report lookup: a client, a channel and a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub client_id: u64,
    pub channel: Channel,
    pub window: ReportWindow,
}

impl ReportRequest {
    pub fn new(client_id: u64, channel: Channel, window: ReportWindow) -> Self {
        Self {
            client_id,
            channel,
            window,
        }
    }

    /// Wire body. The channel appears both in `input.combinations` and in
    /// `output.channel`.
    pub fn body(&self) -> ReportRequestBody<'_> {
        ReportRequestBody {
            cid: self.client_id,
            input: ReportInput {
                start: &self.window.start,
                end: &self.window.end,
                tz: &self.window.timezone,
                campaign_type: CAMPAIGN_TYPE,
                tags: Vec::new(),
                combinations: [Combination {
                    channel: self.channel,
                    msgid: Vec::new(),
                }],
            },
            output: ReportOutput {
                channel: [self.channel],
                categories: ["d"],
                total: ["sent"],
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportRequestBody<'a> {
    cid: u64,
    input: ReportInput<'a>,
    output: ReportOutput,
}

#[derive(Debug, Serialize)]
struct ReportInput<'a> {
    start: &'a str,
    end: &'a str,
    tz: &'a str,
    campaign_type: &'static str,
    tags: Vec<String>,
    combinations: [Combination; 1],
}

#[derive(Debug, Serialize)]
struct Combination {
    channel: Channel,
    msgid: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    channel: [Channel; 1],
    categories: [&'static str; 1],
    total: [&'static str; 1],
}

// ============================================================================
// Response
// ============================================================================

/// Outcome of one report fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportResponse {
    /// Parsed JSON body of a 2xx response, unvalidated.
    Success(Value),

    /// Transport-level failure: non-2xx status, network error or a body that
    /// is not JSON.
    Failure { error_message: String },
}

impl ReportResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            error_message: message.into(),
        }
    }
}

impl From<ReportError> for ReportResponse {
    fn from(err: ReportError) -> Self {
        Self::failure(err.to_string())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Anything that can answer a report request.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_channel_report(&self, request: &ReportRequest) -> ReportResponse;
}

/// HTTP client for the campaign summary reports endpoint.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: Client,
    endpoint: String,
}

impl ReportClient {
    pub fn new(config: &ReportsConfig) -> Result<Self, ReportError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| ReportError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn try_fetch(&self, request: &ReportRequest) -> Result<Value, ReportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request.body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status(status.as_u16()));
        }

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

#[async_trait]
impl ReportSource for ReportClient {
    #[instrument(skip(self, request), fields(cid = request.client_id, channel = %request.channel))]
    async fn fetch_channel_report(&self, request: &ReportRequest) -> ReportResponse {
        debug!(endpoint = %self.endpoint, "POST campaign summary report");

        match self.try_fetch(request).await {
            Ok(body) => ReportResponse::Success(body),
            Err(e) => {
                warn!("Report request failed: {}", e);
                e.into()
            }
        }
    }
}
