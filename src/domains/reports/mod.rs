//! Reports domain module.
//!
//! Fetches campaign summary reports from the analytics service and extracts
//! the sent count for a channel:
//!
//! - `channel.rs` - Supported messaging channels
//! - `client.rs` - Request construction and the HTTP report client
//! - `extractor.rs` - Typed parse of the response and `total_sent` extraction
//! - `error.rs` - Report client error types

mod channel;
mod client;
mod error;
mod extractor;

pub use channel::Channel;
pub use client::{
    CAMPAIGN_TYPE, DEFAULT_END, DEFAULT_START, DEFAULT_TIMEZONE, ReportClient, ReportRequest,
    ReportResponse, ReportSource, ReportWindow,
};
pub use error::ReportError;
pub use extractor::{
    ParsedReport, SERIES_MISSING, SentCountResult, Series, TOTAL_SENT_DATA_MISSING,
    TOTAL_SENT_NOT_FOUND, TOTAL_SENT_NOT_NUMERIC, extract_sent_count,
};

/// Fetch one channel report and extract its sent count.
pub async fn lookup_sent_count(
    source: &dyn ReportSource,
    request: &ReportRequest,
) -> SentCountResult {
    let response = source.fetch_channel_report(request).await;
    extract_sent_count(&response)
}


#[cfg(test)]
mod tests {
    use super::testing::StaticReportSource;
    use super::*;

    #[tokio::test]
    async fn test_lookup_sent_count_pipeline() {
        let source = StaticReportSource::new().with_sent(Channel::Email, 4821);
        let request = ReportRequest::new(55, Channel::Email, ReportWindow::default());

        let result = lookup_sent_count(&source, &request).await;

        assert_eq!(result.value().and_then(|n| n.as_u64()), Some(4821));
        assert_eq!(source.calls(), vec![request]);
    }

    #[tokio::test]
    async fn test_lookup_sent_count_empty_body() {
        let source = StaticReportSource::new();
        let request = ReportRequest::new(55, Channel::Sms, ReportWindow::default());

        let result = lookup_sent_count(&source, &request).await;

        assert_eq!(result.reason(), Some(SERIES_MISSING));
    }
}
