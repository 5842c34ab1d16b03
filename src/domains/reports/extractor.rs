//! Sent-count extraction from campaign summary reports.
//!
//! A success body is first parsed into a [`ParsedReport`] so that every way a
//! body can be malformed maps to an explicit variant, then the `total_sent`
//! series is looked up in the parsed list.

use serde_json::{Number, Value};

use super::client::ReportResponse;

/// Name of the series holding the sent total.
pub const TOTAL_SENT_SERIES: &str = "total_sent";

pub const SERIES_MISSING: &str = "series array is missing or not in expected format.";
pub const TOTAL_SENT_NOT_FOUND: &str = "total_sent not found or data array missing.";
pub const TOTAL_SENT_DATA_MISSING: &str = "Missing total_sent data.";
pub const TOTAL_SENT_NOT_NUMERIC: &str = "total_sent value is not numeric.";

/// One element of `data[0].series`.
///
/// `data` stays untyped so that a malformed value list is reported against
/// the matching series rather than against the whole report.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: Option<String>,
    pub data: Option<Value>,
}

impl Series {
    /// Read a series element. Non-object elements yield `None`; a `name`
    /// that is not a string is treated as absent.
    fn from_element(element: &Value) -> Option<Self> {
        let fields = element.as_object()?;
        Some(Self {
            name: fields.get("name").and_then(Value::as_str).map(str::to_string),
            data: fields.get("data").cloned(),
        })
    }
}

/// Typed view of a success body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReport {
    Success(Vec<Series>),
    ShapeError(String),
}

impl ParsedReport {
    /// Parse `body.data[0].series`. Entries after the first are not inspected,
    /// and series elements that are not objects are skipped.
    pub fn parse(body: &Value) -> Self {
        let series = body
            .get("data")
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .and_then(Value::as_object)
            .and_then(|entry| entry.get("series"))
            .and_then(Value::as_array);

        match series {
            Some(elements) => {
                Self::Success(elements.iter().filter_map(Series::from_element).collect())
            }
            None => Self::ShapeError(SERIES_MISSING.to_string()),
        }
    }
}

/// Either a sent count or the reason it could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum SentCountResult {
    Value(Number),
    Unavailable { reason: String },
}

impl SentCountResult {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> Option<&Number> {
        match self {
            Self::Value(n) => Some(n),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }
}

/// Extract the `total_sent` value from a report response.
///
/// Transport failures surface their own message; shape and value failures
/// use the fixed diagnostics above. When several series are named
/// `total_sent`, the first one wins.
pub fn extract_sent_count(response: &ReportResponse) -> SentCountResult {
    let body = match response {
        ReportResponse::Success(body) => body,
        ReportResponse::Failure { error_message } => {
            return SentCountResult::unavailable(error_message.clone());
        }
    };

    let series = match ParsedReport::parse(body) {
        ParsedReport::Success(series) => series,
        ParsedReport::ShapeError(reason) => return SentCountResult::unavailable(reason),
    };

    let values = series
        .iter()
        .find(|s| s.name.as_deref() == Some(TOTAL_SENT_SERIES))
        .and_then(|s| s.data.as_ref())
        .and_then(Value::as_array);

    let Some(values) = values else {
        return SentCountResult::unavailable(TOTAL_SENT_NOT_FOUND);
    };

    match values.first() {
        None | Some(Value::Null) => SentCountResult::unavailable(TOTAL_SENT_DATA_MISSING),
        Some(Value::Number(n)) => SentCountResult::Value(n.clone()),
        Some(_) => SentCountResult::unavailable(TOTAL_SENT_NOT_NUMERIC),
    }
}
