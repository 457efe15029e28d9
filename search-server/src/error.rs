use std::fmt;
use std::time::Duration;

use models::ResultType;

/// Why an upstream search call produced no results.
#[derive(Debug)]
pub(crate) enum UpstreamError {
    Request { filter: ResultType, message: String },
    Timeout { filter: ResultType, timeout: Duration },
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Request { filter, message } => {
                write!(f, "{} search failed: {}", filter.as_filter(), message)
            }
            UpstreamError::Timeout { filter, timeout } => write!(
                f,
                "{} search timed out after {}s",
                filter.as_filter(),
                timeout.as_secs_f32()
            ),
        }
    }
}

impl std::error::Error for UpstreamError {}
