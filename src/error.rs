//! Error taxonomy for the fetch path.

use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding
/// typed records.
///
/// Callers collapse all three variants into a single logged diagnostic;
/// none of them is surfaced to the rendered output.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport never produced a response (refused, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status. The body is not read.
    #[error("server returned HTTP status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of the expected shape.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}
