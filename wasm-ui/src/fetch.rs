//! Browser-side fetch for record collections.

use gloo::net::http::Request;
use reclist_rs::{CredentialsMode, Endpoint, FetchError, Record, parse_records};
use web_sys::RequestCredentials;

/// GET the collection behind `endpoint`.
///
/// Mirrors the native client's error mapping: transport failures are
/// `Network`, a non-success status is `Status` with the body unread, and
/// body decoding is delegated to `parse_records`.
pub async fn fetch_records(endpoint: &Endpoint) -> Result<Vec<Record>, FetchError> {
    let credentials = match endpoint.credentials {
        CredentialsMode::Include => RequestCredentials::Include,
        CredentialsMode::Omit => RequestCredentials::Omit,
    };

    let resp = Request::get(&endpoint.url())
        .credentials(credentials)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
        });
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    parse_records(endpoint.kind, &body)
}
