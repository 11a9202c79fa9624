//! Native HTTP client for the record service.
//!
//! Used by the CLI and by integration tests; the browser front end has its
//! own fetch wrapper with the same error mapping. The status is checked
//! before any body handling, so a failure body is never parsed.

use crate::endpoint::{CredentialsMode, Endpoint};
use crate::error::FetchError;
use crate::record::{ExampleRecord, Record, parse_records};

fn build_client(credentials: CredentialsMode) -> Result<reqwest::Client, FetchError> {
    let builder = match credentials {
        CredentialsMode::Include => reqwest::Client::builder().cookie_store(true),
        CredentialsMode::Omit => reqwest::Client::builder(),
    };
    builder.build().map_err(|e| FetchError::Network(e.to_string()))
}

async fn get_body(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    log::debug!("GET {url}");
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    resp.text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// GET the collection behind `endpoint` and decode it.
pub async fn fetch_records(endpoint: &Endpoint) -> Result<Vec<Record>, FetchError> {
    let client = build_client(endpoint.credentials)?;
    let body = get_body(&client, &endpoint.url()).await?;
    parse_records(endpoint.kind, &body)
}

/// GET a single `example` row by id.
pub async fn fetch_example(endpoint: &Endpoint, id: i64) -> Result<ExampleRecord, FetchError> {
    let client = build_client(endpoint.credentials)?;
    let body = get_body(&client, &endpoint.record_url(id)).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointKind;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on a loopback port, return the base URL.
    fn one_shot_server(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                // Drain request headers up to the blank line before answering.
                let mut reader = BufReader::new(stream.try_clone().unwrap());
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) | Err(_) => break,
                        Ok(_) => {
                            if line == "\r\n" || line == "\n" {
                                break;
                            }
                        }
                    }
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[tokio::test]
    async fn test_fetch_examples_success() {
        let base = one_shot_server(http_response(
            "200 OK",
            r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#,
        ));
        let endpoint = Endpoint::new(base, EndpointKind::Examples);

        let records = fetch_records(&endpoint).await.unwrap();
        let texts: Vec<String> = records.iter().map(|r| r.list_item().text).collect();
        assert_eq!(texts, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_fetch_transactions_success() {
        let base = one_shot_server(http_response(
            "200 OK",
            r#"[{"date_time":"t1","amount":10},{"date_time":"t2","amount":-5}]"#,
        ));
        let endpoint = Endpoint::new(base, EndpointKind::Transactions);

        let records = fetch_records(&endpoint).await.unwrap();
        let texts: Vec<String> = records.iter().map(|r| r.list_item().text).collect();
        assert_eq!(texts, ["10", "-5"]);
    }

    #[tokio::test]
    async fn test_fetch_empty_array() {
        let base = one_shot_server(http_response("200 OK", "[]"));
        let endpoint = Endpoint::new(base, EndpointKind::Examples);

        let records = fetch_records(&endpoint).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status_skips_body() {
        // The body is not valid JSON; a Status error proves it was never parsed.
        let base = one_shot_server(http_response("500 Internal Server Error", "boom"));
        let endpoint = Endpoint::new(base, EndpointKind::Examples);

        let err = fetch_records(&endpoint).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let base = one_shot_server(http_response("200 OK", "not json"));
        let endpoint = Endpoint::new(base, EndpointKind::Examples);

        let err = fetch_records(&endpoint).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind to grab a free port, then drop the listener so the connect
        // is refused.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Endpoint::new(format!("http://{addr}"), EndpointKind::Examples);
        let err = fetch_records(&endpoint).await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_example_by_id() {
        let base = one_shot_server(http_response("200 OK", r#"{"id":7,"name":"seventh"}"#));
        let endpoint = Endpoint::new(base, EndpointKind::Examples);

        let record = fetch_example(&endpoint, 7).await.unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "seventh");
    }
}
