//! # reclist-rs
//!
//! A small client for a local REST record service. The service exposes
//! record collections as JSON arrays (an `example` collection of
//! `{id, name}` rows and a transactions collection of `{date_time, amount}`
//! rows); this crate fetches a collection once and projects it onto a flat
//! list of key/text pairs.
//!
//! The rendering-independent core lives here: record shapes, endpoint
//! configuration, view state with wholesale replacement, list projection and
//! the error taxonomy. The `rec-fetch` binary drives it from the command
//! line; the `wasm-ui` workspace member renders the same projection in the
//! browser.
//!
//! ## Example
//!
//! ```
//! use reclist_rs::{EndpointKind, ViewState, parse_records};
//!
//! let body = r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#;
//!
//! let mut state = ViewState::new();
//! state.replace(parse_records(EndpointKind::Examples, body).unwrap());
//!
//! let texts: Vec<String> = state.list_items().into_iter().map(|i| i.text).collect();
//! assert_eq!(texts, ["a", "b"]);
//! ```

pub mod endpoint;
pub mod error;
pub mod record;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod client;

pub use endpoint::{CredentialsMode, Endpoint, EndpointKind};
pub use error::FetchError;
pub use record::{ExampleRecord, ListItem, Record, TransactionRecord, parse_records};
pub use view::ViewState;

#[cfg(not(target_arch = "wasm32"))]
pub use client::{fetch_example, fetch_records};
