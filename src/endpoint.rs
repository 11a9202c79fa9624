//! Endpoint configuration for the record service.
//!
//! The service exposes each collection at a fixed path relative to one base
//! URL. Base, path and credentials mode travel together in a plain config
//! struct; tests point the same struct at a loopback mock server.

/// Which collection an endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// `{id, name}` rows from the `example` collection.
    Examples,
    /// `{date_time, amount}` rows from the transactions collection.
    Transactions,
}

impl EndpointKind {
    /// Path of the collection on the service, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            EndpointKind::Examples => "example",
            EndpointKind::Transactions => "api/v0.1/transactions",
        }
    }

    /// Collection name for headings and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            EndpointKind::Examples => "Examples",
            EndpointKind::Transactions => "Transactions",
        }
    }
}

/// Whether requests carry cookies.
///
/// The browser front end maps this onto the fetch `RequestCredentials` mode;
/// the native client switches its cookie store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsMode {
    /// Send cookies, including cross-origin.
    #[default]
    Include,
    /// Never send cookies.
    Omit,
}

/// A fully resolved collection endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub base_url: String,
    pub kind: EndpointKind,
    pub credentials: CredentialsMode,
}

impl Endpoint {
    /// Service address used when nothing else is configured.
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";

    pub fn new(base_url: impl Into<String>, kind: EndpointKind) -> Self {
        Self {
            base_url: base_url.into(),
            kind,
            credentials: CredentialsMode::default(),
        }
    }

    /// Endpoint for `kind` on the default local service.
    pub fn local(kind: EndpointKind) -> Self {
        Self::new(Self::DEFAULT_BASE_URL, kind)
    }

    /// Full URL of the collection.
    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.kind.path())
    }

    /// URL of a single `example` row.
    ///
    /// Only the examples collection exposes a by-id route; the id is
    /// interpolated regardless of `kind`.
    pub fn record_url(&self, id: i64) -> String {
        format!("{}/example/{}", self.base_url.trim_end_matches('/'), id)
    }
}
