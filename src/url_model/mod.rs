//! URL decomposition and proxy-prefix rewriting.
//!
//! Splits a location string into scheme, host identifier, and path so the
//! rewrite rules can substitute the proxy prefix without corrupting the
//! scheme or losing the path.

mod rewrite;

pub use rewrite::{connection_target, rewrite_file_url, session_root};

/// Scheme that always bypasses the proxy (local access).
pub const LOCAL_SCHEME: &str = "file";

/// Structured view over a remote location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Host identifier, including the port when one is present
    /// ("host" or "host:port").
    pub host_id: String,
    /// Path component; the query string is retained when present so opaque
    /// parameters survive a rewrite.
    pub path: String,
}

impl UrlParts {
    /// Parse a location string.
    ///
    /// Returns `None` when `url` is not an absolute URL with a host; callers
    /// forward the original string unchanged in that case and leave rejection
    /// to the delegate.
    pub fn parse(url: &str) -> Option<Self> {
        let parsed = url::Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        let host_id = match parsed.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        let path = match parsed.query() {
            Some(query) => format!("{}?{}", parsed.path(), query),
            None => parsed.path().to_string(),
        };
        Some(Self {
            scheme: parsed.scheme().to_string(),
            host_id,
            path,
        })
    }

    pub fn is_local(&self) -> bool {
        self.scheme == LOCAL_SCHEME
    }
}
