//! Prefix substitution rules for single-file and filesystem targets.

use tracing::debug;

use super::UrlParts;

/// Rewrite a single-file URL so it resolves through the proxy endpoint.
///
/// `file:` URLs pass through untouched (the proxy only applies to remote
/// protocols). Anything else keeps its scheme and path but has its authority
/// replaced by `prefix`. URLs that do not parse are forwarded unchanged.
pub fn rewrite_file_url(prefix: &str, url: &str) -> String {
    if url.starts_with("file:") {
        return url.to_string();
    }
    let Some(parts) = UrlParts::parse(url) else {
        debug!(url, "target not parseable, forwarding unmodified");
        return url.to_string();
    };
    if parts.is_local() {
        return url.to_string();
    }
    let rewritten = format!("{}://{}{}", parts.scheme, prefix, parts.path);
    debug!(from = url, to = %rewritten, "rewrote file target");
    rewritten
}

/// Decorated connection target for the outer filesystem handle: the scheme of
/// `url` pointed at the proxy prefix itself, path dropped.
///
/// Local and unparseable URLs connect unmodified.
pub fn connection_target(prefix: &str, url: &str) -> String {
    match UrlParts::parse(url) {
        Some(parts) if !parts.is_local() => {
            let target = format!("{}://{}", parts.scheme, prefix);
            debug!(from = url, to = %target, "decorated connection target");
            target
        }
        _ => url.to_string(),
    }
}

/// Fixed per-call path for the outer filesystem handle, rebuilt from the URL
/// captured at session start: `/scheme://host_id/`.
///
/// Every outer-handle operation forwards this reconstruction, whatever path
/// the caller supplied.
pub fn session_root(target: &UrlParts) -> String {
    format!("/{}://{}/", target.scheme, target.host_id)
}
