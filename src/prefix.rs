//! Shared proxy-prefix value, configured once at plugin load.

use std::sync::RwLock;

/// Value returned by [`PrefixStore::get`] when no prefix was ever configured.
///
/// A missing prefix is not an error here: the sentinel flows into rewritten
/// URLs as a literal string, so a misconfigured plugin is visible in logs and
/// in the delegate's rejection instead of failing silently earlier.
pub const UNSET_PREFIX: &str = "UNSET";

/// Holds the proxy prefix for every rewriting component.
///
/// Created by the factory and shared (`Arc`) with each wrapper. Configuration
/// happens once before any I/O; reads afterwards never block each other.
#[derive(Debug, Default)]
pub struct PrefixStore {
    value: RwLock<Option<String>>,
}

impl PrefixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrite the prefix. No validation is applied and the
    /// new value is effective for all subsequent rewrites.
    pub fn set(&self, prefix: impl Into<String>) {
        *self.value.write().unwrap() = Some(prefix.into());
    }

    /// Current prefix, or [`UNSET_PREFIX`] when never configured.
    pub fn get(&self) -> String {
        self.value
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| UNSET_PREFIX.to_string())
    }

    pub fn is_set(&self) -> bool {
        self.value.read().unwrap().is_some()
    }
}
