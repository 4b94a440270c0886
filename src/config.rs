//! Plugin configuration: the host framework's key/value map plus the
//! optional default-config file.
//!
//! The map recognizes `proxyPrefix`; `lib` and `enable` are markers for the
//! host framework and only `enable` is inspected here. The default-config
//! file uses the framework's `key = value` line convention.

use std::collections::HashMap;
use std::env;
use std::fs;

use thiserror::Error;
use tracing::debug;

/// Environment variable naming the default-config file, consulted only when
/// the host framework supplies an empty configuration map.
pub const DEFAULT_CONF_ENV: &str = "XRD_DEFAULT_PLUGIN_CONF";

/// Key carrying the proxy prefix.
pub const PREFIX_KEY: &str = "proxyPrefix";

const ENABLE_KEY: &str = "enable";

/// Errors raised while resolving plugin configuration. All are fatal to
/// plugin construction; there is no retry or degraded mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "cannot load as the default plugin: {} is not set in the environment",
        DEFAULT_CONF_ENV
    )]
    EnvMissing,
    #[error("cannot read default plugin config at {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("default plugin config at {0} has no entries")]
    Empty(String),
    #[error("default plugin config disables loading (\"enable\" is \"false\")")]
    Disabled,
}

/// Parse the `key = value` config-file format used by client plugin files.
///
/// Blank lines and `#` comments are skipped; lines without `=` are ignored.
pub fn parse_conf(data: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Load the default-config file named by [`DEFAULT_CONF_ENV`].
///
/// Fails when the variable is unset, the file is unreadable or yields zero
/// entries, or the file explicitly sets `enable = false`.
pub fn load_default_conf() -> Result<HashMap<String, String>, ConfigError> {
    let path = env::var(DEFAULT_CONF_ENV).map_err(|_| ConfigError::EnvMissing)?;
    debug!(%path, "loading default plugin config");

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
        path: path.clone(),
        source,
    })?;

    let map = parse_conf(&data);
    if map.is_empty() {
        return Err(ConfigError::Empty(path));
    }
    if map.get(ENABLE_KEY).map(String::as_str) == Some("false") {
        return Err(ConfigError::Disabled);
    }
    Ok(map)
}
