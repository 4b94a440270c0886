//! Builds wrappers from a host-supplied configuration map.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::client::RemoteClient;
use crate::config;
use crate::file::ProxyFile;
use crate::fs::ProxyFs;
use crate::prefix::PrefixStore;
use crate::session::FsSession;

/// Creates per-call wrapper objects around the injected remote client.
///
/// One factory corresponds to one logical session: the filesystem nesting
/// levels it hands out start at 0 and are shared by every wrapper it mints.
pub struct ProxyPrefixFactory {
    client: Arc<dyn RemoteClient>,
    prefix: Arc<PrefixStore>,
    session: Arc<FsSession>,
}

impl std::fmt::Debug for ProxyPrefixFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyPrefixFactory")
            .field("prefix", &self.prefix.get())
            .finish_non_exhaustive()
    }
}

impl ProxyPrefixFactory {
    /// Build the factory from the host framework's configuration map.
    ///
    /// An empty map means the plugin was loaded as the default plugin, so the
    /// config file named by `XRD_DEFAULT_PLUGIN_CONF` is consulted instead;
    /// any failure there aborts construction.
    pub fn new(
        client: Arc<dyn RemoteClient>,
        config_map: &HashMap<String, String>,
    ) -> Result<Self> {
        debug!("constructing proxy-prefix factory");
        let prefix = Arc::new(PrefixStore::new());
        if let Some(value) = config_map.get(config::PREFIX_KEY) {
            prefix.set(value.clone());
        }
        if config_map.is_empty() {
            debug!("configuration map is empty, consulting default plugin config");
            let defaults =
                config::load_default_conf().context("default plugin config rejected")?;
            if let Some(value) = defaults.get(config::PREFIX_KEY) {
                prefix.set(value.clone());
            }
        }
        debug!(prefix = %prefix.get(), "proxy prefix configured");
        Ok(Self {
            client,
            prefix,
            session: Arc::new(FsSession::new()),
        })
    }

    /// Wrapper over a fresh, unopened delegate file handle.
    pub fn create_file(&self) -> ProxyFile {
        debug!("create file");
        ProxyFile::new(Arc::clone(&self.prefix), self.client.new_file())
    }

    /// Wrapper over a delegate filesystem handle for `url`. The first handle
    /// created through this factory becomes the outer one; all later handles
    /// are nested and skip rewriting.
    pub fn create_filesystem(&self, url: &str) -> ProxyFs {
        debug!(url, "create filesystem");
        ProxyFs::new(
            Arc::clone(&self.prefix),
            Arc::clone(&self.session),
            self.client.as_ref(),
            url,
        )
    }

    /// Shared prefix store, mainly for inspection in tests and host glue.
    pub fn prefix(&self) -> Arc<PrefixStore> {
        Arc::clone(&self.prefix)
    }
}
