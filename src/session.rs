//! Nesting bookkeeping for filesystem handles.
//!
//! The delegate library may construct further filesystem handles internally
//! while resolving an outer call (following a redirection, satisfying a
//! locate). Every handle created through one factory draws a strictly
//! increasing level from that factory's session; only the level-0 handle
//! rewrites its arguments, so an internally-triggered handle never re-applies
//! the prefix to a target that is already pointed at the proxy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::url_model::UrlParts;

/// Per-factory session state: the nesting counter and the URL captured when
/// the outer handle registered.
#[derive(Debug, Default)]
pub struct FsSession {
    next_level: AtomicU64,
    target: RwLock<Option<UrlParts>>,
}

impl FsSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next nesting level. Levels start at 0, only grow, and are
    /// never reused. The first caller becomes the outer handle and its URL is
    /// captured as the session target (when it parses).
    pub fn register(&self, url: &str) -> u64 {
        let level = self.next_level.fetch_add(1, Ordering::SeqCst);
        if level == 0 {
            *self.target.write().unwrap() = UrlParts::parse(url);
        }
        level
    }

    /// URL components captured by the outer handle's registration, if any.
    pub fn target(&self) -> Option<UrlParts> {
        self.target.read().unwrap().clone()
    }
}
