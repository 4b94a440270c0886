//! Filesystem wrapper: connection-time decoration plus level-gated per-call
//! path substitution.

use std::sync::Arc;

use tracing::debug;

use crate::client::{
    AccessMode, DirListFlags, MkDirFlags, OpenFlags, PrepareFlags, QueryCode, RemoteClient,
    RemoteFileSystem, ResponseHandler, Status, Timeout,
};
use crate::prefix::PrefixStore;
use crate::session::FsSession;
use crate::url_model;

/// Wraps one delegate filesystem handle for its lifetime.
///
/// The handle created at nesting level 0 connects to the decorated target
/// (`scheme://prefix`) and rewrites every per-call path to the fixed
/// reconstruction derived from the session-start URL. Handles at deeper
/// levels, created while the delegate resolves an outer call, connect and
/// forward everything unmodified.
pub struct ProxyFs {
    inner: Box<dyn RemoteFileSystem>,
    session: Arc<FsSession>,
    level: u64,
}

impl ProxyFs {
    pub(crate) fn new(
        prefix: Arc<PrefixStore>,
        session: Arc<FsSession>,
        client: &dyn RemoteClient,
        url: &str,
    ) -> Self {
        let level = session.register(url);
        let target = if level == 0 {
            url_model::connection_target(&prefix.get(), url)
        } else {
            url.to_string()
        };
        debug!(level, %target, "connecting filesystem");
        Self {
            inner: client.connect(&target),
            session,
            level,
        }
    }

    /// Nesting level captured at construction; 0 is the outer, user-facing
    /// handle.
    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn is_outer(&self) -> bool {
        self.level == 0
    }

    /// Path actually forwarded for this handle. The outer handle re-derives
    /// its target from the session-start URL on every call; the literal
    /// argument only survives on nested handles.
    fn prep_path(&self, path: &str) -> String {
        if self.level != 0 {
            return path.to_string();
        }
        match self.session.target() {
            Some(target) => url_model::session_root(&target),
            None => path.to_string(),
        }
    }

    pub fn locate(
        &self,
        path: &str,
        flags: OpenFlags,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "locate");
        self.inner.locate(&self.prep_path(path), flags, handler, timeout)
    }

    pub fn stat(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        debug!(level = self.level, "stat");
        self.inner.stat(&self.prep_path(path), handler, timeout)
    }

    pub fn stat_vfs(
        &self,
        path: &str,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "stat_vfs");
        self.inner.stat_vfs(&self.prep_path(path), handler, timeout)
    }

    pub fn dir_list(
        &self,
        path: &str,
        flags: DirListFlags,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "dir_list");
        self.inner
            .dir_list(&self.prep_path(path), flags, handler, timeout)
    }

    pub fn mkdir(
        &self,
        path: &str,
        flags: MkDirFlags,
        mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "mkdir");
        self.inner
            .mkdir(&self.prep_path(path), flags, mode, handler, timeout)
    }

    pub fn rmdir(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        debug!(level = self.level, "rmdir");
        self.inner.rmdir(&self.prep_path(path), handler, timeout)
    }

    pub fn rm(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        debug!(level = self.level, "rm");
        self.inner.rm(&self.prep_path(path), handler, timeout)
    }

    pub fn chmod(
        &self,
        path: &str,
        mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "chmod");
        self.inner.chmod(&self.prep_path(path), mode, handler, timeout)
    }

    pub fn truncate(
        &self,
        path: &str,
        size: u64,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "truncate");
        self.inner
            .truncate(&self.prep_path(path), size, handler, timeout)
    }

    /// Query carries no path argument; everything forwards untouched.
    pub fn query(
        &self,
        code: QueryCode,
        arg: &[u8],
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "query");
        self.inner.query(code, arg, handler, timeout)
    }

    pub fn ping(&self, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        debug!(level = self.level, "ping");
        self.inner.ping(handler, timeout)
    }

    pub fn protocol(&self, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        debug!(level = self.level, "protocol");
        self.inner.protocol(handler, timeout)
    }

    pub fn send_info(
        &self,
        info: &str,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, "send_info");
        self.inner.send_info(info, handler, timeout)
    }

    /// Prepare rewrites every element of the path list independently under
    /// the same level policy, then forwards the whole list in one call.
    pub fn prepare(
        &self,
        files: &[String],
        flags: PrepareFlags,
        priority: u8,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(level = self.level, count = files.len(), "prepare");
        let files: Vec<String> = files.iter().map(|f| self.prep_path(f)).collect();
        self.inner.prepare(&files, flags, priority, handler, timeout)
    }
}
