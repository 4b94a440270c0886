//! File wrapper: rewrites the open target, forwards everything else.

use std::sync::Arc;

use tracing::debug;

use crate::client::{AccessMode, OpenFlags, RemoteFile, ResponseHandler, Status, Timeout};
use crate::prefix::PrefixStore;
use crate::url_model;

/// Wraps one delegate file handle for its lifetime.
///
/// Only the open target is rewritten; every other argument, the returned
/// status, and the asynchronous response are exactly the delegate's.
pub struct ProxyFile {
    prefix: Arc<PrefixStore>,
    inner: Box<dyn RemoteFile>,
    /// Rewritten target handed to the delegate on the most recent open.
    url: Option<String>,
}

impl ProxyFile {
    pub(crate) fn new(prefix: Arc<PrefixStore>, inner: Box<dyn RemoteFile>) -> Self {
        debug!("new file wrapper");
        Self {
            prefix,
            inner,
            url: None,
        }
    }

    /// Open `url` through the proxy. The target is rewritten per the
    /// single-file rule; flags, mode, handler, and timeout pass through.
    pub fn open(
        &mut self,
        url: &str,
        flags: OpenFlags,
        mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        let target = url_model::rewrite_file_url(&self.prefix.get(), url);
        debug!(%target, "open");
        self.url = Some(target.clone());
        self.inner.open(&target, flags, mode, handler, timeout)
    }

    pub fn close(&mut self, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        self.inner.close(handler, timeout)
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    pub fn stat(&self, force: bool, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status {
        self.inner.stat(force, handler, timeout)
    }

    /// Read `length` bytes at `offset`. Calling this on a file that was never
    /// opened is a contract violation and aborts.
    pub fn read(
        &self,
        offset: u64,
        length: u32,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(offset, length, "read");
        assert!(self.inner.is_open(), "read on a file that was never opened");
        self.inner.read(offset, length, handler, timeout)
    }

    /// Write `data` at `offset`. Calling this on a file that was never opened
    /// is a contract violation and aborts.
    pub fn write(
        &self,
        offset: u64,
        data: &[u8],
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status {
        debug!(offset, len = data.len(), "write");
        assert!(self.inner.is_open(), "write on a file that was never opened");
        self.inner.write(offset, data, handler, timeout)
    }

    /// Rewritten URL from the most recent open, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
