//! Contract of the underlying remote-I/O client.
//!
//! The rewriting layer treats the real client library as an opaque
//! collaborator: every operation is forwarded through these traits with the
//! caller's handler and timeout untouched, and whatever status the delegate
//! returns surfaces verbatim. Nothing in this crate performs network I/O.

mod status;
mod types;

pub use status::{Status, StatusKind};
pub use types::{
    AccessMode, DirEntry, DirListFlags, LocationInfo, MkDirFlags, OpenFlags, PrepareFlags,
    ProtocolInfo, QueryCode, Response, StatInfo, StatVfsInfo,
};

/// Seconds granted to the delegate to complete an operation; 0 means the
/// delegate's own default. Forwarded without modification or enforcement.
pub type Timeout = u16;

/// Receives the delegate's asynchronous answer once the I/O completes.
///
/// Dispatch happens on the delegate's threads. The rewriting layer never
/// invokes a handler itself and never blocks waiting for one.
pub trait ResponseHandler: Send + Sync {
    fn handle(&self, status: Status, response: Option<Response>);
}

/// File-like capability set of the remote client.
pub trait RemoteFile: Send {
    fn open(
        &mut self,
        url: &str,
        flags: OpenFlags,
        mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn close(&mut self, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn is_open(&self) -> bool;

    fn stat(&self, force: bool, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn read(
        &self,
        offset: u64,
        length: u32,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn write(
        &self,
        offset: u64,
        data: &[u8],
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;
}

/// Filesystem-wide capability set of the remote client.
pub trait RemoteFileSystem: Send {
    fn locate(
        &self,
        path: &str,
        flags: OpenFlags,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn stat(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn stat_vfs(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn dir_list(
        &self,
        path: &str,
        flags: DirListFlags,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn mkdir(
        &self,
        path: &str,
        flags: MkDirFlags,
        mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn rmdir(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn rm(&self, path: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn chmod(
        &self,
        path: &str,
        mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn truncate(
        &self,
        path: &str,
        size: u64,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn query(
        &self,
        code: QueryCode,
        arg: &[u8],
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;

    fn ping(&self, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn protocol(&self, handler: Box<dyn ResponseHandler>, timeout: Timeout) -> Status;

    fn send_info(&self, info: &str, handler: Box<dyn ResponseHandler>, timeout: Timeout)
        -> Status;

    fn prepare(
        &self,
        files: &[String],
        flags: PrepareFlags,
        priority: u8,
        handler: Box<dyn ResponseHandler>,
        timeout: Timeout,
    ) -> Status;
}

/// Constructor surface of the remote client library.
pub trait RemoteClient: Send + Sync {
    /// New unopened file handle. Implementations must hand back a handle with
    /// any interception layer disabled, so the open issued through it
    /// resolves directly instead of re-entering the rewriting layer.
    fn new_file(&self) -> Box<dyn RemoteFile>;

    /// New filesystem handle for `url`. Connection problems surface on the
    /// first forwarded call, not here.
    fn connect(&self, url: &str) -> Box<dyn RemoteFileSystem>;
}
