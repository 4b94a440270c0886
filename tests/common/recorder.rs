//! Recording fake of the remote client.
//!
//! Captures every target the rewriting layer forwards (connects, opens,
//! per-call paths, prepare lists) so tests can assert exactly what the
//! delegate was handed. Operations answer their handler immediately and
//! return ok unless a forced status was queued.

use std::sync::{Arc, Mutex};

use ppx::client::{
    AccessMode, DirListFlags, MkDirFlags, OpenFlags, PrepareFlags, ProtocolInfo, QueryCode,
    RemoteClient, RemoteFile, RemoteFileSystem, Response, ResponseHandler, StatInfo, Status,
    Timeout,
};

/// Everything the fake delegate observed, shared across handles.
#[derive(Debug, Default)]
pub struct CallLog {
    /// Connection targets of every filesystem handle, in construction order.
    pub connects: Mutex<Vec<String>>,
    /// Targets of every file open.
    pub opens: Mutex<Vec<String>>,
    /// (verb, path) for every forwarded filesystem call carrying a path.
    pub paths: Mutex<Vec<(String, String)>>,
    /// Path lists forwarded by prepare, one entry per call.
    pub prepares: Mutex<Vec<Vec<String>>>,
    /// One-shot status returned by the next filesystem operation.
    forced: Mutex<Option<Status>>,
}

impl CallLog {
    /// Queue a status for the next filesystem operation to return verbatim.
    pub fn fail_next(&self, status: Status) {
        *self.forced.lock().unwrap() = Some(status);
    }

    fn next_status(&self) -> Status {
        self.forced.lock().unwrap().take().unwrap_or_else(Status::ok)
    }
}

pub struct RecordingClient {
    pub log: Arc<CallLog>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self {
            log: Arc::new(CallLog::default()),
        }
    }
}

impl RemoteClient for RecordingClient {
    fn new_file(&self) -> Box<dyn RemoteFile> {
        Box::new(RecordingFile {
            log: Arc::clone(&self.log),
            open: false,
        })
    }

    fn connect(&self, url: &str) -> Box<dyn RemoteFileSystem> {
        self.log.connects.lock().unwrap().push(url.to_string());
        Box::new(RecordingFs {
            log: Arc::clone(&self.log),
        })
    }
}

struct RecordingFile {
    log: Arc<CallLog>,
    open: bool,
}

impl RemoteFile for RecordingFile {
    fn open(
        &mut self,
        url: &str,
        _flags: OpenFlags,
        _mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        self.log.opens.lock().unwrap().push(url.to_string());
        self.open = true;
        handler.handle(Status::ok(), None);
        Status::ok()
    }

    fn close(&mut self, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        self.open = false;
        handler.handle(Status::ok(), None);
        Status::ok()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn stat(&self, _force: bool, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        handler.handle(
            Status::ok(),
            Some(Response::Stat(StatInfo {
                size: 0,
                mod_time: 0,
                is_dir: false,
            })),
        );
        Status::ok()
    }

    fn read(
        &self,
        _offset: u64,
        length: u32,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        handler.handle(
            Status::ok(),
            Some(Response::Buffer(vec![0; length as usize])),
        );
        Status::ok()
    }

    fn write(
        &self,
        _offset: u64,
        _data: &[u8],
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        handler.handle(Status::ok(), None);
        Status::ok()
    }
}

struct RecordingFs {
    log: Arc<CallLog>,
}

impl RecordingFs {
    fn record(&self, verb: &str, path: &str) -> Status {
        self.log
            .paths
            .lock()
            .unwrap()
            .push((verb.to_string(), path.to_string()));
        self.log.next_status()
    }
}

impl RemoteFileSystem for RecordingFs {
    fn locate(
        &self,
        path: &str,
        _flags: OpenFlags,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.record("locate", path);
        handler.handle(st.clone(), Some(Response::Locations(Vec::new())));
        st
    }

    fn stat(&self, path: &str, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        let st = self.record("stat", path);
        handler.handle(st.clone(), None);
        st
    }

    fn stat_vfs(&self, path: &str, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        let st = self.record("stat_vfs", path);
        handler.handle(st.clone(), None);
        st
    }

    fn dir_list(
        &self,
        path: &str,
        _flags: DirListFlags,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.record("dir_list", path);
        handler.handle(st.clone(), Some(Response::DirList(Vec::new())));
        st
    }

    fn mkdir(
        &self,
        path: &str,
        _flags: MkDirFlags,
        _mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.record("mkdir", path);
        handler.handle(st.clone(), None);
        st
    }

    fn rmdir(&self, path: &str, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        let st = self.record("rmdir", path);
        handler.handle(st.clone(), None);
        st
    }

    fn rm(&self, path: &str, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        let st = self.record("rm", path);
        handler.handle(st.clone(), None);
        st
    }

    fn chmod(
        &self,
        path: &str,
        _mode: AccessMode,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.record("chmod", path);
        handler.handle(st.clone(), None);
        st
    }

    fn truncate(
        &self,
        path: &str,
        _size: u64,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.record("truncate", path);
        handler.handle(st.clone(), None);
        st
    }

    fn query(
        &self,
        _code: QueryCode,
        arg: &[u8],
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.log.next_status();
        handler.handle(st.clone(), Some(Response::Buffer(arg.to_vec())));
        st
    }

    fn ping(&self, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        let st = self.log.next_status();
        handler.handle(st.clone(), None);
        st
    }

    fn protocol(&self, handler: Box<dyn ResponseHandler>, _timeout: Timeout) -> Status {
        let st = self.log.next_status();
        handler.handle(
            st.clone(),
            Some(Response::Protocol(ProtocolInfo {
                version: 0x310,
                host_info: 0,
            })),
        );
        st
    }

    fn send_info(
        &self,
        _info: &str,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        let st = self.log.next_status();
        handler.handle(st.clone(), None);
        st
    }

    fn prepare(
        &self,
        files: &[String],
        _flags: PrepareFlags,
        _priority: u8,
        handler: Box<dyn ResponseHandler>,
        _timeout: Timeout,
    ) -> Status {
        self.log.prepares.lock().unwrap().push(files.to_vec());
        let st = self.log.next_status();
        handler.handle(st.clone(), None);
        st
    }
}

/// Handler that discards the delegate's answer.
pub struct NoopHandler;

impl ResponseHandler for NoopHandler {
    fn handle(&self, _status: Status, _response: Option<Response>) {}
}

pub fn noop() -> Box<dyn ResponseHandler> {
    Box::new(NoopHandler)
}

/// Handler that collects every delivered status for inspection.
pub struct CollectingHandler {
    pub statuses: Arc<Mutex<Vec<Status>>>,
}

impl ResponseHandler for CollectingHandler {
    fn handle(&self, status: Status, _response: Option<Response>) {
        self.statuses.lock().unwrap().push(status);
    }
}
