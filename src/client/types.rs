//! Argument and response value types of the delegate contract.
//!
//! These are carried through the forwarders untouched; the rewriting layer
//! never inspects them.

use bitflags::bitflags;

bitflags! {
    /// Flags accepted by open and locate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OpenFlags: u16 {
        const READ      = 1 << 0;
        const WRITE     = 1 << 1;
        const UPDATE    = 1 << 2;
        const DELETE    = 1 << 3;
        const NEW       = 1 << 4;
        const REFRESH   = 1 << 5;
        const MAKE_PATH = 1 << 6;
        const APPEND    = 1 << 7;
    }
}

bitflags! {
    /// Flags accepted by mkdir.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MkDirFlags: u8 {
        /// Create intermediate directories as needed.
        const MAKE_PATH = 1 << 0;
    }
}

bitflags! {
    /// Flags accepted by dir_list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirListFlags: u8 {
        /// Stat every entry in addition to listing names.
        const STAT   = 1 << 0;
        /// Descend into subdirectories.
        const RECURSIVE = 1 << 1;
    }
}

bitflags! {
    /// Flags accepted by prepare.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PrepareFlags: u8 {
        const STAGE     = 1 << 0;
        const WRITE_MODE = 1 << 1;
        const EVICT     = 1 << 2;
    }
}

bitflags! {
    /// Unix-style access mode bits for open and mkdir.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AccessMode: u16 {
        const UR = 0o400;
        const UW = 0o200;
        const UX = 0o100;
        const GR = 0o040;
        const GW = 0o020;
        const GX = 0o010;
        const OR = 0o004;
        const OW = 0o002;
        const OX = 0o001;
    }
}

/// Kind of information a query asks the remote endpoint for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCode {
    Config,
    Checksum,
    Space,
    Stats,
    Opaque,
}

/// Metadata for a single remote file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatInfo {
    pub size: u64,
    /// Seconds since the epoch.
    pub mod_time: u64,
    pub is_dir: bool,
}

/// Space and node counts for a remote filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatVfsInfo {
    pub space_total: u64,
    pub space_free: u64,
    pub nodes_total: u64,
    pub nodes_free: u64,
}

/// One location a locate call resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInfo {
    /// "host:port" of the endpoint holding the data.
    pub address: String,
    pub is_manager: bool,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub stat: Option<StatInfo>,
}

/// Protocol information reported by the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolInfo {
    pub version: u32,
    pub host_info: u32,
}

/// Asynchronous response payload delivered to a [`super::ResponseHandler`].
///
/// Which variant arrives depends on the operation; the rewriting layer never
/// constructs or unpacks these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Stat(StatInfo),
    StatVfs(StatVfsInfo),
    Locations(Vec<LocationInfo>),
    DirList(Vec<DirEntry>),
    Buffer(Vec<u8>),
    Protocol(ProtocolInfo),
}
