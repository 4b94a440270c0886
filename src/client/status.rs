//! Status values returned synchronously by every delegate operation.

use std::fmt;

/// Broad outcome class, mirroring the remote client's status taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Ok,
    /// Recoverable failure reported by the delegate (network, permission,
    /// timeout). Opaque to the rewriting layer.
    Error,
    /// Unrecoverable delegate failure.
    Fatal,
}

/// Operation status as produced by the delegate.
///
/// The rewriting layer never interprets or translates these; it only hands
/// them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub kind: StatusKind,
    /// Client-defined error code; 0 when ok.
    pub code: u16,
    pub message: String,
}

impl Status {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.kind, StatusKind::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Ok => write!(f, "ok"),
            StatusKind::Error => write!(f, "error {}: {}", self.code, self.message),
            StatusKind::Fatal => write!(f, "fatal {}: {}", self.code, self.message),
        }
    }
}
