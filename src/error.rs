use std::fmt::{Display, Formatter};

/// Errors raised inside resolution and persistence.
///
/// None of these reach the user: the resolver, the shortcut resolver and
/// [`crate::storage::DockStorage::load`] log them and degrade to "item
/// omitted" or "dock empty".
#[derive(Debug)]
pub enum DockError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NoDataDir,
    Shortcut(String),
    Unsupported(&'static str),
    Shell(String),
}

impl Display for DockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DockError::Io(err) => write!(f, "I/O error: {}", err),
            DockError::Json(err) => write!(f, "Malformed dock record: {}", err),
            DockError::NoDataDir => write!(f, "Per-user application data folder is not available"),
            DockError::Shortcut(detail) => write!(f, "Unreadable shortcut: {}", detail),
            DockError::Unsupported(reason) => write!(f, "Unsupported: {}", reason),
            DockError::Shell(detail) => write!(f, "Shell error: {}", detail),
        }
    }
}

impl std::error::Error for DockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DockError::Io(err) => Some(err),
            DockError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DockError {
    fn from(err: std::io::Error) -> Self {
        DockError::Io(err)
    }
}

impl From<serde_json::Error> for DockError {
    fn from(err: serde_json::Error) -> Self {
        DockError::Json(err)
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for DockError {
    fn from(err: windows::core::Error) -> Self {
        DockError::Shell(format!("hr=0x{:08X} {}", err.code().0 as u32, err))
    }
}
