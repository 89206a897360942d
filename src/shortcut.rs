use std::path::{Path, PathBuf};

use crate::error::DockError;
use crate::item::ShortcutInfo;
use crate::logf;

/// Fields exactly as stored in a shortcut file; empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawShortcut {
    pub target: String,
    pub working_directory: String,
    pub icon_location: String,
}

/// Platform shortcut format parser.
pub trait ShortcutReader {
    /// File extension (without the dot) that marks a shortcut, compared case-insensitively.
    fn extension(&self) -> &'static str;

    fn read(&self, path: &Path) -> Result<RawShortcut, DockError>;
}

/// `.lnk` through the Windows shell, `.desktop` entries elsewhere.
pub fn default_shortcut_reader() -> Box<dyn ShortcutReader> {
    #[cfg(windows)]
    {
        Box::new(crate::shell_link::ShellLinkReader)
    }
    #[cfg(not(windows))]
    {
        Box::new(crate::desktop_entry::DesktopEntryReader)
    }
}

/// Turns a shortcut file into a [`ShortcutInfo`], or nothing.
///
/// This is an absorption boundary: every reader error is logged and
/// collapses into `None`, never a partial result.
pub struct ShortcutResolver {
    reader: Box<dyn ShortcutReader>,
}

impl ShortcutResolver {
    pub fn new(reader: Box<dyn ShortcutReader>) -> Self {
        Self { reader }
    }

    pub fn platform() -> Self {
        Self::new(default_shortcut_reader())
    }

    /// True for existing files carrying the reader's extension.
    pub fn is_shortcut(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(self.reader.extension()))
                .unwrap_or(false)
    }

    pub fn resolve_shortcut(&self, path: &Path) -> Option<ShortcutInfo> {
        let raw = match self.reader.read(path) {
            Ok(raw) => raw,
            Err(err) => {
                logf!("ShortcutResolver: cannot read {} ({})", path.display(), err);
                return None;
            }
        };

        let target = raw.target.trim();
        if target.is_empty() {
            logf!("ShortcutResolver: {} has no target", path.display());
            return None;
        }
        let target_path = PathBuf::from(target);
        if !target_path.is_file() && !target_path.is_dir() {
            logf!("ShortcutResolver: {} points to missing {}", path.display(), target_path.display());
            return None;
        }

        let working_directory = match raw.working_directory.trim() {
            "" => target_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .or_else(|| std::env::current_dir().ok())
                .unwrap_or_default(),
            dir => PathBuf::from(dir),
        };

        let display_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let icon_location = match raw.icon_location.trim() {
            "" => target.to_string(),
            loc => loc.to_string(),
        };

        Some(ShortcutInfo { display_name, target_path, working_directory, icon_location })
    }
}
