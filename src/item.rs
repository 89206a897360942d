use std::path::PathBuf;

use crate::icon::DockIcon;

/// One dock entry.
///
/// `source_path` is absolute and normalized; it is the identity key and the
/// only field that gets persisted. Everything else is recomputed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DockItem {
    pub source_path: PathBuf,
    pub display_name: String,
    pub launch_path: PathBuf,
    pub working_directory: PathBuf,
    pub icon: DockIcon,
}

/// A shell shortcut after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutInfo {
    pub display_name: String,
    pub target_path: PathBuf,
    pub working_directory: PathBuf,
    /// Custom icon location if the shortcut declares one, else the target path.
    /// May still carry a `,index` suffix.
    pub icon_location: String,
}
