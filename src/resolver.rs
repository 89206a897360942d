use std::path::{Path, PathBuf};

use crate::icon::{DockIcon, IconProvider, default_icon_provider};
use crate::item::{DockItem, ShortcutInfo};
use crate::logf;
use crate::shortcut::ShortcutResolver;
use crate::utils::normalize_path::normalize_path;
use crate::utils::strip_icon_index::strip_icon_index;

/// Turns a dropped (or persisted) path into a [`DockItem`].
pub struct ItemResolver {
    icons: Box<dyn IconProvider>,
    shortcuts: ShortcutResolver,
}

impl ItemResolver {
    pub fn new(icons: Box<dyn IconProvider>, shortcuts: ShortcutResolver) -> Self {
        Self { icons, shortcuts }
    }

    /// Shell icons and `.lnk` on Windows; image decoding and `.desktop` elsewhere.
    pub fn platform() -> Self {
        Self::new(default_icon_provider(), ShortcutResolver::platform())
    }

    /// `None` for paths that are neither an existing file nor directory, and
    /// for shortcuts that do not resolve.
    pub fn resolve(&self, path: &Path) -> Option<DockItem> {
        if !path.is_file() && !path.is_dir() {
            logf!("ItemResolver: skipping missing path {}", path.display());
            return None;
        }

        let source_path = match normalize_path(path) {
            Ok(p) => p,
            Err(err) => {
                logf!("ItemResolver: cannot normalize {} ({})", path.display(), err);
                return None;
            }
        };
        // The record holds UTF-8 strings only.
        if source_path.to_str().is_none() {
            logf!("ItemResolver: skipping non-UTF-8 path {}", source_path.display());
            return None;
        }

        if self.shortcuts.is_shortcut(&source_path) {
            let info = self.shortcuts.resolve_shortcut(&source_path)?;
            return Some(self.from_shortcut(source_path, info));
        }

        let is_dir = source_path.is_dir();
        let display_name = display_name(&source_path, is_dir);
        let working_directory = if is_dir {
            source_path.clone()
        } else {
            source_path
                .parent()
                .map(Path::to_path_buf)
                .or_else(|| std::env::current_dir().ok())
                .unwrap_or_default()
        };
        let icon = self.icon_for(&source_path);

        logf!("ItemResolver: {} -> '{}'", source_path.display(), display_name);
        Some(DockItem { launch_path: source_path.clone(), source_path, display_name, working_directory, icon })
    }

    fn from_shortcut(&self, source_path: PathBuf, info: ShortcutInfo) -> DockItem {
        let declared = PathBuf::from(strip_icon_index(&info.icon_location));
        let icon_source = if !declared.as_os_str().is_empty() && (declared.is_file() || declared.is_dir()) { declared } else { info.target_path.clone() };
        let icon = self.icon_for(&icon_source);

        logf!("ItemResolver: shortcut {} -> {} (icon from {})", source_path.display(), info.target_path.display(), icon_source.display());
        DockItem { source_path, display_name: info.display_name, launch_path: info.target_path, working_directory: info.working_directory, icon }
    }

    fn icon_for(&self, path: &Path) -> DockIcon {
        self.icons.icon_for(path).unwrap_or_else(DockIcon::generic)
    }
}

/// File name without extension; directories keep their full name.
fn display_name(path: &Path, is_dir: bool) -> String {
    let name = if is_dir { path.file_name() } else { path.file_stem() };
    name.map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}
