//! Shared fixtures for the dock integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use premium_dock::desktop_entry::DesktopEntryReader;
use premium_dock::icon::{DockIcon, IconProvider};
use premium_dock::resolver::ItemResolver;
use premium_dock::shortcut::ShortcutResolver;
use premium_dock::storage::DockStorage;
use premium_dock::{Dock, DockItem, DockView, LaunchError, Launcher, STORAGE_FILE_NAME};
use tempfile::TempDir;

/// Scratch directory holding the files that get dropped.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox { dir: tempfile::tempdir().expect("tempdir") }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn file(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, name).unwrap();
        path
    }

    pub fn folder(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// `.desktop` shortcut to an absolute target.
    pub fn shortcut(&self, name: &str, target: &Path, icon: Option<&str>, working_dir: Option<&Path>) -> PathBuf {
        let mut text = format!("[Desktop Entry]\nType=Application\nName=Ignored\nExec=\"{}\" %F\n", escape(&target.display().to_string()));
        if let Some(icon) = icon {
            text.push_str(&format!("Icon={}\n", escape(icon)));
        }
        if let Some(dir) = working_dir {
            text.push_str(&format!("Path={}\n", escape(&dir.display().to_string())));
        }
        let path = self.path(name);
        fs::write(&path, text).unwrap();
        path
    }

    pub fn storage(&self) -> DockStorage {
        DockStorage::at(self.path(STORAGE_FILE_NAME))
    }
}

/// Desktop-entry value escaping for backslashes (Windows temp paths).
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\")
}

/// Remembers every path it was asked about and answers with the folder glyph,
/// so tests can tell provider icons from the generic fallback.
#[derive(Clone, Default)]
pub struct RecordingIcons {
    pub requests: Rc<RefCell<Vec<PathBuf>>>,
}

impl RecordingIcons {
    pub fn last(&self) -> Option<PathBuf> {
        self.requests.borrow().last().cloned()
    }
}

impl IconProvider for RecordingIcons {
    fn icon_for(&self, path: &Path) -> Option<DockIcon> {
        self.requests.borrow_mut().push(path.to_path_buf());
        Some(DockIcon::folder())
    }
}

/// Never knows an icon.
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn icon_for(&self, _path: &Path) -> Option<DockIcon> {
        None
    }
}

pub fn resolver_with(icons: impl IconProvider + 'static) -> ItemResolver {
    ItemResolver::new(Box::new(icons), ShortcutResolver::new(Box::new(DesktopEntryReader)))
}

pub fn resolver() -> ItemResolver {
    resolver_with(RecordingIcons::default())
}

#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub launched: Rc<RefCell<Vec<(PathBuf, PathBuf)>>>,
    pub fail_with: Option<String>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, item: &DockItem) -> Result<(), LaunchError> {
        if let Some(message) = &self.fail_with {
            return Err(LaunchError { path: item.launch_path.clone(), message: message.clone() });
        }
        self.launched.borrow_mut().push((item.launch_path.clone(), item.working_directory.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub changes: Vec<Vec<String>>,
    pub failures: Vec<LaunchError>,
}

impl DockView for RecordingView {
    fn items_changed(&mut self, items: &[DockItem]) {
        self.changes.push(items.iter().map(|i| i.display_name.clone()).collect());
    }

    fn launch_failed(&mut self, error: &LaunchError) {
        self.failures.push(error.clone());
    }
}

pub fn dock(sandbox: &Sandbox, launcher: RecordingLauncher) -> Dock {
    Dock::new(resolver(), sandbox.storage(), Box::new(launcher))
}

pub fn names(items: &[DockItem]) -> Vec<&str> {
    items.iter().map(|i| i.display_name.as_str()).collect()
}
