//! Integration tests for shortcut resolution over an arbitrary reader.

mod common;

use std::path::{Path, PathBuf};

use common::Sandbox;
use premium_dock::DockError;
use premium_dock::shortcut::{RawShortcut, ShortcutReader, ShortcutResolver};

/// Reader that returns a canned result for any `.lnk` file.
struct CannedReader(Option<RawShortcut>);

impl ShortcutReader for CannedReader {
    fn extension(&self) -> &'static str {
        "lnk"
    }

    fn read(&self, _path: &Path) -> Result<RawShortcut, DockError> {
        self.0.clone().ok_or(DockError::Shortcut("shell refused to load the link".into()))
    }
}

fn resolver_for(raw: Option<RawShortcut>) -> ShortcutResolver {
    ShortcutResolver::new(Box::new(CannedReader(raw)))
}

fn raw(target: &Path) -> RawShortcut {
    RawShortcut { target: target.display().to_string(), ..RawShortcut::default() }
}

#[test]
fn test_detects_shortcuts_by_extension() {
    let sandbox = Sandbox::new();
    let link = sandbox.file("App.LNK");
    let plain = sandbox.file("App.txt");
    let folder = sandbox.folder("Dir.lnk");

    let resolver = resolver_for(None);
    assert!(resolver.is_shortcut(&link));
    assert!(!resolver.is_shortcut(&plain));
    assert!(!resolver.is_shortcut(&folder));
    assert!(!resolver.is_shortcut(&sandbox.path("missing.lnk")));
}

#[test]
fn test_reader_failure_is_absence() {
    let sandbox = Sandbox::new();
    assert!(resolver_for(None).resolve_shortcut(&sandbox.file("x.lnk")).is_none());
}

#[test]
fn test_blank_target_is_absence() {
    let sandbox = Sandbox::new();
    let link = sandbox.file("x.lnk");
    let blank = RawShortcut { target: "   ".into(), ..RawShortcut::default() };
    assert!(resolver_for(Some(blank)).resolve_shortcut(&link).is_none());
}

#[test]
fn test_defaults_come_from_the_target() {
    let sandbox = Sandbox::new();
    let link = sandbox.file("Links/Calculator.lnk");
    let target = sandbox.file("Apps/calc.exe");

    let info = resolver_for(Some(raw(&target))).resolve_shortcut(&link).unwrap();
    assert_eq!(info.display_name, "Calculator");
    assert_eq!(info.target_path, target);
    assert_eq!(info.working_directory, sandbox.path("Apps"));
    assert_eq!(info.icon_location, target.display().to_string());
}

#[test]
fn test_declared_fields_are_kept() {
    let sandbox = Sandbox::new();
    let link = sandbox.file("Calculator.lnk");
    let target = sandbox.file("Apps/calc.exe");
    let shortcut = RawShortcut {
        target: format!("  {}  ", target.display()),
        working_directory: "/srv/work".into(),
        icon_location: "shell32.dll,-21".into(),
    };

    let info = resolver_for(Some(shortcut)).resolve_shortcut(&link).unwrap();
    assert_eq!(info.target_path, target);
    assert_eq!(info.working_directory, PathBuf::from("/srv/work"));
    assert_eq!(info.icon_location, "shell32.dll,-21");
}

#[test]
fn test_folder_targets_are_allowed() {
    let sandbox = Sandbox::new();
    let link = sandbox.file("Docs.lnk");
    let target = sandbox.folder("Documents");

    let info = resolver_for(Some(raw(&target))).resolve_shortcut(&link).unwrap();
    assert_eq!(info.target_path, target);
}
