//! Integration tests for the persisted dock record.

mod common;

use std::fs;

use common::{RecordingLauncher, RecordingView, Sandbox, dock, names, resolver};
use premium_dock::drop_target::DropPayload;
use premium_dock::storage::PersistedRecord;

#[test]
fn test_round_trip_preserves_order() {
    let sandbox = Sandbox::new();
    let resolver = resolver();
    let items: Vec<_> = ["C.txt", "A.txt", "B.txt"]
        .iter()
        .map(|name| resolver.resolve(&sandbox.file(name)).unwrap())
        .collect();

    let storage = sandbox.storage();
    storage.save(&items).unwrap();

    let loaded = storage.load(&resolver);
    assert_eq!(names(&loaded), vec!["C", "A", "B"]);
    assert_eq!(loaded, items);
}

#[test]
fn test_deleted_entries_are_dropped_on_load() {
    let sandbox = Sandbox::new();
    let resolver = resolver();
    let keep = sandbox.file("keep.txt");
    let gone = sandbox.file("gone.txt");
    let items = vec![resolver.resolve(&gone).unwrap(), resolver.resolve(&keep).unwrap()];
    sandbox.storage().save(&items).unwrap();

    fs::remove_file(&gone).unwrap();
    let loaded = sandbox.storage().load(&resolver);
    assert_eq!(names(&loaded), vec!["keep"]);
}

#[test]
fn test_stale_shortcut_is_dropped_on_load() {
    let sandbox = Sandbox::new();
    let resolver = resolver();
    let target = sandbox.file("bin/app");
    let link = sandbox.shortcut("App.desktop", &target, None, None);
    sandbox.storage().save(&[resolver.resolve(&link).unwrap()]).unwrap();

    fs::remove_file(&target).unwrap();
    assert!(sandbox.storage().load(&resolver).is_empty());
}

#[test]
fn test_absent_record_loads_empty() {
    let sandbox = Sandbox::new();
    assert!(sandbox.storage().load(&resolver()).is_empty());
    assert!(sandbox.storage().read_records().unwrap().is_empty());
}

#[test]
fn test_corrupt_record_loads_empty() {
    let sandbox = Sandbox::new();
    let storage = sandbox.storage();
    fs::write(storage.path(), "[{\"SourcePath\": ").unwrap();

    assert!(storage.read_records().is_err());
    assert!(storage.load(&resolver()).is_empty());
}

#[test]
fn test_record_is_pretty_json_of_source_paths() {
    let sandbox = Sandbox::new();
    let resolver = resolver();
    let target = sandbox.file("bin/app");
    let link = sandbox.shortcut("App.desktop", &target, None, None);
    let folder = sandbox.folder("Music");
    let items = vec![resolver.resolve(&link).unwrap(), resolver.resolve(&folder).unwrap()];

    let storage = sandbox.storage();
    storage.save(&items).unwrap();

    let text = fs::read_to_string(storage.path()).unwrap();
    assert!(text.contains('\n'));
    assert!(text.contains("\"SourcePath\""));

    // Shortcuts are stored as the shortcut file, not the target.
    assert_eq!(
        storage.read_records().unwrap(),
        vec![
            PersistedRecord { source_path: link.display().to_string() },
            PersistedRecord { source_path: folder.display().to_string() },
        ]
    );
}

#[test]
fn test_save_creates_missing_folders() {
    let sandbox = Sandbox::new();
    let resolver = resolver();
    let item = resolver.resolve(&sandbox.file("a.txt")).unwrap();
    let storage = premium_dock::storage::DockStorage::at(sandbox.path("nested/deeper/dock-items.json"));

    storage.save(&[item]).unwrap();
    assert!(storage.path().is_file());
    assert_eq!(storage.load(&resolver).len(), 1);
}

#[test]
fn test_empty_save_writes_empty_list() {
    let sandbox = Sandbox::new();
    let storage = sandbox.storage();
    storage.save(&[]).unwrap();
    assert_eq!(fs::read_to_string(storage.path()).unwrap(), "[]");
}

#[test]
fn test_accented_names_survive_a_restart() {
    let sandbox = Sandbox::new();
    let mut view = RecordingView::default();
    let file = sandbox.file("café ümlaut.txt");
    {
        let mut first = dock(&sandbox, RecordingLauncher::default());
        assert_eq!(first.handle_drop(&DropPayload::Paths(vec![file.clone()]), &mut view), 1);
    }

    let mut second = dock(&sandbox, RecordingLauncher::default());
    assert_eq!(second.load(&mut view), 1);
    assert_eq!(second.items()[0].source_path, file);
}

// Linux file systems accept arbitrary bytes in names; the JSON record cannot hold them.
#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_refused_instead_of_lost() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let sandbox = Sandbox::new();
    let file = sandbox.dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
    fs::write(&file, "x").unwrap();
    let keep = sandbox.file("plain.txt");

    let mut first = dock(&sandbox, RecordingLauncher::default());
    let mut view = RecordingView::default();
    assert!(resolver().resolve(&file).is_none());
    assert_eq!(first.handle_drop(&DropPayload::Paths(vec![file, keep]), &mut view), 1);

    let text = fs::read_to_string(first.storage().path()).unwrap();
    assert!(!text.contains('\u{FFFD}'));

    let mut second = dock(&sandbox, RecordingLauncher::default());
    assert_eq!(second.load(&mut view), first.items().len());
    assert_eq!(names(second.items()), vec!["plain"]);
}
