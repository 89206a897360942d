use crate::display::{DockPlacement, WorkArea, dock_size, place_dock};
use crate::drop_target::{DropEffect, DropPayload};
use crate::error::DockError;
use crate::item::DockItem;
use crate::launcher::{LaunchError, Launcher, ShellLauncher};
use crate::log::log;
use crate::resolver::ItemResolver;
use crate::storage::DockStorage;
use crate::store::ItemStore;

/// Rendering side of the dock.
pub trait DockView {
    /// The item list changed; `items` is the full ordered list.
    fn items_changed(&mut self, items: &[DockItem]);

    /// A launch the user asked for failed. Shown as a blocking notification.
    fn launch_failed(&mut self, error: &LaunchError);
}

/// Session state: resolution, the item list, its record, and launching.
///
/// Everything runs on the caller's thread; there is no background work.
pub struct Dock {
    resolver: ItemResolver,
    store: ItemStore,
    storage: DockStorage,
    launcher: Box<dyn Launcher>,
}

impl Dock {
    pub fn new(resolver: ItemResolver, storage: DockStorage, launcher: Box<dyn Launcher>) -> Self {
        Self { resolver, store: ItemStore::new(), storage, launcher }
    }

    /// Platform resolver + launcher over the per-user record, loaded and shown.
    pub fn open_default(view: &mut dyn DockView) -> Result<Self, DockError> {
        let storage = DockStorage::open_default()?;
        let mut dock = Self::new(ItemResolver::platform(), storage, Box::new(ShellLauncher));
        dock.load(view);
        Ok(dock)
    }

    /// Adds every item of the persisted record that still resolves.
    pub fn load(&mut self, view: &mut dyn DockView) -> usize {
        let mut added = 0;
        for item in self.storage.load(&self.resolver) {
            if self.store.add(item) {
                added += 1;
            }
        }
        view.items_changed(self.store.snapshot());
        added
    }

    pub fn drag_enter(&self, payload: &DropPayload) -> DropEffect {
        payload.effect()
    }

    /// Resolves and adds dropped paths; returns how many new items appeared.
    ///
    /// Non-path payloads, missing paths, broken shortcuts and duplicates are
    /// skipped silently. The record is rewritten once per drop that added something.
    pub fn handle_drop(&mut self, payload: &DropPayload, view: &mut dyn DockView) -> usize {
        let Some(paths) = payload.paths() else {
            log("Dock: drop rejected, payload is not a file list");
            return 0;
        };

        let resolved: Vec<DockItem> = paths.iter().filter_map(|p| self.resolver.resolve(p)).collect();
        log(format!("Dock: drop of {} paths, {} resolved", paths.len(), resolved.len()));

        let mut added = 0;
        for item in resolved {
            if self.store.add(item) {
                added += 1;
            }
        }
        if added == 0 {
            return 0;
        }

        if let Err(err) = self.storage.save(self.store.snapshot()) {
            log(format!("Dock: failed to save {}: {}", self.storage.path().display(), err));
        }
        view.items_changed(self.store.snapshot());
        added
    }

    /// Opens the item at `index`. Failures go to `view.launch_failed` and are returned.
    pub fn launch(&self, index: usize, view: &mut dyn DockView) -> Result<(), LaunchError> {
        let Some(item) = self.store.get(index) else {
            log(format!("Dock: launch of unknown index {}", index));
            return Ok(());
        };
        self.launcher.launch(item).inspect_err(|err| view.launch_failed(err))
    }

    pub fn items(&self) -> &[DockItem] {
        self.store.snapshot()
    }

    pub fn storage(&self) -> &DockStorage {
        &self.storage
    }

    pub fn placement(&self, area: &WorkArea) -> DockPlacement {
        let (w, h) = dock_size(self.store.len());
        place_dock(area, w, h)
    }
}
