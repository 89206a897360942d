use std::path::Path;

use crate::item::DockItem;
use crate::utils::path_eq_ignore_case::path_eq_ignore_case;

/// Ordered dock items; insertion order is display and persistence order.
#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: Vec<DockItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless one with the same source path (ignoring case) exists.
    pub fn add(&mut self, item: DockItem) -> bool {
        if self.contains(&item.source_path) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, source_path: &Path) -> bool {
        self.items
            .iter()
            .any(|existing| path_eq_ignore_case(&existing.source_path, source_path))
    }

    #[inline]
    pub fn snapshot(&self) -> &[DockItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&DockItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
