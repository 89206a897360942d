use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DockError;
use crate::item::DockItem;
use crate::log::log;
use crate::resolver::ItemResolver;
use crate::{APP_DIR_NAME, STORAGE_FILE_NAME};

/// One persisted entry. Only the source path is stored; everything else is
/// recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(rename = "SourcePath")]
    pub source_path: String,
}

/// The on-disk dock record (`dock-items.json`).
#[derive(Debug, Clone)]
pub struct DockStorage {
    path: PathBuf,
}

impl DockStorage {
    /// Record file inside the per-user application folder, creating the folder.
    pub fn open_default() -> Result<Self, DockError> {
        let dir = app_data_dir()?;
        fs::create_dir_all(&dir).map_err(|e| {
            log(format!("DockStorage: failed to create {}: {}", dir.display(), e));
            e
        })?;
        Ok(Self::at(dir.join(STORAGE_FILE_NAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-resolves every persisted path, in record order.
    ///
    /// Missing, unreadable or malformed records yield an empty dock, entries
    /// that no longer resolve are dropped. Never fails.
    pub fn load(&self, resolver: &ItemResolver) -> Vec<DockItem> {
        let records = match self.read_records() {
            Ok(records) => records,
            Err(err) => {
                log(format!("DockStorage: starting empty, {} unusable ({})", self.path.display(), err));
                return Vec::new();
            }
        };

        let total = records.len();
        let items: Vec<DockItem> = records
            .iter()
            .filter_map(|record| resolver.resolve(Path::new(&record.source_path)))
            .collect();
        log(format!("DockStorage: loaded {} of {} entries from {}", items.len(), total, self.path.display()));
        items
    }

    /// Raw records; an absent file is an empty list.
    pub fn read_records(&self) -> Result<Vec<PersistedRecord>, DockError> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        let records: Option<Vec<PersistedRecord>> = serde_json::from_str(&json)?;
        Ok(records.unwrap_or_default())
    }

    /// Overwrites the record with the source paths of `items`, in order.
    pub fn save(&self, items: &[DockItem]) -> Result<(), DockError> {
        let payload: Vec<PersistedRecord> = items
            .iter()
            .map(|item| PersistedRecord { source_path: item.source_path.to_string_lossy().into_owned() })
            .collect();
        let json = serde_json::to_string_pretty(&payload)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        log(format!("DockStorage: saved {} entries to {}", payload.len(), self.path.display()));
        Ok(())
    }
}

/// `%LOCALAPPDATA%\PremiumDock` on Windows.
#[cfg(windows)]
pub fn app_data_dir() -> Result<PathBuf, DockError> {
    let base = std::env::var_os("LOCALAPPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Users\Default\AppData\Local"));
    Ok(base.join(APP_DIR_NAME))
}

/// Local data folder of the platform (`$XDG_DATA_HOME`, `~/Library/Application Support`).
#[cfg(not(windows))]
pub fn app_data_dir() -> Result<PathBuf, DockError> {
    Ok(dirs::data_local_dir().ok_or(DockError::NoDataDir)?.join(APP_DIR_NAME))
}
