pub mod desktop_entry;
pub mod display;
pub mod dock;
pub mod drop_target;
pub mod error;
pub mod icon;
pub mod item;
pub mod launcher;
pub mod log;
pub mod resolver;
pub mod shortcut;
pub mod storage;
pub mod store;
pub mod utils;

#[cfg(windows)]
mod com;
#[cfg(windows)]
pub mod icon_shell;
#[cfg(windows)]
pub mod shell_link;

pub use dock::{Dock, DockView};
pub use error::DockError;
pub use item::{DockItem, ShortcutInfo};
pub use launcher::{LaunchError, Launcher};

/// Per-user application folder (under %LOCALAPPDATA% or the XDG data home).
pub const APP_DIR_NAME: &str = "PremiumDock";

/// Persisted item list inside [`APP_DIR_NAME`].
pub const STORAGE_FILE_NAME: &str = "dock-items.json";

/// Human-friendly name used for window titles and message boxes.
pub const FRIENDLY_NAME: &str = "Premium Dock";

/// Edge length of every dock icon, in pixels.
pub const ICON_SIZE: u32 = 32;

/// Gap between the dock and the bottom of the work area.
pub const DOCK_BOTTOM_MARGIN: i32 = 12;

/// Width reserved for one item (icon + padding).
pub const DOCK_SLOT_WIDTH: i32 = 56;

/// Padding on both sides of the item row.
pub const DOCK_PADDING: i32 = 16;

/// Total height of the dock window.
pub const DOCK_HEIGHT: i32 = 72;
