//! Display-settings changes and dock placement.
//!
//! Subscribers live in one process-wide list. [`subscribe`] hands back a
//! guard that removes the handler when dropped, so a window that goes away
//! cannot leave its callback registered. Handlers run on the thread calling
//! [`notify_changed`] and must not subscribe or unsubscribe from inside.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::log::log;
use crate::{DOCK_BOTTOM_MARGIN, DOCK_HEIGHT, DOCK_PADDING, DOCK_SLOT_WIDTH};

/// Usable desktop rectangle (screen minus taskbar), in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkArea {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl WorkArea {
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Top-left corner and size of the dock window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockPlacement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Window size for `item_count` items (an empty dock keeps one slot as a drop zone).
pub fn dock_size(item_count: usize) -> (i32, i32) {
    let slots = item_count.max(1) as i32;
    (slots * DOCK_SLOT_WIDTH + 2 * DOCK_PADDING, DOCK_HEIGHT)
}

/// Centred horizontally, floating [`DOCK_BOTTOM_MARGIN`] above the work-area bottom.
pub fn place_dock(area: &WorkArea, width: i32, height: i32) -> DockPlacement {
    DockPlacement { x: area.left + (area.width - width) / 2, y: area.bottom() - height - DOCK_BOTTOM_MARGIN, width, height }
}

type Handler = Box<dyn Fn(&WorkArea) + Send>;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);
static SUBSCRIBERS: Mutex<Vec<(u64, Handler)>> = Mutex::new(Vec::new());

/// Registration handle; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct DisplaySubscription {
    id: u64,
}

pub fn subscribe(handler: impl Fn(&WorkArea) + Send + 'static) -> DisplaySubscription {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    SUBSCRIBERS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push((id, Box::new(handler)));
    log(format!("display: subscribed #{}", id));
    DisplaySubscription { id }
}

impl Drop for DisplaySubscription {
    fn drop(&mut self) {
        SUBSCRIBERS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(id, _)| *id != self.id);
        log(format!("display: unsubscribed #{}", self.id));
    }
}

/// Calls every live handler with the new work area; returns how many ran.
pub fn notify_changed(area: &WorkArea) -> usize {
    let subscribers = SUBSCRIBERS.lock().unwrap_or_else(PoisonError::into_inner);
    for (_, handler) in subscribers.iter() {
        handler(area);
    }
    subscribers.len()
}

/// Turns periodic work-area samples into change notifications.
#[derive(Debug, Default)]
pub struct DisplayWatcher {
    last: Option<WorkArea>,
}

impl DisplayWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first sample only primes the watcher. Returns true when subscribers were notified.
    pub fn poll(&mut self, current: WorkArea) -> bool {
        match self.last.replace(current) {
            Some(previous) if previous != current => {
                log(format!("display: work area changed {:?} -> {:?}", previous, current));
                notify_changed(&current);
                true
            }
            _ => false,
        }
    }
}

/// Work area of the primary monitor.
#[cfg(windows)]
pub fn primary_work_area() -> Option<WorkArea> {
    use core::ffi::c_void;
    use windows::Win32::Foundation::RECT;
    use windows::Win32::UI::WindowsAndMessaging::{SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW};

    let mut rect = RECT::default();
    unsafe { SystemParametersInfoW(SPI_GETWORKAREA, 0, Some(&mut rect as *mut RECT as *mut c_void), SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0)) }.ok()?;
    Some(WorkArea { left: rect.left, top: rect.top, width: rect.right - rect.left, height: rect.bottom - rect.top })
}

/// No portable way to ask; callers keep their last placement.
#[cfg(not(windows))]
pub fn primary_work_area() -> Option<WorkArea> {
    None
}
