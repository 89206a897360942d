use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::System::Com::{COINIT_APARTMENTTHREADED, CoInitializeEx, CoUninitialize};

use crate::error::DockError;
use crate::log::log;

/// Keeps the calling thread inside a COM apartment for the guard's lifetime.
///
/// A thread that already joined an apartment with another model is accepted
/// as-is and left untouched on drop.
pub(crate) struct ComApartment {
    owned: bool,
}

impl ComApartment {
    pub(crate) fn enter() -> Result<Self, DockError> {
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        if hr == RPC_E_CHANGED_MODE {
            log("ComApartment: thread already in MTA, reusing it");
            return Ok(Self { owned: false });
        }
        hr.ok()?;
        // S_OK and S_FALSE both take a reference that must be balanced.
        Ok(Self { owned: true })
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        if self.owned {
            unsafe { CoUninitialize() };
        }
    }
}
