use std::path::Path;
use std::ptr::null_mut;

use widestring::{U16CStr, U16CString};
use windows::Win32::System::Com::{CLSCTX_INPROC_SERVER, CoCreateInstance, IPersistFile, STGM_READ};
use windows::Win32::System::Environment::ExpandEnvironmentStringsW;
use windows::Win32::UI::Shell::{IShellLinkW, ShellLink};
use windows_core::{Interface, PCWSTR};

use crate::com::ComApartment;
use crate::error::DockError;
use crate::log::log;
use crate::shortcut::{RawShortcut, ShortcutReader};

// Long-path aware; IShellLinkW truncates to its own limit anyway.
const LINK_BUF_LEN: usize = 32768;

/// Reads `.lnk` files through the shell's `IShellLinkW` + `IPersistFile`.
///
/// COM references are released when the interface values drop, the
/// apartment guard is dropped last, so every exit path cleans up.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLinkReader;

impl ShortcutReader for ShellLinkReader {
    fn extension(&self) -> &'static str {
        "lnk"
    }

    fn read(&self, path: &Path) -> Result<RawShortcut, DockError> {
        let _apartment = ComApartment::enter()?;

        let wide = U16CString::from_os_str(path.as_os_str()).map_err(|_| DockError::Shortcut(format!("interior NUL in {}", path.display())))?;

        let link: IShellLinkW = unsafe { CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER)? };
        let persist: IPersistFile = link.cast()?;
        unsafe { persist.Load(PCWSTR(wide.as_ptr()), STGM_READ)? };

        let mut buf = vec![0u16; LINK_BUF_LEN];

        // S_FALSE (no file-system target) leaves the buffer empty.
        unsafe { link.GetPath(&mut buf, null_mut(), 0)? };
        let target = from_wide_buf(&buf);

        buf.fill(0);
        unsafe { link.GetWorkingDirectory(&mut buf)? };
        let working_directory = from_wide_buf(&buf);

        buf.fill(0);
        let mut index = 0i32;
        unsafe { link.GetIconLocation(&mut buf, &mut index)? };
        let icon_path = expand_env(&from_wide_buf(&buf));
        let icon_location = if icon_path.trim().is_empty() { String::new() } else { format!("{},{}", icon_path, index) };

        log(format!("ShellLinkReader: {} -> target='{}' dir='{}' icon='{}'", path.display(), target, working_directory, icon_location));

        Ok(RawShortcut { target, working_directory, icon_location })
    }
}

fn from_wide_buf(buf: &[u16]) -> String {
    U16CStr::from_slice_truncate(buf)
        .map(|s| s.to_string_lossy())
        .unwrap_or_default()
}

/// `%SystemRoot%\system32\shell32.dll` -> `C:\Windows\system32\shell32.dll`.
fn expand_env(raw: &str) -> String {
    if !raw.contains('%') {
        return raw.to_string();
    }
    let Ok(src) = U16CString::from_str(raw) else {
        return raw.to_string();
    };
    let mut out = vec![0u16; LINK_BUF_LEN];
    let n = unsafe { ExpandEnvironmentStringsW(PCWSTR(src.as_ptr()), Some(&mut out)) } as usize;
    if n == 0 || n > out.len() {
        return raw.to_string();
    }
    from_wide_buf(&out)
}
