use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::item::DockItem;
use crate::log::log;

/// The one error the user gets to see: the OS refused to open an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchError {
    pub path: PathBuf,
    pub message: String,
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not launch {}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for LaunchError {}

/// Opens a dock item with the OS's associated handler.
pub trait Launcher {
    fn launch(&self, item: &DockItem) -> Result<(), LaunchError>;
}

/// `ShellExecuteExW` ("open" verb) on Windows, `xdg-open`/`open` elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn launch(&self, item: &DockItem) -> Result<(), LaunchError> {
        log(format!("ShellLauncher: opening {} (cwd={})", item.launch_path.display(), item.working_directory.display()));
        let result = shell_open(item);
        match &result {
            Ok(()) => log(format!("ShellLauncher: {} started", item.launch_path.display())),
            Err(err) => log(format!("ShellLauncher: {}", err)),
        }
        result
    }
}

#[cfg(windows)]
fn shell_open(item: &DockItem) -> Result<(), LaunchError> {
    use core::mem::size_of;
    use widestring::U16CString;
    use windows::Win32::UI::Shell::{SEE_MASK_NOASYNC, SHELLEXECUTEINFOW, ShellExecuteExW};
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
    use windows::core::PCWSTR;

    let fail = |message: String| LaunchError { path: item.launch_path.clone(), message };

    let file = U16CString::from_os_str(item.launch_path.as_os_str()).map_err(|e| fail(e.to_string()))?;
    let dir = U16CString::from_os_str(item.working_directory.as_os_str()).map_err(|e| fail(e.to_string()))?;

    let mut info = SHELLEXECUTEINFOW {
        cbSize: size_of::<SHELLEXECUTEINFOW>() as u32,
        fMask: SEE_MASK_NOASYNC,
        lpFile: PCWSTR(file.as_ptr()),
        lpDirectory: if item.working_directory.as_os_str().is_empty() { PCWSTR::null() } else { PCWSTR(dir.as_ptr()) },
        nShow: SW_SHOWNORMAL.0,
        ..Default::default()
    };

    // The COM apartment is needed for shell verbs that delegate to handlers.
    let _apartment = crate::com::ComApartment::enter().map_err(|e| fail(e.to_string()))?;
    unsafe { ShellExecuteExW(&mut info) }.map_err(|e| fail(e.to_string()))
}

#[cfg(not(windows))]
fn shell_open(item: &DockItem) -> Result<(), LaunchError> {
    use std::process::{Command, Stdio};

    #[cfg(target_os = "macos")]
    const OPENER: &str = "open";
    #[cfg(not(target_os = "macos"))]
    const OPENER: &str = "xdg-open";

    let mut cmd = Command::new(OPENER);
    cmd.arg(&item.launch_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if !item.working_directory.as_os_str().is_empty() {
        cmd.current_dir(&item.working_directory);
    }

    match cmd.spawn() {
        Ok(child) => {
            drop(child);
            Ok(())
        }
        Err(err) => Err(LaunchError { path: item.launch_path.clone(), message: err.to_string() }),
    }
}
