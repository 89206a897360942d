//! Minimal logging for the dock.
//! - OFF by default.
//! - Windows: one-time init from HKCU\Software\PremiumDock\LogEnabled (DWORD 0/1),
//!   lines go to OutputDebugStringW (DebugView).
//! - Other platforms: process-local flag, lines go to stderr only.
//! - toggle_logging() flips the state and persists it where a store exists.
//! - Public API: log_enabled(), toggle_logging(), log(...), logf!().

use core::fmt::Write as _;
use core::sync::atomic::{AtomicBool, Ordering};
use std::io::{self, Write};
use std::sync::Once;

// Process-local on/off flag
static LOG_ON: AtomicBool = AtomicBool::new(false);

// One-time init guard
static INIT_ONCE: Once = Once::new();

/// Returns current logging state (initializes once from the persisted flag on first call).
#[inline]
pub fn log_enabled() -> bool {
    ensure_init();
    LOG_ON.load(Ordering::Relaxed)
}

/// Flips logging state and persists it (best-effort). Returns the new state.
pub fn toggle_logging() -> bool {
    ensure_init();
    let new = !LOG_ON.load(Ordering::Relaxed);
    LOG_ON.store(new, Ordering::Relaxed);
    let _ = platform::write_flag(new);
    platform::emit(if new { "[premium-dock] logging: ON" } else { "[premium-dock] logging: OFF" });
    new
}

/// Logs one line to the debug sink and mirrors it to stderr, when enabled.
#[inline]
pub fn log(message: impl AsRef<str>) {
    if !log_enabled() {
        return;
    }
    __log_format(format_args!("{}", message.as_ref()));
}

/// Internal: formatting sink used by the logf! macro.
#[doc(hidden)]
pub fn __log_format(args: core::fmt::Arguments<'_>) {
    if !log_enabled() {
        return;
    }
    let mut line = String::with_capacity(64);
    let _ = write!(line, "[{}:{}] [premium-dock] ", std::process::id(), platform::thread_tag());
    let _ = line.write_fmt(args);

    let mut err = io::stderr().lock();
    let _ = writeln!(err, "{}", line);
    let _ = err.flush();

    platform::emit(&line);
}

/// `logf!("resolved {} -> {}", a, b)`; formats only when logging is on.
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__log_format(format_args!($($arg)*))
    };
}

#[inline]
fn ensure_init() {
    INIT_ONCE.call_once(|| {
        let enabled = platform::read_flag().unwrap_or(false);
        LOG_ON.store(enabled, Ordering::Relaxed);
    });
}

#[cfg(windows)]
mod platform {
    use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
    use windows::Win32::System::Threading::GetCurrentThreadId;
    use windows::core::PCWSTR;
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    const REG_SUBKEY: &str = r"Software\PremiumDock";
    const REG_VALUE: &str = "LogEnabled";

    pub fn thread_tag() -> u32 {
        unsafe { GetCurrentThreadId() }
    }

    /// Reads HKCU\Software\PremiumDock\LogEnabled. Missing key or value is an error (treated as OFF).
    pub fn read_flag() -> std::io::Result<bool> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = hkcu.open_subkey(REG_SUBKEY)?;
        let v: u32 = key.get_value(REG_VALUE)?;
        Ok(v != 0)
    }

    /// Creates the subkey if missing.
    pub fn write_flag(on: bool) -> std::io::Result<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (key, _disp) = hkcu.create_subkey(REG_SUBKEY)?;
        key.set_value(REG_VALUE, &(if on { 1u32 } else { 0u32 }))
    }

    /// Emits a NUL-terminated UTF-16 string to OutputDebugStringW.
    pub fn emit(s: &str) {
        let mut wide = Vec::with_capacity(s.len() + 1);
        wide.extend(s.encode_utf16());
        wide.push(0);
        unsafe {
            OutputDebugStringW(PCWSTR(wide.as_ptr()));
        }
    }
}

#[cfg(not(windows))]
mod platform {
    pub fn thread_tag() -> String {
        format!("{:?}", std::thread::current().id())
    }

    // No per-user store outside Windows: the flag lives for the process only.
    pub fn read_flag() -> std::io::Result<bool> {
        Ok(false)
    }

    pub fn write_flag(_on: bool) -> std::io::Result<()> {
        Ok(())
    }

    pub fn emit(_s: &str) {}
}
