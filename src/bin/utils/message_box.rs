/// Blocking error notification.
#[cfg(windows)]
pub fn show_error(title: &str, text: &str) {
    use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
    use windows::core::HSTRING;

    unsafe {
        let _ = MessageBoxW(None, &HSTRING::from(text), &HSTRING::from(title), MB_OK | MB_ICONERROR);
    }
}

#[cfg(not(windows))]
pub fn show_error(title: &str, text: &str) {
    use dialoguer::console::style;
    use std::io::{self, Write};

    eprintln!("{} {}", style(format!("[{}]", title)).red().bold(), text);
    print!("Press Enter to continue...");
    let _ = io::stdout().flush();
    let mut _buf = String::new();
    let _ = io::stdin().read_line(&mut _buf);
}
