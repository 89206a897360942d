//! freedesktop.org `.desktop` files, the shortcut format of Linux/BSD desktops.
//!
//! Only the `[Desktop Entry]` group is read. `Type=Application` entries
//! target the program named by the first `Exec` token (looked up in `PATH`
//! when relative), `Type=Link` entries target a `file://` URL. Icon theme
//! names are not resolved; only an absolute `Icon=` path becomes the icon
//! location.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DockError;
use crate::shortcut::{RawShortcut, ShortcutReader};
use crate::utils::file_uri::file_uri_to_path;
use crate::utils::split_quoted::split_quoted;

const MAIN_GROUP: &str = "[Desktop Entry]";

#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopEntryReader;

impl ShortcutReader for DesktopEntryReader {
    fn extension(&self) -> &'static str {
        "desktop"
    }

    fn read(&self, path: &Path) -> Result<RawShortcut, DockError> {
        let text = fs::read_to_string(path)?;
        parse_desktop_entry(&text)
    }
}

#[derive(Default)]
struct EntryFields {
    kind: Option<String>,
    exec: Option<String>,
    url: Option<String>,
    path: Option<String>,
    icon: Option<String>,
}

pub fn parse_desktop_entry(text: &str) -> Result<RawShortcut, DockError> {
    let mut fields = EntryFields::default();
    let mut seen_main = false;
    let mut in_main = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            in_main = line == MAIN_GROUP;
            seen_main |= in_main;
            continue;
        }
        if !in_main {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        // Localized variants (Name[de]=...) are irrelevant for launching.
        let slot = match key.trim() {
            "Type" => &mut fields.kind,
            "Exec" => &mut fields.exec,
            "URL" => &mut fields.url,
            "Path" => &mut fields.path,
            "Icon" => &mut fields.icon,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(unescape(value.trim()));
        }
    }

    if !seen_main {
        return Err(DockError::Shortcut("missing [Desktop Entry] group".into()));
    }

    let target = match fields.kind.as_deref().unwrap_or("Application") {
        "Application" => fields.exec.as_deref().map(exec_program).unwrap_or_default(),
        "Link" => {
            let url = fields.url.unwrap_or_default();
            if Path::new(&url).is_absolute() {
                url
            } else {
                file_uri_to_path(&url)
                    .ok_or(DockError::Unsupported("link entry does not point to a local file"))?
                    .to_string_lossy()
                    .into_owned()
            }
        }
        _ => return Err(DockError::Unsupported("desktop entry type is not launchable")),
    };

    let icon_location = fields
        .icon
        .filter(|icon| Path::new(icon).is_absolute())
        .unwrap_or_default();

    Ok(RawShortcut { target, working_directory: fields.path.unwrap_or_default(), icon_location })
}

/// Program path from an `Exec` line; field codes and arguments are dropped.
fn exec_program(exec: &str) -> String {
    let Some(program) = split_quoted(exec).into_iter().find(|t| !t.starts_with('%')) else {
        return String::new();
    };
    if program.is_empty() || Path::new(&program).is_absolute() {
        return program;
    }
    // Not on PATH: no target.
    search_path(&program)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn search_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

/// Value escapes: `\s`, `\n`, `\t`, `\r`, `\\`.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn application_entry_uses_first_exec_token() {
        let raw = parse_desktop_entry(
            "[Desktop Entry]\nType=Application\nName=Editor\nName[de]=Bearbeiter\nExec=\"/opt/my editor/bin/edit\" --new %F\nPath=/home/me/work\nIcon=/opt/my editor/icon.png\n",
        )
        .unwrap();
        assert_eq!(raw.target, "/opt/my editor/bin/edit");
        assert_eq!(raw.working_directory, "/home/me/work");
        assert_eq!(raw.icon_location, "/opt/my editor/icon.png");
    }

    #[test]
    fn theme_icon_names_are_not_locations() {
        let raw = parse_desktop_entry("[Desktop Entry]\nExec=/usr/bin/true\nIcon=utilities-terminal\n").unwrap();
        assert_eq!(raw.icon_location, "");
        assert_eq!(raw.working_directory, "");
    }

    #[cfg(unix)]
    #[test]
    fn link_entry_decodes_file_url() {
        let raw = parse_desktop_entry("[Desktop Entry]\nType=Link\nURL=file:///srv/My%20Files/report.pdf\n").unwrap();
        assert_eq!(raw.target, "/srv/My Files/report.pdf");
    }

    #[test]
    fn other_groups_are_ignored() {
        let raw = parse_desktop_entry("[Desktop Action new]\nExec=/bin/other\n\n[Desktop Entry]\nExec=/bin/main\n").unwrap();
        assert_eq!(raw.target, "/bin/main");
    }

    #[test]
    fn rejects_non_entries() {
        assert!(parse_desktop_entry("just some text").is_err());
        assert!(parse_desktop_entry("[Desktop Entry]\nType=Directory\n").is_err());
        assert!(parse_desktop_entry("[Desktop Entry]\nType=Link\nURL=https://example.com\n").is_err());
    }

    #[test]
    fn unknown_relative_program_has_no_target() {
        let raw = parse_desktop_entry("[Desktop Entry]\nExec=no-such-program-for-the-dock --flag %U\n").unwrap();
        assert_eq!(raw.target, "");
    }

    #[test]
    fn escapes_are_decoded() {
        assert_eq!(unescape(r"a\sb\\c\q"), r"a b\c\q");
    }
}
