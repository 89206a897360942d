/// Drops a trailing `,index` from a shell icon location (`shell32.dll,-3`).
///
/// The suffix is only removed when it parses as an integer, so paths that
/// legitimately contain commas survive.
pub fn strip_icon_index(location: &str) -> &str {
    let trimmed = location.trim();
    match trimmed.rsplit_once(',') {
        Some((path, index)) if index.trim().parse::<i32>().is_ok() => path.trim(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_numeric_suffix() {
        assert_eq!(strip_icon_index(r"C:\Windows\System32\shell32.dll,-3"), r"C:\Windows\System32\shell32.dll");
        assert_eq!(strip_icon_index(" app.exe , 0 "), "app.exe");
    }

    #[test]
    fn keeps_commas_that_are_part_of_the_path() {
        assert_eq!(strip_icon_index("/data/a,b/icon.png"), "/data/a,b/icon.png");
        assert_eq!(strip_icon_index(""), "");
    }
}
