use std::path::Path;

/// Case-insensitive path comparison used for dock identity.
#[inline]
pub fn path_eq_ignore_case(a: &Path, b: &Path) -> bool {
    let (a, b) = (a.as_os_str().to_string_lossy(), b.as_os_str().to_string_lossy());
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differs_only_in_case() {
        assert!(path_eq_ignore_case(Path::new("C:/Tools/App.EXE"), Path::new("c:/tools/app.exe")));
        assert!(!path_eq_ignore_case(Path::new("/tmp/a.txt"), Path::new("/tmp/b.txt")));
    }

    #[test]
    fn non_ascii_letters_fold() {
        assert!(path_eq_ignore_case(Path::new("/home/Ölbild"), Path::new("/home/ölbild")));
    }
}
