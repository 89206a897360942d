use std::path::PathBuf;

/// Turns a `file://` URI into a local path, decoding `%XX` escapes.
///
/// Returns `None` for other schemes, remote hosts, or malformed escapes.
pub fn file_uri_to_path(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix("file://")?;
    let path = match rest.find('/') {
        Some(0) => rest,
        Some(i) if rest[..i].eq_ignore_ascii_case("localhost") => &rest[i..],
        _ => return None,
    };

    let bytes = path.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    let decoded = String::from_utf8(decoded).ok()?;

    // file:///C:/dir -> C:/dir
    #[cfg(windows)]
    let decoded = match decoded.as_bytes() {
        [b'/', drive, b':', ..] if drive.is_ascii_alphabetic() => decoded[1..].to_string(),
        _ => decoded,
    };

    Some(PathBuf::from(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn decodes_escapes() {
        assert_eq!(file_uri_to_path("file:///home/me/My%20Docs/a.txt"), Some(PathBuf::from("/home/me/My Docs/a.txt")));
        assert_eq!(file_uri_to_path("file://localhost/tmp/x"), Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn rejects_foreign_schemes_and_hosts() {
        assert_eq!(file_uri_to_path("https://example.com/a"), None);
        assert_eq!(file_uri_to_path("file://server/share/a"), None);
        assert_eq!(file_uri_to_path("file:///bad%2"), None);
    }
}
