use std::path::PathBuf;

use crate::utils::file_uri::file_uri_to_path;
use crate::utils::split_quoted::split_quoted;

/// What arrives at the drop surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    /// A file-drop list. The only payload the dock accepts.
    Paths(Vec<PathBuf>),
    Text(String),
    Other,
}

/// Feedback while a payload hovers over the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
    None,
}

impl DropPayload {
    pub fn effect(&self) -> DropEffect {
        match self {
            DropPayload::Paths(_) => DropEffect::Copy,
            _ => DropEffect::None,
        }
    }

    pub fn paths(&self) -> Option<&[PathBuf]> {
        match self {
            DropPayload::Paths(paths) => Some(paths),
            _ => None,
        }
    }

    /// Interprets text pasted (or dragged) into a console.
    ///
    /// Tokens may be quoted or `file://` URIs. The result is a path list only
    /// when every token is an absolute path; anything else is foreign text.
    pub fn from_pasted_text(text: &str) -> Self {
        let tokens = split_quoted(text);
        if tokens.is_empty() {
            return DropPayload::Text(text.to_string());
        }

        let mut paths = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let path = if token.starts_with("file://") {
                match file_uri_to_path(token) {
                    Some(p) => p,
                    None => return DropPayload::Text(text.to_string()),
                }
            } else {
                PathBuf::from(token)
            };
            if !path.is_absolute() {
                return DropPayload::Text(text.to_string());
            }
            paths.push(path);
        }
        DropPayload::Paths(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_path_lists_are_accepted() {
        assert_eq!(DropPayload::Paths(vec![]).effect(), DropEffect::Copy);
        assert_eq!(DropPayload::Text("hello".into()).effect(), DropEffect::None);
        assert_eq!(DropPayload::Other.effect(), DropEffect::None);
        assert!(DropPayload::Other.paths().is_none());
    }

    #[test]
    fn pasted_absolute_paths_become_a_file_list() {
        let a = std::env::temp_dir().join("dock a.txt");
        let b = std::env::temp_dir().join("b.txt");
        let text = format!("\"{}\" '{}'", a.display(), b.display());
        assert_eq!(DropPayload::from_pasted_text(&text), DropPayload::Paths(vec![a, b]));
    }

    #[test]
    fn prose_is_rejected() {
        assert_eq!(DropPayload::from_pasted_text("open my notes"), DropPayload::Text("open my notes".into()));
        assert_eq!(DropPayload::from_pasted_text("  "), DropPayload::Text("  ".into()));
        assert!(matches!(DropPayload::from_pasted_text("https://example.com"), DropPayload::Text(_)));
    }

    #[cfg(unix)]
    #[test]
    fn file_uris_are_decoded() {
        assert_eq!(DropPayload::from_pasted_text("file:///tmp/My%20File.txt"), DropPayload::Paths(vec![PathBuf::from("/tmp/My File.txt")]));
    }
}
