pub mod bgra_to_rgba;
pub mod file_uri;
pub mod fit_rgba_square;
pub mod normalize_path;
pub mod path_eq_ignore_case;
pub mod split_quoted;
pub mod strip_icon_index;
