use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use crate::ICON_SIZE;
use crate::log::log;
use crate::utils::fit_rgba_square::fit_rgba_square;

/// Extensions the portable provider decodes itself.
const IMAGE_EXTENSIONS: &[&str] = &["png", "ico", "bmp", "jpg", "jpeg", "gif"];

/// Square RGBA raster, [`ICON_SIZE`] pixels per edge.
#[derive(Clone, PartialEq, Eq)]
pub struct DockIcon {
    rgba: Arc<[u8]>,
}

impl DockIcon {
    /// Scales an arbitrary RGBA image into a dock icon.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        let pixels = fit_rgba_square(rgba, width, height, ICON_SIZE)?;
        Some(Self { rgba: Arc::from(pixels) })
    }

    /// Generic "application window" glyph used when nothing better is known.
    pub fn generic() -> Self {
        let frame = Rgba([0x5A, 0x62, 0x70, 0xFF]);
        let title = Rgba([0x2F, 0x7D, 0xD1, 0xFF]);
        let body = Rgba([0xF4, 0xF6, 0xF8, 0xFF]);
        Self::draw(|x, y| {
            if !(2..30).contains(&x) || !(4..28).contains(&y) {
                Rgba([0, 0, 0, 0])
            } else if x == 2 || x == 29 || y == 27 {
                frame
            } else if y < 9 {
                title
            } else {
                body
            }
        })
    }

    /// Folder glyph for directories.
    pub fn folder() -> Self {
        let tab = Rgba([0xE0, 0xA5, 0x2E, 0xFF]);
        let body = Rgba([0xF5, 0xC2, 0x4C, 0xFF]);
        Self::draw(|x, y| {
            if (3..14).contains(&x) && (6..10).contains(&y) {
                tab
            } else if (3..29).contains(&x) && (9..27).contains(&y) {
                body
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    fn draw(pixel: impl Fn(u32, u32) -> Rgba<u8>) -> Self {
        let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, pixel);
        Self { rgba: Arc::from(img.into_raw()) }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        ICON_SIZE
    }

    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.size(), self.size(), self.rgba.to_vec())
    }
}

impl Debug for DockIcon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DockIcon({}x{}, {} bytes)", self.size(), self.size(), self.rgba.len())
    }
}

/// Produces the raster shown for a path.
///
/// Returning `None` means "no specific icon"; callers fall back to
/// [`DockIcon::generic`]. Implementations must release any OS handle they
/// obtain before returning.
pub trait IconProvider {
    fn icon_for(&self, path: &Path) -> Option<DockIcon>;
}

/// Pure-Rust provider: decodes image files, draws a folder for directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageIconProvider;

impl IconProvider for ImageIconProvider {
    fn icon_for(&self, path: &Path) -> Option<DockIcon> {
        if path.is_dir() {
            return Some(DockIcon::folder());
        }

        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(e)))
            .unwrap_or(false);
        if !is_image || !path.is_file() {
            return None;
        }

        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                DockIcon::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())
            }
            Err(err) => {
                log(format!("ImageIconProvider: decode failed for {} ({})", path.display(), err));
                None
            }
        }
    }
}

/// Shell icons on Windows, [`ImageIconProvider`] elsewhere.
pub fn default_icon_provider() -> Box<dyn IconProvider> {
    #[cfg(windows)]
    {
        Box::new(crate::icon_shell::ShellIconProvider)
    }
    #[cfg(not(windows))]
    {
        Box::new(ImageIconProvider)
    }
}
