use core::ffi::c_void;
use core::mem::size_of;
use std::path::Path;

use widestring::U16CString;
use windows::Win32::Graphics::Gdi::{BI_RGB, BITMAP, BITMAPINFO, BITMAPINFOHEADER, DIB_RGB_COLORS, DeleteObject, GetDC, GetDIBits, GetObjectW, HBITMAP, HDC, ReleaseDC};
use windows::Win32::Storage::FileSystem::FILE_FLAGS_AND_ATTRIBUTES;
use windows::Win32::UI::Shell::{SHFILEINFOW, SHGFI_ICON, SHGFI_LARGEICON, SHGetFileInfoW};
use windows::Win32::UI::WindowsAndMessaging::{DestroyIcon, GetIconInfo, HICON, ICONINFO};
use windows_core::PCWSTR;

use crate::com::ComApartment;
use crate::icon::{DockIcon, IconProvider};
use crate::log::log;
use crate::utils::bgra_to_rgba::bgra_to_rgba;

/// Icons as Explorer shows them (`SHGetFileInfoW`, large icon), converted to RGBA.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellIconProvider;

impl IconProvider for ShellIconProvider {
    fn icon_for(&self, path: &Path) -> Option<DockIcon> {
        let _apartment = ComApartment::enter().ok()?;
        let icon = OwnedIcon::for_path(path)?;
        let (w, h, rgba) = icon_pixels(&icon)?;
        log(format!("ShellIconProvider: {} -> {}x{}", path.display(), w, h));
        DockIcon::from_rgba(w, h, &rgba)
    }
}

struct OwnedIcon(HICON);

impl OwnedIcon {
    fn for_path(path: &Path) -> Option<Self> {
        let wide = U16CString::from_os_str(path.as_os_str()).ok()?;
        let mut info = SHFILEINFOW::default();
        let ret = unsafe { SHGetFileInfoW(PCWSTR(wide.as_ptr()), FILE_FLAGS_AND_ATTRIBUTES(0), Some(&mut info), size_of::<SHFILEINFOW>() as u32, SHGFI_ICON | SHGFI_LARGEICON) };
        if ret == 0 || info.hIcon.is_invalid() {
            log(format!("ShellIconProvider: SHGetFileInfoW gave no icon for {}", path.display()));
            return None;
        }
        Some(Self(info.hIcon))
    }
}

impl Drop for OwnedIcon {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyIcon(self.0);
        }
    }
}

struct OwnedBitmap(HBITMAP);

impl Drop for OwnedBitmap {
    fn drop(&mut self) {
        if !self.0.is_invalid() {
            unsafe {
                let _ = DeleteObject(self.0.into());
            }
        }
    }
}

struct ScreenDc(HDC);

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(None, self.0);
        }
    }
}

fn icon_pixels(icon: &OwnedIcon) -> Option<(u32, u32, Vec<u8>)> {
    let mut info = ICONINFO::default();
    unsafe { GetIconInfo(icon.0, &mut info) }.ok()?;
    // GetIconInfo hands out copies of both bitmaps; we own them from here.
    let color = OwnedBitmap(info.hbmColor);
    let _mask = OwnedBitmap(info.hbmMask);
    if color.0.is_invalid() {
        // monochrome icon
        return None;
    }

    let mut bm = BITMAP::default();
    let got = unsafe { GetObjectW(color.0.into(), size_of::<BITMAP>() as i32, Some(&mut bm as *mut BITMAP as *mut c_void)) };
    if got == 0 || bm.bmWidth <= 0 || bm.bmHeight <= 0 {
        return None;
    }
    let (w, h) = (bm.bmWidth, bm.bmHeight);

    let mut bmi = BITMAPINFO::default();
    bmi.bmiHeader.biSize = size_of::<BITMAPINFOHEADER>() as u32;
    bmi.bmiHeader.biWidth = w;
    bmi.bmiHeader.biHeight = -h; // top-down
    bmi.bmiHeader.biPlanes = 1;
    bmi.bmiHeader.biBitCount = 32;
    bmi.bmiHeader.biCompression = BI_RGB.0;

    let mut bgra = vec![0u8; (w as usize) * (h as usize) * 4];
    let dc = ScreenDc(unsafe { GetDC(None) });
    if dc.0.is_invalid() {
        return None;
    }
    let lines = unsafe { GetDIBits(dc.0, color.0, 0, h as u32, Some(bgra.as_mut_ptr() as *mut c_void), &mut bmi, DIB_RGB_COLORS) };
    if lines == 0 {
        return None;
    }

    Some((w as u32, h as u32, bgra_to_rgba(&bgra)))
}
