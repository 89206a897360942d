/// Scales an RGBA buffer (nearest neighbour, aspect preserved) into a
/// `size`x`size` square, centred on a transparent background.
///
/// Returns `None` when the source dimensions do not match the buffer.
pub fn fit_rgba_square(src: &[u8], sw: u32, sh: u32, size: u32) -> Option<Vec<u8>> {
    let size = size.max(1);
    if sw == 0 || sh == 0 || src.len() < (sw as usize) * (sh as usize) * 4 {
        return None;
    }

    let (tw, th) = if sw >= sh {
        let th = ((sh as u64 * size as u64) / sw as u64).max(1) as u32;
        (size, th)
    } else {
        let tw = ((sw as u64 * size as u64) / sh as u64).max(1) as u32;
        (tw, size)
    };
    let (ox, oy) = ((size - tw) / 2, (size - th) / 2);

    let mut out = vec![0u8; (size * size * 4) as usize];
    for y in 0..th {
        let sy = (y as u64 * sh as u64 / th as u64) as u32;
        for x in 0..tw {
            let sx = (x as u64 * sw as u64 / tw as u64) as u32;
            let si = ((sy * sw + sx) * 4) as usize;
            let di = (((y + oy) * size + x + ox) * 4) as usize;
            out[di..di + 4].copy_from_slice(&src[si..si + 4]);
        }
    }
    Some(out)
}
