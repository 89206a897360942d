/// Converts a 32bpp BGRA buffer (as returned by GetDIBits) into straight RGBA.
///
/// Legacy icons carry no alpha channel at all (every alpha byte is zero); those
/// are treated as fully opaque.
pub fn bgra_to_rgba(bgra: &[u8]) -> Vec<u8> {
    let has_alpha = bgra.chunks_exact(4).any(|px| px[3] != 0);
    let mut out = Vec::with_capacity(bgra.len());
    for px in bgra.chunks_exact(4) {
        let a = if has_alpha { px[3] } else { 0xFF };
        out.extend_from_slice(&[px[2], px[1], px[0], a]);
    }
    out
}
