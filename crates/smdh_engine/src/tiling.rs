/// Texel traversal order within an 8x8 tile.
///
/// The console GPU stores textures as 8x8 tiles whose texels are laid out
/// in a bit-interleaved Morton sequence, not row-major. `TILE_ORDER[k]`
/// packs the tile-local coordinate of the k-th texel as `y * 8 + x`.
pub const TILE_ORDER: [u8; 64] = [
    0, 1, 8, 9, 2, 3, 10, 11, 16, 17, 24, 25, 18, 19, 26, 27,
    4, 5, 12, 13, 6, 7, 14, 15, 20, 21, 28, 29, 22, 23, 30, 31,
    32, 33, 40, 41, 34, 35, 42, 43, 48, 49, 56, 57, 50, 51, 58, 59,
    36, 37, 44, 45, 38, 39, 46, 47, 52, 53, 60, 61, 54, 55, 62, 63,
];

/// Tile-local (x, y) offset of the k-th texel in traversal order.
#[inline]
pub fn tile_offset(k: usize) -> (u32, u32) {
    let entry = u32::from(TILE_ORDER[k]);
    (entry & 0x7, entry >> 3)
}
