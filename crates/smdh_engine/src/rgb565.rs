use image::{DynamicImage, imageops::FilterType};

use crate::tile_offset;

/// Packs an 8-bit RGB triple into RGB565: 5 bits red, 6 bits green, 5 bits blue.
#[inline]
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r = u16::from(r >> 3);
    let g = u16::from(g >> 2);
    let b = u16::from(b >> 3);
    (r << 11) | (g << 5) | b
}

/// Converts an image into `size`x`size` RGB565 texels in tile order.
///
/// The source is resampled to the target square with Lanczos3 and reduced
/// to 3-channel color. Output follows the GPU texture layout: 8x8 tiles in
/// row-major tile order, texels within each tile in [`crate::TILE_ORDER`]
/// sequence. The ordering is required by the console renderer and must not
/// be changed to row-major. Positions outside the image emit 0.
pub fn convert_to_rgb565(image: &DynamicImage, size: u32) -> Vec<u16> {
    let resized = image.resize_exact(size, size, FilterType::Lanczos3).to_rgb8();

    let mut texels = Vec::with_capacity((size * size) as usize);
    for tile_y in (0..size).step_by(8) {
        for tile_x in (0..size).step_by(8) {
            for k in 0..64 {
                let (dx, dy) = tile_offset(k);
                let x = tile_x + dx;
                let y = tile_y + dy;
                if x < size && y < size {
                    let pixel = resized.get_pixel(x, y);
                    texels.push(pack_rgb565(pixel[0], pixel[1], pixel[2]));
                } else {
                    texels.push(0);
                }
            }
        }
    }
    texels
}
