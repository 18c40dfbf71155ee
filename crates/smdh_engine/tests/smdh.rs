use std::io::{Cursor, Read};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use smdh_engine::{
    SMDH_MAGIC, SMDH_SIZE, ThemeMeta, ThemePack, ThemePackFiles, generate_smdh_from_bytes,
    pack_rgb565,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn png_bytes(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn meta() -> ThemeMeta {
    ThemeMeta {
        name: "Midnight".to_string(),
        author_name: "kura".to_string(),
        short_description: "Dark mode everywhere".to_string(),
        description: "A muted palette for late night browsing".to_string(),
        tags: vec!["dark".to_string(), "minimal".to_string()],
    }
}

const ICON_BLOCK_OFFSET: usize = SMDH_SIZE - (576 + 2304) * 2;
const BIG_ICON_OFFSET: usize = SMDH_SIZE - 2304 * 2;

#[test]
fn solid_color_source_fills_both_icon_blocks() {
    init();
    let icon = png_bytes(&RgbImage::from_pixel(64, 64, Rgb([33, 150, 243])));
    let data = generate_smdh_from_bytes(&meta(), &icon).unwrap();

    assert_eq!(SMDH_SIZE, data.len());
    assert_eq!(SMDH_MAGIC, u32::from_le_bytes(data[0..4].try_into().unwrap()));

    let expected = pack_rgb565(33, 150, 243).to_le_bytes();
    for texel in data[ICON_BLOCK_OFFSET..].chunks(2) {
        assert_eq!(expected, texel);
    }
}

#[test]
fn non_square_source_is_forced_to_icon_dimensions() {
    init();
    let icon = png_bytes(&RgbImage::from_pixel(17, 31, Rgb([160, 80, 160])));
    let data = generate_smdh_from_bytes(&meta(), &icon).unwrap();

    // block sizes are fixed regardless of the source dimensions
    assert_eq!(SMDH_SIZE, data.len());
    let expected = pack_rgb565(160, 80, 160).to_le_bytes();
    for texel in data[ICON_BLOCK_OFFSET..BIG_ICON_OFFSET].chunks(2) {
        assert_eq!(expected, texel);
    }
}

#[test]
fn big_icon_uses_tile_traversal_order() {
    init();
    // Marker at (0, 1): the Morton sequence visits it third, row-major
    // order would visit it ninth.
    let mut source = RgbImage::from_pixel(48, 48, Rgb([0, 0, 0]));
    source.put_pixel(0, 1, Rgb([255, 255, 255]));
    let data = generate_smdh_from_bytes(&meta(), &png_bytes(&source)).unwrap();

    let texel = |index: usize| {
        let offset = BIG_ICON_OFFSET + index * 2;
        u16::from_le_bytes(data[offset..offset + 2].try_into().unwrap())
    };
    assert_eq!(0xffff, texel(2));
    assert_eq!(0, texel(0));
    assert_eq!(0, texel(8));
}

#[test]
fn generation_is_deterministic_across_calls() {
    init();
    let icon = png_bytes(&RgbImage::from_pixel(100, 60, Rgb([120, 80, 40])));
    let first = generate_smdh_from_bytes(&meta(), &icon).unwrap();
    let second = generate_smdh_from_bytes(&meta(), &icon).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_generation_is_safe_and_identical() {
    init();
    let icon = png_bytes(&RgbImage::from_pixel(64, 64, Rgb([90, 90, 90])));
    let reference = generate_smdh_from_bytes(&meta(), &icon).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| generate_smdh_from_bytes(&meta(), &icon).unwrap()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });
    for result in results {
        assert_eq!(reference, result);
    }
}

#[test]
fn packaged_theme_contains_valid_smdh_entry() {
    init();
    let icon = png_bytes(&RgbImage::from_pixel(48, 48, Rgb([200, 30, 90])));
    let m = meta();
    let pack = ThemePack::new(
        &m,
        ThemePackFiles {
            body: b"lz body",
            bgm: b"stream",
            preview: b"preview",
            icon: Some(&icon),
        },
    );
    let bytes = pack.to_bytes().unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
    let mut info = Vec::new();
    archive.by_name("info.smdh").unwrap().read_to_end(&mut info).unwrap();

    assert_eq!(SMDH_SIZE, info.len());
    assert_eq!(b"SMDH", &info[0..4]);
}
