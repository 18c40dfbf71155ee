//! SMDH assembly.
//!
//! The SMDH structure combines display metadata and two icon bitmaps for a
//! themed content entry. It is consumed by the console's theme loader and
//! has a rigid little-endian layout: an 8-byte header, 16 title blocks of
//! 0x200 bytes, an application-settings block, and the 24x24 plus 48x48
//! RGB565 icons. The encoded size is always exactly [`SMDH_SIZE`] bytes.

use image::DynamicImage;

use crate::{ByteWriter, Result, SmdhError, ThemeMeta, UnicodeField, convert_to_rgb565};

/// Total size of the encoded structure.
pub const SMDH_SIZE: usize = 14016;

/// "SMDH" magic, stored little-endian at offset 0.
pub const SMDH_MAGIC: u32 = 0x4844_4d53;

/// Edge length of the small icon in pixels.
pub const SMALL_ICON_SIZE: u32 = 24;

/// Edge length of the big icon in pixels.
pub const BIG_ICON_SIZE: u32 = 48;

const LANGUAGE_SLOTS: usize = 16;
const SHORT_DESC_LEN: usize = 0x40;
const LONG_DESC_LEN: usize = 0x80;
const PUBLISHER_LEN: usize = 0x40;

/// Encodes theme metadata and a decoded icon into an SMDH buffer.
///
/// This is a pure function: identical inputs produce byte-identical
/// buffers. Strings longer than their field capacity are truncated, never
/// rejected. `meta.name` is not part of the structure and is never
/// written.
pub fn generate_smdh(meta: &ThemeMeta, icon: &DynamicImage) -> Result<Vec<u8>> {
    let mut writer = ByteWriter::new(SMDH_SIZE);

    writer.write_u32(SMDH_MAGIC)?;
    writer.write_u16(0)?; // version
    writer.write_u16(0)?; // reserved

    // One title block per language slot. There is no per-locale content,
    // every slot receives the same three fields.
    for _ in 0..LANGUAGE_SLOTS {
        let short_desc = UnicodeField::with_text(SHORT_DESC_LEN, &meta.short_description);
        let long_desc = UnicodeField::with_text(LONG_DESC_LEN, &meta.description);
        let publisher = UnicodeField::with_text(PUBLISHER_LEN, &meta.author_name);

        writer.write_bytes(&short_desc.to_bytes())?;
        writer.write_bytes(&long_desc.to_bytes())?;
        writer.write_bytes(&publisher.to_bytes())?;
    }

    // Application settings, all zero: no age ratings, no region lock.
    for _ in 0..0x10 {
        writer.write_u8(0)?; // age ratings
    }
    writer.write_u32(0)?; // region lock
    for _ in 0..0x0c {
        writer.write_u8(0)?; // matchmaker ids
    }
    writer.write_u32(0)?; // flags
    writer.write_u16(0)?; // EULA version
    writer.write_u16(0)?; // reserved
    writer.write_u32(0)?; // optimal banner frame
    writer.write_u32(0)?; // CEC program id
    for _ in 0..0x08 {
        writer.write_u8(0)?; // reserved
    }

    for texel in convert_to_rgb565(icon, SMALL_ICON_SIZE) {
        writer.write_u16(texel)?;
    }
    for texel in convert_to_rgb565(icon, BIG_ICON_SIZE) {
        writer.write_u16(texel)?;
    }

    // The layout is fixed; anything but an exactly full buffer is an
    // offset bookkeeping defect.
    if writer.offset() != SMDH_SIZE {
        return Err(SmdhError::SizeMismatch {
            expected: SMDH_SIZE,
            actual: writer.offset(),
        });
    }

    Ok(writer.into_bytes())
}

/// Decodes `icon_bytes` and encodes the SMDH buffer from it.
///
/// An undecodable image aborts generation; the caller decides on a
/// fallback. See [`crate::ThemePack`] for the packaging-level policy.
pub fn generate_smdh_from_bytes(meta: &ThemeMeta, icon_bytes: &[u8]) -> Result<Vec<u8>> {
    let icon = image::load_from_memory(icon_bytes)?;
    generate_smdh(meta, &icon)
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};

    use super::{LANGUAGE_SLOTS, SMDH_MAGIC, SMDH_SIZE, generate_smdh, generate_smdh_from_bytes};
    use crate::{SmdhError, ThemeMeta, pack_rgb565};

    fn test_meta() -> ThemeMeta {
        ThemeMeta {
            name: "Starfield".to_string(),
            author_name: "nova".to_string(),
            short_description: "A starry night".to_string(),
            description: "Deep blue with drifting stars".to_string(),
            tags: vec!["space".to_string()],
        }
    }

    fn test_icon() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([248, 252, 248])))
    }

    #[test]
    fn test_output_size() {
        let data = generate_smdh(&test_meta(), &test_icon()).unwrap();
        assert_eq!(SMDH_SIZE, data.len());
    }

    #[test]
    fn test_magic() {
        let data = generate_smdh(&test_meta(), &test_icon()).unwrap();
        assert_eq!(SMDH_MAGIC, u32::from_le_bytes(data[0..4].try_into().unwrap()));
        assert_eq!(b"SMDH", &data[0..4]);
        // version and reserved
        assert_eq!(&[0, 0, 0, 0], &data[4..8]);
    }

    #[test]
    fn test_all_title_blocks_identical() {
        let data = generate_smdh(&test_meta(), &test_icon()).unwrap();
        let first = &data[8..8 + 0x200];
        for slot in 1..LANGUAGE_SLOTS {
            let offset = 8 + slot * 0x200;
            assert_eq!(first, &data[offset..offset + 0x200]);
        }
    }

    #[test]
    fn test_title_block_field_layout() {
        let data = generate_smdh(&test_meta(), &test_icon()).unwrap();
        // short description starts at the top of the first title block
        assert_eq!(b'A', data[8]);
        assert_eq!(0, data[9]);
        // long description follows the 0x80-byte short field
        assert_eq!(b'D', data[8 + 0x80]);
        // publisher follows the 0x100-byte long field
        assert_eq!(b'n', data[8 + 0x80 + 0x100]);
    }

    #[test]
    fn test_truncation_boundaries() {
        let meta = ThemeMeta {
            short_description: "s".repeat(100),
            description: "d".repeat(10),
            ..test_meta()
        };
        let data = generate_smdh(&meta, &test_icon()).unwrap();

        // 64 units of 's', no spill into the long description field
        let short = &data[8..8 + 0x80];
        for unit in short.chunks(2) {
            assert_eq!([b's', 0], unit);
        }
        // 10 units of 'd', then 118 zero units
        let long = &data[8 + 0x80..8 + 0x80 + 0x100];
        for (i, unit) in long.chunks(2).enumerate() {
            if i < 10 {
                assert_eq!([b'd', 0], unit);
            } else {
                assert_eq!([0, 0], unit);
            }
        }
    }

    #[test]
    fn test_settings_block_is_zero() {
        let data = generate_smdh(&test_meta(), &test_icon()).unwrap();
        let settings_start = 8 + LANGUAGE_SLOTS * 0x200;
        let icon_start = SMDH_SIZE - (576 + 2304) * 2;
        assert!(data[settings_start..icon_start].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_icon_blocks() {
        let data = generate_smdh(&test_meta(), &test_icon()).unwrap();
        let expected = pack_rgb565(248, 252, 248).to_le_bytes();
        let icon_start = SMDH_SIZE - (576 + 2304) * 2;
        for texel in data[icon_start..].chunks(2) {
            assert_eq!(expected, texel);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = generate_smdh(&test_meta(), &test_icon()).unwrap();
        let b = generate_smdh(&test_meta(), &test_icon()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_name_is_not_encoded() {
        let renamed = ThemeMeta {
            name: "Completely Different".to_string(),
            ..test_meta()
        };
        let a = generate_smdh(&test_meta(), &test_icon()).unwrap();
        let b = generate_smdh(&renamed, &test_icon()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_undecodable_icon_bytes() {
        let err = generate_smdh_from_bytes(&test_meta(), b"not an image").unwrap_err();
        assert!(matches!(err, SmdhError::Image(_)));
    }
}
