//! Theme package assembly.
//!
//! A distributable theme is a ZIP archive holding the theme body, the
//! background music track, the preview and icon images, and the generated
//! SMDH metadata. Assembly is entirely in-memory; persistence belongs to
//! the caller.

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{Result, default_icon_png, generate_smdh_from_bytes};

/// Theme metadata as supplied by the upload pipeline.
///
/// `name` is carried for package-level naming; it is not written into the
/// SMDH structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    pub author_name: String,
    pub short_description: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Raw asset blobs for one theme package.
pub struct ThemePackFiles<'a> {
    /// Compressed theme body (`body_LZ.bin`).
    pub body: &'a [u8],
    /// Background music stream (`bgm.bcstm`).
    pub bgm: &'a [u8],
    /// Preview image (`preview.png`).
    pub preview: &'a [u8],
    /// Icon image (`icon.png`). `None` selects the embedded default.
    pub icon: Option<&'a [u8]>,
}

/// Assembles the distributable theme archive.
pub struct ThemePack<'a> {
    meta: &'a ThemeMeta,
    files: ThemePackFiles<'a>,
}

impl<'a> ThemePack<'a> {
    pub fn new(meta: &'a ThemeMeta, files: ThemePackFiles<'a>) -> Self {
        Self { meta, files }
    }

    /// Builds the ZIP archive in memory.
    ///
    /// A missing icon falls back to the embedded default; that is not an
    /// error. When SMDH generation fails the error is logged and a
    /// plain-text stand-in is stored as the `info.smdh` entry. The
    /// stand-in is an opaque blob, never a valid SMDH, and is not exposed
    /// as one.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let icon = self.files.icon.unwrap_or_else(|| default_icon_png());

        let info = match generate_smdh_from_bytes(self.meta, icon) {
            Ok(data) => data,
            Err(err) => {
                log::error!("SMDH generation failed for theme '{}': {err}", self.meta.name);
                self.fallback_info()
            }
        };

        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        archive.start_file("body_LZ.bin", options)?;
        archive.write_all(self.files.body)?;
        archive.start_file("bgm.bcstm", options)?;
        archive.write_all(self.files.bgm)?;
        archive.start_file("preview.png", options)?;
        archive.write_all(self.files.preview)?;
        archive.start_file("icon.png", options)?;
        archive.write_all(icon)?;
        archive.start_file("info.smdh", options)?;
        archive.write_all(&info)?;

        Ok(archive.finish()?.into_inner())
    }

    fn fallback_info(&self) -> Vec<u8> {
        format!(
            "Theme: {}\nAuthor: {}\nDescription: {}\nFull Description: {}\nTags: {}\n",
            self.meta.name,
            self.meta.author_name,
            self.meta.short_description,
            self.meta.description,
            self.meta.tags.join(", "),
        )
        .into_bytes()
    }
}
