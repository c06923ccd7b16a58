use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};

/// Stickers offered before the user adds any of their own
pub const DEFAULT_STICKERS: [&str; 3] = ["🌼", "🐝", "🍯"];

/// Ordered set of sticker glyphs shown in the toolbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_STICKERS.iter().map(|g| (*g).to_owned()).collect(),
        }
    }
}

impl StickerPalette {
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.iter().any(|g| g == glyph)
    }

    /// Add a user supplied glyph, returning the trimmed form that was stored.
    ///
    /// Adding a glyph that is already present leaves the palette unchanged.
    pub fn add_custom(&mut self, glyph: &str) -> SketchResult<String> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        if !self.contains(glyph) {
            log::info!("Adding custom sticker {glyph}");
            self.glyphs.push(glyph.to_owned());
        }
        Ok(glyph.to_owned())
    }

    pub(crate) fn validate(&self) -> SketchResult<()> {
        if self.glyphs.iter().any(|g| g.trim().is_empty()) {
            return Err(SketchError::EmptyGlyph);
        }
        Ok(())
    }
}
