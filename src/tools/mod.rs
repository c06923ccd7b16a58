use egui::Pos2;

use crate::element::{Drawable, factory};
use crate::error::{SketchError, SketchResult};
use crate::preview::{GlyphPreview, RingPreview, ToolPreview};

mod palette;
pub use palette::{DEFAULT_STICKERS, StickerPalette};

/// Glyph size stickers are stamped at
pub const DEFAULT_STICKER_SIZE: f32 = 32.0;
/// Opacity of the sticker preview glyph
pub const DEFAULT_PREVIEW_OPACITY: f32 = 0.4;

/// Rendering parameters a tool needs beyond its own selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStyle {
    pub sticker_size: f32,
    pub preview_opacity: f32,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            sticker_size: DEFAULT_STICKER_SIZE,
            preview_opacity: DEFAULT_PREVIEW_OPACITY,
        }
    }
}

/// The currently selected instrument. Exactly one is live at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolState {
    Marker { thickness: u32 },
    Sticker { glyph: String },
}

impl ToolState {
    pub fn marker(thickness: u32) -> SketchResult<Self> {
        if thickness == 0 {
            return Err(SketchError::InvalidThickness(thickness));
        }
        Ok(Self::Marker { thickness })
    }

    pub fn sticker(glyph: &str) -> SketchResult<Self> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        Ok(Self::Sticker {
            glyph: glyph.to_owned(),
        })
    }

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Marker { .. } => "Marker",
            Self::Sticker { .. } => "Sticker",
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker { .. })
    }

    /// Build the drawable a pointer-down at `pos` should commit.
    pub fn create_drawable(&self, pos: Pos2, style: &ToolStyle) -> Drawable {
        match self {
            Self::Marker { thickness } => factory::create_stroke(pos, *thickness),
            Self::Sticker { glyph } => factory::create_sticker(pos, glyph.as_str(), style.sticker_size),
        }
    }

    /// Build the idle hint for the pointer at `pos`.
    pub fn preview(&self, pos: Pos2, style: &ToolStyle) -> ToolPreview {
        match self {
            Self::Marker { thickness } => ToolPreview::Ring(RingPreview {
                position: pos,
                radius: ring_radius(*thickness),
            }),
            Self::Sticker { glyph } => ToolPreview::Glyph(GlyphPreview {
                position: pos,
                glyph: glyph.clone(),
                size: style.sticker_size,
                opacity: style.preview_opacity,
            }),
        }
    }
}

/// Ring radius matching the footprint of a marker
pub fn ring_radius(thickness: u32) -> f32 {
    (thickness as f32 / 2.0).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_marker_rejects_zero() {
        assert_eq!(ToolState::marker(0), Err(SketchError::InvalidThickness(0)));
        assert_eq!(ToolState::marker(3), Ok(ToolState::Marker { thickness: 3 }));
    }

    #[test]
    fn test_sticker_trims_glyph() {
        assert_eq!(ToolState::sticker("   "), Err(SketchError::EmptyGlyph));
        assert_eq!(
            ToolState::sticker(" 🐝 "),
            Ok(ToolState::Sticker {
                glyph: "🐝".to_owned()
            })
        );
    }

    #[test]
    fn test_create_drawable_captures_parameters() {
        let style = ToolStyle::default();
        let stroke = ToolState::Marker { thickness: 6 }.create_drawable(Pos2::new(1.0, 2.0), &style);
        assert_eq!(stroke.thickness(), 6);
        assert_eq!(stroke.sample(), vec![Pos2::new(1.0, 2.0)]);

        let sticker = ToolState::Sticker {
            glyph: "🍯".to_owned(),
        }
        .create_drawable(Pos2::new(3.0, 4.0), &style);
        let sticker = sticker.as_sticker().expect("sticker");
        assert_eq!(sticker.glyph(), "🍯");
        assert_eq!(sticker.size(), DEFAULT_STICKER_SIZE);
    }

    #[test]
    fn test_preview_matches_tool() {
        let style = ToolStyle::default();
        let ring = ToolState::Marker { thickness: 6 }.preview(Pos2::new(5.0, 5.0), &style);
        assert_eq!(
            ring,
            ToolPreview::Ring(RingPreview {
                position: Pos2::new(5.0, 5.0),
                radius: 3.0
            })
        );

        let glyph = ToolState::Sticker {
            glyph: "🌼".to_owned(),
        }
        .preview(Pos2::new(5.0, 5.0), &style);
        assert!(matches!(glyph, ToolPreview::Glyph(GlyphPreview { opacity, .. }) if opacity == DEFAULT_PREVIEW_OPACITY));
    }

    #[test]
    fn test_ring_radius_never_vanishes() {
        assert_eq!(ring_radius(1), 1.0);
        assert_eq!(ring_radius(8), 4.0);
    }
}
