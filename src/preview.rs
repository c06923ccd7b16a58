use egui::Pos2;

use crate::surface::Surface;

/// Marker hint: a ring the size of the marker tip
#[derive(Debug, Clone, PartialEq)]
pub struct RingPreview {
    pub position: Pos2,
    pub radius: f32,
}

/// Sticker hint: the glyph drawn faintly where it would land
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPreview {
    pub position: Pos2,
    pub glyph: String,
    pub size: f32,
    pub opacity: f32,
}

/// Ephemeral hint shown under the pointer while no gesture is in progress.
///
/// Previews are never mutated; every idle pointer move builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    Ring(RingPreview),
    Glyph(GlyphPreview),
}

impl ToolPreview {
    pub fn position(&self) -> Pos2 {
        match self {
            Self::Ring(ring) => ring.position,
            Self::Glyph(glyph) => glyph.position,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Ring(ring) => surface.ring(ring.position, ring.radius),
            Self::Glyph(glyph) => {
                surface.glyph(glyph.position, &glyph.glyph, glyph.size, glyph.opacity)
            }
        }
    }
}
