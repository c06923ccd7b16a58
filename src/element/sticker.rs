use egui::Pos2;

use super::{DrawableId, Element};
use crate::surface::Surface;

/// Reported by every sticker; glyph size, not thickness, sets how it renders.
pub const STICKER_THICKNESS: u32 = 1;

/// A glyph stamped at a single position that follows the pointer while dragged
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    position: Pos2,
    glyph: String,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            id: DrawableId::new(),
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Element for Sticker {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "sticker"
    }

    fn thickness(&self) -> u32 {
        STICKER_THICKNESS
    }

    fn extend(&mut self, point: Pos2) {
        self.position = point;
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(self.position, &self.glyph, self.size, 1.0);
    }

    fn sample(&self) -> Vec<Pos2> {
        vec![self.position]
    }
}
