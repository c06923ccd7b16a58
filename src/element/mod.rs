use egui::Pos2;
use uuid::Uuid;

use crate::surface::Surface;

pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::{STICKER_THICKNESS, Sticker};
pub use stroke::Stroke;

/// Stable identity of a committed drawable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common trait that all committed ink implements
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> DrawableId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Thickness captured when the element was created
    fn thickness(&self) -> u32;

    /// Feed the next pointer position into the element.
    fn extend(&mut self, point: Pos2);

    /// Draw the element onto the surface
    fn render(&self, surface: &mut dyn Surface);

    /// Points that currently define the element, in capture order
    fn sample(&self) -> Vec<Pos2>;
}

/// A committed unit of the drawing
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Element for Drawable {
    fn id(&self) -> DrawableId {
        match self {
            Self::Stroke(stroke) => stroke.id(),
            Self::Sticker(sticker) => sticker.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            Self::Stroke(stroke) => stroke.element_type(),
            Self::Sticker(sticker) => sticker.element_type(),
        }
    }

    fn thickness(&self) -> u32 {
        match self {
            Self::Stroke(stroke) => stroke.thickness(),
            Self::Sticker(sticker) => sticker.thickness(),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.extend(point),
            Self::Sticker(sticker) => sticker.extend(point),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }

    fn sample(&self) -> Vec<Pos2> {
        match self {
            Self::Stroke(stroke) => stroke.sample(),
            Self::Sticker(sticker) => sticker.sample(),
        }
    }
}

impl Drawable {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use super::*;

    /// Start a stroke at `origin`; its thickness is fixed from here on.
    pub fn create_stroke(origin: Pos2, thickness: u32) -> Drawable {
        Drawable::Stroke(Stroke::new(origin, thickness))
    }

    /// Place a sticker at `position`.
    pub fn create_sticker(position: Pos2, glyph: impl Into<String>, size: f32) -> Drawable {
        Drawable::Sticker(Sticker::new(position, glyph, size))
    }
}
