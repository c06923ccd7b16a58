use thiserror::Error;

/// Errors raised at the tool-parameter and configuration boundary.
///
/// Drawing, undo and redo never fail; these only guard values coming from
/// the toolbar or from persisted settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// Marker thickness must be a positive number of pixels
    #[error("marker thickness must be positive, got {0}")]
    InvalidThickness(u32),

    /// Sticker glyphs cannot be blank
    #[error("sticker glyph cannot be empty")]
    EmptyGlyph,

    /// The thin preset must not be thicker than the thick preset
    #[error("thin marker ({thin}px) is thicker than thick marker ({thick}px)")]
    MarkerPresetsOutOfOrder { thin: u32, thick: u32 },

    /// Preview opacity is a fraction in (0, 1]
    #[error("preview opacity must be in (0, 1], got {0}")]
    InvalidOpacity(f32),

    /// Sizes and canvas dimensions must be positive
    #[error("{name} must be positive, got {value}")]
    NonPositiveSize { name: &'static str, value: f32 },
}

pub type SketchResult<T> = Result<T, SketchError>;
