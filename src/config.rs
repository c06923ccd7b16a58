use serde::{Deserialize, Serialize};

use crate::command::RedoPolicy;
use crate::error::{SketchError, SketchResult};
use crate::tools::{DEFAULT_PREVIEW_OPACITY, DEFAULT_STICKER_SIZE, StickerPalette, ToolStyle};

/// Tool settings restored between sessions. Drawings are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchpadConfig {
    /// Canvas width and height in pixels
    pub canvas_size: [f32; 2],
    pub thin_thickness: u32,
    pub thick_thickness: u32,
    pub stickers: StickerPalette,
    pub sticker_size: f32,
    pub preview_opacity: f32,
    pub redo_policy: RedoPolicy,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            thin_thickness: 2,
            thick_thickness: 6,
            stickers: StickerPalette::default(),
            sticker_size: DEFAULT_STICKER_SIZE,
            preview_opacity: DEFAULT_PREVIEW_OPACITY,
            redo_policy: RedoPolicy::default(),
        }
    }
}

impl SketchpadConfig {
    pub fn validate(&self) -> SketchResult<()> {
        for thickness in [self.thin_thickness, self.thick_thickness] {
            if thickness == 0 {
                return Err(SketchError::InvalidThickness(thickness));
            }
        }
        if self.thin_thickness > self.thick_thickness {
            return Err(SketchError::MarkerPresetsOutOfOrder {
                thin: self.thin_thickness,
                thick: self.thick_thickness,
            });
        }
        let opacity = self.preview_opacity;
        if opacity.is_nan() || opacity <= 0.0 || opacity > 1.0 {
            return Err(SketchError::InvalidOpacity(self.preview_opacity));
        }
        for (name, value) in [
            ("sticker size", self.sticker_size),
            ("canvas width", self.canvas_size[0]),
            ("canvas height", self.canvas_size[1]),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(SketchError::NonPositiveSize { name, value });
            }
        }
        self.stickers.validate()
    }

    /// Use `self` if it is valid, otherwise fall back to the defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("Ignoring stored settings: {err}");
                Self::default()
            }
        }
    }

    /// The marker a fresh session starts with
    pub fn thinnest(&self) -> u32 {
        self.thin_thickness.min(self.thick_thickness).max(1)
    }

    pub fn tool_style(&self) -> ToolStyle {
        ToolStyle {
            sticker_size: self.sticker_size,
            preview_opacity: self.preview_opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SketchpadConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.thinnest(), 2);
        assert_eq!(config.redo_policy, RedoPolicy::Retain);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = SketchpadConfig {
            thin_thickness: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SketchError::InvalidThickness(0)));

        let config = SketchpadConfig {
            thin_thickness: 10,
            thick_thickness: 4,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SketchError::MarkerPresetsOutOfOrder { thin: 10, thick: 4 })
        );

        let config = SketchpadConfig {
            preview_opacity: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SketchError::InvalidOpacity(0.0)));

        let config = SketchpadConfig {
            canvas_size: [256.0, -1.0],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SketchError::NonPositiveSize {
                name: "canvas height",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let config = SketchpadConfig {
            sticker_size: 0.0,
            ..Default::default()
        };
        assert_eq!(config.or_default(), SketchpadConfig::default());
    }

    #[test]
    fn test_tool_style_follows_config() {
        let config = SketchpadConfig {
            sticker_size: 48.0,
            preview_opacity: 0.25,
            ..Default::default()
        };
        assert_eq!(
            config.tool_style(),
            ToolStyle {
                sticker_size: 48.0,
                preview_opacity: 0.25
            }
        );
    }
}
