use eframe::egui;

use crate::tools::{ToolState, ring_radius};

const BUTTON_SIZE: egui::Vec2 = egui::vec2(40.0, 40.0);
const GLYPH_SIZE: f32 = 24.0;

/// Toolbar button picturing the tool it selects: a marker shows a dot as
/// wide as its ink, a sticker shows its glyph.
pub struct ToolButton<'a> {
    tool: &'a ToolState,
    selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(tool: &'a ToolState, selected: bool) -> Self {
        Self { tool, selected }
    }

    /// Radius of the marker dot, capped so thick presets still fit the button
    pub fn dot_radius(thickness: u32) -> f32 {
        ring_radius(thickness).min(BUTTON_SIZE.y / 2.0 - 4.0)
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());
        let response = response.on_hover_text(self.tooltip());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, visuals.weak_bg_fill);

            match self.tool {
                ToolState::Marker { thickness } => {
                    painter.circle_filled(
                        rect.center(),
                        Self::dot_radius(*thickness),
                        visuals.fg_stroke.color,
                    );
                }
                ToolState::Sticker { glyph } => {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        glyph,
                        egui::FontId::proportional(GLYPH_SIZE),
                        visuals.fg_stroke.color,
                    );
                }
            }

            if self.selected {
                painter.rect_stroke(rect, 4.0, visuals.bg_stroke);
            }
        }

        response
    }

    fn tooltip(&self) -> String {
        match self.tool {
            ToolState::Marker { thickness } => format!("{} {thickness}px", self.tool.name()),
            ToolState::Sticker { glyph } => format!("{} {glyph}", self.tool.name()),
        }
    }
}
