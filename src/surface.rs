use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

/// Ink color for strokes and sticker glyphs
pub const INK_COLOR: Color32 = Color32::BLACK;
/// Background the canvas is cleared to
pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
/// Outline width of the marker preview ring
pub const RING_OUTLINE_WIDTH: f32 = 1.0;

/// A 2D target the render pipeline paints onto.
///
/// All coordinates are surface-local pixels. Implementations decide how that
/// maps onto real pixels; the core never reads anything back.
pub trait Surface {
    /// Wipe the whole surface back to the background.
    fn clear(&mut self);

    /// Draw one connected path through `points` with round caps and joins.
    fn stroke_path(&mut self, points: &[Pos2], thickness: f32);

    /// Draw an outlined circle.
    fn ring(&mut self, center: Pos2, radius: f32);

    /// Draw `glyph` centered on `center`.
    fn glyph(&mut self, center: Pos2, glyph: &str, size: f32, opacity: f32);
}

/// Paints onto an egui [`Painter`] covering the canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND_COLOR);
    }

    fn stroke_path(&mut self, points: &[Pos2], thickness: f32) {
        if points.is_empty() {
            return;
        }

        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        if screen.len() > 1 {
            self.painter.add(Shape::line(
                screen.clone(),
                EguiStroke::new(thickness, INK_COLOR),
            ));
        }

        // egui paths have butt caps and miter joins; a disc per vertex rounds both
        let radius = thickness / 2.0;
        for point in screen {
            self.painter.circle_filled(point, radius, INK_COLOR);
        }
    }

    fn ring(&mut self, center: Pos2, radius: f32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            EguiStroke::new(RING_OUTLINE_WIDTH, INK_COLOR),
        );
    }

    fn glyph(&mut self, center: Pos2, glyph: &str, size: f32, opacity: f32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(size),
            INK_COLOR.gamma_multiply(opacity),
        );
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Path { points: Vec<Pos2>, thickness: f32 },
    Ring { center: Pos2, radius: f32 },
    Glyph {
        center: Pos2,
        glyph: String,
        size: f32,
        opacity: f32,
    },
}

impl DrawOp {
    /// Straight segments making up a path op, empty for anything else.
    pub fn segments(&self) -> Vec<(Pos2, Pos2)> {
        match self {
            DrawOp::Path { points, .. } => points.windows(2).map(|w| (w[0], w[1])).collect(),
            _ => Vec::new(),
        }
    }
}

/// Headless surface that keeps the draw calls since the last clear.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// How many times the surface has been cleared
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn stroke_path(&mut self, points: &[Pos2], thickness: f32) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            thickness,
        });
    }

    fn ring(&mut self, center: Pos2, radius: f32) {
        self.ops.push(DrawOp::Ring { center, radius });
    }

    fn glyph(&mut self, center: Pos2, glyph: &str, size: f32, opacity: f32) {
        self.ops.push(DrawOp::Glyph {
            center,
            glyph: glyph.to_owned(),
            size,
            opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_clear_discards_ops() {
        let mut surface = RecordingSurface::new();
        surface.ring(Pos2::new(1.0, 1.0), 3.0);
        surface.clear();

        assert!(surface.ops().is_empty());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_path_segments() {
        let op = DrawOp::Path {
            points: vec![Pos2::new(0.0, 0.0), Pos2::new(1.0, 0.0), Pos2::new(1.0, 1.0)],
            thickness: 1.0,
        };
        assert_eq!(op.segments().len(), 2);
        assert!(DrawOp::Ring { center: Pos2::ZERO, radius: 1.0 }.segments().is_empty());
    }

    #[test]
    fn test_painter_surface_draws_without_panicking() {
        let ctx = egui::Context::default();
        // Glyph layout needs fonts, which only exist inside a frame
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), egui::vec2(256.0, 256.0));
            let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            let mut surface = PainterSurface::new(&painter, rect);

            surface.clear();
            surface.stroke_path(&[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)], 2.0);
            surface.ring(Pos2::new(5.0, 5.0), 1.0);
            surface.glyph(Pos2::new(20.0, 20.0), "🌼", 32.0, 0.4);
        });
    }
}
