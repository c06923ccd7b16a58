use crate::element::Element;
use crate::state::SketchContext;
use crate::surface::Surface;

/// Full-repaint render pipeline.
///
/// Clears the surface, draws every committed drawable in commit order and
/// finally the tool preview when no gesture is in progress.
#[derive(Debug, Default)]
pub struct Renderer {
    frames: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repaints performed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn redraw(&mut self, sketch: &SketchContext, surface: &mut dyn Surface) {
        self.frames += 1;
        surface.clear();

        for drawable in sketch.history().committed() {
            drawable.render(surface);
        }

        if sketch.gesture().is_idle() {
            if let Some(preview) = sketch.preview() {
                preview.render(surface);
            }
        }
    }
}
