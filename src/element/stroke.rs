use egui::Pos2;

use super::{DrawableId, Element};
use crate::surface::Surface;

/// Freehand path: points in capture order drawn at a fixed thickness
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: DrawableId,
    points: Vec<Pos2>,
    thickness: u32,
}

impl Stroke {
    /// Create a new stroke holding only its origin
    pub fn new(origin: Pos2, thickness: u32) -> Self {
        Self {
            id: DrawableId::new(),
            points: vec![origin],
            thickness,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

impl Element for Stroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn thickness(&self) -> u32 {
        self.thickness
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.points.is_empty() {
            return;
        }

        surface.stroke_path(&self.points, self.thickness as f32);
    }

    fn sample(&self) -> Vec<Pos2> {
        self.points.clone()
    }
}
