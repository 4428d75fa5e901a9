use egui::{Color32, Pos2};

use crate::renderer::DrawSurface;

/// Freehand stroke: an ordered path of pointer samples with a width and color
/// captured at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    /// Create a stroke starting at the pointer-down position.
    pub fn new(start: Pos2, width: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            width,
            color,
        }
    }

    /// Append the next pointer sample to the path.
    pub fn drag(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn display(&self, surface: &mut dyn DrawSurface) {
        // A single click leaves no mark; only a dragged stroke is visible.
        if self.points.len() < 2 {
            return;
        }
        surface.stroke_polyline(&self.points, self.width, self.color);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}
