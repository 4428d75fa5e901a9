use doodle_pad::DrawSurface;
use egui::{Color32, Pos2};

/// Paint call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear {
        color: Color32,
    },
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Glyph {
        glyph: String,
        center: Pos2,
        size: f32,
        rotation: f32,
        color: Color32,
    },
}

/// Records paint calls so render output can be asserted without a GPU.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Polyline { .. }))
            .collect()
    }

    pub fn glyphs(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Glyph { .. }))
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.calls.push(DrawCall::Clear { color });
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32) {
        self.calls.push(DrawCall::Glyph {
            glyph: glyph.to_owned(),
            center,
            size,
            rotation,
            color,
        });
    }
}
