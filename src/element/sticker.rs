use egui::{Color32, Pos2};

use crate::renderer::DrawSurface;

/// Placed sticker: a glyph stamped at a single anchor point. The glyph, color
/// and rotation are fixed at creation; only the anchor moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    anchor: Pos2,
    glyph: String,
    color: Color32,
    rotation: f32,
}

impl Sticker {
    /// Font size stickers are stamped at.
    pub const FONT_SIZE: f32 = 32.0;

    pub fn new(glyph: impl Into<String>, anchor: Pos2, color: Color32, rotation: f32) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
            color,
            rotation,
        }
    }

    /// Move the sticker to the pointer position. Unlike a stroke, a sticker
    /// follows the pointer rather than accumulating a path.
    pub fn drag(&mut self, pos: Pos2) {
        self.anchor = pos;
    }

    pub fn display(&self, surface: &mut dyn DrawSurface) {
        surface.fill_glyph(
            &self.glyph,
            self.anchor,
            Self::FONT_SIZE,
            self.rotation,
            self.color,
        );
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}
