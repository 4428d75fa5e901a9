use egui::{Color32, Pos2};

use super::Sticker;
use crate::renderer::DrawSurface;

/// Ephemeral cursor indicator mirroring the selected tool. It is repainted on
/// top of the committed content while the pointer is idle over the canvas and
/// replaced wholesale on every move; it is never committed.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPreview {
    Brush {
        pos: Pos2,
        width: f32,
        color: Color32,
    },
    Sticker {
        pos: Pos2,
        glyph: String,
        rotation: f32,
        color: Color32,
    },
}

impl ToolPreview {
    const BRUSH_DOT: &'static str = ".";

    /// Dot size tracks the brush width so the indicator previews the mark.
    const BRUSH_DOT_SCALE: f32 = 4.0;

    pub fn display(&self, surface: &mut dyn DrawSurface) {
        match self {
            Self::Brush { pos, width, color } => surface.fill_glyph(
                Self::BRUSH_DOT,
                *pos,
                width * Self::BRUSH_DOT_SCALE,
                0.0,
                *color,
            ),
            Self::Sticker {
                pos,
                glyph,
                rotation,
                color,
            } => surface.fill_glyph(glyph, *pos, Sticker::FONT_SIZE, *rotation, *color),
        }
    }

    pub fn pos(&self) -> Pos2 {
        match self {
            Self::Brush { pos, .. } | Self::Sticker { pos, .. } => *pos,
        }
    }
}
