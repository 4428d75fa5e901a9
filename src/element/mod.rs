use egui::Pos2;

mod preview;
mod sticker;
mod stroke;

pub use preview::ToolPreview;
pub use sticker::Sticker;
pub use stroke::Stroke;

use crate::renderer::DrawSurface;

/// A committed drawable unit: a freehand stroke or a placed sticker.
///
/// The set of variants is closed on purpose; everything that needs to vary
/// over them dispatches through a match.
#[derive(Clone, Debug, PartialEq)]
pub enum Displayable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Displayable {
    /// Extend the element with a new pointer position: a stroke accumulates
    /// the point as the next path sample, a sticker moves to it.
    pub fn drag(&mut self, pos: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.drag(pos),
            Self::Sticker(sticker) => sticker.drag(pos),
        }
    }

    /// Paint the element onto the surface.
    pub fn display(&self, surface: &mut dyn DrawSurface) {
        match self {
            Self::Stroke(stroke) => stroke.display(surface),
            Self::Sticker(sticker) => sticker.display(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}
