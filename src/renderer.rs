use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect};

use crate::document::Document;
use crate::element::ToolPreview;

/// The paint primitives displayables draw through. Positions are canvas-local;
/// the implementation owns the mapping onto the host surface.
///
/// The production implementation wraps an [`egui::Painter`]; tests substitute
/// a recording surface.
pub trait DrawSurface {
    /// Wipe the whole canvas region to `color`.
    fn clear(&mut self, color: Color32);

    /// Stroke a connected path through `points`.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Draw `glyph` centered on `center`, rotated by `rotation` degrees. The
    /// rotation is scoped to this glyph; sibling paints are unaffected.
    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32);
}

/// [`DrawSurface`] backed by an egui painter clipped to the canvas rect.
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
}

impl PainterSurface {
    pub fn new(painter: &Painter, rect: Rect) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.rect.min.to_vec2()
    }
}

impl DrawSurface for PainterSurface {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(points, egui::Stroke::new(width, color)));
    }

    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32) {
        let galley =
            self.painter
                .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), color);
        let half = galley.size() / 2.0;
        let angle = rotation.to_radians();
        let (sin, cos) = angle.sin_cos();
        // TextShape rotates around its top-left corner; anchor the rotation on
        // the glyph center instead.
        let offset = egui::vec2(half.x * cos - half.y * sin, half.x * sin + half.y * cos);
        self.painter.add(TextShape {
            pos: self.to_screen(center) - offset,
            galley,
            underline: egui::Stroke::NONE,
            fallback_color: color,
            override_text_color: None,
            opacity_factor: 1.0,
            angle,
        });
    }
}

/// Full-repaint pipeline: every pass wipes the canvas, repaints all committed
/// content in insertion order, then the tool preview on top. No diffing; the
/// canvas is small and fixed-size.
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }

    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        document: &Document,
        preview: Option<&ToolPreview>,
    ) {
        surface.clear(self.background);
        for displayable in document.displayables() {
            displayable.display(surface);
        }
        if let Some(preview) = preview {
            preview.display(surface);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Displayable, Stroke};
    use egui::pos2;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        polylines: usize,
        glyphs: usize,
    }

    impl DrawSurface for CountingSurface {
        fn clear(&mut self, _color: Color32) {
            self.clears += 1;
        }

        fn stroke_polyline(&mut self, _points: &[Pos2], _width: f32, _color: Color32) {
            self.polylines += 1;
        }

        fn fill_glyph(
            &mut self,
            _glyph: &str,
            _center: Pos2,
            _size: f32,
            _rotation: f32,
            _color: Color32,
        ) {
            self.glyphs += 1;
        }
    }

    #[test]
    fn render_clears_then_paints_committed_and_preview() {
        let mut document = Document::new();
        let mut stroke = Stroke::new(pos2(0.0, 0.0), 2.0, Color32::BLACK);
        stroke.drag(pos2(10.0, 10.0));
        document.commit(Displayable::Stroke(stroke));

        let preview = ToolPreview::Brush {
            pos: pos2(5.0, 5.0),
            width: 2.0,
            color: Color32::BLACK,
        };

        let renderer = Renderer::new();
        let mut surface = CountingSurface::default();
        renderer.render(&mut surface, &document, Some(&preview));

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.polylines, 1);
        assert_eq!(surface.glyphs, 1);
    }

    #[test]
    fn render_without_preview_paints_committed_only() {
        let document = Document::new();
        let renderer = Renderer::new();
        let mut surface = CountingSurface::default();
        renderer.render(&mut surface, &document, None);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.polylines, 0);
        assert_eq!(surface.glyphs, 0);
    }
}
