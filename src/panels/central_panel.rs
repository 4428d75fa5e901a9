use egui::{Color32, Sense, Stroke, Vec2};

use crate::DoodleApp;
use crate::renderer::PainterSurface;

/// The bounded drawing surface, in logical pixels.
pub const CANVAS_SIZE: Vec2 = Vec2 { x: 512.0, y: 512.0 };

pub fn central_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            let (response, painter) = ui.allocate_painter(CANVAS_SIZE, Sense::drag());
            let canvas_rect = response.rect;
            app.set_canvas_rect(canvas_rect);

            // Input first: all mutation completes before this frame's repaint.
            app.handle_input(ctx, canvas_rect);

            let mut surface = PainterSurface::new(&painter, canvas_rect);
            app.render(&mut surface);

            painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::GRAY));
        });
    });
}
