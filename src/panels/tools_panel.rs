use egui::Slider;
use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::DoodleApp;
use crate::state::ToolKind;

pub fn tools_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Doodle Pad");
            ui.separator();

            let is_brush = matches!(app.controller().tools().tool(), ToolKind::Brush);
            if ui.selectable_label(is_brush, "🖌 Brush").clicked() {
                log::info!("Tool selected from UI: brush");
                app.controller_mut().select_brush();
            }

            ui.add_space(4.0);
            ui.label("Stickers:");
            let glyphs: Vec<String> = app.controller().tools().catalog().glyphs().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let selected =
                        app.controller().tools().tool() == &ToolKind::Sticker(glyph.clone());
                    if ui.selectable_label(selected, glyph).clicked() {
                        log::info!("Tool selected from UI: sticker {glyph}");
                        app.controller_mut().select_sticker(glyph);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.text_edit_singleline(app.custom_glyph_mut());
                if ui.button("Add").clicked() {
                    let glyph = app.custom_glyph_mut().clone();
                    if app.controller_mut().add_custom_sticker(&glyph) {
                        app.custom_glyph_mut().clear();
                    } else {
                        log::info!("Declined blank sticker glyph");
                    }
                }
            });

            ui.separator();

            let mut width = app.controller().tools().width();
            if ui
                .add(Slider::new(&mut width, 1.0..=24.0).text("Width"))
                .changed()
            {
                app.controller_mut().select_width(width);
            }

            let mut rotation = app.controller().tools().rotation();
            if ui
                .add(Slider::new(&mut rotation, 0.0..=360.0).suffix("°").text("Rotation"))
                .changed()
            {
                app.controller_mut().select_rotation(rotation);
            }

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.controller().tools().color();
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.controller_mut().select_color(color);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.controller().document().can_undo();
                let can_redo = app.controller().document().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.controller_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.controller_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.controller_mut().clear();
                }
            });

            ui.horizontal(|ui| {
                let document = app.controller().document();
                ui.label(format!("Undo stack: {}", document.len()));
                ui.label(format!("Redo stack: {}", document.redo_buffer().len()));
            });

            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.separator();
                if ui.button("Export PNG").clicked() {
                    app.request_export(ctx);
                }
                if let Some(status) = app.export_status() {
                    ui.label(status);
                }
            }
        });
}
