use egui::{Key, Modifiers, Rect};

use crate::controller::{CanvasController, CanvasEvent};
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::{DrawSurface, Renderer};
use crate::state::ToolState;

pub struct DoodleApp {
    controller: CanvasController,
    renderer: Renderer,
    input: InputHandler,
    // Text buffer for the custom-sticker field in the tools panel.
    custom_glyph: String,
    canvas_rect: Rect,
    #[cfg(not(target_arch = "wasm32"))]
    export_status: Option<String>,
}

impl DoodleApp {
    /// Called once before the first frame. Restores tool preferences when the
    /// host provides storage; the drawing itself always starts empty.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let tools: ToolState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            controller: CanvasController::new(tools),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            custom_glyph: String::new(),
            canvas_rect: Rect::ZERO,
            #[cfg(not(target_arch = "wasm32"))]
            export_status: None,
        }
    }

    pub fn controller(&self) -> &CanvasController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CanvasController {
        &mut self.controller
    }

    pub(crate) fn custom_glyph_mut(&mut self) -> &mut String {
        &mut self.custom_glyph
    }

    pub(crate) fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Feed this frame's raw input through the controller.
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        for event in self.input.process_input(ctx, canvas_rect) {
            let notification = match event {
                InputEvent::PointerDown { pos } => self.controller.pointer_down(pos),
                InputEvent::PointerMove { pos } => self.controller.pointer_move(pos),
                InputEvent::PointerUp => self.controller.pointer_up(),
                InputEvent::PointerLeave => self.controller.pointer_left(),
                InputEvent::KeyDown { key, modifiers } => self.handle_key(key, modifiers),
            };
            if let Some(event) = notification {
                self.on_canvas_event(ctx, event);
            }
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<CanvasEvent> {
        match key {
            Key::Z if modifiers.command && modifiers.shift => self.controller.redo(),
            Key::Z if modifiers.command => self.controller.undo(),
            Key::Y if modifiers.command => self.controller.redo(),
            _ => None,
        }
    }

    // Both notification kinds take the same path here: egui repaints the full
    // canvas region, which is exactly what the render pass does anyway.
    fn on_canvas_event(&self, ctx: &egui::Context, _event: CanvasEvent) {
        ctx.request_repaint();
    }

    pub(crate) fn render(&mut self, surface: &mut dyn DrawSurface) {
        self.renderer.render(
            surface,
            self.controller.document(),
            self.controller.preview(),
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn request_export(&mut self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        self.export_status = Some("Exporting…".to_owned());
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn export_status(&self) -> Option<&str> {
        self.export_status.as_deref()
    }

    /// Pick up the screenshot a previous frame requested and serialize the
    /// canvas region to disk.
    #[cfg(not(target_arch = "wasm32"))]
    fn handle_export(&mut self, ctx: &egui::Context) {
        let screenshot = ctx.input(|input| {
            input.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(screenshot) = screenshot else {
            return;
        };

        let path = std::path::Path::new("doodle-export.png");
        match crate::export::save_png(&screenshot, self.canvas_rect, ctx.pixels_per_point(), path) {
            Ok(()) => {
                log::info!("Exported canvas to {}", path.display());
                self.export_status = Some(format!("Saved {}", path.display()));
            }
            Err(err) => {
                log::error!("Canvas export failed: {err}");
                self.export_status = Some(format!("Export failed: {err}"));
            }
        }
    }
}

impl eframe::App for DoodleApp {
    /// Persist tool preferences only; saving drawings is out of scope.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.controller.tools());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(not(target_arch = "wasm32"))]
        self.handle_export(ctx);

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
