use egui::Pos2;

use crate::document::Document;
use crate::element::{Displayable, ToolPreview};
use crate::state::ToolState;

/// Fire-and-forget change notification consumed by the render pass.
///
/// `DrawingChanged` means the committed content changed (commit, undo, redo
/// or clear); `ToolMoved` means only the cursor preview changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    DrawingChanged,
    ToolMoved,
}

/// Pointer mode. While drawing, the index of the element being extended is
/// carried in the state rather than re-derived from the document on every
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Idle,
    Drawing { active: usize },
}

/// Owns the document, the tool selection and the pointer mode. Every inbound
/// action funnels through here; mutation happens synchronously and the
/// returned notification tells the caller what kind of repaint is due.
pub struct CanvasController {
    document: Document,
    tools: ToolState,
    mode: Mode,
    preview: Option<ToolPreview>,
}

impl CanvasController {
    pub fn new(tools: ToolState) -> Self {
        Self {
            document: Document::new(),
            tools,
            mode: Mode::Idle,
            preview: None,
        }
    }

    /// Start a new displayable from the current tool selection and commit it.
    pub fn pointer_down(&mut self, pos: Pos2) -> Option<CanvasEvent> {
        if let Mode::Drawing { .. } = self.mode {
            return None;
        }
        self.document.commit(self.tools.displayable_at(pos));
        self.mode = Mode::Drawing {
            active: self.document.len() - 1,
        };
        self.preview = None;
        Some(CanvasEvent::DrawingChanged)
    }

    /// Extend the active element while drawing, or move the cursor preview
    /// while idle.
    pub fn pointer_move(&mut self, pos: Pos2) -> Option<CanvasEvent> {
        match self.mode {
            Mode::Drawing { active } => {
                self.document.get_mut(active)?.drag(pos);
                Some(CanvasEvent::DrawingChanged)
            }
            Mode::Idle => {
                self.preview = Some(self.tools.preview_at(pos));
                Some(CanvasEvent::ToolMoved)
            }
        }
    }

    /// End the drag. Releases outside the canvas land here too; the finished
    /// element needs no further mutation.
    pub fn pointer_up(&mut self) -> Option<CanvasEvent> {
        self.mode = Mode::Idle;
        None
    }

    /// The pointer left the canvas: hide the cursor preview.
    pub fn pointer_left(&mut self) -> Option<CanvasEvent> {
        if self.preview.take().is_some() {
            Some(CanvasEvent::ToolMoved)
        } else {
            None
        }
    }

    pub fn select_brush(&mut self) -> Option<CanvasEvent> {
        self.tools.select_brush();
        self.refresh_preview()
    }

    pub fn select_width(&mut self, width: f32) -> Option<CanvasEvent> {
        self.tools.select_width(width);
        self.refresh_preview()
    }

    pub fn select_color(&mut self, color: egui::Color32) -> Option<CanvasEvent> {
        self.tools.select_color(color);
        self.refresh_preview()
    }

    pub fn select_rotation(&mut self, degrees: f32) -> Option<CanvasEvent> {
        self.tools.select_rotation(degrees);
        self.refresh_preview()
    }

    /// Switch to sticker mode. A blank glyph is declined: no state change, no
    /// notification.
    pub fn select_sticker(&mut self, glyph: &str) -> Option<CanvasEvent> {
        if !self.tools.select_sticker(glyph) {
            return None;
        }
        self.refresh_preview()
    }

    /// Register a custom glyph and select it. Returns whether the glyph was
    /// accepted; the preview refreshes in place when it was.
    pub fn add_custom_sticker(&mut self, glyph: &str) -> bool {
        if !self.tools.add_custom_sticker(glyph) {
            return false;
        }
        self.refresh_preview();
        true
    }

    // A tool change must show without pointer motion, so rebuild the preview
    // where it stands.
    fn refresh_preview(&mut self) -> Option<CanvasEvent> {
        let pos = self.preview.as_ref()?.pos();
        self.preview = Some(self.tools.preview_at(pos));
        Some(CanvasEvent::ToolMoved)
    }

    /// Undo the latest committed element. A no-op on an empty document, and
    /// ignored while a drag is active.
    pub fn undo(&mut self) -> Option<CanvasEvent> {
        if let Mode::Drawing { .. } = self.mode {
            return None;
        }
        self.document.undo().then_some(CanvasEvent::DrawingChanged)
    }

    /// Redo the most recently undone element. A no-op when there is nothing
    /// to redo, and ignored while a drag is active.
    pub fn redo(&mut self) -> Option<CanvasEvent> {
        if let Mode::Drawing { .. } = self.mode {
            return None;
        }
        self.document.redo().then_some(CanvasEvent::DrawingChanged)
    }

    /// Wipe the canvas, drag state included.
    pub fn clear(&mut self) -> Option<CanvasEvent> {
        self.mode = Mode::Idle;
        self.document.clear();
        Some(CanvasEvent::DrawingChanged)
    }

    /// Committed content for an external export routine to repaint.
    pub fn export_snapshot(&self) -> Vec<Displayable> {
        self.document.snapshot()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.mode, Mode::Drawing { .. })
    }
}
