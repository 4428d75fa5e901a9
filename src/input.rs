use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

/// Canvas-scoped input events. Positions are already translated into
/// canvas-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp,
    PointerLeave,
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Converts raw egui input into canvas [`InputEvent`]s.
///
/// The canvas rect is taken fresh on every call since panel layout may move
/// it between frames; the viewport-to-canvas translation is recomputed per
/// event from that rect.
pub struct InputHandler {
    last_hover: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { last_hover: None }
    }

    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let to_canvas = |pos: Pos2| pos - canvas_rect.min.to_vec2();

            match hover {
                Some(pos) if canvas_rect.contains(pos) => {
                    if self.last_hover != Some(pos) {
                        events.push(InputEvent::PointerMove {
                            pos: to_canvas(pos),
                        });
                    }
                    self.last_hover = Some(pos);
                }
                _ => {
                    if self.last_hover.take().is_some() {
                        events.push(InputEvent::PointerLeave);
                    }
                }
            }

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = hover {
                    if canvas_rect.contains(pos) {
                        events.push(InputEvent::PointerDown {
                            pos: to_canvas(pos),
                        });
                    }
                }
            }

            // A release anywhere ends a drag, including outside the canvas.
            if input.pointer.button_released(PointerButton::Primary) {
                events.push(InputEvent::PointerUp);
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
