#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod controller;
pub mod document;
pub mod element;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;

#[cfg(not(target_arch = "wasm32"))]
pub mod export;

pub use app::DoodleApp;
pub use controller::{CanvasController, CanvasEvent};
pub use document::Document;
pub use element::{Displayable, Sticker, Stroke, ToolPreview};
pub use input::{InputEvent, InputHandler};
pub use renderer::{DrawSurface, PainterSurface, Renderer};
pub use state::{StickerCatalog, ToolKind, ToolState};
