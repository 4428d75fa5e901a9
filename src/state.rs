use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::element::{Displayable, Sticker, Stroke, ToolPreview};

/// Built-in sticker set, JSON so alternative catalogs can be dropped in.
const DEFAULT_STICKERS: &str = r#"["😀", "⭐", "❤"]"#;

/// The glyphs offered by the sticker buttons. Users can register custom
/// glyphs at runtime; blank input is declined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerCatalog {
    glyphs: Vec<String>,
}

impl StickerCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            glyphs: serde_json::from_str(json)?,
        })
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Register a glyph. Returns false for blank input; an already-known
    /// glyph is accepted without duplicating the entry.
    pub fn add(&mut self, glyph: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return false;
        }
        if !self.glyphs.iter().any(|g| g == glyph) {
            self.glyphs.push(glyph.to_owned());
        }
        true
    }
}

impl Default for StickerCatalog {
    fn default() -> Self {
        Self::from_json(DEFAULT_STICKERS).unwrap_or_else(|err| {
            log::warn!("Built-in sticker catalog failed to parse: {err}");
            Self { glyphs: Vec::new() }
        })
    }
}

/// Which kind of mark a pointer-down creates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ToolKind {
    Brush,
    Sticker(String),
}

/// The currently chosen width/color/glyph/rotation, applied to newly created
/// displayables. Mutated only by explicit selection actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    tool: ToolKind,
    width: f32,
    color: Color32,
    rotation: f32,
    catalog: StickerCatalog,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: ToolKind::Brush,
            width: 2.0,
            color: Color32::BLACK,
            rotation: 0.0,
            catalog: StickerCatalog::default(),
        }
    }
}

impl ToolState {
    pub fn tool(&self) -> &ToolKind {
        &self.tool
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Sticker rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn catalog(&self) -> &StickerCatalog {
        &self.catalog
    }

    pub fn select_brush(&mut self) {
        self.tool = ToolKind::Brush;
    }

    pub fn select_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn select_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn select_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Switch to sticker mode with `glyph`. A blank glyph is declined and
    /// leaves the selection untouched.
    pub fn select_sticker(&mut self, glyph: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return false;
        }
        self.tool = ToolKind::Sticker(glyph.to_owned());
        true
    }

    /// Register a custom glyph and select it. Declined for blank input.
    pub fn add_custom_sticker(&mut self, glyph: &str) -> bool {
        if !self.catalog.add(glyph) {
            return false;
        }
        self.select_sticker(glyph)
    }

    /// Build the displayable a pointer-down commits at `pos`.
    pub fn displayable_at(&self, pos: Pos2) -> Displayable {
        match &self.tool {
            ToolKind::Brush => Displayable::Stroke(Stroke::new(pos, self.width, self.color)),
            ToolKind::Sticker(glyph) => Displayable::Sticker(Sticker::new(
                glyph.clone(),
                pos,
                self.color,
                self.rotation,
            )),
        }
    }

    /// Build the cursor indicator for `pos`, mirroring the selected tool.
    pub fn preview_at(&self, pos: Pos2) -> ToolPreview {
        match &self.tool {
            ToolKind::Brush => ToolPreview::Brush {
                pos,
                width: self.width,
                color: self.color,
            },
            ToolKind::Sticker(glyph) => ToolPreview::Sticker {
                pos,
                glyph: glyph.clone(),
                rotation: self.rotation,
                color: self.color,
            },
        }
    }
}
