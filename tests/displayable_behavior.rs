mod common;

use common::{DrawCall, RecordingSurface};
use doodle_pad::{Sticker, Stroke, ToolPreview};
use egui::{Color32, pos2};

#[test]
fn single_point_stroke_renders_nothing() {
    let stroke = Stroke::new(pos2(10.0, 10.0), 2.0, Color32::BLACK);

    let mut surface = RecordingSurface::new();
    stroke.display(&mut surface);

    assert!(surface.calls.is_empty());
}

#[test]
fn stroke_dragged_once_renders_exactly_one_segment() {
    let mut stroke = Stroke::new(pos2(10.0, 10.0), 2.0, Color32::BLACK);
    stroke.drag(pos2(20.0, 10.0));

    let mut surface = RecordingSurface::new();
    stroke.display(&mut surface);

    assert_eq!(surface.calls.len(), 1);
    match &surface.calls[0] {
        DrawCall::Polyline {
            points,
            width,
            color,
        } => {
            assert_eq!(points.as_slice(), &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);
            assert_eq!(*width, 2.0);
            assert_eq!(*color, Color32::BLACK);
        }
        other => panic!("expected a polyline, got {other:?}"),
    }
}

#[test]
fn stroke_drag_accumulates_points_in_order() {
    let mut stroke = Stroke::new(pos2(0.0, 0.0), 3.0, Color32::RED);
    stroke.drag(pos2(1.0, 1.0));
    stroke.drag(pos2(2.0, 2.0));
    stroke.drag(pos2(3.0, 3.0));

    assert_eq!(
        stroke.points(),
        &[
            pos2(0.0, 0.0),
            pos2(1.0, 1.0),
            pos2(2.0, 2.0),
            pos2(3.0, 3.0)
        ]
    );
}

#[test]
fn sticker_drag_replaces_the_anchor() {
    let mut sticker = Sticker::new("⭐", pos2(50.0, 50.0), Color32::BLACK, 0.0);
    sticker.drag(pos2(60.0, 40.0));
    sticker.drag(pos2(70.0, 30.0));

    // Follows the pointer instead of accumulating a path.
    assert_eq!(sticker.anchor(), pos2(70.0, 30.0));
}

#[test]
fn sticker_renders_its_glyph_with_rotation() {
    let sticker = Sticker::new("⭐", pos2(50.0, 50.0), Color32::BLUE, 45.0);

    let mut surface = RecordingSurface::new();
    sticker.display(&mut surface);

    assert_eq!(
        surface.calls,
        vec![DrawCall::Glyph {
            glyph: "⭐".to_owned(),
            center: pos2(50.0, 50.0),
            size: Sticker::FONT_SIZE,
            rotation: 45.0,
            color: Color32::BLUE,
        }]
    );
}

#[test]
fn brush_preview_renders_a_dot_scaled_from_the_width() {
    let preview = ToolPreview::Brush {
        pos: pos2(30.0, 30.0),
        width: 5.0,
        color: Color32::BLACK,
    };

    let mut surface = RecordingSurface::new();
    preview.display(&mut surface);

    assert_eq!(surface.glyphs().len(), 1);
    match &surface.calls[0] {
        DrawCall::Glyph {
            glyph,
            center,
            size,
            rotation,
            ..
        } => {
            assert_eq!(glyph, ".");
            assert_eq!(*center, pos2(30.0, 30.0));
            assert_eq!(*size, 20.0);
            assert_eq!(*rotation, 0.0);
        }
        other => panic!("expected a glyph, got {other:?}"),
    }
}

#[test]
fn sticker_preview_mirrors_glyph_and_rotation() {
    let preview = ToolPreview::Sticker {
        pos: pos2(12.0, 34.0),
        glyph: "😀".to_owned(),
        rotation: 90.0,
        color: Color32::BLACK,
    };

    let mut surface = RecordingSurface::new();
    preview.display(&mut surface);

    assert_eq!(
        surface.calls,
        vec![DrawCall::Glyph {
            glyph: "😀".to_owned(),
            center: pos2(12.0, 34.0),
            size: Sticker::FONT_SIZE,
            rotation: 90.0,
            color: Color32::BLACK,
        }]
    );
}
