use std::path::Path;

use egui::{ColorImage, Rect};
use thiserror::Error;

/// Failures while serializing the canvas snapshot to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("screenshot does not cover the canvas region")]
    RegionOutOfBounds,
    #[error("screenshot buffer size mismatch")]
    BufferMismatch,
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Crop `screenshot` to the canvas `region` (given in logical points) and
/// save it as a PNG at the window's physical pixel scale.
pub fn save_png(
    screenshot: &ColorImage,
    region: Rect,
    pixels_per_point: f32,
    path: &Path,
) -> Result<(), ExportError> {
    let left = (region.min.x * pixels_per_point).round() as usize;
    let top = (region.min.y * pixels_per_point).round() as usize;
    let width = (region.width() * pixels_per_point).round() as usize;
    let height = (region.height() * pixels_per_point).round() as usize;

    let [full_width, full_height] = screenshot.size;
    if width == 0 || height == 0 || left + width > full_width || top + height > full_height {
        return Err(ExportError::RegionOutOfBounds);
    }

    let mut pixels = Vec::with_capacity(width * height * 4);
    for row in top..top + height {
        for col in left..left + width {
            let color = screenshot.pixels[row * full_width + col];
            pixels.extend_from_slice(&color.to_array());
        }
    }

    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .ok_or(ExportError::BufferMismatch)?;
    buffer.save(path)?;
    Ok(())
}
