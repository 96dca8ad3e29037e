//! Image writers for the finished frame buffer.
//!
//! Binary PPM (P6) is the native output format; PNG is available via
//! the `image` crate. Both clamp channels to [0, 1] and scale to
//! 0-255 through `ImageBuffer::to_rgb8`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors from writing a rendered image to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("image is zero-sized ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("unsupported output extension: {0:?}")]
    UnsupportedExtension(String),
}

/// Save the buffer in the format implied by the path extension
/// (`.ppm` or `.png`).
pub fn save(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "ppm" => save_ppm(image, path),
        "png" => save_png(image, path),
        other => Err(OutputError::UnsupportedExtension(other.to_string())),
    }
}

/// Save the buffer as binary PPM (P6).
///
/// Textual header (magic, dimensions, max channel value) followed by
/// raw RGB byte triples in row-major order.
pub fn save_ppm(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    check_dimensions(image)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;

    log::info!(
        "wrote {}x{} PPM image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}

/// Save the buffer as PNG.
pub fn save_png(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    check_dimensions(image)?;

    image::save_buffer(
        path,
        &image.to_rgb8(),
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )?;

    log::info!(
        "wrote {}x{} PNG image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}

fn check_dimensions(image: &ImageBuffer) -> Result<(), OutputError> {
    if image.width == 0 || image.height == 0 {
        return Err(OutputError::EmptyImage {
            width: image.width,
            height: image.height,
        });
    }
    Ok(())
}
