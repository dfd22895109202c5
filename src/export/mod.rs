//! Flat raster export of the canvas.
//!
//! The canvas is encoded as PNG or JPEG with the `image` crate. The format is
//! picked from the target path's extension; JPEG output is plain RGB since
//! the canvas has no alpha channel.

pub mod file;
pub mod types;

pub use file::{ensure_directory_exists, expand_tilde, generate_filename};
pub use types::{ExportError, ExportFormat};

use crate::draw::Canvas;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};

/// Default JPEG quality (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encodes the canvas into an in-memory image file.
pub fn encode(canvas: &Canvas, format: ExportFormat, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgb = canvas.to_rgb_bytes();
    let mut bytes = Vec::new();

    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(
                &rgb,
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).write_image(
                &rgb,
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
    }

    Ok(bytes)
}

/// Writes the canvas to `path`, choosing the format from its extension.
pub fn save_canvas(canvas: &Canvas, path: &Path, quality: u8) -> Result<(), ExportError> {
    let format = ExportFormat::from_path(path);
    let bytes = encode(canvas, format, quality)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }
    fs::write(path, &bytes)?;

    log::info!(
        "Exported {}x{} canvas to {} ({:?}, {} bytes)",
        canvas.width(),
        canvas.height(),
        path.display(),
        format,
        bytes.len()
    );
    Ok(())
}

/// Writes the canvas into `directory` under a timestamped filename.
///
/// # Returns
/// Path to the saved file
pub fn save_to_directory(
    canvas: &Canvas,
    directory: &Path,
    filename_template: &str,
    format: ExportFormat,
    quality: u8,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let path = directory.join(generate_filename(filename_template, format.extension()));
    save_canvas(canvas, &path, quality)?;
    Ok(path)
}
