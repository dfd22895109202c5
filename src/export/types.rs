//! Types for raster export.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless PNG (default)
    #[default]
    Png,
    /// Lossy JPEG, always flattened to opaque RGB
    Jpeg,
}

impl ExportFormat {
    /// Picks the format from a path's extension.
    ///
    /// `jpg`/`jpeg` (any case) select JPEG; anything else, including no
    /// extension at all, selects PNG.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("jpg" | "jpeg") => ExportFormat::Jpeg,
            _ => ExportFormat::Png,
        }
    }

    /// File extension used for generated filenames.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}
