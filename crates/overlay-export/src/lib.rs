//! Export for Overlay
//!
//! Finished canvases leave as PNG, keeping their alpha channel only when
//! the canvas was transparent.

use std::fs;
use std::path::Path;

use overlay_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

pub mod png;

pub use png::{encode_bitmap_to_png, PngExporter};

/// Encode with `exporter` and write the bytes to `path`
pub fn export_to_file(
    exporter: &dyn Exporter,
    bitmap: &BitmapData,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = exporter.export(bitmap)?;
    fs::write(path, &bytes)
        .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    log::debug!(
        "Wrote {} bytes of {} to {}",
        bytes.len(),
        exporter.name(),
        path.display()
    );
    Ok(())
}

/// Shorthand for [`export_to_file`] with [`PngExporter`]
pub fn write_png(bitmap: &BitmapData, path: impl AsRef<Path>) -> Result<()> {
    export_to_file(&PngExporter::new(), bitmap, path)
}
