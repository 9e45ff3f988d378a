//! `.brush` container assembly and atomic output.

use std::io::{Cursor, Write};
use std::path::Path;

use image::{GrayImage, ImageFormat, RgbaImage};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Result, SilicaError};
use crate::spec::BrushSpec;

use super::metadata::brush_archive;

/// Internal bundle paths expected by the host application.
pub const METADATA_ENTRY: &str = "Brush.archive";
pub const SHAPE_ENTRY: &str = "Shape.png";
pub const GRAIN_ENTRY: &str = "Grain.png";
pub const THUMBNAIL_ENTRY: &str = "QuickLook/Thumbnail.png";

/// A fully assembled bundle, immutable once built and written to disk
/// as one atomic unit.
#[derive(Debug, Clone)]
pub struct BrushBundle {
    metadata: Vec<u8>,
    shape_png: Vec<u8>,
    grain_png: Vec<u8>,
    thumbnail_png: Vec<u8>,
}

impl BrushBundle {
    /// Encode the three rasters and the metadata record into bundle
    /// entries.
    pub fn assemble(
        spec: &BrushSpec,
        shape: &GrayImage,
        grain: &GrayImage,
        thumbnail: &RgbaImage,
    ) -> Result<Self> {
        Ok(Self {
            metadata: brush_archive(spec)?,
            shape_png: encode_gray(shape, "shape")?,
            grain_png: encode_gray(grain, "grain")?,
            thumbnail_png: encode_rgba(thumbnail, "thumbnail")?,
        })
    }

    /// Total entry size before compression.
    pub fn uncompressed_len(&self) -> usize {
        self.metadata.len()
            + self.shape_png.len()
            + self.grain_png.len()
            + self.thumbnail_png.len()
    }

    /// Write the bundle to `path`, fully formed or not at all.
    ///
    /// The zip is staged in a named temp file beside the destination and
    /// moved into place on success; any failure drops the temp file and
    /// leaves nothing at `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let staged = tempfile::Builder::new()
            .prefix(".silica-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| SilicaError::Package {
                message: format!("Failed to stage bundle near {}: {}", path.display(), e),
                help: Some("Check that the output directory exists and is writable".to_string()),
            })?;

        self.write_zip(staged.as_file())?;

        staged.persist(path).map_err(|e| SilicaError::Package {
            message: format!("Failed to move bundle into {}: {}", path.display(), e.error),
            help: None,
        })?;

        Ok(())
    }

    fn write_zip<W: Write + std::io::Seek>(&self, writer: W) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(writer);

        let entries = [
            (METADATA_ENTRY, &self.metadata),
            (SHAPE_ENTRY, &self.shape_png),
            (GRAIN_ENTRY, &self.grain_png),
        ];
        for (name, bytes) in entries {
            zip.start_file(name, options).map_err(zip_err)?;
            zip.write_all(bytes)?;
        }

        zip.add_directory("QuickLook", options).map_err(zip_err)?;
        zip.start_file(THUMBNAIL_ENTRY, options).map_err(zip_err)?;
        zip.write_all(&self.thumbnail_png)?;

        zip.finish().map_err(zip_err)?;
        Ok(())
    }
}

fn zip_err(e: zip::result::ZipError) -> SilicaError {
    SilicaError::Package {
        message: format!("Failed to write bundle entry: {}", e),
        help: None,
    }
}

fn encode_gray(image: &GrayImage, stage: &str) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| SilicaError::Render {
            stage: stage.to_string(),
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(buffer.into_inner())
}

fn encode_rgba(image: &RgbaImage, stage: &str) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| SilicaError::Render {
            stage: stage.to_string(),
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(buffer.into_inner())
}
