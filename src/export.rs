use std::path::Path;

use image::ImageFormat;

use crate::raster::Image;

/// File formats the exporter can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Tiff,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Tiff => "tiff",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Save a raster image to disk, delegating the encoding to the `image`
/// crate.
pub fn save_image(
    source: &Image,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), String> {
    // Convert the pixel buffer to raw RGBA bytes
    let mut bytes = Vec::with_capacity(source.pixels().len() * 4);
    for px in source.pixels() {
        bytes.extend_from_slice(&[px.r, px.g, px.b, px.a]);
    }

    let rgba = image::RgbaImage::from_raw(source.width() as u32, source.height() as u32, bytes)
        .ok_or_else(|| "failed to build RGBA image".to_string())?;

    rgba.save_with_format(path.as_ref(), format.image_format())
        .map_err(|e| e.to_string())
}
