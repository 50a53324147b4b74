use std::path::PathBuf;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::grid::PixelGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Tiff,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Tiff => "TIFF",
        }
    }

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

/// Rasterize the grid: each cell becomes a `pixel_size x pixel_size` block of
/// solid color, in raster order. Pure transform, no side effects.
pub fn render_image(grid: &PixelGrid, pixel_size: u32) -> RgbaImage {
    let side = grid.size() as u32 * pixel_size;
    let mut img = RgbaImage::new(side, side);

    for (row, col, color) in grid.cells() {
        let block = Rgba([color.r(), color.g(), color.b(), color.a()]);
        let x0 = col as u32 * pixel_size;
        let y0 = row as u32 * pixel_size;
        for dy in 0..pixel_size {
            for dx in 0..pixel_size {
                img.put_pixel(x0 + dx, y0 + dy, block);
            }
        }
    }

    img
}

/// Save a rendered image to disk in the chosen format.
pub fn save_image(
    img: RgbaImage,
    path: impl Into<PathBuf>,
    format: ExportFormat,
) -> Result<(), String> {
    let path = path.into();
    img.save_with_format(&path, format.image_format())
        .map_err(|e| e.to_string())?;
    log::info!("exported {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}
