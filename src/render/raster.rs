//! resvg-backed rasterizer.
//!
//! The composed document is parsed into a usvg tree and painted with
//! tiny-skia. Embedded images (the profile picture and logo data URLs) are
//! decoded by usvg; text runs resolve against the system font database.

use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};
use crate::render::{CardImage, Rasterizer};

/// Rasterizer backed by the resvg pipeline. System fonts are loaded once at
/// construction so repeated exports do not rescan the font directories.
pub struct SvgRasterizer {
    options: usvg::Options<'static>,
}

impl SvgRasterizer {
    pub fn new(font_family: &str) -> Self {
        let mut options = usvg::Options::default();
        options.font_family = font_family.to_string();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new("sans-serif")
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, svg: &str, scale: f32) -> Result<CardImage> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::ConfigError(format!("invalid raster scale {scale}")));
        }

        let tree = usvg::Tree::from_data(svg.as_bytes(), &self.options)
            .map_err(|e| Error::Raster(format!("SVG parse failed: {e}")))?;

        let size = tree.size();
        let width = (size.width() * scale).ceil() as u32;
        let height = (size.height() * scale).ceil() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width.max(1), height.max(1))
            .ok_or_else(|| Error::Raster(format!("cannot allocate {width}x{height} surface")))?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        let png_data = pixmap
            .encode_png()
            .map_err(|e| Error::Raster(format!("PNG encode failed: {e}")))?;
        log::debug!(
            "rasterized {}x{} card ({} bytes)",
            pixmap.width(),
            pixmap.height(),
            png_data.len()
        );

        Ok(CardImage {
            width: pixmap.width(),
            height: pixmap.height(),
            png_data,
        })
    }
}
