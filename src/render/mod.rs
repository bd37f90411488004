//! Card rendering: SVG composition and rasterization to PNG.

pub mod compose;
#[cfg(feature = "raster")]
pub mod raster;

use crate::error::Result;

/// A rasterized card.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// The composition-to-raster seam.
///
/// Implementations take a fully composed SVG document (all embedded image
/// content already resolved into data URLs) and paint it at `scale` times
/// the document size. Calls must be repeatable: a failed rasterization
/// leaves no partial state behind.
pub trait Rasterizer {
    /// Paint the document and return encoded PNG bytes.
    fn rasterize(&self, svg: &str, scale: f32) -> Result<CardImage>;
}
