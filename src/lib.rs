//! Mitosis Community Card Engine
//!
//! A headless renderer for Mitosis community cards: a submission (name,
//! handle, roles, color, template, logo, profile picture) goes in, a layered
//! SVG composition comes out, and the export path rasterizes it to a PNG
//! artifact.
//!
//! # Features
//!
//! - **Raster backend** (default): rasterizes the composition via resvg
//! - **Deterministic rendering**: the same submission always produces the
//!   same document; color and template derivation are total functions
//! - **Serial export**: at most one rasterization in flight at a time
//!
//! # Example
//!
//! ```no_run
//! use mitocard::card::Submission;
//! use mitocard::{Exporter, RendererConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let card = Submission {
//!     name: "Alice".to_string(),
//!     username: "alice".to_string(),
//!     roles: vec!["Settler".to_string()],
//!     card_color: "white".to_string(),
//!     card_template: "blue-waves".to_string(),
//!     profile_picture: Some(mitocard::card::picture_data_url_from_file("alice.png")?),
//!     ..Default::default()
//! }
//! .submit()?;
//!
//! let exporter = Exporter::new(RendererConfig::default());
//! let artifact = exporter.export(&card).await?;
//! println!("saved {}", artifact.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod assets;
pub mod card;
pub mod color;
pub mod template;

pub mod render;

pub mod export;

// Re-export the main entry points at the crate root for ergonomic use
pub use card::CardData;
pub use export::Exporter;

/// Configuration for the card renderer
///
/// The defaults match the original card proportions: a 450x250 canvas
/// rasterized at 2x for a crisp artifact.
///
/// # Examples
///
/// ```
/// let cfg = mitocard::RendererConfig::default();
/// assert_eq!(cfg.size.width, 450);
/// assert_eq!(cfg.scale, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Card canvas dimensions
    pub size: CardSize,
    /// Raster scale applied on export
    pub scale: f32,
    /// Font family for the text runs
    pub font_family: String,
    /// Directory the export artifact is written to
    pub out_dir: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            size: CardSize::default(),
            scale: 2.0,
            font_family: "sans-serif".to_string(),
            out_dir: PathBuf::from("."),
        }
    }
}

/// Card canvas dimensions
#[derive(Debug, Clone, Copy)]
pub struct CardSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CardSize {
    fn default() -> Self {
        Self {
            width: 450,
            height: 250,
        }
    }
}

/// Create a rasterizer with the default backend for this build.
#[cfg(feature = "raster")]
pub fn new_rasterizer(config: &RendererConfig) -> impl render::Rasterizer {
    render::raster::SvgRasterizer::new(&config.font_family)
}
