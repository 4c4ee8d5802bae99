//! Kairos 777 brand asset generators.
//!
//! Each generator module reads a source image (or nothing at all), lays out
//! its artwork, and writes files at fixed paths relative to a [`ProjectLayout`].
//! Every run returns a [`GenerationReport`] listing what was written.
//!
//! Vector drawing goes through [`canvas::Canvas`], which builds an SVG document
//! and rasterizes it with resvg. Raster compositing lives in [`raster`].

pub mod app_icons;
pub mod banners;
pub mod canvas;
pub mod certificate;
pub mod color;
pub mod cws;
pub mod error;
pub mod extension_icons;
pub mod favicon;
pub mod layout;
pub mod logo;
pub mod pdf_inspect;
pub mod raster;
pub mod report;

pub use canvas::{Canvas, FontBook};
pub use color::Color;
pub use error::{AssetError, Result};
pub use layout::ProjectLayout;
pub use report::{AssetKind, GeneratedAsset, GenerationReport};
