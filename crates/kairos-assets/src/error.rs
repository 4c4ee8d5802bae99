//! Error types for the asset generators.

use std::path::PathBuf;

/// Errors produced while loading sources or writing generated assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error at {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("SVG parse error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("source asset not found: {0}")]
    MissingSource(PathBuf),

    #[error("render error: {0}")]
    Render(String),

    #[error("{program} failed: {message}")]
    Subprocess { program: String, message: String },
}

impl AssetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
