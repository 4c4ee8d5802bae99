//! What a generator produced.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File type of a generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Png,
    Svg,
    Pdf,
    Json,
}

/// One file written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub kind: AssetKind,
    /// Pixel size for raster/vector output, page size in points for PDF.
    pub width: u32,
    pub height: u32,
}

/// Result of one generator run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub generator: String,
    pub assets: Vec<GeneratedAsset>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub fn new(generator: &str) -> Self {
        Self {
            generator: generator.to_string(),
            assets: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a written file.
    pub fn push(&mut self, path: &Path, kind: AssetKind, width: u32, height: u32) {
        info!(generator = %self.generator, path = %path.display(), width, height, "wrote asset");
        self.assets.push(GeneratedAsset {
            path: path.to_path_buf(),
            kind,
            width,
            height,
        });
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(generator = %self.generator, "{message}");
        self.warnings.push(message);
    }

    /// Fold another report's assets and warnings into this one.
    pub fn absorb(&mut self, other: GenerationReport) {
        self.assets.extend(other.assets);
        self.warnings.extend(other.warnings);
    }

    pub fn count(&self, kind: AssetKind) -> usize {
        self.assets.iter().filter(|a| a.kind == kind).count()
    }
}
