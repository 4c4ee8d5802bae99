//! 32px favicon as an SVG with the PNG inlined as a data URI.

use crate::error::{AssetError, Result};
use crate::layout::ProjectLayout;
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const FAVICON_SIZE: u32 = 32;
pub const SVG_NAME: &str = "kairos-icon-32.svg";
pub const PNG_NAME: &str = "kairos-icon-32.png";

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone)]
pub struct FaviconJob {
    pub source: PathBuf,
    /// Every SVG destination; the first is the canonical copy.
    pub svg_targets: Vec<PathBuf>,
    pub png_target: PathBuf,
}

impl FaviconJob {
    /// Branding and website copies for the given repository.
    pub fn for_layout(layout: &ProjectLayout) -> Self {
        Self {
            source: layout.favicon_source(),
            svg_targets: vec![layout.branding_dir().join(SVG_NAME), layout.website_dir().join(SVG_NAME)],
            png_target: layout.branding_dir().join(PNG_NAME),
        }
    }

    pub fn with_extra_targets(mut self, extra: impl IntoIterator<Item = PathBuf>) -> Self {
        self.svg_targets.extend(extra);
        self
    }
}

/// Sizes reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaviconStats {
    pub png_bytes: usize,
    pub base64_chars: usize,
    pub svg_bytes: usize,
}

/// Wrap PNG bytes in a 32x32 SVG.
pub fn inline_svg(png: &[u8]) -> String {
    let b64 = STANDARD.encode(png);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{s}\" height=\"{s}\" viewBox=\"0 0 {s} {s}\">\n  \
         <image width=\"{s}\" height=\"{s}\" xlink:href=\"{DATA_URI_PREFIX}{b64}\"/>\n</svg>\n",
        s = FAVICON_SIZE
    )
}

/// Recover the embedded PNG from an SVG written by [`inline_svg`].
pub fn extract_png(svg: &str) -> Result<Vec<u8>> {
    let start = svg
        .find(DATA_URI_PREFIX)
        .map(|i| i + DATA_URI_PREFIX.len())
        .ok_or_else(|| AssetError::Render("no PNG data URI in SVG".to_string()))?;
    let end = svg[start..]
        .find('"')
        .map(|i| start + i)
        .ok_or_else(|| AssetError::Render("unterminated data URI".to_string()))?;
    STANDARD
        .decode(&svg[start..end])
        .map_err(|e| AssetError::Render(format!("invalid base64 in data URI: {e}")))
}

pub fn generate(job: &FaviconJob) -> Result<(GenerationReport, FaviconStats)> {
    let mut report = GenerationReport::new("favicon");
    let logo = raster::load_rgba(&job.source)?;
    let small = raster::resize_square(&logo, FAVICON_SIZE);
    let png = raster::encode_png(&small)?;
    let svg = inline_svg(&png);

    for target in &job.svg_targets {
        write_bytes(target, svg.as_bytes())?;
        report.push(target, AssetKind::Svg, FAVICON_SIZE, FAVICON_SIZE);
    }
    write_bytes(&job.png_target, &png)?;
    report.push(&job.png_target, AssetKind::Png, FAVICON_SIZE, FAVICON_SIZE);

    let stats = FaviconStats {
        png_bytes: png.len(),
        base64_chars: STANDARD.encode(&png).len(),
        svg_bytes: svg.len(),
    };
    tracing::info!(
        png_bytes = stats.png_bytes,
        base64_chars = stats.base64_chars,
        svg_bytes = stats.svg_bytes,
        "favicon sizes"
    );
    Ok((report, stats))
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    raster::ensure_parent(path)?;
    std::fs::write(path, bytes).map_err(|e| AssetError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_svg_round_trip() {
        let png = raster::encode_png(&image::RgbaImage::from_pixel(32, 32, image::Rgba([212, 175, 55, 255]))).unwrap();
        let svg = inline_svg(&png);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"0 0 32 32\""));
        assert_eq!(extract_png(&svg).unwrap(), png);
    }

    #[test]
    fn test_extract_rejects_plain_svg() {
        assert!(extract_png("<svg/>").is_err());
    }

    #[test]
    fn test_layout_targets() {
        let job = FaviconJob::for_layout(&ProjectLayout::new("/repo"))
            .with_extra_targets([PathBuf::from("/site/kairos-icon-32.svg")]);
        assert_eq!(job.svg_targets.len(), 3);
        assert!(job.svg_targets[0].ends_with("assets/branding/kairos-icon-32.svg"));
        assert!(job.svg_targets[1].ends_with("website/kairos-icon-32.svg"));
        assert!(job.png_target.ends_with("assets/branding/kairos-icon-32.png"));
    }
}
