//! Browser-extension toolbar icons.
//!
//! Each size is written as an SVG from a fixed template, rasterized to PNG, and
//! the SVG removed once the PNG exists. A failed rasterization keeps the SVG so
//! it can be converted by hand.

use crate::canvas::{self, FontBook};
use crate::error::{AssetError, Result};
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use std::path::{Path, PathBuf};

/// Chrome toolbar and store icon sizes.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 128 128">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#0a0a1a"/>
      <stop offset="100%" style="stop-color:#141420"/>
    </linearGradient>
    <linearGradient id="gold" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#f7c948"/>
      <stop offset="100%" style="stop-color:#D4AF37"/>
    </linearGradient>
  </defs>
  <rect width="128" height="128" rx="28" fill="url(#bg)"/>
  <circle cx="64" cy="64" r="38" fill="none" stroke="url(#gold)" stroke-width="3" opacity="0.3"/>
  <text x="64" y="82" font-family="Inter, Arial, sans-serif" font-size="68" font-weight="800" text-anchor="middle" fill="url(#gold)">K</text>
</svg>"##;

/// SVG source for one icon size.
pub fn icon_svg(size: u32) -> String {
    TEMPLATE.replace("{size}", &size.to_string())
}

/// Where to write icons and where to mirror them for the dev build.
#[derive(Debug, Clone)]
pub struct ExtensionIconJob {
    pub icon_dir: PathBuf,
    pub mirror_dir: Option<PathBuf>,
}

/// Generate all icon sizes into `job.icon_dir`, then mirror the directory.
pub fn generate(job: &ExtensionIconJob, fonts: &FontBook) -> Result<GenerationReport> {
    let mut report = GenerationReport::new("extension-icons");
    std::fs::create_dir_all(&job.icon_dir).map_err(|e| AssetError::io(&job.icon_dir, e))?;

    for size in ICON_SIZES {
        let svg = icon_svg(size);
        let svg_path = job.icon_dir.join(format!("icon-{size}.svg"));
        let png_path = job.icon_dir.join(format!("icon-{size}.png"));
        std::fs::write(&svg_path, &svg).map_err(|e| AssetError::io(&svg_path, e))?;

        match rasterize_icon(&svg, size, &png_path, fonts) {
            Ok(()) => {
                std::fs::remove_file(&svg_path).map_err(|e| AssetError::io(&svg_path, e))?;
                report.push(&png_path, AssetKind::Png, size, size);
            }
            Err(e) => {
                report.warn(format!(
                    "icon-{size}.svg kept, PNG conversion failed ({e}); convert it manually"
                ));
                report.push(&svg_path, AssetKind::Svg, size, size);
            }
        }
    }

    if let Some(mirror) = &job.mirror_dir {
        let copied = mirror_dir(&job.icon_dir, mirror)?;
        tracing::info!(count = copied, dir = %mirror.display(), "mirrored extension icons");
    }

    Ok(report)
}

fn rasterize_icon(svg: &str, size: u32, png_path: &Path, fonts: &FontBook) -> Result<()> {
    let img = canvas::rasterize_svg(svg, size, size, fonts)?;
    raster::save_png(&img, png_path)?;
    let written = std::fs::metadata(png_path).map_err(|e| AssetError::io(png_path, e))?;
    if written.len() == 0 {
        return Err(AssetError::Render(format!("{} is empty", png_path.display())));
    }
    Ok(())
}

/// Copy every regular file from `src` into `dst`. Returns the number copied.
pub fn mirror_dir(src: &Path, dst: &Path) -> Result<usize> {
    std::fs::create_dir_all(dst).map_err(|e| AssetError::io(dst, e))?;
    let mut count = 0;
    let entries = std::fs::read_dir(src).map_err(|e| AssetError::io(src, e))?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let target = dst.join(entry.file_name());
        std::fs::copy(&path, &target).map_err(|e| AssetError::io(&target, e))?;
        count += 1;
    }
    Ok(count)
}
