//! Single-generator subcommands: resolve paths from the layout, run, print.

use crate::cli::args::AppSelection;
use crate::cli::output::{self, Styled};
use crate::cli::Context;
use anyhow::{bail, Context as _, Result};
use kairos_assets::app_icons::{self, AppTarget};
use kairos_assets::banners::{self, BannerJob};
use kairos_assets::certificate::{self, CertificateData, CertificateJob};
use kairos_assets::extension_icons::{self, ExtensionIconJob};
use kairos_assets::favicon::{self, FaviconJob};
use kairos_assets::logo::{self, LogoJob};
use kairos_assets::{cws, FontBook, GenerationReport};
use std::path::{Path, PathBuf};

/// Print a report as JSON or styled lines.
pub fn emit(ctx: &Context, report: &GenerationReport) {
    if output::is_json() {
        if let Ok(value) = serde_json::to_value(report) {
            output::print_json(&value);
        }
        return;
    }
    output::print_report(&Styled::new(), report, ctx.layout.root());
}

pub fn extension_icons(
    ctx: &Context,
    fonts: &FontBook,
    out: Option<PathBuf>,
    mirror: Option<PathBuf>,
    no_mirror: bool,
) -> Result<GenerationReport> {
    let job = ExtensionIconJob {
        icon_dir: out.unwrap_or_else(|| ctx.layout.extension_icon_dir()),
        mirror_dir: if no_mirror {
            None
        } else {
            Some(mirror.unwrap_or_else(|| ctx.layout.extension_public_icon_dir()))
        },
    };
    extension_icons::generate(&job, fonts).context("extension icon generation failed")
}

/// Targets for the selection, with the source overridden when one is given.
pub fn app_targets(ctx: &Context, app: AppSelection, source: Option<PathBuf>) -> Vec<AppTarget> {
    app_icons::default_targets(&ctx.layout)
        .into_iter()
        .filter(|t| app.includes(&t.name))
        .map(|mut t| {
            if let Some(src) = &source {
                t.source = src.clone();
            }
            t
        })
        .collect()
}

pub fn app_icons(ctx: &Context, app: AppSelection, source: Option<PathBuf>) -> Result<GenerationReport> {
    let targets = app_targets(ctx, app, source);
    if targets.is_empty() {
        bail!("no app selected");
    }
    app_icons::generate(&targets).context("app icon generation failed")
}

pub fn logo(ctx: &Context, fonts: &FontBook, source: PathBuf, out: Option<PathBuf>, scale: u32) -> Result<GenerationReport> {
    let job = LogoJob {
        source,
        out_dir: out.unwrap_or_else(|| ctx.layout.wallet_logo_dir()),
        scale,
    };
    logo::generate(&job, fonts)
        .with_context(|| format!("failed to rasterize {}", job.source.display()))
}

pub fn cws(ctx: &Context, fonts: &FontBook, out: Option<PathBuf>) -> Result<GenerationReport> {
    let dir = out.unwrap_or_else(|| ctx.layout.cws_dir());
    cws::generate(&dir, fonts).context("store asset generation failed")
}

pub fn banners(ctx: &Context, fonts: &FontBook, out: Option<PathBuf>, logo: Option<PathBuf>) -> Result<GenerationReport> {
    let job = BannerJob {
        out_dir: out.unwrap_or_else(|| ctx.layout.promo_dir()),
        logo: logo.unwrap_or_else(|| ctx.layout.banner_logo()),
    };
    banners::generate(&job, fonts).context("banner generation failed")
}

/// Defaults, overlaid with any fields present in the JSON file.
pub fn load_certificate_data(path: Option<&Path>) -> Result<CertificateData> {
    let Some(path) = path else {
        return Ok(CertificateData::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid certificate data in {}", path.display()))
}

pub fn certificate(
    ctx: &Context,
    out: Option<PathBuf>,
    data: Option<PathBuf>,
    file_name: Option<String>,
) -> Result<GenerationReport> {
    let mut job = CertificateJob::new(out.unwrap_or_else(|| ctx.layout.certificate_dir()));
    job.data = load_certificate_data(data.as_deref())?;
    if let Some(name) = file_name {
        job.file_name = name;
    }
    certificate::generate(&job).context("certificate generation failed")
}

pub fn favicon_job(ctx: &Context, source: Option<PathBuf>, also_write: Vec<PathBuf>) -> FaviconJob {
    let mut job = FaviconJob::for_layout(&ctx.layout).with_extra_targets(also_write);
    if let Some(src) = source {
        job.source = src;
    }
    job
}

/// Favicon prints its size stats alongside the report.
pub fn favicon(ctx: &Context, source: Option<PathBuf>, also_write: Vec<PathBuf>) -> Result<()> {
    let job = favicon_job(ctx, source, also_write);
    let (report, stats) = favicon::generate(&job).context("favicon generation failed")?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "report": report,
            "stats": stats,
        }));
        return Ok(());
    }

    let s = Styled::new();
    output::print_report(&s, &report, ctx.layout.root());
    if !output::is_quiet() {
        output::print_detail(&format!("32x32 PNG size: {} bytes", stats.png_bytes));
        output::print_detail(&format!("Base64 length: {} chars", stats.base64_chars));
        output::print_detail(&format!("SVG file size: {} bytes", stats.svg_bytes));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_assets::ProjectLayout;

    fn ctx() -> Context {
        Context {
            layout: ProjectLayout::new("/repo"),
            font_dirs: Vec::new(),
        }
    }

    #[test]
    fn test_app_selection_filters_targets() {
        assert_eq!(app_targets(&ctx(), AppSelection::All, None).len(), 2);
        let wallet = app_targets(&ctx(), AppSelection::Wallet, Some(PathBuf::from("/tmp/logo.png")));
        assert_eq!(wallet.len(), 1);
        assert_eq!(wallet[0].name, "Kairos Wallet");
        assert_eq!(wallet[0].source, PathBuf::from("/tmp/logo.png"));
    }

    #[test]
    fn test_certificate_data_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cert.json");
        std::fs::write(&path, r#"{"certificate_number": "KAI-2027-002"}"#).unwrap();
        let data = load_certificate_data(Some(&path)).unwrap();
        assert_eq!(data.certificate_number, "KAI-2027-002");
        assert_eq!(data.legal_name, "Kairos 777 Inc");
    }

    #[test]
    fn test_favicon_extra_targets() {
        let job = favicon_job(&ctx(), None, vec![PathBuf::from("/site/kairos-icon-32.svg")]);
        assert_eq!(job.svg_targets.len(), 3);
        assert_eq!(job.source, PathBuf::from("/repo/website/kairos-logo.png"));
    }
}
