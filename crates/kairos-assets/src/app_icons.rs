//! Native app icons and splash screens for the Capacitor shells.
//!
//! Android gets launcher, round, and adaptive-foreground icons per density plus
//! portrait/landscape splash screens. iOS gets the single 1024px universal icon
//! that the App Store requires to be opaque.

use crate::color::Color;
use crate::error::{AssetError, Result};
use crate::layout::ProjectLayout;
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use image::RgbaImage;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Launcher icon edge per density bucket.
pub const ANDROID_SIZES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Adaptive-icon foreground layer (108dp) per density bucket.
pub const ANDROID_FOREGROUND_SIZES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 108),
    ("mipmap-hdpi", 162),
    ("mipmap-xhdpi", 216),
    ("mipmap-xxhdpi", 324),
    ("mipmap-xxxhdpi", 432),
];

/// Share of the foreground canvas the logo occupies (72dp safe zone of 108dp, rounded down).
pub const FOREGROUND_LOGO_RATIO: f32 = 0.66;

pub const SPLASH_SIZES: [(&str, u32, u32); 10] = [
    ("drawable-port-hdpi", 480, 800),
    ("drawable-port-xhdpi", 720, 1280),
    ("drawable-port-xxhdpi", 960, 1600),
    ("drawable-port-xxxhdpi", 1280, 1920),
    ("drawable-land-hdpi", 800, 480),
    ("drawable-land-xhdpi", 1280, 720),
    ("drawable-land-xxhdpi", 1600, 960),
    ("drawable-land-xxxhdpi", 1920, 1280),
    ("drawable-port-mdpi", 320, 480),
    ("drawable-land-mdpi", 480, 320),
];

/// Fallback `drawable/splash.png`.
pub const DEFAULT_SPLASH: (u32, u32, u32) = (480, 800, 160);

pub const IOS_ICON_SIZE: u32 = 1024;
pub const IOS_ICON_NAME: &str = "AppIcon-512@2x.png";
/// App Store icons cannot carry alpha.
pub const IOS_BACKGROUND: Color = Color::rgb(13, 13, 13);

const IOS_ICONSET: &str = "ios/App/App/Assets.xcassets/AppIcon.appiconset";
const ANDROID_RES: &str = "android/app/src/main/res";

/// One native app: where its logo lives, where its platform projects live.
#[derive(Debug, Clone)]
pub struct AppTarget {
    pub name: String,
    pub source: PathBuf,
    pub app_dir: PathBuf,
    pub background: Color,
}

impl AppTarget {
    fn res_dir(&self) -> PathBuf {
        self.app_dir.join(ANDROID_RES)
    }

    fn iconset_dir(&self) -> PathBuf {
        self.app_dir.join(IOS_ICONSET)
    }
}

/// Kairos Trade and Kairos Wallet, as laid out in the monorepo.
pub fn default_targets(layout: &ProjectLayout) -> Vec<AppTarget> {
    vec![
        AppTarget {
            name: "Kairos Trade".to_string(),
            source: layout.trade_icon_source(),
            app_dir: layout.trade_app_dir(),
            background: Color::rgb(8, 9, 12),
        },
        AppTarget {
            name: "Kairos Wallet".to_string(),
            source: layout.wallet_icon_source(),
            app_dir: layout.wallet_app_dir(),
            background: Color::rgb(10, 11, 15),
        },
    ]
}

#[derive(Serialize)]
struct IconsetContents {
    images: Vec<IconsetImage>,
    info: IconsetInfo,
}

#[derive(Serialize)]
struct IconsetImage {
    filename: &'static str,
    idiom: &'static str,
    platform: &'static str,
    size: &'static str,
}

#[derive(Serialize)]
struct IconsetInfo {
    author: &'static str,
    version: u32,
}

/// Xcode `Contents.json` for a single universal icon.
pub fn iconset_contents() -> Result<String> {
    let contents = IconsetContents {
        images: vec![IconsetImage {
            filename: IOS_ICON_NAME,
            idiom: "universal",
            platform: "ios",
            size: "1024x1024",
        }],
        info: IconsetInfo {
            author: "xcode",
            version: 1,
        },
    };
    Ok(serde_json::to_string_pretty(&contents)?)
}

/// Logo centered at 66% on a transparent adaptive-icon canvas.
pub fn make_foreground(logo: &RgbaImage, size: u32) -> RgbaImage {
    let icon_size = (size as f32 * FOREGROUND_LOGO_RATIO) as u32;
    raster::pad_centered(logo, size, icon_size)
}

fn generate_ios(target: &AppTarget, logo: &RgbaImage, report: &mut GenerationReport) -> Result<()> {
    let dir = target.iconset_dir();
    let icon = raster::resize_square(logo, IOS_ICON_SIZE);
    let flat = raster::flatten(&icon, IOS_BACKGROUND);
    let icon_path = dir.join(IOS_ICON_NAME);
    raster::save_png(&flat, &icon_path)?;
    report.push(&icon_path, AssetKind::Png, IOS_ICON_SIZE, IOS_ICON_SIZE);

    let contents_path = dir.join("Contents.json");
    write_text(&contents_path, &iconset_contents()?)?;
    report.push(&contents_path, AssetKind::Json, 0, 0);
    Ok(())
}

fn generate_android(target: &AppTarget, logo: &RgbaImage, report: &mut GenerationReport) -> Result<()> {
    let res = target.res_dir();

    for (density, size) in ANDROID_SIZES {
        let dir = res.join(density);
        let flat = raster::flatten(&raster::resize_square(logo, size), target.background);
        let launcher = dir.join("ic_launcher.png");
        raster::save_png(&flat, &launcher)?;
        report.push(&launcher, AssetKind::Png, size, size);

        let rgba = image::DynamicImage::ImageRgb8(flat).to_rgba8();
        let round = raster::circle_mask(&rgba);
        let round_path = dir.join("ic_launcher_round.png");
        raster::save_png(&round, &round_path)?;
        report.push(&round_path, AssetKind::Png, size, size);
    }

    for (density, size) in ANDROID_FOREGROUND_SIZES {
        let path = res.join(density).join("ic_launcher_foreground.png");
        raster::save_png(&make_foreground(logo, size), &path)?;
        report.push(&path, AssetKind::Png, size, size);
    }
    Ok(())
}

fn generate_splash(target: &AppTarget, logo: &RgbaImage, report: &mut GenerationReport) -> Result<()> {
    let res = target.res_dir();
    for (drawable, w, h) in SPLASH_SIZES {
        let splash = raster::centered_on(w, h, target.background, logo, w.min(h) / 3);
        let path = res.join(drawable).join("splash.png");
        raster::save_png(&splash, &path)?;
        report.push(&path, AssetKind::Png, w, h);
    }

    let (w, h, logo_size) = DEFAULT_SPLASH;
    let splash = raster::centered_on(w, h, target.background, logo, logo_size);
    let path = res.join("drawable").join("splash.png");
    raster::save_png(&splash, &path)?;
    report.push(&path, AssetKind::Png, w, h);
    Ok(())
}

/// iOS icon, Android icons, and splash screens for one app.
pub fn generate_target(target: &AppTarget) -> Result<GenerationReport> {
    let mut report = GenerationReport::new(&format!("app-icons:{}", target.name));
    let logo = raster::load_rgba(&target.source)?;
    generate_ios(target, &logo, &mut report)?;
    generate_android(target, &logo, &mut report)?;
    generate_splash(target, &logo, &mut report)?;
    Ok(report)
}

/// Every target in order; the first failure aborts the run.
pub fn generate(targets: &[AppTarget]) -> Result<GenerationReport> {
    let mut report = GenerationReport::new("app-icons");
    for target in targets {
        tracing::info!(app = %target.name, source = %target.source.display(), "generating app icons");
        report.absorb(generate_target(target)?);
    }
    Ok(report)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    raster::ensure_parent(path)?;
    std::fs::write(path, text).map_err(|e| AssetError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&iconset_contents().unwrap()).unwrap();
        assert_eq!(json["images"][0]["filename"], "AppIcon-512@2x.png");
        assert_eq!(json["images"][0]["idiom"], "universal");
        assert_eq!(json["images"][0]["size"], "1024x1024");
        assert_eq!(json["info"]["author"], "xcode");
        assert_eq!(json["info"]["version"], 1);
    }

    #[test]
    fn test_foreground_logo_fraction() {
        let logo = RgbaImage::from_pixel(64, 64, image::Rgba([255, 255, 255, 255]));
        let fg = make_foreground(&logo, 108);
        assert_eq!(fg.dimensions(), (108, 108));
        // 108 * 0.66 = 71 px, offset 18: column 17 empty, column 18 covered.
        assert_eq!(fg.get_pixel(17, 54)[3], 0);
        assert_eq!(fg.get_pixel(54, 18)[3], 255);
        assert_eq!(fg.get_pixel(54, 18 + 71)[3], 0);
    }

    #[test]
    fn test_default_targets_backgrounds() {
        let targets = default_targets(&ProjectLayout::new("/repo"));
        assert_eq!(targets[0].background, Color::from_hex("#08090C").unwrap());
        assert_eq!(targets[1].background, Color::from_hex("#0A0B0F").unwrap());
        assert!(targets[1].source.ends_with("kairos-wallet/public/icons/kairos-token.png"));
    }
}
