//! End-to-end runs of each generator against a temporary repository layout.

use image::{Rgba, RgbaImage};
use kairos_assets::app_icons::{self, AppTarget};
use kairos_assets::banners::{self, BannerJob};
use kairos_assets::certificate::{self, CertificateJob};
use kairos_assets::extension_icons::{self, ExtensionIconJob, ICON_SIZES};
use kairos_assets::favicon::{self, FaviconJob};
use kairos_assets::logo::{self, LogoJob, LOGO_SIZES};
use kairos_assets::pdf_inspect::{self, FormReport};
use kairos_assets::{cws, AssetKind, Color, FontBook, ProjectLayout};
use std::path::Path;

/// Opaque gold disc on a transparent square.
fn write_logo(path: &Path, size: u32) {
    let r = size as f32 / 2.0;
    let img = RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as f32 + 0.5 - r, y as f32 + 0.5 - r);
        if dx * dx + dy * dy <= r * r {
            Rgba([212, 175, 55, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save(path).unwrap();
}

/// Channels within `tol` of each other (resampling and blending round differently).
fn close(a: [u8; 3], b: [u8; 3], tol: u8) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= tol)
}

fn dims(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn app_icons_cover_every_platform_output() {
    let dir = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::new(dir.path());
    write_logo(&layout.wallet_icon_source(), 256);

    let target = AppTarget {
        name: "Kairos Wallet".into(),
        source: layout.wallet_icon_source(),
        app_dir: layout.wallet_app_dir(),
        background: Color::rgb(10, 11, 15),
    };
    let report = app_icons::generate(&[target]).unwrap();
    assert_eq!(report.assets.len(), 2 + 3 * 5 + 11);
    assert_eq!(report.count(AssetKind::Json), 1);

    let app = layout.wallet_app_dir();
    let iconset = app.join("ios/App/App/Assets.xcassets/AppIcon.appiconset");
    assert_eq!(dims(&iconset.join("AppIcon-512@2x.png")), (1024, 1024));
    let ios = image::open(iconset.join("AppIcon-512@2x.png")).unwrap();
    assert_eq!(ios.color(), image::ColorType::Rgb8);

    let res = app.join("android/app/src/main/res");
    assert_eq!(dims(&res.join("mipmap-mdpi/ic_launcher.png")), (48, 48));
    assert_eq!(dims(&res.join("mipmap-xxxhdpi/ic_launcher_round.png")), (192, 192));
    assert_eq!(dims(&res.join("mipmap-hdpi/ic_launcher_foreground.png")), (162, 162));
    assert_eq!(dims(&res.join("drawable-land-xxxhdpi/splash.png")), (1920, 1280));
    assert_eq!(dims(&res.join("drawable/splash.png")), (480, 800));

    let round = image::open(res.join("mipmap-xxxhdpi/ic_launcher_round.png")).unwrap().to_rgba8();
    assert_eq!(round.get_pixel(0, 0)[3], 0);
    assert_eq!(round.get_pixel(96, 96)[3], 255);

    let splash = image::open(res.join("drawable/splash.png")).unwrap().to_rgb8();
    assert_eq!(splash.get_pixel(0, 0).0, [10, 11, 15]);
    assert!(close(splash.get_pixel(240, 400).0, [212, 175, 55], 2));
}

#[test]
fn missing_app_source_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let targets = app_icons::default_targets(&ProjectLayout::new(dir.path()));
    let err = app_icons::generate(&targets).unwrap_err();
    assert!(matches!(err, kairos_assets::AssetError::MissingSource(_)));
}

#[test]
fn extension_icons_replace_svgs_and_mirror() {
    let dir = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::new(dir.path());
    let job = ExtensionIconJob {
        icon_dir: layout.extension_icon_dir(),
        mirror_dir: Some(layout.extension_public_icon_dir()),
    };
    let report = extension_icons::generate(&job, &FontBook::empty()).unwrap();
    assert!(report.warnings.is_empty());

    for size in ICON_SIZES {
        let png = job.icon_dir.join(format!("icon-{size}.png"));
        assert_eq!(dims(&png), (size, size));
        assert!(!job.icon_dir.join(format!("icon-{size}.svg")).exists());
        assert!(layout.extension_public_icon_dir().join(format!("icon-{size}.png")).exists());
    }
}

#[test]
fn raster_logo_produces_size_set() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("logo.png");
    write_logo(&src, 300);
    let job = LogoJob {
        source: src,
        out_dir: dir.path().join("out"),
        scale: logo::DEFAULT_SCALE,
    };
    let report = logo::generate(&job, &FontBook::empty()).unwrap();
    assert_eq!(report.assets.len(), LOGO_SIZES.len() + 1);
    for (size, name) in LOGO_SIZES {
        assert_eq!(dims(&job.out_dir.join(name)), (size, size));
    }
    assert_eq!(dims(&job.out_dir.join(logo::FULL_NAME)), (300, 300));
}

#[test]
fn store_assets_have_listing_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let report = cws::generate(dir.path(), &FontBook::empty()).unwrap();
    assert_eq!(report.assets.len(), 6);
    for asset in cws::assets() {
        assert_eq!(dims(&dir.path().join(asset.file_name)), (asset.width, asset.height));
    }
    let tile = image::open(dir.path().join("small-promo-tile.png")).unwrap();
    assert_eq!(tile.color(), image::ColorType::Rgb8);
}

#[test]
fn banners_render_with_and_without_logo() {
    let dir = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::new(dir.path());
    let job = BannerJob {
        out_dir: layout.promo_dir(),
        logo: layout.banner_logo(),
    };

    let without = banners::generate(&job, &FontBook::empty()).unwrap();
    assert_eq!(without.assets.len(), 3);
    assert_eq!(without.warnings.len(), 1);
    let plain = image::open(job.out_dir.join("kairos-trade-banner.png")).unwrap().to_rgb8();

    write_logo(&layout.banner_logo(), 256);
    let with = banners::generate(&job, &FontBook::empty()).unwrap();
    assert!(with.warnings.is_empty());
    assert_eq!(dims(&job.out_dir.join("kairos-ecosystem-banner-telegram.png")), (1280, 720));
    assert_eq!(dims(&job.out_dir.join("kairos-ecosystem-banner-twitter.png")), (1200, 675));

    // Trading banner logo slot: 48px at (40, 30).
    let logo = image::open(job.out_dir.join("kairos-trade-banner.png")).unwrap().to_rgb8();
    assert!(close(logo.get_pixel(64, 54).0, [212, 175, 55], 2));
    assert_ne!(plain.get_pixel(64, 54), logo.get_pixel(64, 54));
}

#[test]
fn certificate_is_one_letter_page() {
    let dir = tempfile::tempdir().unwrap();
    let job = CertificateJob::new(dir.path());
    let report = certificate::generate(&job).unwrap();
    assert_eq!(report.count(AssetKind::Pdf), 1);

    let path = dir.path().join(certificate::DEFAULT_FILE_NAME);
    let doc = lopdf::Document::load(&path).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    assert_eq!(logo::pdf_page_size(&path).unwrap(), (612.0, 792.0));

    match pdf_inspect::inspect_file(&path).unwrap() {
        FormReport::NoAcroForm { catalog_keys } => assert!(catalog_keys.contains(&"/Pages".to_string())),
        other => panic!("unexpected form report {other:?}"),
    }
}

#[test]
fn favicon_svg_embeds_written_png() {
    let dir = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::new(dir.path());
    write_logo(&layout.favicon_source(), 512);

    let extra = dir.path().join("desktop/website/kairos-icon-32.svg");
    let job = FaviconJob::for_layout(&layout).with_extra_targets([extra.clone()]);
    let (report, stats) = favicon::generate(&job).unwrap();
    assert_eq!(report.count(AssetKind::Svg), 3);

    let png = std::fs::read(&job.png_target).unwrap();
    assert_eq!(png.len(), stats.png_bytes);
    assert_eq!(dims(&job.png_target), (32, 32));

    let canonical = std::fs::read_to_string(&job.svg_targets[0]).unwrap();
    assert_eq!(canonical.len(), stats.svg_bytes);
    assert_eq!(favicon::extract_png(&canonical).unwrap(), png);
    assert_eq!(std::fs::read_to_string(&extra).unwrap(), canonical);
}
