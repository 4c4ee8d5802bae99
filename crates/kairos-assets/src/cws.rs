//! Chrome Web Store listing art: three 1280x800 screenshots and the small,
//! large, and marquee promo tiles.

use crate::canvas::{Canvas, Direction, FontBook, HAnchor, TextStyle, VAnchor};
use crate::color::store::{DARK, DARK2, GOLD, GRAY, WHITE};
use crate::color::Color;
use crate::error::Result;
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use std::path::Path;

const ACCENT: f32 = 3.0;
const MOCKUP_BG: Color = Color::rgb(20, 20, 20);
const MOCKUP_HEADER: Color = Color::rgb(30, 30, 30);
const MOCKUP_MUTED: Color = Color::rgb(40, 40, 40);
const BODY_TEXT: Color = Color::rgb(200, 200, 200);
const SOFT_TEXT: Color = Color::rgb(180, 180, 180);

/// One store asset: file name and the function that draws it.
pub struct StoreAsset {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    draw: fn(&mut Canvas),
}

/// Every listing asset in output order.
pub fn assets() -> [StoreAsset; 6] {
    [
        StoreAsset { file_name: "screenshot-1-main.png", width: 1280, height: 800, draw: screenshot_main },
        StoreAsset { file_name: "screenshot-2-multichain.png", width: 1280, height: 800, draw: screenshot_multichain },
        StoreAsset { file_name: "screenshot-3-security.png", width: 1280, height: 800, draw: screenshot_security },
        StoreAsset { file_name: "small-promo-tile.png", width: 440, height: 280, draw: small_promo },
        StoreAsset { file_name: "large-promo-tile.png", width: 920, height: 680, draw: large_promo },
        StoreAsset { file_name: "marquee-promo-tile.png", width: 1400, height: 560, draw: marquee_promo },
    ]
}

impl StoreAsset {
    pub fn canvas(&self) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        canvas.fill(DARK);
        (self.draw)(&mut canvas);
        canvas
    }
}

/// Render every listing asset into `out_dir`.
pub fn generate(out_dir: &Path, fonts: &FontBook) -> Result<GenerationReport> {
    let mut report = GenerationReport::new("cws");
    for asset in assets() {
        let img = asset.canvas().render(fonts)?;
        let path = out_dir.join(asset.file_name);
        raster::save_png(&raster::to_rgb(&img), &path)?;
        report.push(&path, AssetKind::Png, asset.width, asset.height);
    }
    Ok(report)
}

fn background(c: &mut Canvas) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    c.gradient_rect((0.0, 0.0, w, h), DARK, DARK2, Direction::Vertical);
}

fn gold_bars(c: &mut Canvas, thickness: f32) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    c.rect(0.0, 0.0, w, thickness, GOLD);
    c.rect(0.0, h - thickness, w, h, GOLD);
}

/// Gold ring with a dark core and a gold K.
fn kairos_logo(c: &mut Canvas, cx: f32, cy: f32, radius: f32) {
    c.circle(cx, cy, radius, Some(GOLD), None);
    c.circle(cx, cy, (radius * 0.85).floor(), Some(DARK), None);
    c.text(cx, cy, "K", TextStyle::bold((radius * 1.2).floor()).centered(), GOLD);
}

/// Simplified extension popup.
fn wallet_mockup(c: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    c.rounded_rect(x, y, x + w, y + h, 12.0, Some(MOCKUP_BG), None);
    c.rounded_rect(x, y, x + w, y + h, 12.0, None, Some((GOLD, 2.0)));

    c.rounded_rect(x, y, x + w, y + 50.0, 12.0, Some(MOCKUP_HEADER), None);
    c.rect(x, y + 38.0, x + w, y + 50.0, MOCKUP_HEADER);
    c.text(x + w / 2.0, y + 25.0, "Kairos Wallet", TextStyle::bold(16.0).centered(), GOLD);

    c.text(x + w / 2.0, y + 90.0, "$12,450.00", TextStyle::bold(28.0).centered(), WHITE);
    c.text(x + w / 2.0, y + 115.0, "Total Balance", TextStyle::regular(12.0).centered(), GRAY);

    let tokens = [
        ("KAIROS", "$5,000.00", GOLD),
        ("BNB", "$3,200.00", Color::rgb(243, 186, 47)),
        ("USDT", "$2,150.00", Color::rgb(38, 161, 123)),
        ("ETH", "$2,100.00", Color::rgb(98, 126, 234)),
    ];
    let left_mid = TextStyle::bold(13.0).anchor(HAnchor::Start, VAnchor::Middle);
    let right_mid = TextStyle::regular(12.0).anchor(HAnchor::End, VAnchor::Middle);
    let mut ty = y + 145.0;
    for (name, value, color) in tokens {
        c.ellipse(x + 15.0, ty, x + 35.0, ty + 20.0, Some(color), None);
        let initial = &name[..1];
        c.text(x + 25.0, ty + 10.0, initial, TextStyle::bold(10.0).centered(), DARK);
        c.text(x + 45.0, ty + 4.0, name, left_mid, WHITE);
        c.text(x + w - 15.0, ty + 4.0, value, right_mid, WHITE);
        c.line(x + 15.0, ty + 28.0, x + w - 15.0, ty + 28.0, MOCKUP_MUTED, 1.0);
        ty += 35.0;
    }

    let btn_y = y + h - 55.0;
    let btn_w = ((w - 40.0) / 3.0).floor();
    for (i, action) in ["Send", "Receive", "Swap"].into_iter().enumerate() {
        let highlighted = i == 2;
        let bx = x + 10.0 + i as f32 * (btn_w + 5.0);
        let fill = if highlighted { GOLD } else { MOCKUP_MUTED };
        c.rounded_rect(bx, btn_y, bx + btn_w, btn_y + 35.0, 8.0, Some(fill), None);
        let text = if highlighted { DARK } else { WHITE };
        c.text(bx + (btn_w / 2.0).floor(), btn_y + 17.0, action, TextStyle::bold(11.0).centered(), text);
    }
}

fn screenshot_main(c: &mut Canvas) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    background(c);
    gold_bars(c, ACCENT);

    c.text(80.0, 150.0, "Kairos Wallet", TextStyle::bold(48.0), GOLD);
    c.text(80.0, 220.0, "Chrome Extension", TextStyle::regular(22.0), WHITE);

    let features = [
        "✦  Multi-chain: BSC, Ethereum, Polygon, Base, Arbitrum",
        "✦  Secure vault with AES-256 encryption",
        "✦  EIP-1193 compatible, works with all dApps",
        "✦  Send, receive, and swap tokens seamlessly",
        "✦  Beautiful dark + gold premium design",
    ];
    for (i, feat) in features.iter().enumerate() {
        c.text(80.0, 290.0 + i as f32 * 36.0, feat, TextStyle::regular(18.0), BODY_TEXT);
    }

    wallet_mockup(c, w - 400.0, 100.0, 320.0, 580.0);

    kairos_logo(c, 120.0, h - 80.0, 30.0);
    let brand = TextStyle::bold(16.0).anchor(HAnchor::Start, VAnchor::Middle);
    c.text(160.0, h - 80.0, "Kairos 777 Inc", brand, GRAY);
}

fn screenshot_multichain(c: &mut Canvas) {
    let w = c.width() as f32;
    background(c);
    gold_bars(c, ACCENT);

    c.text(w / 2.0, 80.0, "Multi-Chain Support", TextStyle::bold(44.0).centered(), GOLD);
    c.text(w / 2.0, 130.0, "One wallet for all your chains", TextStyle::regular(22.0).centered(), WHITE);

    let chains = [
        ("BSC", Color::rgb(0xF3, 0xBA, 0x2F), "BNB Smart Chain"),
        ("ETH", Color::rgb(0x62, 0x7E, 0xEA), "Ethereum"),
        ("MATIC", Color::rgb(0x82, 0x47, 0xE5), "Polygon"),
        ("BASE", Color::rgb(0x00, 0x52, 0xFF), "Base"),
        ("ARB", Color::rgb(0x28, 0xA0, 0xF0), "Arbitrum"),
        ("AVAX", Color::rgb(0xE8, 0x41, 0x42), "Avalanche"),
    ];
    let (card_w, card_h, gap) = (170.0, 200.0, 20.0);
    let total_w = chains.len() as f32 * card_w + (chains.len() - 1) as f32 * gap;
    let start_x = ((w - total_w) / 2.0).floor();
    let card_y = 220.0;

    for (i, (symbol, color, name)) in chains.iter().enumerate() {
        let cx = start_x + i as f32 * (card_w + gap);
        let mid = cx + card_w / 2.0;
        c.rounded_rect(cx, card_y, cx + card_w, card_y + card_h, 16.0, Some(Color::rgb(25, 25, 25)), None);
        c.rounded_rect(cx, card_y, cx + card_w, card_y + card_h, 16.0, None, Some((*color, 2.0)));
        c.ellipse(mid - 30.0, card_y + 30.0, mid + 30.0, card_y + 90.0, Some(*color), None);
        let short: String = symbol.chars().take(3).collect();
        c.text(mid, card_y + 60.0, &short, TextStyle::bold(18.0).centered(), WHITE);
        c.text(mid, card_y + 120.0, name, TextStyle::bold(14.0).centered(), WHITE);
        c.text(mid, card_y + 160.0, "✓ Active", TextStyle::regular(20.0).centered(), Color::rgb(100, 200, 100));
    }

    c.text(
        w / 2.0,
        520.0,
        "Switch chains instantly. All networks ready.",
        TextStyle::regular(18.0).centered(),
        GRAY,
    );
    wallet_mockup(c, w / 2.0 - 160.0, 560.0, 320.0, 200.0);
}

fn screenshot_security(c: &mut Canvas) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    background(c);
    gold_bars(c, ACCENT);

    c.text(w / 2.0, 80.0, "Bank-Grade Security", TextStyle::bold(44.0).centered(), GOLD);
    c.text(
        w / 2.0,
        130.0,
        "Your keys, your crypto, always encrypted",
        TextStyle::regular(22.0).centered(),
        WHITE,
    );

    let features = [
        ("🔐", "AES-256-GCM", ["Military-grade encryption", "for your private keys"]),
        ("🛡️", "Auto-Lock", ["15-minute auto-lock", "protects your wallet"]),
        ("🔑", "Non-Custodial", ["Only you control", "your private keys"]),
        ("⚡", "Secure Signing", ["Transaction approval", "with visual confirmation"]),
    ];
    let (card_w, card_h, gap) = (250.0, 280.0, 30.0);
    let total_w = features.len() as f32 * card_w + (features.len() - 1) as f32 * gap;
    let start_x = ((w - total_w) / 2.0).floor();
    let card_y = 220.0;

    for (i, (icon, title, desc)) in features.iter().enumerate() {
        let cx = start_x + i as f32 * (card_w + gap);
        let mid = cx + card_w / 2.0;
        c.rounded_rect(cx, card_y, cx + card_w, card_y + card_h, 16.0, Some(MOCKUP_BG), None);
        c.rounded_rect(cx, card_y, cx + card_w, card_y + card_h, 16.0, None, Some((GOLD, 1.0)));
        c.text(mid, card_y + 50.0, icon, TextStyle::regular(48.0).centered(), WHITE);
        c.text(mid, card_y + 110.0, title, TextStyle::bold(20.0).centered(), GOLD);
        for (j, line) in desc.iter().enumerate() {
            c.text(mid, card_y + 150.0 + j as f32 * 22.0, line, TextStyle::regular(14.0).centered(), SOFT_TEXT);
        }
    }

    kairos_logo(c, w / 2.0, h - 100.0, 35.0);
}

fn small_promo(c: &mut Canvas) {
    let w = c.width() as f32;
    background(c);
    gold_bars(c, 4.0);

    kairos_logo(c, w / 2.0, 85.0, 40.0);
    c.text(w / 2.0, 150.0, "Kairos Wallet", TextStyle::bold(28.0).centered(), GOLD);
    c.text(w / 2.0, 185.0, "Multi-Chain Crypto Wallet", TextStyle::regular(16.0).centered(), WHITE);
    c.text(
        w / 2.0,
        220.0,
        "BSC • Ethereum • Polygon • Base • Arbitrum • Avalanche",
        TextStyle::regular(12.0).centered(),
        GRAY,
    );
}

fn large_promo(c: &mut Canvas) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    background(c);
    gold_bars(c, ACCENT);

    kairos_logo(c, 100.0, 120.0, 45.0);

    let left = |size: f32, bold: bool| {
        let style = if bold { TextStyle::bold(size) } else { TextStyle::regular(size) };
        style.anchor(HAnchor::Start, VAnchor::Middle)
    };
    c.text(80.0, 200.0, "Kairos", left(42.0, true), GOLD);
    c.text(80.0, 250.0, "Wallet", left(42.0, true), WHITE);
    c.text(80.0, 310.0, "The premium multi-chain", left(20.0, false), SOFT_TEXT);
    c.text(80.0, 340.0, "crypto wallet extension", left(20.0, false), SOFT_TEXT);

    let features = [
        "✦  6 chains supported",
        "✦  AES-256 encryption",
        "✦  EIP-1193 compatible",
        "✦  Premium dark + gold UI",
    ];
    for (i, feat) in features.iter().enumerate() {
        c.text(80.0, 400.0 + i as f32 * 32.0, feat, left(16.0, false), GOLD);
    }

    c.text(80.0, h - 50.0, "By Kairos 777 Inc", left(14.0, false), GRAY);
    wallet_mockup(c, w - 380.0, 50.0, 320.0, 580.0);
}

fn marquee_promo(c: &mut Canvas) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    background(c);
    gold_bars(c, 4.0);

    let mid_y = (h / 2.0).floor();
    kairos_logo(c, 200.0, mid_y, 60.0);

    let left = |style: TextStyle| style.anchor(HAnchor::Start, VAnchor::Middle);
    c.text(320.0, mid_y - 50.0, "Kairos Wallet", left(TextStyle::bold(56.0)), GOLD);
    c.text(
        320.0,
        mid_y + 10.0,
        "The Premium Multi-Chain Crypto Wallet",
        left(TextStyle::regular(28.0)),
        WHITE,
    );
    c.text(
        320.0,
        mid_y + 60.0,
        "BSC  •  Ethereum  •  Polygon  •  Base  •  Arbitrum  •  Avalanche",
        left(TextStyle::regular(18.0)),
        GRAY,
    );

    wallet_mockup(c, w - 380.0, 40.0, 300.0, 480.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_sizes() {
        let sizes: Vec<_> = assets().iter().map(|a| (a.file_name, a.width, a.height)).collect();
        assert_eq!(sizes[0], ("screenshot-1-main.png", 1280, 800));
        assert_eq!(sizes[3], ("small-promo-tile.png", 440, 280));
        assert_eq!(sizes[4], ("large-promo-tile.png", 920, 680));
        assert_eq!(sizes[5], ("marquee-promo-tile.png", 1400, 560));
    }

    #[test]
    fn test_small_tile_has_gold_bars() {
        let tile = &assets()[3];
        let img = tile.canvas().render(&FontBook::empty()).unwrap();
        assert_eq!(img.dimensions(), (440, 280));
        assert_eq!(img.get_pixel(10, 1), &image::Rgba([212, 175, 55, 255]));
        assert_eq!(img.get_pixel(10, 278), &image::Rgba([212, 175, 55, 255]));
    }

    #[test]
    fn test_every_canvas_parses() {
        for asset in assets() {
            let svg = asset.canvas().to_svg();
            assert!(resvg::usvg::Tree::from_str(&svg, &resvg::usvg::Options::default()).is_ok(), "{}", asset.file_name);
        }
    }
}
