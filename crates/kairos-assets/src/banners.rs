//! Social promo banners for X and Telegram.
//!
//! Decorations that look random (network graphs, candlesticks, the trend line)
//! come from a seeded [`StdRng`], so a given build always produces the same
//! pixels.

use crate::canvas::{Canvas, Direction, FontBook, HAnchor, TextStyle, VAnchor};
use crate::color::{Color, BLUE, BLUE_L, DARK, DARK2, GOLD, GRAY, GREEN, RED, WHITE};
use crate::error::Result;
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;
use std::path::PathBuf;

/// Seed used at the start of every banner.
pub const BANNER_SEED: u64 = 42;
/// Seed the trading banner switches to before drawing its candles.
pub const TRADING_CANDLE_SEED: u64 = 77;

const CANDLE_START_PRICE: f32 = 96_000.0;
const CANDLE_BASE_PRICE: f32 = 93_000.0;
const CANDLE_PRICE_RANGE: f32 = 6_000.0;
const CARD_FILL: Color = Color::rgba(12, 12, 22, 240);

/// A circular logo to composite after rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSlot {
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

/// One banner: output name, size, and drawing routine.
pub struct Banner {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    draw: fn(&mut Canvas, &mut StdRng) -> Vec<LogoSlot>,
}

pub fn banners() -> [Banner; 3] {
    [
        Banner {
            file_name: "kairos-ecosystem-banner-twitter.png",
            width: 1200,
            height: 675,
            draw: ecosystem_banner,
        },
        Banner {
            file_name: "kairos-ecosystem-banner-telegram.png",
            width: 1280,
            height: 720,
            draw: telegram_banner,
        },
        Banner {
            file_name: "kairos-trade-banner.png",
            width: 1200,
            height: 675,
            draw: trading_banner,
        },
    ]
}

impl Banner {
    /// Vector layer plus the logo slots to fill after rendering.
    pub fn compose(&self) -> (Canvas, Vec<LogoSlot>) {
        let mut canvas = Canvas::new(self.width, self.height);
        canvas.fill(DARK);
        let mut rng = StdRng::seed_from_u64(BANNER_SEED);
        let slots = (self.draw)(&mut canvas, &mut rng);
        (canvas, slots)
    }

    /// Render, composite the logo if one is available, drop alpha.
    pub fn render(&self, fonts: &FontBook, logo: Option<&RgbaImage>) -> Result<image::RgbImage> {
        let (canvas, slots) = self.compose();
        let mut img = canvas.render(fonts)?;
        if let Some(logo) = logo {
            for slot in slots {
                let round = raster::circle_mask(&raster::resize_square(logo, slot.size));
                image::imageops::overlay(&mut img, &round, slot.x, slot.y);
            }
        }
        Ok(raster::to_rgb(&img))
    }
}

#[derive(Debug, Clone)]
pub struct BannerJob {
    pub out_dir: PathBuf,
    pub logo: PathBuf,
}

/// Render all three banners. A missing or unreadable logo is a warning, not a failure.
pub fn generate(job: &BannerJob, fonts: &FontBook) -> Result<GenerationReport> {
    let mut report = GenerationReport::new("banners");
    let logo = match raster::load_rgba(&job.logo) {
        Ok(img) => Some(img),
        Err(e) => {
            report.warn(format!("banner logo skipped: {e}"));
            None
        }
    };

    for banner in banners() {
        let img = banner.render(fonts, logo.as_ref())?;
        let path = job.out_dir.join(banner.file_name);
        raster::save_png(&img, &path)?;
        report.push(&path, AssetKind::Png, banner.width, banner.height);
    }
    Ok(report)
}

// ── Decorations ─────────────────────────────────────────────────────────

/// Faint square grid. A zero spacing draws nothing.
pub fn draw_grid(c: &mut Canvas, spacing: u32, color: Color) {
    if spacing == 0 {
        return;
    }
    let (w, h) = (c.width(), c.height());
    let line = color.with_alpha(8);
    for x in (0..w).step_by(spacing as usize) {
        c.line(x as f32, 0.0, x as f32, h as f32, line, 1.0);
    }
    for y in (0..h).step_by(spacing as usize) {
        c.line(0.0, y as f32, w as f32, y as f32, line, 1.0);
    }
}

/// Ring of nodes with a random subset of chords between them.
pub fn draw_node_network(
    c: &mut Canvas,
    rng: &mut StdRng,
    (cx, cy): (f32, f32),
    radius: f32,
    nodes: usize,
    color: Color,
) {
    let points: Vec<(f32, f32)> = (0..nodes)
        .map(|i| {
            let angle = (2.0 * PI / nodes as f32) * i as f32 - PI / 2.0;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();

    for i in 0..nodes {
        for j in i + 1..nodes {
            if rng.gen::<f64>() > 0.3 {
                let ((x0, y0), (x1, y1)) = (points[i], points[j]);
                c.line(x0, y0, x1, y1, color.with_alpha(30), 1.0);
            }
        }
    }

    for (px, py) in points {
        c.circle(px, py, 4.0, Some(color.with_alpha(120)), None);
        c.circle(px, py, 2.0, Some(WHITE), None);
    }
}

/// One OHLC bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub open: f32,
    pub close: f32,
    pub high: f32,
    pub low: f32,
}

impl Candle {
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Random walk of `count` candles, each opening at the previous close.
pub fn candle_series(rng: &mut StdRng, count: usize) -> Vec<Candle> {
    let mut price = CANDLE_START_PRICE;
    (0..count)
        .map(|_| {
            let change: f32 = rng.gen_range(-800.0..900.0);
            let open = price;
            let close = price + change;
            let high = open.max(close) + rng.gen_range(100.0..500.0);
            let low = open.min(close) - rng.gen_range(100.0..500.0);
            price = close;
            Candle { open, close, high, low }
        })
        .collect()
}

/// Candlestick chart in the box at (x0, y0) of size w x h.
pub fn draw_candles(c: &mut Canvas, rng: &mut StdRng, (x0, y0): (f32, f32), w: f32, h: f32, count: usize) {
    let gap = w / count as f32;
    let body_w = gap * 0.6;
    let to_y = |p: f32| y0 + h - ((p - CANDLE_BASE_PRICE) / CANDLE_PRICE_RANGE * h);

    for (i, candle) in candle_series(rng, count).into_iter().enumerate() {
        let x = x0 + i as f32 * gap + gap * 0.2;
        let color = if candle.is_up() { GREEN } else { RED };
        let wick_x = x + body_w / 2.0;
        c.line(wick_x, to_y(candle.high), wick_x, to_y(candle.low), color.with_alpha(180), 1.0);

        let top = to_y(candle.open.max(candle.close));
        let mut bottom = to_y(candle.open.min(candle.close));
        if bottom - top < 2.0 {
            bottom = top + 2.0;
        }
        c.rect(x, top, x + body_w, bottom, color.with_alpha(220));
    }
}

/// Noisy uptrend with a fading area fill and a live-price dot at the end.
pub fn draw_chart_line(
    c: &mut Canvas,
    rng: &mut StdRng,
    (x0, y0): (f32, f32),
    w: f32,
    h: f32,
    color: Color,
    points: usize,
) -> Vec<(f32, f32)> {
    if points < 2 {
        return Vec::new();
    }
    let step = w / (points - 1) as f32;
    let jitter = h.abs() * 0.08;
    let pts: Vec<(f32, f32)> = (0..points)
        .map(|i| {
            let progress = i as f32 / (points - 1) as f32;
            let base = y0 + h * (1.0 - progress * 0.7);
            let noise = if jitter > 0.0 { rng.gen_range(-jitter..jitter) } else { 0.0 };
            (x0 + i as f32 * step, base + noise)
        })
        .collect();

    let mut area = pts.clone();
    area.push((x0 + w, y0 + h));
    area.push((x0, y0 + h));
    c.gradient_polygon(&area, color.with_alpha(40), color.with_alpha(0));

    c.polyline(&pts, color.with_alpha(200), 3.0);

    if let Some(&(lx, ly)) = pts.last() {
        c.circle(lx, ly, 5.0, Some(GREEN), None);
        c.circle(lx, ly, 9.0, None, Some((GREEN.with_alpha(100), 2.0)));
    }
    pts
}

fn frame(c: &mut Canvas) {
    let (w, h) = (c.width() as f32, c.height() as f32);
    c.rounded_rect(2.0, 2.0, w - 3.0, h - 3.0, 0.0, None, Some((BLUE.with_alpha(25), 2.0)));
}

fn pill(c: &mut Canvas, (x0, y0, x1, y1): (f32, f32, f32, f32), radius: f32, color: Color, fill_alpha: u8, line_alpha: u8) {
    c.rounded_rect(
        x0,
        y0,
        x1,
        y1,
        radius,
        Some(color.with_alpha(fill_alpha)),
        Some((color.with_alpha(line_alpha), 1.0)),
    );
}

fn top_center(style: TextStyle) -> TextStyle {
    style.anchor(HAnchor::Middle, VAnchor::Top)
}

fn top_right(style: TextStyle) -> TextStyle {
    style.anchor(HAnchor::End, VAnchor::Top)
}

// ── Banners ─────────────────────────────────────────────────────────────

fn ecosystem_banner(c: &mut Canvas, rng: &mut StdRng) -> Vec<LogoSlot> {
    let (w, h) = (c.width() as f32, c.height() as f32);
    c.gradient_rect((0.0, 0.0, w, h), DARK, DARK2, Direction::Vertical);
    draw_grid(c, 80, BLUE);
    c.radial_glow(350.0, 300.0, 400.0, BLUE, 0.08);
    c.radial_glow(900.0, 200.0, 300.0, BLUE_L, 0.05);

    draw_node_network(c, rng, (100.0, 120.0), 60.0, 6, BLUE);
    draw_node_network(c, rng, (1100.0, 550.0), 50.0, 5, BLUE_L);
    draw_node_network(c, rng, (1050.0, 150.0), 40.0, 4, GOLD);

    // Headline column
    let badge_y = 120.0;
    pill(c, (60.0, badge_y, 320.0, badge_y + 32.0), 16.0, BLUE, 20, 60);
    c.ellipse(74.0, badge_y + 11.0, 82.0, badge_y + 19.0, Some(GREEN), None);
    c.text(90.0, badge_y + 6.0, "ECOSYSTEM LIVE", TextStyle::bold(13.0), BLUE_L);

    let title = TextStyle::bold(52.0);
    c.text(62.0, 172.0, "The Future of", title, WHITE);
    c.text(62.0, 232.0, "Decentralized", title, BLUE_L);
    c.text(62.0, 292.0, "Trading", title, BLUE);

    let sub = TextStyle::regular(17.0);
    c.text(62.0, 360.0, "Algorithmic bots  ·  150× Leverage  ·  33+ Pairs", sub, GRAY);
    c.text(62.0, 385.0, "USD Stablecoin  ·  Multi-Chain Wallet", sub, GRAY);
    c.text(62.0, 420.0, "kairos-777.com", TextStyle::bold(15.0), BLUE_L);

    // Stats bar
    let bar_y = 490.0;
    c.rect(0.0, bar_y, w, bar_y + 1.0, BLUE.with_alpha(30));
    c.rect(0.0, bar_y + 1.0, w, h, DARK2.with_alpha(200));
    let stats = [
        ("33+", "TRADING PAIRS", BLUE_L),
        ("150×", "MAX LEVERAGE", WHITE),
        ("$1.00", "KAIROS PEG", GOLD),
        ("4", "BLOCKCHAINS", GREEN),
        ("10", "BROKERS", BLUE_L),
    ];
    let stat_w = w / stats.len() as f32;
    for (i, (value, label, color)) in stats.into_iter().enumerate() {
        let sx = i as f32 * stat_w + stat_w / 2.0;
        c.text(sx, bar_y + 30.0, value, top_center(TextStyle::bold(36.0)), color);
        c.text(sx, bar_y + 75.0, label, top_center(TextStyle::bold(11.0)), GRAY);
    }

    // Chart card
    let (cx0, cy0, cw, ch) = (620.0, 120.0, 520.0, 340.0);
    c.rounded_rect(
        cx0,
        cy0,
        cx0 + cw,
        cy0 + ch,
        20.0,
        Some(Color::rgba(10, 10, 20, 220)),
        Some((BLUE.with_alpha(40), 1.0)),
    );
    c.text(cx0 + 24.0, cy0 + 16.0, "BTC / USDT", TextStyle::bold(18.0), WHITE);
    c.text(cx0 + cw - 24.0, cy0 + 14.0, "$96,482", top_right(TextStyle::bold(22.0)), GREEN);
    c.text(cx0 + cw - 24.0, cy0 + 40.0, "+3.24%", top_right(TextStyle::bold(13.0)), GREEN);

    *rng = StdRng::seed_from_u64(BANNER_SEED);
    draw_candles(c, rng, (cx0 + 20.0, cy0 + 65.0), cw - 40.0, 150.0, 28);

    let bot_y = cy0 + 240.0;
    pill(c, (cx0 + 16.0, bot_y, cx0 + cw - 16.0, bot_y + 80.0), 12.0, BLUE, 15, 40);
    c.ellipse(cx0 + 28.0, bot_y + 12.0, cx0 + 36.0, bot_y + 20.0, Some(GREEN), None);
    c.text(cx0 + 44.0, bot_y + 8.0, "EMA Cross Bot", TextStyle::bold(14.0), WHITE);
    c.rounded_rect(
        cx0 + cw - 100.0,
        bot_y + 8.0,
        cx0 + cw - 28.0,
        bot_y + 28.0,
        6.0,
        Some(GREEN.with_alpha(30)),
        None,
    );
    c.text(cx0 + cw - 64.0, bot_y + 10.0, "Running", top_center(TextStyle::regular(12.0)), GREEN);

    let bot_stats = [("Trades", "147", WHITE), ("Win Rate", "68.4%", GREEN), ("P&L", "+$12,840", GREEN)];
    for (i, (label, value, color)) in bot_stats.into_iter().enumerate() {
        let bx = cx0 + 28.0 + i as f32 * 160.0;
        c.text(bx, bot_y + 40.0, label, TextStyle::regular(10.0), GRAY);
        c.text(bx, bot_y + 54.0, value, TextStyle::bold(16.0), color);
    }

    // Brand row
    c.text(134.0, 598.0, "KAIROS 777", TextStyle::bold(20.0), WHITE);
    c.text(134.0, 622.0, "\"In God We Trust\"", TextStyle::regular(12.0), GOLD.with_alpha(150));

    for (i, (label, color)) in [("TRADE", BLUE), ("COIN", GOLD), ("WALLET", GREEN)].into_iter().enumerate() {
        let px = 360.0 + i as f32 * 110.0;
        pill(c, (px, 600.0, px + 95.0, 625.0), 8.0, color, 25, 80);
        c.text(px + 47.0, 610.0, label, top_center(TextStyle::bold(12.0)), color);
    }

    frame(c);
    vec![LogoSlot { x: 62, y: 580, size: 64 }]
}

struct ProductCard {
    title: &'static str,
    color: Color,
    features: [&'static str; 5],
}

const PRODUCT_CARDS: [ProductCard; 3] = [
    ProductCard {
        title: "Kairos Trade",
        color: BLUE,
        features: [
            "Algorithmic Trading Bots",
            "Up to 150× Leverage",
            "33+ Crypto Pairs",
            "10 Broker Connections",
            "On-Chain via Arbitrum",
        ],
    },
    ProductCard {
        title: "Kairos Coin",
        color: GOLD,
        features: [
            "1 KAIROS = 1 USD",
            "0.08% Fee (60% Cheaper)",
            "Gasless Approvals",
            "4 Blockchains",
            "Verified on BscScan",
        ],
    },
    ProductCard {
        title: "Kairos Wallet",
        color: GREEN,
        features: [
            "6 Blockchains Supported",
            "Built-in Token Swaps",
            "WalletConnect v2",
            "NFT Gallery",
            "Installable PWA",
        ],
    },
];

fn telegram_banner(c: &mut Canvas, rng: &mut StdRng) -> Vec<LogoSlot> {
    let (w, h) = (c.width() as f32, c.height() as f32);
    c.gradient_rect((0.0, 0.0, w, h), DARK, Color::rgb(8, 8, 20), Direction::Vertical);
    draw_grid(c, 80, BLUE);
    c.radial_glow(w / 2.0, (h / 3.0).floor(), 500.0, BLUE, 0.1);
    c.radial_glow(200.0, 500.0, 300.0, GOLD, 0.04);
    c.radial_glow(1080.0, 500.0, 300.0, GREEN, 0.04);

    draw_node_network(c, rng, (120.0, 100.0), 70.0, 7, BLUE);
    draw_node_network(c, rng, (1160.0, 100.0), 60.0, 6, BLUE_L);

    let mid = w / 2.0;
    c.text(mid, 142.0, "KAIROS 777", top_center(TextStyle::bold(18.0)), WHITE);
    let title = top_center(TextStyle::bold(48.0));
    c.text(mid, 185.0, "The Complete Decentralized", title, WHITE);
    c.text(mid, 240.0, "Financial Ecosystem", title, BLUE_L);
    c.text(
        mid,
        300.0,
        "Trade  ·  Coin  ·  Wallet — All Under One Roof",
        top_center(TextStyle::regular(18.0)),
        GRAY,
    );

    let (card_w, card_h, gap) = (350.0, 280.0, 40.0);
    let total = card_w * 3.0 + gap * 2.0;
    let start_x = ((w - total) / 2.0).floor();
    let card_y = 350.0;

    for (i, card) in PRODUCT_CARDS.iter().enumerate() {
        let cx = start_x + i as f32 * (card_w + gap);
        c.rounded_rect(
            cx,
            card_y,
            cx + card_w,
            card_y + card_h,
            16.0,
            Some(CARD_FILL),
            Some((card.color.with_alpha(60), 1.0)),
        );
        c.rounded_rect(cx, card_y, cx + card_w, card_y + 4.0, 2.0, Some(card.color), None);
        c.text(cx + card_w / 2.0, card_y + 30.0, card.title, top_center(TextStyle::bold(20.0)), WHITE);

        for (j, feature) in card.features.iter().enumerate() {
            let fy = card_y + 65.0 + j as f32 * 32.0;
            c.text(cx + 24.0, fy, "✓", TextStyle::bold(12.0), GREEN);
            c.text(cx + 44.0, fy, feature, TextStyle::regular(13.0), GRAY);
        }
    }

    c.text(mid, h - 55.0, "kairos-777.com", top_center(TextStyle::bold(16.0)), BLUE_L);
    c.text(
        mid,
        h - 30.0,
        "\"In God We Trust\"  ·  Kairos 777 Inc.",
        top_center(TextStyle::regular(13.0)),
        GOLD.with_alpha(130),
    );

    frame(c);
    vec![LogoSlot {
        x: (w / 2.0) as i64 - 40,
        y: 50,
        size: 80,
    }]
}

fn trading_banner(c: &mut Canvas, rng: &mut StdRng) -> Vec<LogoSlot> {
    let (w, h) = (c.width() as f32, c.height() as f32);
    c.gradient_rect((0.0, 0.0, w, h), DARK, Color::rgb(5, 5, 15), Direction::Vertical);
    draw_grid(c, 60, BLUE);
    c.radial_glow(600.0, 350.0, 500.0, BLUE, 0.08);

    let (chart_y, chart_h) = (140.0, 300.0);
    c.rounded_rect(
        40.0,
        chart_y,
        w - 40.0,
        chart_y + chart_h,
        20.0,
        Some(Color::rgba(8, 8, 18, 200)),
        Some((BLUE.with_alpha(30), 1.0)),
    );
    c.text(70.0, chart_y + 18.0, "BTC / USDT", TextStyle::bold(24.0), WHITE);
    c.text(w - 70.0, chart_y + 16.0, "$96,482.30", top_right(TextStyle::bold(28.0)), GREEN);
    c.text(w - 70.0, chart_y + 50.0, "▲ +3.24% (24h)", top_right(TextStyle::bold(14.0)), GREEN);
    c.line(60.0, chart_y + 75.0, w - 60.0, chart_y + 75.0, BLUE.with_alpha(20), 1.0);

    // Trend shading behind the candles
    draw_chart_line(c, rng, (60.0, chart_y + 85.0), w - 120.0, 190.0, BLUE, 20);
    *rng = StdRng::seed_from_u64(TRADING_CANDLE_SEED);
    draw_candles(c, rng, (60.0, chart_y + 85.0), w - 120.0, 190.0, 40);

    c.text(100.0, 42.0, "KAIROS TRADE", TextStyle::bold(22.0), WHITE);
    pill(c, (260.0, 42.0, 340.0, 64.0), 10.0, GREEN, 25, 80);
    c.ellipse(270.0, 49.0, 278.0, 57.0, Some(GREEN), None);
    c.text(284.0, 46.0, "LIVE", TextStyle::bold(13.0), GREEN);

    let bots = [
        ("EMA Cross Bot", "BTC/USDT", "Running", "+$12,840", "68.4%", GREEN),
        ("RSI Momentum", "ETH/USDT", "Running", "+$4,290", "72.1%", GREEN),
        ("MACD Divergence", "SOL/USDT", "Paused", "+$1,850", "61.8%", GOLD),
    ];
    let bot_y = 470.0;
    let bot_w = (w - 120.0) / 3.0;
    for (i, (name, pair, status, pnl, win_rate, accent)) in bots.into_iter().enumerate() {
        let bx = 40.0 + i as f32 * (bot_w + 20.0);
        c.rounded_rect(
            bx,
            bot_y,
            bx + bot_w,
            bot_y + 100.0,
            14.0,
            Some(Color::rgba(12, 12, 22, 230)),
            Some((accent.with_alpha(40), 1.0)),
        );
        c.rounded_rect(bx, bot_y, bx + bot_w, bot_y + 3.0, 2.0, Some(accent), None);
        c.ellipse(bx + 14.0, bot_y + 16.0, bx + 22.0, bot_y + 24.0, Some(accent), None);
        c.text(bx + 30.0, bot_y + 12.0, name, TextStyle::bold(15.0), WHITE);
        c.text(bx + bot_w - 14.0, bot_y + 14.0, pair, top_right(TextStyle::regular(12.0)), GRAY);

        for (j, (label, value)) in [("P&L", pnl), ("Win Rate", win_rate), ("Status", status)]
            .into_iter()
            .enumerate()
        {
            let sx = bx + 14.0 + j as f32 * (bot_w / 3.0);
            c.text(sx, bot_y + 50.0, label, TextStyle::regular(10.0), GRAY);
            c.text(sx, bot_y + 64.0, value, TextStyle::bold(14.0), accent);
        }
    }

    c.line(0.0, h - 60.0, w, h - 60.0, BLUE.with_alpha(20), 1.0);
    let foot = TextStyle::regular(12.0);
    c.text(40.0, h - 42.0, "kairos-777.com", TextStyle::bold(14.0), BLUE_L);
    c.text(
        w / 2.0,
        h - 42.0,
        "Algorithmic Trading  ·  150× Leverage  ·  33+ Pairs  ·  10 Brokers",
        foot,
        GRAY,
    );
    c.text(w - 40.0, h - 42.0, "\"In God We Trust\"", top_right(foot), GOLD.with_alpha(120));

    frame(c);
    vec![LogoSlot { x: 40, y: 30, size: 48 }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candles_are_continuous_and_bracketed() {
        let mut rng = StdRng::seed_from_u64(BANNER_SEED);
        let candles = candle_series(&mut rng, 28);
        assert_eq!(candles.len(), 28);
        assert_eq!(candles[0].open, CANDLE_START_PRICE);
        for pair in candles.windows(2) {
            assert_eq!(pair[0].close, pair[1].open);
        }
        for c in &candles {
            assert!(c.high >= c.open.max(c.close) + 100.0);
            assert!(c.low <= c.open.min(c.close) - 100.0);
        }
    }

    #[test]
    fn test_same_seed_same_candles() {
        let a = candle_series(&mut StdRng::seed_from_u64(7), 10);
        let b = candle_series(&mut StdRng::seed_from_u64(7), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_is_deterministic() {
        for banner in banners() {
            let (first, slots) = banner.compose();
            let (second, _) = banner.compose();
            assert_eq!(first.to_svg(), second.to_svg(), "{}", banner.file_name);
            assert_eq!(slots.len(), 1);
        }
    }

    #[test]
    fn test_chart_line_trends_upward() {
        let mut canvas = Canvas::new(200, 100);
        let mut rng = StdRng::seed_from_u64(BANNER_SEED);
        let pts = draw_chart_line(&mut canvas, &mut rng, (0.0, 0.0), 200.0, 100.0, BLUE, 20);
        assert_eq!(pts.len(), 20);
        assert_eq!(pts[0].0, 0.0);
        assert!((pts[19].0 - 200.0).abs() < 1e-3);
        // Start sits near the bottom, end near 30% height; noise is +/- 8.
        assert!(pts[0].1 > pts[19].1);
    }

    #[test]
    fn test_banner_without_logo_renders() {
        let banner = &banners()[2];
        let img = banner.render(&FontBook::empty(), None).unwrap();
        assert_eq!(img.dimensions(), (1200, 675));
    }

    #[test]
    fn test_degenerate_decorations_draw_nothing() {
        let mut canvas = Canvas::new(120, 80);
        let before = canvas.to_svg();
        let mut rng = StdRng::seed_from_u64(BANNER_SEED);
        draw_grid(&mut canvas, 0, BLUE);
        assert!(draw_chart_line(&mut canvas, &mut rng, (0.0, 0.0), 100.0, 50.0, BLUE, 0).is_empty());
        assert!(draw_chart_line(&mut canvas, &mut rng, (0.0, 0.0), 100.0, 50.0, BLUE, 1).is_empty());
        assert_eq!(canvas.to_svg(), before);

        let flat = draw_chart_line(&mut canvas, &mut rng, (0.0, 10.0), 100.0, 0.0, BLUE, 3);
        assert!(flat.iter().all(|&(_, y)| y == 10.0));
    }
}
