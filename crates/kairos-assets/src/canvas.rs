//! Vector drawing surface.
//!
//! A [`Canvas`] accumulates SVG elements at a fixed pixel size and is rasterized
//! through `resvg`. Coordinates follow raster conventions: origin at the top
//! left, boxes given as `(x0, y0, x1, y1)` corners. Every color carries alpha and
//! drawing blends over what is already there.

use crate::color::Color;
use crate::error::{AssetError, Result};
use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{self, Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Families tried in order for the generic `sans-serif` family.
const PREFERRED_SANS: &[&str] = &[
    "Helvetica",
    "SF Pro",
    "Arial",
    "Inter",
    "DejaVu Sans",
    "Liberation Sans",
];

/// Family list written into every text element.
pub const FONT_STACK: &str = "Helvetica, 'SF Pro', Arial, Inter, 'DejaVu Sans', sans-serif";

/// Shared font database used for every render.
#[derive(Clone)]
pub struct FontBook {
    db: Arc<fontdb::Database>,
}

impl FontBook {
    /// System fonts plus any extra directories.
    pub fn load(extra_dirs: &[PathBuf]) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        for dir in extra_dirs {
            db.load_fonts_dir(dir);
        }
        Self::from_database(db)
    }

    /// A font book with no faces. Text renders as nothing.
    pub fn empty() -> Self {
        Self::from_database(fontdb::Database::new())
    }

    fn from_database(mut db: fontdb::Database) -> Self {
        if db.is_empty() {
            warn!("no fonts available, text will be omitted from rendered assets");
        } else if let Some(family) = PREFERRED_SANS.iter().find(|f| has_family(&db, f)) {
            debug!(family, faces = db.len(), "sans-serif family selected");
            db.set_sans_serif_family(*family);
        }
        Self { db: Arc::new(db) }
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    fn options(&self) -> usvg::Options<'static> {
        let mut opt = usvg::Options::default();
        opt.fontdb = self.db.clone();
        opt.font_family = "sans-serif".to_string();
        opt
    }
}

fn has_family(db: &fontdb::Database, family: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(name, _)| name == family))
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAnchor {
    Start,
    Middle,
    End,
}

/// Vertical text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Top,
    Middle,
    Baseline,
}

/// Font and anchoring for a text run.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub weight: u16,
    pub italic: bool,
    pub h: HAnchor,
    pub v: VAnchor,
}

impl TextStyle {
    /// Regular weight, anchored at the top-left corner.
    pub fn regular(size: f32) -> Self {
        Self {
            size,
            weight: 400,
            italic: false,
            h: HAnchor::Start,
            v: VAnchor::Top,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: 700,
            ..Self::regular(size)
        }
    }

    pub fn anchor(self, h: HAnchor, v: VAnchor) -> Self {
        Self { h, v, ..self }
    }

    /// Centered on both axes.
    pub fn centered(self) -> Self {
        self.anchor(HAnchor::Middle, VAnchor::Middle)
    }
}

/// Gradient direction for [`Canvas::gradient_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// An SVG drawing surface of fixed pixel size.
pub struct Canvas {
    width: u32,
    height: u32,
    defs: String,
    body: String,
    next_id: usize,
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn paint(attr: &str, color: Color) -> String {
    if color.a == 255 {
        format!(r#"{attr}="{}""#, color.to_svg())
    } else {
        format!(
            r#"{attr}="{}" {attr}-opacity="{:.4}""#,
            color.to_svg(),
            color.opacity()
        )
    }
}

fn fill_stroke(fill: Option<Color>, stroke: Option<(Color, f32)>) -> String {
    let mut attrs = match fill {
        Some(c) => paint("fill", c),
        None => r#"fill="none""#.to_string(),
    };
    if let Some((c, w)) = stroke {
        let _ = write!(attrs, r#" {} stroke-width="{w}""#, paint("stroke", c));
    }
    attrs
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
            next_id: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    /// Fill the whole surface.
    pub fn fill(&mut self, color: Color) {
        let (w, h) = (self.width as f32, self.height as f32);
        self.rect(0.0, 0.0, w, h, color);
    }

    /// Filled rectangle between two corners.
    pub fn rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x0}" y="{y0}" width="{}" height="{}" {}/>"#,
            (x1 - x0).max(0.0),
            (y1 - y0).max(0.0),
            paint("fill", color)
        );
    }

    /// Rounded rectangle with optional fill and stroke.
    #[allow(clippy::too_many_arguments)]
    pub fn rounded_rect(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    ) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x0}" y="{y0}" width="{}" height="{}" rx="{radius}" {}/>"#,
            (x1 - x0).max(0.0),
            (y1 - y0).max(0.0),
            fill_stroke(fill, stroke)
        );
    }

    /// Rectangle filled with a two-stop linear gradient.
    pub fn gradient_rect(
        &mut self,
        (x0, y0, x1, y1): (f32, f32, f32, f32),
        from: Color,
        to: Color,
        direction: Direction,
    ) {
        let id = self.id("lg");
        let (x2, y2) = match direction {
            Direction::Horizontal => ("100%", "0%"),
            Direction::Vertical => ("0%", "100%"),
        };
        let _ = writeln!(
            self.defs,
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="{x2}" y2="{y2}"><stop offset="0" stop-color="{}" stop-opacity="{:.4}"/><stop offset="1" stop-color="{}" stop-opacity="{:.4}"/></linearGradient>"#,
            from.to_svg(),
            from.opacity(),
            to.to_svg(),
            to.opacity()
        );
        let _ = writeln!(
            self.body,
            r#"<rect x="{x0}" y="{y0}" width="{}" height="{}" fill="url(#{id})"/>"#,
            (x1 - x0).max(0.0),
            (y1 - y0).max(0.0)
        );
    }

    /// Ellipse inscribed in a bounding box.
    pub fn ellipse(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    ) {
        let _ = writeln!(
            self.body,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}/>"#,
            (x0 + x1) / 2.0,
            (y0 + y1) / 2.0,
            ((x1 - x0) / 2.0).abs(),
            ((y1 - y0) / 2.0).abs(),
            fill_stroke(fill, stroke)
        );
    }

    /// Circle by center and radius.
    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: Option<Color>, stroke: Option<(Color, f32)>) {
        self.ellipse(cx - r, cy - r, cx + r, cy + r, fill, stroke);
    }

    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: f32) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" {} stroke-width="{width}"/>"#,
            paint("stroke", color)
        );
    }

    pub fn polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none" {} stroke-width="{width}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            format_points(points),
            paint("stroke", color)
        );
    }

    pub fn polygon(&mut self, points: &[(f32, f32)], fill: Color) {
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}" {}/>"#,
            format_points(points),
            paint("fill", fill)
        );
    }

    /// Polygon filled with a vertical gradient fading from `top` to `bottom`.
    pub fn gradient_polygon(&mut self, points: &[(f32, f32)], top: Color, bottom: Color) {
        let id = self.id("pg");
        let _ = writeln!(
            self.defs,
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0" stop-color="{}" stop-opacity="{:.4}"/><stop offset="1" stop-color="{}" stop-opacity="{:.4}"/></linearGradient>"#,
            top.to_svg(),
            top.opacity(),
            bottom.to_svg(),
            bottom.opacity()
        );
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}" fill="url(#{id})"/>"#,
            format_points(points)
        );
    }

    /// Radial glow whose alpha falls off as `intensity * (1 - r/R)^2`.
    pub fn radial_glow(&mut self, cx: f32, cy: f32, radius: f32, color: Color, intensity: f32) {
        let id = self.id("rg");
        let mut stops = String::new();
        for step in 0..=8 {
            let t = step as f32 / 8.0;
            let alpha = (intensity * (1.0 - t).powi(2)).clamp(0.0, 1.0);
            let _ = write!(
                stops,
                r#"<stop offset="{t}" stop-color="{}" stop-opacity="{alpha:.4}"/>"#,
                color.to_svg()
            );
        }
        let _ = writeln!(
            self.defs,
            r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{cx}" cy="{cy}" r="{radius}">{stops}</radialGradient>"#
        );
        let _ = writeln!(
            self.body,
            r#"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="url(#{id})"/>"#
        );
    }

    /// Text run anchored at (x, y).
    pub fn text(&mut self, x: f32, y: f32, content: &str, style: TextStyle, color: Color) {
        let anchor = match style.h {
            HAnchor::Start => "start",
            HAnchor::Middle => "middle",
            HAnchor::End => "end",
        };
        let baseline = match style.v {
            VAnchor::Top => r#" dominant-baseline="text-before-edge""#,
            VAnchor::Middle => r#" dominant-baseline="central""#,
            VAnchor::Baseline => "",
        };
        let italic = if style.italic { r#" font-style="italic""# } else { "" };
        let _ = writeln!(
            self.body,
            r#"<text x="{x}" y="{y}" font-family="{FONT_STACK}" font-size="{}" font-weight="{}" text-anchor="{anchor}"{baseline}{italic} {}>{}</text>"#,
            style.size,
            style.weight,
            paint("fill", color),
            escape(content)
        );
    }

    /// Complete SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if !self.defs.is_empty() {
            svg.push_str("<defs>\n");
            svg.push_str(&self.defs);
            svg.push_str("</defs>\n");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Rasterize at the canvas size.
    pub fn render(&self, fonts: &FontBook) -> Result<RgbaImage> {
        rasterize_svg(&self.to_svg(), self.width, self.height, fonts)
    }
}

fn format_points(points: &[(f32, f32)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render SVG text into a `width`x`height` image, scaling the document to fit.
pub fn rasterize_svg(svg: &str, width: u32, height: u32, fonts: &FontBook) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_str(svg, &fonts.options())?;
    render_tree(&tree, width, height)
}

/// Render a parsed tree into a `width`x`height` image.
pub fn render_tree(tree: &usvg::Tree, width: u32, height: u32) -> Result<RgbaImage> {
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| AssetError::Render(format!("cannot allocate {width}x{height} pixmap")))?;
    let size = tree.size();
    let transform = Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap_to_image(&pixmap))
}

/// Parse SVG bytes with the shared font database.
pub fn parse_svg(data: &[u8], fonts: &FontBook) -> Result<usvg::Tree> {
    Ok(usvg::Tree::from_data(data, &fonts.options())?)
}

fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}
