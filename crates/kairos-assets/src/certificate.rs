//! One-page share certificate PDF.
//!
//! Layout is expressed in millimetres from the top-left corner of a US Letter
//! page and converted to PDF user space when operators are emitted. Text uses
//! the base-14 Helvetica faces, measured with their AFM advance widths so that
//! centering and wrapping need no font files.

use crate::error::{AssetError, Result};
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PAGE_WIDTH_MM: f32 = 215.9;
pub const PAGE_HEIGHT_MM: f32 = 279.4;
pub const PAGE_WIDTH_PT: i64 = 612;
pub const PAGE_HEIGHT_PT: i64 = 792;
pub const DEFAULT_FILE_NAME: &str = "Kairos_777_Share_Certificate.pdf";

const PT_PER_MM: f32 = 72.0 / 25.4;
const MARGIN: f32 = 15.0;
/// Page margin used by full-width cells.
const CELL_PAGE_MARGIN: f32 = 10.0;
/// Horizontal text inset inside a cell.
const CELL_PADDING: f32 = 1.0;

type Rgb = (u8, u8, u8);

const GOLD: Rgb = (212, 175, 55);
const INK: Rgb = (26, 26, 26);
const BODY: Rgb = (50, 50, 50);
const RULE: Rgb = (230, 230, 230);

/// One line of the ownership table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shareholder {
    pub name: String,
    pub role: String,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub name: String,
    pub title: String,
}

/// Everything printed on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateData {
    pub company: String,
    pub tagline: String,
    pub legal_name: String,
    pub entity_type: String,
    pub issue_date: NaiveDate,
    pub authorized_shares: u64,
    pub share_class: String,
    pub certificate_number: String,
    pub shareholders: Vec<Shareholder>,
    pub signer: Signer,
    pub email: String,
    pub website: String,
}

impl Default for CertificateData {
    fn default() -> Self {
        Self {
            company: "KAIROS 777 INC".to_string(),
            tagline: "Blockchain Financial Technology".to_string(),
            legal_name: "Kairos 777 Inc".to_string(),
            entity_type: "Corporation".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2026, 2, 22).unwrap_or_default(),
            authorized_shares: 1_000,
            share_class: "Common".to_string(),
            certificate_number: "KAI-2026-001".to_string(),
            shareholders: vec![Shareholder {
                name: "Mario Isaac".to_string(),
                role: "Founder & Director".to_string(),
                shares: 1_000,
            }],
            signer: Signer {
                name: "Mario Isaac".to_string(),
                title: "Founder & Director".to_string(),
            },
            email: "info@kairos-777.com".to_string(),
            website: "kairos-777.com".to_string(),
        }
    }
}

impl CertificateData {
    /// `February 22, 2026`
    pub fn issue_date_text(&self) -> String {
        self.issue_date.format("%B %-d, %Y").to_string()
    }

    pub fn total_shares(&self) -> u64 {
        self.shareholders.iter().map(|s| s.shares).sum()
    }

    /// Holder's share of the issued total, as printed in the table.
    pub fn ownership(&self, holder: &Shareholder) -> String {
        percent(holder.shares, self.total_shares())
    }

    pub fn footer(&self) -> String {
        format!("{}  |  {}  |  {}", self.company, self.email, self.website)
    }

    fn statement(&self) -> String {
        format!(
            "This is to certify that the above ownership breakdown is a true and accurate \
             representation of the capitalization structure of {} as of the date stated above. \
             The shares listed are fully paid and non-assessable. This certificate is issued in \
             accordance with the company's Articles of Incorporation and Bylaws.",
            self.legal_name
        )
    }
}

/// `1000` -> `1,000`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let pct = part as f64 * 100.0 / total as f64;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{}%", pct.round() as u64)
    } else {
        format!("{pct:.1}%")
    }
}

// ── Fonts ───────────────────────────────────────────────────────────────

/// Standard Helvetica faces used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    BoldOblique,
}

impl Face {
    fn resource(self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::BoldOblique => "F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::BoldOblique => "Helvetica-BoldOblique",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Face::Regular => &HELVETICA_WIDTHS,
            Face::Bold | Face::BoldOblique => &HELVETICA_BOLD_WIDTHS,
        }
    }

    const ALL: [Face; 3] = [Face::Regular, Face::Bold, Face::BoldOblique];
}

/// Advance widths for U+0020..=U+007E in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

/// Code points WinAnsiEncoding places in 0x80..=0x9F, indexed from 0x80.
#[rustfmt::skip]
const WIN_ANSI_HIGH: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

/// Encode `text` for the WinAnsiEncoding fonts. Unmappable characters become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .position(|&m| m == Some(c))
                .map_or(b'?', |i| 0x80 + i as u8),
        })
        .collect()
}

/// ASCII letter whose advance an accented Latin-1 letter shares.
fn latin1_base(byte: u8) -> Option<u8> {
    Some(match byte {
        0xC0..=0xC5 => b'A',
        0xC7 => b'C',
        0xC8..=0xCB => b'E',
        0xCC..=0xCF => b'I',
        0xD0 => b'D',
        0xD1 => b'N',
        0xD2..=0xD6 | 0xD8 => b'O',
        0xD9..=0xDC => b'U',
        0xDD => b'Y',
        0xE0..=0xE5 => b'a',
        0xE7 => b'c',
        0xE8..=0xEB => b'e',
        0xEC..=0xEF => b'i',
        0xF0 | 0xF2..=0xF6 | 0xF8 => b'o',
        0xF1 => b'n',
        0xF9..=0xFC => b'u',
        0xFD | 0xFF => b'y',
        0x8A => b'S',
        0x9A => b's',
        0x8E => b'Z',
        0x9E => b'z',
        0x9F => b'Y',
        0xA0 => b' ',
        _ => return None,
    })
}

fn byte_width(table: &[u16; 95], byte: u8) -> u16 {
    let ascii = match byte {
        0x20..=0x7E => Some(byte),
        _ => latin1_base(byte),
    };
    ascii.map_or(FALLBACK_WIDTH, |b| table[(b - 0x20) as usize])
}

/// Width of `text` in millimetres at `size` points, measured on its WinAnsi bytes.
pub fn text_width(text: &str, face: Face, size: f32) -> f32 {
    let table = face.widths();
    let units: u32 = to_win_ansi(text).into_iter().map(|b| byte_width(table, b) as u32).sum();
    units as f32 / 1000.0 * size / PT_PER_MM
}

/// Greedy word wrap. The first line may be narrower to leave room for a lead-in.
pub fn wrap_words(text: &str, face: Face, size: f32, first_width: f32, width: f32) -> Vec<String> {
    let space = text_width(" ", face, size);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0.0;
    for word in text.split_whitespace() {
        let w = text_width(word, face, size);
        let limit = if lines.is_empty() { first_width } else { width };
        if !line.is_empty() && used + space + w > limit {
            lines.push(std::mem::take(&mut line));
            used = 0.0;
        }
        if !line.is_empty() {
            line.push(' ');
            used += space;
        }
        line.push_str(word);
        used += w;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ── Page drawing ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Content-stream builder with a top-left millimetre coordinate system.
struct Page {
    ops: Vec<Operation>,
}

fn pt(mm: f32) -> Object {
    Object::Real((mm * PT_PER_MM).into())
}

fn flip(y_mm: f32) -> f32 {
    PAGE_HEIGHT_MM - y_mm
}

fn channel(v: u8) -> Object {
    Object::Real((v as f32 / 255.0).into())
}

impl Page {
    fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn stroke_color(&mut self, (r, g, b): Rgb) {
        self.op("RG", vec![channel(r), channel(g), channel(b)]);
    }

    fn fill_color(&mut self, (r, g, b): Rgb) {
        self.op("rg", vec![channel(r), channel(g), channel(b)]);
    }

    fn line_width(&mut self, mm: f32) {
        self.op("w", vec![pt(mm)]);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &str) {
        self.op("re", vec![pt(x), pt(flip(y + h)), pt(w), pt(h)]);
        self.op(paint, vec![]);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.rect(x, y, w, h, "S");
    }

    /// Filled and stroked.
    fn boxed_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgb, stroke: Rgb) {
        self.fill_color(fill);
        self.stroke_color(stroke);
        self.rect(x, y, w, h, "B");
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.op("m", vec![pt(x0), pt(flip(y0))]);
        self.op("l", vec![pt(x1), pt(flip(y1))]);
        self.op("S", vec![]);
    }

    /// Text with its baseline starting at (x, y).
    fn text_at(&mut self, x: f32, y: f32, text: &str, face: Face, size: f32, color: Rgb) {
        self.fill_color(color);
        self.op("BT", vec![]);
        self.op("Tf", vec![face.resource().into(), Object::Real(size.into())]);
        self.op("Td", vec![pt(x), pt(flip(y))]);
        self.op("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
        self.op("ET", vec![]);
    }

    /// Single-line text box of `w` x `h`: vertically centered, left-padded or centered.
    #[allow(clippy::too_many_arguments)]
    fn cell(
        &mut self,
        (x, y, w, h): (f32, f32, f32, f32),
        text: &str,
        align: Align,
        face: Face,
        size: f32,
        color: Rgb,
        fill: Option<Rgb>,
    ) {
        if let Some(bg) = fill {
            self.fill_color(bg);
            self.rect(x, y, w, h, "f");
        }
        if text.is_empty() {
            return;
        }
        let tx = match align {
            Align::Left => x + CELL_PADDING,
            Align::Center => x + (w - text_width(text, face, size)) / 2.0,
        };
        self.text_at(tx, baseline(y, h, size), text, face, size, color);
    }

    /// Full-width cell between the page margins.
    fn page_cell(&mut self, y: f32, h: f32, text: &str, align: Align, face: Face, size: f32, color: Rgb) {
        let width = PAGE_WIDTH_MM - 2.0 * CELL_PAGE_MARGIN;
        self.cell((CELL_PAGE_MARGIN, y, width, h), text, align, face, size, color, None);
    }
}

/// Baseline that vertically centers a line of `size` points in a box of height `h`.
fn baseline(y: f32, h: f32, size: f32) -> f32 {
    y + 0.5 * h + 0.3 * size / PT_PER_MM
}

fn section_label(page: &mut Page, y: f32, label: &str) {
    page.page_cell(y, 6.0, &format!("    {label}"), Align::Left, Face::Bold, 9.0, (160, 160, 160));
}

fn info_box(page: &mut Page, (x, y): (f32, f32), w: f32, label: &str, value: &str) {
    page.boxed_rect(x, y, w, 18.0, (248, 248, 248), RULE);
    page.cell((x + 3.0, y + 2.0, w - 6.0, 5.0), label, Align::Left, Face::Regular, 7.0, (160, 160, 160), None);
    page.cell((x + 3.0, y + 8.0, w - 6.0, 7.0), value, Align::Left, Face::Bold, 12.0, INK, None);
}

/// Draw the certificate into a content stream.
fn draw(data: &CertificateData) -> Page {
    let mut page = Page::new();
    let w = PAGE_WIDTH_MM;
    let mid = w / 2.0;

    // Double gold border
    page.stroke_color(GOLD);
    page.line_width(0.8);
    page.stroke_rect(MARGIN, MARGIN, w - 2.0 * MARGIN, PAGE_HEIGHT_MM - 2.0 * MARGIN);
    page.line_width(0.3);
    page.stroke_rect(
        MARGIN + 3.0,
        MARGIN + 3.0,
        w - 2.0 * MARGIN - 6.0,
        PAGE_HEIGHT_MM - 2.0 * MARGIN - 6.0,
    );

    // Header
    let mut y = 25.0;
    page.page_cell(y, 12.0, &data.company, Align::Center, Face::Bold, 28.0, INK);
    y += 12.0;
    page.page_cell(y, 6.0, &data.tagline, Align::Center, Face::Regular, 10.0, (120, 120, 120));
    y += 6.0;

    page.stroke_color(GOLD);
    page.line_width(0.6);
    page.line(mid - 40.0, y + 4.0, mid + 40.0, y + 4.0);
    y += 12.0;

    page.page_cell(y, 12.0, "SHARE CERTIFICATE", Align::Center, Face::Bold, 24.0, GOLD);
    y += 12.0;
    page.page_cell(
        y,
        7.0,
        "Capitalization Table & Ownership Breakdown",
        Align::Center,
        Face::Regular,
        11.0,
        (140, 140, 140),
    );
    y += 7.0;
    page.page_cell(
        y,
        7.0,
        &format!("Certificate No. {}", data.certificate_number),
        Align::Center,
        Face::Regular,
        9.0,
        (170, 170, 170),
    );
    y += 7.0 + 8.0;

    // Company information
    section_label(&mut page, y, "COMPANY INFORMATION");
    y += 6.0 + 3.0;

    let x_left = 25.0;
    let x_right = mid + 5.0;
    let box_w = (w - 50.0) / 2.0 - 5.0;
    let authorized = format!("{} {} Shares", group_thousands(data.authorized_shares), data.share_class);
    info_box(&mut page, (x_left, y), box_w, "LEGAL ENTITY NAME", &data.legal_name);
    info_box(&mut page, (x_right, y), box_w, "ENTITY TYPE", &data.entity_type);
    let y1 = y + 18.0 + 4.0;
    info_box(&mut page, (x_left, y1), box_w, "DATE OF ISSUANCE", &data.issue_date_text());
    info_box(&mut page, (x_right, y1), box_w, "TOTAL AUTHORIZED SHARES", &authorized);
    y = y1 + 18.0 + 12.0;

    // Ownership table
    section_label(&mut page, y, "OWNERSHIP BREAKDOWN");
    y += 6.0 + 3.0;

    let table_x = 25.0;
    let table_w = w - 50.0;
    let cols = [table_w * 0.35, table_w * 0.30, table_w * 0.17, table_w * 0.18];
    let col_x = |i: usize| table_x + cols[..i].iter().sum::<f32>();

    let headers = ["Shareholder Name", "Role", "Shares Held", "Ownership %"];
    for (i, header) in headers.iter().enumerate() {
        let (text, align) = if i < 2 {
            (format!("  {header}"), Align::Left)
        } else {
            (header.to_string(), Align::Center)
        };
        page.cell((col_x(i), y, cols[i], 10.0), &text, align, Face::Bold, 9.0, GOLD, Some(INK));
    }
    y += 10.0;

    for holder in &data.shareholders {
        let row = [
            (format!("  {}", holder.name), Align::Left, Face::Regular),
            (format!("  {}", holder.role), Align::Left, Face::Regular),
            (group_thousands(holder.shares), Align::Center, Face::Bold),
            (data.ownership(holder), Align::Center, Face::Bold),
        ];
        for (i, (text, align, face)) in row.iter().enumerate() {
            page.cell((col_x(i), y, cols[i], 12.0), text, *align, *face, 11.0, BODY, None);
        }
        page.stroke_color(RULE);
        page.line(table_x, y + 12.0, table_x + table_w, y + 12.0);
        y += 12.0;
    }

    page.stroke_color(GOLD);
    page.line_width(0.5);
    page.line(table_x, y, table_x + table_w, y);
    let cream = Some((247, 245, 239));
    page.cell((table_x, y, cols[0] + cols[1], 11.0), "  TOTAL", Align::Left, Face::Bold, 11.0, INK, cream);
    page.cell(
        (col_x(2), y, cols[2], 11.0),
        &group_thousands(data.total_shares()),
        Align::Center,
        Face::Bold,
        11.0,
        INK,
        cream,
    );
    let total_pct = if data.total_shares() > 0 { "100%" } else { "0%" };
    page.cell((col_x(3), y, cols[3], 11.0), total_pct, Align::Center, Face::Bold, 11.0, INK, cream);
    y += 18.0;

    // Certification statement: bold lead-in, wrapped body
    let cert_x = 25.0;
    let cert_w = w - 50.0;
    let cert_y = y;
    page.boxed_rect(cert_x, cert_y, cert_w, 30.0, (253, 252, 247), (232, 226, 200));

    let lead = "Certification: ";
    let lead_w = text_width(lead, Face::Bold, 10.0);
    let text_x = cert_x + 5.0 + CELL_PADDING;
    let wrap_w = cert_w - 10.0 - 2.0 * CELL_PADDING;
    let line_h = 5.0;
    page.text_at(text_x, baseline(cert_y + 4.0, line_h, 10.0), lead, Face::Bold, 10.0, BODY);
    let lines = wrap_words(&data.statement(), Face::Regular, 9.5, wrap_w - lead_w, wrap_w);
    for (i, line) in lines.iter().enumerate() {
        let lx = if i == 0 { text_x + lead_w } else { text_x };
        let ly = baseline(cert_y + 4.0 + i as f32 * line_h, line_h, 9.5);
        page.text_at(lx, ly, line, Face::Regular, 9.5, (80, 80, 80));
    }
    y = cert_y + 38.0;

    // Signatures
    let sig_y = y + 5.0;
    let left_x = 25.0;
    let right_x = mid + 5.0;
    let date = data.issue_date_text();
    page.cell((left_x, sig_y, 80.0, 10.0), &data.signer.name, Align::Center, Face::BoldOblique, 20.0, INK, None);
    page.cell((right_x, sig_y, 80.0, 10.0), &date, Align::Center, Face::Regular, 14.0, INK, None);

    let line_y = sig_y + 14.0;
    page.stroke_color(INK);
    page.line_width(0.5);
    page.line(left_x, line_y, left_x + 80.0, line_y);
    page.line(right_x, line_y, right_x + 80.0, line_y);

    page.cell((left_x, line_y + 2.0, 80.0, 6.0), &data.signer.name, Align::Center, Face::Bold, 10.0, INK, None);
    page.cell((right_x, line_y + 2.0, 80.0, 6.0), "Date", Align::Center, Face::Bold, 10.0, INK, None);
    page.cell(
        (left_x, line_y + 8.0, 80.0, 5.0),
        &data.signer.title,
        Align::Center,
        Face::Regular,
        9.0,
        (140, 140, 140),
        None,
    );

    // Footer
    let footer_y = PAGE_HEIGHT_MM - 25.0;
    page.stroke_color(GOLD);
    page.line_width(0.5);
    page.line(mid - 25.0, footer_y, mid + 25.0, footer_y);
    page.cell(
        (0.0, footer_y + 3.0, w, 5.0),
        &data.footer(),
        Align::Center,
        Face::Regular,
        8.0,
        (180, 180, 180),
        None,
    );

    page
}

/// Assemble an uncompressed single-page document.
pub fn build(data: &CertificateData) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for face in Face::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let content = Content {
        operations: draw(data).ops,
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => info_string(&format!("{} Share Certificate", data.legal_name)),
        "Author" => info_string(&data.legal_name),
        "Subject" => Object::string_literal(format!("Certificate No. {}", data.certificate_number)),
        "Producer" => Object::string_literal("kairos-assets"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    Ok(doc)
}

/// PDFDocEncoding agrees with Latin-1 for the printable range.
fn info_string(text: &str) -> Object {
    Object::String(to_win_ansi(text), StringFormat::Literal)
}

#[derive(Debug, Clone)]
pub struct CertificateJob {
    pub data: CertificateData,
    pub out_dir: PathBuf,
    pub file_name: String,
}

impl CertificateJob {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data: CertificateData::default(),
            out_dir: out_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}

/// Build, compress, and write the certificate.
pub fn generate(job: &CertificateJob) -> Result<GenerationReport> {
    let mut report = GenerationReport::new("certificate");
    let mut doc = build(&job.data)?;
    doc.compress();

    let path = job.output_path();
    write_document(&mut doc, &path)?;
    report.push(&path, AssetKind::Pdf, PAGE_WIDTH_PT as u32, PAGE_HEIGHT_PT as u32);
    Ok(report)
}

fn write_document(doc: &mut Document, path: &Path) -> Result<()> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| AssetError::Render(format!("cannot serialize PDF: {e}")))?;
    raster::ensure_parent(path)?;
    std::fs::write(path, bytes).map_err(|e| AssetError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_win_ansi(byte: u8) -> char {
        match byte {
            0x80..=0x9F => WIN_ANSI_HIGH[(byte - 0x80) as usize].unwrap_or('?'),
            _ => byte as char,
        }
    }

    fn shown_text(doc: &Document) -> Vec<String> {
        let mut out = Vec::new();
        for object in doc.objects.values() {
            let Object::Stream(stream) = object else { continue };
            let Ok(content) = Content::decode(&stream.content) else { continue };
            for op in content.operations {
                if op.operator == "Tj" {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        out.push(bytes.iter().map(|&b| decode_win_ansi(b)).collect());
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_default_data() {
        let data = CertificateData::default();
        assert_eq!(data.issue_date_text(), "February 22, 2026");
        assert_eq!(data.total_shares(), 1_000);
        assert_eq!(data.ownership(&data.shareholders[0]), "100%");
        assert_eq!(data.footer(), "KAIROS 777 INC  |  info@kairos-777.com  |  kairos-777.com");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(1, 3), "33.3%");
        assert_eq!(percent(500, 1_000), "50%");
        assert_eq!(percent(1, 0), "0%");
    }

    #[test]
    fn test_text_width_uses_afm_tables() {
        // "Hi" regular: 722 + 222 units at 10pt = 9.44 pt
        let mm = text_width("Hi", Face::Regular, 10.0);
        assert!((mm * PT_PER_MM - 9.44).abs() < 1e-3);
        assert!(text_width("Hi", Face::Bold, 10.0) > mm);
    }

    #[test]
    fn test_wrap_respects_widths() {
        let text = CertificateData::default().statement();
        let lines = wrap_words(&text, Face::Regular, 9.5, 140.0, 170.0);
        assert!(lines.len() > 1);
        assert!(text_width(&lines[0], Face::Regular, 9.5) <= 140.0);
        for line in &lines[1..] {
            assert!(text_width(line, Face::Regular, 9.5) <= 170.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_document_structure() {
        let doc = build(&CertificateData::default()).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let mbox = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(mbox[2].as_i64().unwrap(), PAGE_WIDTH_PT);
        assert_eq!(mbox[3].as_i64().unwrap(), PAGE_HEIGHT_PT);

        let text = shown_text(&doc);
        for expected in ["KAIROS 777 INC", "SHARE CERTIFICATE", "Certificate No. KAI-2026-001", "  TOTAL"] {
            assert!(text.iter().any(|t| t == expected), "missing {expected:?}");
        }
        assert!(text.iter().any(|t| t == "  Founder & Director"));
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(to_win_ansi("José Peña"), b"Jos\xE9 Pe\xF1a".to_vec());
        assert_eq!(to_win_ansi("A \u{2014} \u{20AC}5"), vec![b'A', b' ', 0x97, b' ', 0x80, b'5']);
        assert_eq!(to_win_ansi("\u{4E2D}"), b"?".to_vec());
    }

    #[test]
    fn test_accented_width_matches_base_letter() {
        assert_eq!(text_width("José", Face::Bold, 10.0), text_width("Jose", Face::Bold, 10.0));
        assert_eq!(text_width("Peña", Face::Regular, 10.0), text_width("Pena", Face::Regular, 10.0));
    }

    #[test]
    fn test_non_ascii_shareholder_is_win_ansi() {
        let mut data = CertificateData::default();
        data.shareholders = vec![Shareholder {
            name: "José Peña".to_string(),
            role: "Directora".to_string(),
            shares: 1_000,
        }];
        let doc = build(&data).unwrap();

        let mut found = false;
        for object in doc.objects.values() {
            let Object::Stream(stream) = object else { continue };
            let Ok(content) = Content::decode(&stream.content) else { continue };
            for op in content.operations.iter().filter(|op| op.operator == "Tj") {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    assert!(!bytes.contains(&0xC3), "UTF-8 leaked into {bytes:?}");
                    found |= bytes.windows(3).any(|w| w == b"s\xE9 ");
                }
            }
        }
        assert!(found);
        assert!(shown_text(&doc).iter().any(|t| t.contains("José Peña")));
    }
}
