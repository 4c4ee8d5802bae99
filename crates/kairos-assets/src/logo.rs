//! Logo rasterizer: render a vector or raster logo once at high resolution and
//! write the web/app PNG size set from it.

use crate::canvas::{self, FontBook};
use crate::error::{AssetError, Result};
use crate::raster;
use crate::report::{AssetKind, GenerationReport};
use image::RgbaImage;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default supersampling factor for vector sources.
pub const DEFAULT_SCALE: u32 = 4;

/// (edge length, file name) for each derived PNG.
pub const LOGO_SIZES: [(u32, &str); 5] = [
    (512, "logo-512.png"),
    (192, "logo-192.png"),
    (180, "logo-180.png"),
    (32, "favicon-32.png"),
    (16, "favicon-16.png"),
];

pub const FULL_NAME: &str = "logo-full.png";

const PDF_RENDERER: &str = "pdftocairo";
const PDF_RENDER_TIMEOUT: Duration = Duration::from_secs(10);
const POINTS_PER_INCH: u32 = 72;
/// Bound on `/Parent` hops; malformed files can contain cycles.
const MAX_PAGE_TREE_DEPTH: usize = 32;

/// Kind of logo source, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSource {
    Pdf,
    Svg,
    Raster,
}

impl LogoSource {
    pub fn detect(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("pdf") => Self::Pdf,
            Some("svg") => Self::Svg,
            _ => Self::Raster,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogoJob {
    pub source: PathBuf,
    pub out_dir: PathBuf,
    pub scale: u32,
}

/// Natural size of the source: PDF media box in points, SVG user size, or pixels.
pub fn source_size(path: &Path, fonts: &FontBook) -> Result<(f32, f32)> {
    if !path.exists() {
        return Err(AssetError::MissingSource(path.to_path_buf()));
    }
    match LogoSource::detect(path) {
        LogoSource::Pdf => pdf_page_size(path),
        LogoSource::Svg => {
            let data = std::fs::read(path).map_err(|e| AssetError::io(path, e))?;
            let tree = canvas::parse_svg(&data, fonts)?;
            Ok((tree.size().width(), tree.size().height()))
        }
        LogoSource::Raster => {
            let (w, h) = image::image_dimensions(path).map_err(|e| AssetError::image(path, e))?;
            Ok((w as f32, h as f32))
        }
    }
}

/// Media box of the first page, following `/Parent` for inherited boxes.
pub fn pdf_page_size(path: &Path) -> Result<(f32, f32)> {
    let doc = Document::load(path)?;
    let page_id = *doc
        .get_pages()
        .values()
        .next()
        .ok_or_else(|| AssetError::Render(format!("{} has no pages", path.display())))?;
    inherited_media_box(&doc, page_id)?
        .ok_or_else(|| AssetError::Render(format!("{} has no usable MediaBox", path.display())))
}

/// Walk from `page_id` up the page tree until a MediaBox is found.
fn inherited_media_box(doc: &Document, page_id: ObjectId) -> Result<Option<(f32, f32)>> {
    let mut dict: &Dictionary = doc.get_dictionary(page_id)?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(mbox) = dict.get(b"MediaBox") {
            let mbox = match mbox {
                Object::Reference(id) => doc.get_object(*id)?,
                other => other,
            };
            let nums: Vec<f64> = mbox.as_array()?.iter().filter_map(number).collect();
            if nums.len() != 4 {
                return Ok(None);
            }
            return Ok(Some(((nums[2] - nums[0]).abs() as f32, (nums[3] - nums[1]).abs() as f32)));
        }
        match dict.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent) => dict = doc.get_dictionary(parent)?,
            Err(_) => return Ok(None),
        }
    }
    Ok(None)
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

/// Render the source at `scale` times its natural size.
pub fn render_full(job: &LogoJob, fonts: &FontBook) -> Result<RgbaImage> {
    if !job.source.exists() {
        return Err(AssetError::MissingSource(job.source.clone()));
    }
    let scale = job.scale.max(1);
    match LogoSource::detect(&job.source) {
        LogoSource::Pdf => render_pdf(PDF_RENDERER, &job.source, &job.out_dir, scale),
        LogoSource::Svg => {
            let data = std::fs::read(&job.source).map_err(|e| AssetError::io(&job.source, e))?;
            let tree = canvas::parse_svg(&data, fonts)?;
            let w = (tree.size().width() * scale as f32).round() as u32;
            let h = (tree.size().height() * scale as f32).round() as u32;
            canvas::render_tree(&tree, w, h)
        }
        // Raster sources are used at native resolution.
        LogoSource::Raster => raster::load_rgba(&job.source),
    }
}

/// First page of a PDF to RGBA with a transparent background, via `pdftocairo`.
fn render_pdf(program: &str, source: &Path, work_dir: &Path, scale: u32) -> Result<RgbaImage> {
    let failed = |message: String| AssetError::Subprocess {
        program: program.to_string(),
        message,
    };
    std::fs::create_dir_all(work_dir).map_err(|e| AssetError::io(work_dir, e))?;
    let prefix = work_dir.join(".logo-render");
    let dpi = (POINTS_PER_INCH * scale).to_string();

    let mut child = Command::new(program)
        .args(["-png", "-transp", "-singlefile", "-f", "1", "-l", "1", "-r", &dpi])
        .arg(source)
        .arg(&prefix)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| failed(format!("failed to launch: {e}")))?;

    // stderr is drained on its own thread while the child is polled.
    let stderr = child.stderr.take().map(|mut pipe| {
        std::thread::spawn(move || {
            let mut text = String::new();
            let _ = pipe.read_to_string(&mut text);
            text
        })
    });

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if started.elapsed() >= PDF_RENDER_TIMEOUT => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(failed(format!("timed out after {}s", PDF_RENDER_TIMEOUT.as_secs())));
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(25)),
            Err(e) => return Err(failed(e.to_string())),
        }
    };

    let stderr = stderr.and_then(|handle| handle.join().ok()).unwrap_or_default();
    let rendered = prefix.with_extension("png");
    if !status.success() {
        let _ = std::fs::remove_file(&rendered);
        return Err(failed(stderr.lines().next().unwrap_or("unknown error").to_string()));
    }

    let img = raster::load_rgba(&rendered);
    let _ = std::fs::remove_file(&rendered);
    let img = img?;
    debug!(width = img.width(), height = img.height(), dpi = %dpi, "rendered PDF logo");
    Ok(img)
}

/// Render the logo and write every size plus the full-resolution image.
pub fn generate(job: &LogoJob, fonts: &FontBook) -> Result<GenerationReport> {
    let mut report = GenerationReport::new("logo");
    let (pw, ph) = source_size(&job.source, fonts)?;
    info!("source page size: {pw} x {ph}");

    let full = render_full(job, fonts)?;

    for (size, name) in LOGO_SIZES {
        let path = job.out_dir.join(name);
        raster::save_png(&raster::resize_square(&full, size), &path)?;
        report.push(&path, AssetKind::Png, size, size);
    }

    let path = job.out_dir.join(FULL_NAME);
    raster::save_png(&full, &path)?;
    report.push(&path, AssetKind::Png, full.width(), full.height());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    #[test]
    fn test_detect_source_kind() {
        assert_eq!(LogoSource::detect(Path::new("Kairos 2.PDF")), LogoSource::Pdf);
        assert_eq!(LogoSource::detect(Path::new("logo.svg")), LogoSource::Svg);
        assert_eq!(LogoSource::detect(Path::new("logo.png")), LogoSource::Raster);
        assert_eq!(LogoSource::detect(Path::new("logo")), LogoSource::Raster);
    }

    #[test]
    fn test_svg_logo_renders_at_scale() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo.svg");
        std::fs::write(
            &src,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="50" height="40"><circle cx="25" cy="20" r="15" fill="gold"/></svg>"#,
        )
        .unwrap();
        let job = LogoJob {
            source: src,
            out_dir: dir.path().join("out"),
            scale: DEFAULT_SCALE,
        };
        let full = render_full(&job, &FontBook::empty()).unwrap();
        assert_eq!(full.dimensions(), (200, 160));
        assert_eq!(full.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_missing_source() {
        let job = LogoJob {
            source: PathBuf::from("/nope/Kairos 2.pdf"),
            out_dir: PathBuf::from("/tmp"),
            scale: 4,
        };
        assert!(matches!(
            render_full(&job, &FontBook::empty()),
            Err(AssetError::MissingSource(_))
        ));
    }

    fn page_tree(parent_box: bool, cyclic: bool) -> (Document, ObjectId) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(lopdf::dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        let mut pages = lopdf::dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        if parent_box {
            pages.set("MediaBox", vec![0.into(), 0.into(), 300.into(), Object::Real(150.5)]);
        }
        if cyclic {
            pages.set("Parent", page_id);
        }
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(lopdf::dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);
        (doc, page_id)
    }

    #[test]
    fn test_media_box_inherited_from_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inherited.pdf");
        let (mut doc, _) = page_tree(true, false);
        doc.save(&path).unwrap();
        assert_eq!(pdf_page_size(&path).unwrap(), (300.0, 150.5));
    }

    #[test]
    fn test_cyclic_parent_chain_terminates() {
        let (doc, page_id) = page_tree(false, true);
        assert_eq!(inherited_media_box(&doc, page_id).unwrap(), None);
    }

    #[test]
    fn test_missing_renderer_is_subprocess_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo.pdf");
        std::fs::write(&src, b"%PDF-1.5").unwrap();
        let err = render_pdf("kairos-no-such-renderer", &src, dir.path(), 1).unwrap_err();
        match err {
            AssetError::Subprocess { program, message } => {
                assert_eq!(program, "kairos-no-such-renderer");
                assert!(message.starts_with("failed to launch"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(!dir.path().join(".logo-render.png").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_renderer_reports_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logo.pdf");
        std::fs::write(&src, b"%PDF-1.5").unwrap();
        // `false` accepts any arguments and exits non-zero without output.
        let err = render_pdf("false", &src, dir.path(), 1).unwrap_err();
        assert!(matches!(err, AssetError::Subprocess { ref message, .. } if message == "unknown error"));
        assert!(!dir.path().join(".logo-render.png").exists());
    }
}
