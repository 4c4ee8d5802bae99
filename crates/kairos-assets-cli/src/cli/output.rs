//! Shared CLI output: colors, symbols, report lines, and the global output mode.

use kairos_assets::{AssetKind, GenerationReport};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::OnceLock;

/// How results are shown. Set once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputMode {
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

static MODE: OnceLock<OutputMode> = OnceLock::new();

/// Install the output mode. Later calls are ignored.
pub fn init(mode: OutputMode) {
    let _ = MODE.set(mode);
}

fn mode() -> OutputMode {
    MODE.get().copied().unwrap_or_default()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    mode().json
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    mode().quiet
}

/// Check if --verbose mode is active.
pub fn is_verbose() -> bool {
    mode().verbose
}

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Builder that never emits escape codes.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Red X symbol.
    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    fn wrap(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.wrap(GREEN, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.wrap(YELLOW, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.wrap(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.wrap(BOLD, s)
    }
}

/// Print a branded header for CLI output.
pub fn print_header(s: &Styled) {
    eprintln!(
        "  {} {}",
        s.bold("Kairos assets"),
        s.dim(&format!("v{}", env!("CARGO_PKG_VERSION")))
    );
    eprintln!();
}

/// Print a section header.
pub fn print_section(s: &Styled, title: &str) {
    eprintln!("  {}", s.bold(title));
}

/// Print a check result line with symbol and label/value.
pub fn print_check(symbol: &str, label: &str, value: &str) {
    eprintln!("    {symbol} {label:<34} {value}");
}

/// Print an indented detail line under a check.
pub fn print_detail(msg: &str) {
    eprintln!("        {msg}");
}

/// Print a status summary line at the bottom.
pub fn print_status(s: &Styled, status: &str, msg: &str) {
    eprintln!();
    eprintln!("  {}: {status} ({msg})", s.bold("Status"));
}

/// `512x512`, `612x792 pt`, or blank for JSON and other sizeless files.
pub fn format_dimensions(kind: AssetKind, width: u32, height: u32) -> String {
    match kind {
        AssetKind::Json => String::new(),
        AssetKind::Pdf => format!("{width}x{height} pt"),
        AssetKind::Png | AssetKind::Svg => format!("{width}x{height}"),
    }
}

/// Path relative to `root` when it lives under it.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// One line per written file, then any warnings.
pub fn print_report(s: &Styled, report: &GenerationReport, root: &Path) {
    if is_quiet() {
        for warning in &report.warnings {
            eprintln!("  {} {warning}", s.warn_sym());
        }
        return;
    }
    print_section(s, &report.generator);
    for asset in &report.assets {
        print_check(
            s.ok_sym(),
            &display_path(&asset.path, root),
            &s.dim(&format_dimensions(asset.kind, asset.width, asset.height)),
        );
    }
    for warning in &report.warnings {
        print_check(s.warn_sym(), "warning", &s.yellow(warning));
    }
    eprintln!();
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_symbols() {
        let s = Styled::plain();
        assert_eq!(s.ok_sym(), "OK");
        assert_eq!(s.warn_sym(), "??");
        assert_eq!(s.bold("x"), "x");
    }

    #[test]
    fn test_format_dimensions() {
        assert_eq!(format_dimensions(AssetKind::Png, 512, 512), "512x512");
        assert_eq!(format_dimensions(AssetKind::Pdf, 612, 792), "612x792 pt");
        assert_eq!(format_dimensions(AssetKind::Json, 0, 0), "");
    }

    #[test]
    fn test_display_path_strips_root() {
        let root = Path::new("/repo");
        assert_eq!(display_path(Path::new("/repo/assets/promo/a.png"), root), "assets/promo/a.png");
        assert_eq!(display_path(Path::new("/elsewhere/a.png"), root), "/elsewhere/a.png");
    }
}
