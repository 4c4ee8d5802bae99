//! Command-line definition.

use clap::{Parser, Subcommand, ValueEnum};
use kairos_assets::layout::ROOT_ENV;
use kairos_assets::logo::DEFAULT_SCALE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kairos-assets",
    version,
    about = "Generate Kairos 777 icons, store art, banners, favicons, and documents"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = ROOT_ENV,
        help = "Repository root that default paths are resolved against [default: current directory]"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Only print warnings and errors")]
    pub quiet: bool,
    #[arg(short, long, global = true, help = "Show debug logging")]
    pub verbose: bool,
    #[arg(
        long = "font-dir",
        global = true,
        value_name = "DIR",
        help = "Extra directory of fonts for text rendering (repeatable)"
    )]
    pub font_dirs: Vec<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browser-extension toolbar icons (16, 32, 48, 128)
    ExtensionIcons {
        #[arg(long, help = "Icon directory [default: kairos-extension/dist/icons]")]
        out: Option<PathBuf>,
        #[arg(long, help = "Mirror directory [default: kairos-extension/public/icons]")]
        mirror: Option<PathBuf>,
        #[arg(long, conflicts_with = "mirror", help = "Skip mirroring")]
        no_mirror: bool,
    },
    /// iOS and Android icons plus splash screens for the native apps
    AppIcons {
        #[arg(long, value_enum, default_value_t = AppSelection::All)]
        app: AppSelection,
        #[arg(long, help = "Logo to use instead of each app's default icon")]
        source: Option<PathBuf>,
    },
    /// Rasterize a PDF, SVG, or raster logo into the web size set
    Logo {
        source: PathBuf,
        #[arg(long, help = "Output directory [default: kairos-wallet]")]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_SCALE)]
        scale: u32,
    },
    /// Report AcroForm, XFA, and field structure of a PDF
    InspectPdf { path: PathBuf },
    /// Chrome Web Store screenshots and promo tiles
    Cws {
        #[arg(long, help = "Output directory [default: kairos-extension/cws-assets]")]
        out: Option<PathBuf>,
    },
    /// Promo banners for X and Telegram
    Banners {
        #[arg(long, help = "Output directory [default: assets/promo]")]
        out: Option<PathBuf>,
        #[arg(long, help = "Round logo drawn on each banner [default: assets/branding/logo-256.png]")]
        logo: Option<PathBuf>,
    },
    /// One-page share certificate PDF
    Certificate {
        #[arg(long, help = "Output directory [default: assets/documents]")]
        out: Option<PathBuf>,
        #[arg(long, value_name = "FILE", help = "JSON file overriding certificate fields")]
        data: Option<PathBuf>,
        #[arg(long, value_name = "NAME")]
        file_name: Option<String>,
    },
    /// 32px favicon SVG with the PNG inlined
    Favicon {
        #[arg(long, help = "Source logo [default: website/kairos-logo.png]")]
        source: Option<PathBuf>,
        #[arg(long = "also-write", value_name = "PATH", help = "Additional SVG destination (repeatable)")]
        also_write: Vec<PathBuf>,
    },
    /// Every generator that needs no explicit source, concurrently
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AppSelection {
    All,
    Trade,
    Wallet,
}

impl AppSelection {
    /// Whether the app named `name` is selected.
    pub fn includes(self, name: &str) -> bool {
        match self {
            AppSelection::All => true,
            AppSelection::Trade => name.ends_with("Trade"),
            AppSelection::Wallet => name.ends_with("Wallet"),
        }
    }
}
