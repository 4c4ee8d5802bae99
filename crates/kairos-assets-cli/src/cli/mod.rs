//! CLI subcommand implementations for the kairos-assets binary.

pub mod all_cmd;
pub mod args;
pub mod generate_cmd;
pub mod inspect_cmd;
pub mod output;

use anyhow::Result;
use args::{Cli, Commands};
use kairos_assets::{FontBook, ProjectLayout};
use std::path::PathBuf;

/// Settings every subcommand shares.
#[derive(Debug, Clone)]
pub struct Context {
    pub layout: ProjectLayout,
    pub font_dirs: Vec<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        let layout = match &cli.root {
            Some(root) => ProjectLayout::new(root),
            None => ProjectLayout::from_env(),
        };
        Self {
            layout,
            font_dirs: cli.font_dirs.clone(),
        }
    }

    /// System fonts plus `--font-dir` entries.
    pub fn fonts(&self) -> FontBook {
        let fonts = FontBook::load(&self.font_dirs);
        if output::is_verbose() && !output::is_json() {
            output::print_detail(&format!("{} font faces loaded", fonts.face_count()));
        }
        fonts
    }
}

/// Run the parsed command.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli);
    match cli.command {
        Commands::ExtensionIcons { out, mirror, no_mirror } => {
            let report = generate_cmd::extension_icons(&ctx, &ctx.fonts(), out, mirror, no_mirror)?;
            generate_cmd::emit(&ctx, &report);
        }
        Commands::AppIcons { app, source } => {
            let report = generate_cmd::app_icons(&ctx, app, source)?;
            generate_cmd::emit(&ctx, &report);
        }
        Commands::Logo { source, out, scale } => {
            let report = generate_cmd::logo(&ctx, &ctx.fonts(), source, out, scale)?;
            generate_cmd::emit(&ctx, &report);
        }
        Commands::InspectPdf { path } => inspect_cmd::run(&path)?,
        Commands::Cws { out } => {
            let report = generate_cmd::cws(&ctx, &ctx.fonts(), out)?;
            generate_cmd::emit(&ctx, &report);
        }
        Commands::Banners { out, logo } => {
            let report = generate_cmd::banners(&ctx, &ctx.fonts(), out, logo)?;
            generate_cmd::emit(&ctx, &report);
        }
        Commands::Certificate { out, data, file_name } => {
            let report = generate_cmd::certificate(&ctx, out, data, file_name)?;
            generate_cmd::emit(&ctx, &report);
        }
        Commands::Favicon { source, also_write } => generate_cmd::favicon(&ctx, source, also_write)?,
        Commands::All => all_cmd::run(&ctx).await?,
    }
    Ok(())
}
