use anyhow::Result;
use clap::Parser;
use kairos_assets_cli::cli::{self, args::Cli, output};
use tracing_subscriber::EnvFilter;

fn init_tracing(mode: output::OutputMode) -> Result<()> {
    let level = if mode.verbose {
        "debug"
    } else if mode.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => EnvFilter::try_new(spec)?,
        _ => EnvFilter::new("warn")
            .add_directive(format!("kairos_assets={level}").parse()?)
            .add_directive(format!("kairos_assets_cli={level}").parse()?),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let mode = output::OutputMode {
        json: args.json,
        quiet: args.quiet,
        verbose: args.verbose,
    };
    output::init(mode);
    init_tracing(mode)?;

    tracing::debug!("kairos-assets v{}", env!("CARGO_PKG_VERSION"));
    cli::dispatch(args).await
}
