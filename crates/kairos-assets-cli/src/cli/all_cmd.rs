//! `all`: run every default generator concurrently and summarize.
//!
//! Generators are CPU-bound, so each one runs on the blocking pool. A failure
//! in one does not stop the others; the command fails once all have finished.

use crate::cli::generate_cmd;
use crate::cli::output::{self, Styled};
use crate::cli::Context;
use anyhow::{bail, Result};
use kairos_assets::{favicon, FontBook, GenerationReport};
use serde::Serialize;
use tracing::debug;

type Generator = fn(&Context, &FontBook) -> Result<GenerationReport>;

/// Generators with fixed default sources, in report order.
pub const GENERATORS: [(&str, Generator); 6] = [
    ("extension-icons", extension_icons),
    ("app-icons", app_icons),
    ("cws", cws),
    ("banners", banners),
    ("certificate", certificate),
    ("favicon", favicon_only),
];

fn extension_icons(ctx: &Context, fonts: &FontBook) -> Result<GenerationReport> {
    generate_cmd::extension_icons(ctx, fonts, None, None, false)
}

fn app_icons(ctx: &Context, _: &FontBook) -> Result<GenerationReport> {
    generate_cmd::app_icons(ctx, crate::cli::args::AppSelection::All, None)
}

fn cws(ctx: &Context, fonts: &FontBook) -> Result<GenerationReport> {
    generate_cmd::cws(ctx, fonts, None)
}

fn banners(ctx: &Context, fonts: &FontBook) -> Result<GenerationReport> {
    generate_cmd::banners(ctx, fonts, None, None)
}

fn certificate(ctx: &Context, _: &FontBook) -> Result<GenerationReport> {
    generate_cmd::certificate(ctx, None, None, None)
}

fn favicon_only(ctx: &Context, _: &FontBook) -> Result<GenerationReport> {
    let job = generate_cmd::favicon_job(ctx, None, Vec::new());
    Ok(favicon::generate(&job)?.0)
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub generator: String,
    pub error: String,
}

/// Outcome of a concurrent run, in generator order.
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub reports: Vec<GenerationReport>,
    pub failures: Vec<Failure>,
}

/// Run `generators` on the blocking pool and wait for all of them.
pub async fn run_generators(ctx: &Context, fonts: &FontBook, generators: &[(&str, Generator)]) -> Summary {
    let handles: Vec<_> = generators
        .iter()
        .map(|&(name, generate)| {
            let ctx = ctx.clone();
            let fonts = fonts.clone();
            debug!(generator = name, "spawning");
            (name, tokio::task::spawn_blocking(move || generate(&ctx, &fonts)))
        })
        .collect();

    let mut summary = Summary::default();
    for (name, handle) in handles {
        match handle.await {
            Ok(Ok(report)) => summary.reports.push(report),
            Ok(Err(e)) => summary.failures.push(Failure {
                generator: name.to_string(),
                error: format!("{e:#}"),
            }),
            Err(e) => summary.failures.push(Failure {
                generator: name.to_string(),
                error: format!("task failed: {e}"),
            }),
        }
    }
    summary
}

pub async fn run(ctx: &Context) -> Result<()> {
    let fonts = ctx.fonts();
    let summary = run_generators(ctx, &fonts, &GENERATORS).await;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&summary)?);
    } else {
        let s = Styled::new();
        if !output::is_quiet() {
            output::print_header(&s);
        }
        for report in &summary.reports {
            output::print_report(&s, report, ctx.layout.root());
        }
        for failure in &summary.failures {
            output::print_check(s.fail_sym(), &failure.generator, &failure.error);
        }
        let written: usize = summary.reports.iter().map(|r| r.assets.len()).sum();
        if !output::is_quiet() {
            let status = if summary.failures.is_empty() {
                s.green("done")
            } else {
                s.yellow("incomplete")
            };
            output::print_status(
                &s,
                &status,
                &format!("{written} files, {} failed generators", summary.failures.len()),
            );
        }
    }

    if !summary.failures.is_empty() {
        bail!("{} of {} generators failed", summary.failures.len(), GENERATORS.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_assets::ProjectLayout;

    fn failing(_: &Context, _: &FontBook) -> Result<GenerationReport> {
        bail!("source missing")
    }

    fn succeeding(_: &Context, _: &FontBook) -> Result<GenerationReport> {
        Ok(GenerationReport::new("ok"))
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_other_generators() {
        let ctx = Context {
            layout: ProjectLayout::new("/nonexistent"),
            font_dirs: Vec::new(),
        };
        let generators: [(&str, Generator); 3] = [("a", succeeding), ("b", failing), ("c", succeeding)];
        let summary = run_generators(&ctx, &FontBook::empty(), &generators).await;
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].generator, "b");
        assert!(summary.failures[0].error.contains("source missing"));
    }

    #[test]
    fn test_generator_names_are_unique() {
        let mut names: Vec<_> = GENERATORS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GENERATORS.len());
    }
}
