use clap::{CommandFactory, Parser};
use kairos_assets_cli::cli::args::{AppSelection, Cli, Commands};
use std::path::PathBuf;

#[test]
fn definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["kairos-assets", "cws", "--root", "/repo", "--json"]).unwrap();
    assert_eq!(cli.root, Some(PathBuf::from("/repo")));
    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Cws { out: None }));
}

#[test]
fn app_icons_selection() {
    let cli = Cli::try_parse_from(["kairos-assets", "app-icons", "--app", "wallet"]).unwrap();
    match cli.command {
        Commands::AppIcons { app, source } => {
            assert_eq!(app, AppSelection::Wallet);
            assert!(source.is_none());
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(Cli::try_parse_from(["kairos-assets", "app-icons", "--app", "exchange"]).is_err());
}

#[test]
fn logo_requires_source_and_defaults_scale() {
    assert!(Cli::try_parse_from(["kairos-assets", "logo"]).is_err());
    let cli = Cli::try_parse_from(["kairos-assets", "logo", "Kairos 2.pdf"]).unwrap();
    match cli.command {
        Commands::Logo { source, out, scale } => {
            assert_eq!(source, PathBuf::from("Kairos 2.pdf"));
            assert!(out.is_none());
            assert_eq!(scale, 4);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn favicon_extra_destinations_repeat() {
    let cli = Cli::try_parse_from([
        "kairos-assets",
        "favicon",
        "--also-write",
        "a.svg",
        "--also-write",
        "b.svg",
    ])
    .unwrap();
    match cli.command {
        Commands::Favicon { also_write, .. } => assert_eq!(also_write.len(), 2),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn quiet_and_verbose_conflict() {
    assert!(Cli::try_parse_from(["kairos-assets", "-q", "-v", "all"]).is_err());
}

#[test]
fn extension_icons_mirror_flags_conflict() {
    assert!(Cli::try_parse_from(["kairos-assets", "extension-icons", "--no-mirror", "--mirror", "x"]).is_err());
    let cli = Cli::try_parse_from(["kairos-assets", "extension-icons", "--no-mirror"]).unwrap();
    assert!(matches!(cli.command, Commands::ExtensionIcons { no_mirror: true, .. }));
}

#[test]
fn app_selection_matches_target_names() {
    assert!(AppSelection::All.includes("Kairos Trade"));
    assert!(AppSelection::Trade.includes("Kairos Trade"));
    assert!(!AppSelection::Trade.includes("Kairos Wallet"));
}
