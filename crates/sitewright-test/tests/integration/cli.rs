//! Integration tests for the command handlers.

use clap::Parser;

use super::helpers::settings_in;
use sitewright_test::app::cli::Cli;
use sitewright_test::app::commands::run;
use sitewright_test::component::config::Settings;

fn run_args(args: &[&str], settings: &Settings) -> (bool, String) {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("parsed");
    let mut out = Vec::new();
    let valid = run(cli.command, settings, &mut out).expect("ran");
    (valid, String::from_utf8(out).expect("utf8"))
}

/// Onboards through the CLI and lists the stored tenant.
#[test_log::test]
fn onboard_and_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(&dir);

    let (valid, output) = run_args(
        &[
            "sitewright",
            "onboard",
            "--business-name",
            "Bright Studio",
            "--email",
            "hello@bright.example",
            "--city",
            "Porto",
        ],
        &settings,
    );
    assert!(valid);
    let tenant: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(tenant["slug"], "bright-studio");
    assert_eq!(tenant["city"], "Porto");

    let (_, output) = run_args(&["sitewright", "tenants"], &settings);
    let tenants: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(tenants[0]["business_name"], "Bright Studio");
}

/// Validation commands report failure through their return value.
#[test]
fn validation_commands_signal_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(&dir);

    let (valid, _) = run_args(&["sitewright", "validate-section", "jcw-rest-01-hero1"], &settings);
    assert!(!valid);

    let (valid, output) = run_args(
        &["sitewright", "validate-composition", "nav", "hero", "nav"],
        &settings,
    );
    assert!(!valid);
    assert!(output.contains("Maximum 1 navigation section allowed per page"));

    let (valid, _) = run_args(&["sitewright", "validate-composition"], &settings);
    assert!(valid);
}
