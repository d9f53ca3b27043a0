//! Tests for file configuration and CLI merging.

use std::fs;

use clap::Parser;
use groundwork::{Cli, Error, FileConfig, Settings, Severity, When};
use tempfile::tempdir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["groundwork"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = FileConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(config.console.color.is_none());
    assert!(config.console.bell.is_none());
    assert!(config.console.force_wide.is_none());
}

#[test]
fn file_values_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[console]\ncolor = \"never\"\nbell = \"always\"\nforce_wide = true\n",
    )
    .unwrap();

    let config = FileConfig::load_from(&path).unwrap();
    assert_eq!(config.console.color, Some(When::Never));
    assert_eq!(config.console.bell, Some(When::Always));
    assert_eq!(config.console.force_wide, Some(true));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[console\ncolor = never").unwrap();

    match FileConfig::load_from(&path) {
        Err(Error::ConfigParse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn cli_flags_override_file_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[console]\ncolor = \"never\"\n").unwrap();
    let file = FileConfig::load_from(&path).unwrap();

    let settings = Settings::merge(&parse(&["--color", "always"]), &file);
    assert_eq!(settings.color, When::Always);

    // Without the flag the file value applies.
    let settings = Settings::merge(&parse(&[]), &file);
    assert_eq!(settings.color, When::Never);
}

#[test]
fn unset_everywhere_falls_back_to_auto() {
    let settings = Settings::merge(&parse(&[]), &FileConfig::default());
    assert_eq!(settings.color, When::Auto);
    assert_eq!(settings.bell, When::Auto);
    assert!(!settings.force_wide);
    assert_eq!(settings.verbosity, 0);
}

#[test]
fn second_extended_forces_wide() {
    let settings = Settings::merge(&parse(&["-e", "-e"]), &FileConfig::default());
    assert_eq!(settings.extended, 2);
    assert!(settings.force_wide);

    let settings = Settings::merge(&parse(&["-e"]), &FileConfig::default());
    assert!(!settings.force_wide);
}

#[test]
fn console_options_resolution() {
    let settings = Settings::merge(
        &parse(&["--bell", "always", "--color", "never", "-e"]),
        &FileConfig::default(),
    );
    let options = settings.console_options();
    assert!(!options.colors);
    assert!(options.extended);
    assert_eq!(options.bells.get(&Severity::Error).unwrap(), "\u{7}\u{7}\u{7}");

    // Bells off leaves the map empty.
    let settings = Settings::merge(&parse(&["--bell", "never"]), &FileConfig::default());
    assert!(settings.console_options().bells.is_empty());
}
