//! Tests for severity ordering and parsing.

use groundwork::{Error, Severity};

#[test]
fn ordering() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Critical);
}

#[test]
fn display() {
    assert_eq!(Severity::Debug.to_string(), "DEBUG");
    assert_eq!(Severity::Info.to_string(), "INFO");
    assert_eq!(Severity::Warning.to_string(), "WARNING");
    assert_eq!(Severity::Error.to_string(), "ERROR");
    assert_eq!(Severity::Critical.to_string(), "CRITICAL");
}

#[test]
fn from_str() {
    assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
    assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("crit".parse::<Severity>().unwrap(), Severity::Critical);
    assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
}

#[test]
fn from_str_invalid() {
    let err = "fatal".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "unknown severity: 'fatal'");
}

#[test]
fn parse_failure_converts_to_crate_error() {
    let err = Error::from("fatal".parse::<Severity>().unwrap_err());
    assert!(matches!(err, Error::InvalidSeverity(_)));
    assert_eq!(err.to_string(), "unknown severity: 'fatal'");
}

#[test]
fn default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn all_is_ordered() {
    let all = Severity::all();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}
