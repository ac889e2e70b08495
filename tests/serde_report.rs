//! Serialized failure reports.
#![cfg(feature = "serde")]

use catch_this::{catch, Failure, Report};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("could not load settings")]
struct LoadFailed {
    #[source]
    cause: std::io::Error,
}

#[test]
fn test_report_json_shape() {
    let failure = Failure::new(LoadFailed {
        cause: std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml missing"),
    });

    let json = serde_json::to_value(failure.report()).unwrap();
    assert_eq!(json["message"], "could not load settings");
    assert!(json["kind"].as_str().unwrap().ends_with("LoadFailed"));
    assert_eq!(json["causes"], serde_json::json!(["settings.toml missing"]));
}

#[test]
fn test_report_without_causes_omits_field() {
    let json = serde_json::to_string(&Failure::msg("plain").report()).unwrap();
    assert!(!json.contains("causes"));

    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back.message, "plain");
    assert!(back.causes.is_empty());
}

#[test]
fn test_report_captured_from_handler() {
    let mut reports = Vec::new();
    catch(
        || "12a".parse::<u16>(),
        |e| reports.push(serde_json::to_string(&e.report()).unwrap()),
    )
    .unwrap();

    assert_eq!(reports.len(), 1);
    let report: Report = serde_json::from_str(&reports[0]).unwrap();
    assert!(report.kind.ends_with("ParseIntError"));
    assert_eq!(report.message, "invalid digit found in string");
}
