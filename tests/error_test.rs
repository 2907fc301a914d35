use std::io;

use stamp::error::Error;

#[test]
fn test_io_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("'files' must name at least one path or pattern".to_string());
    assert_eq!(err.to_string(), "validation error: 'files' must name at least one path or pattern");

    let err = Error::ConfigError("invalid task definition".to_string());
    assert_eq!(err.to_string(), "configuration error: invalid task definition");
}

#[test]
fn test_resolution_error_names_the_path() {
    let err = Error::ResolutionError {
        path: "/tmp/missing.txt".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };

    let message = err.to_string();
    assert!(message.contains("/tmp/missing.txt"));
    assert!(message.contains("no such file"));
}

#[test]
fn test_pattern_error_passes_cause_through() {
    let pattern_err = glob::Pattern::new("a[").unwrap_err();
    let err: Error = pattern_err.into();

    assert!(matches!(err, Error::PatternError(_)));
}
