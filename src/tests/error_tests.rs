//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::TrieError;
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, AppError, ErrorContext, ErrorReporter, TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = AppError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component")
        .with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that a context without details prints a single line.
#[test]
fn test_error_context_without_details() {
    let context = ErrorContext::new(AppError::from(TrieError::EmptyWord), "word_list");

    assert_eq!(
        context.to_string(),
        "Error in word_list: Invalid input: Empty word not allowed"
    );
    assert!(context.details.is_none());
}

/// Test that component errors convert into the crate error.
#[test]
fn test_error_conversions() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let app_error = AppError::from(io_error);
    assert!(matches!(app_error, AppError::Io(_)));
    assert!(app_error.to_string().contains("file not found"));

    let app_error = AppError::from(TrieError::EmptyWord);
    assert_eq!(app_error.to_string(), "Invalid input: Empty word not allowed");

    let app_error = AppError::from(ConfigError::InvalidLogLevel("loud".to_string()));
    assert_eq!(
        app_error.to_string(),
        "Configuration error: Unknown log level \"loud\" (expected trace, debug, info, warn or error)"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct CountingErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reported errors.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));

    report_error(ErrorContext::new(
        AppError::Custom("test error".to_string()),
        "test_component",
    ));
    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);

    // A second reporter is ignored
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));
    report_error(ErrorContext::new(
        AppError::Custom("again".to_string()),
        "test_component",
    ));
    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 2);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(AppError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
