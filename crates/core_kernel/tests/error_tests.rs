//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{CaseReference, FixedClock, PortError};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("missing FLOW_CASE_DIR");
    assert_eq!(error.to_string(), "Configuration error: missing FLOW_CASE_DIR");
}

#[test]
fn test_core_error_from_identifier_error() {
    let identifier_error = CaseReference::new(7).unwrap_err();
    let core_error: CoreError = identifier_error.into();
    assert!(matches!(core_error, CoreError::Identifier(_)));
}

#[test]
fn test_core_error_from_temporal_error() {
    let temporal_error = FixedClock::parse("not a time").unwrap_err();
    let core_error: CoreError = temporal_error.into();
    assert!(core_error.to_string().starts_with("Temporal error"));
}

#[test]
fn test_port_error_internal() {
    let error = PortError::internal("adapter crashed");
    assert!(!error.is_not_found());
    assert_eq!(error.to_string(), "Internal error: adapter crashed");
}
