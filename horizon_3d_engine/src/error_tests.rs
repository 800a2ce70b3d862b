//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_file_read_display() {
    let err = Error::FileRead("shaders/scene.vert: No such file or directory".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Shader file read failed"));
    assert!(display.contains("shaders/scene.vert"));
}

#[test]
fn test_compile_failed_display() {
    let err = Error::CompileFailed("0:12(3): error: syntax error".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Shader compile failed"));
    assert!(display.contains("syntax error"));
}

#[test]
fn test_attach_rejected_display() {
    let err = Error::AttachRejected("Vertex shader rejected by program".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Shader attach rejected"));
    assert!(display.contains("Vertex"));
}

#[test]
fn test_program_incomplete_display() {
    let err = Error::ProgramIncomplete("aggregate status MissingFragment".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Program incomplete"));
    assert!(display.contains("MissingFragment"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("program allocation refused by backend".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("refused"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::BackendError("x".to_string());
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone() {
    let err = Error::CompileFailed("broken".to_string());
    let cloned = err.clone();
    assert_eq!(format!("{}", err), format!("{}", cloned));
}

#[test]
fn test_error_debug() {
    let err = Error::FileRead("missing".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("FileRead"));
    assert!(debug.contains("missing"));
}

// ============================================================================
// RESULT ALIAS TESTS
// ============================================================================

#[test]
fn test_result_ok() {
    let result: Result<u32> = Ok(42);
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_err() {
    let result: Result<u32> = Err(Error::BackendError("x".to_string()));
    assert!(result.is_err());
}
