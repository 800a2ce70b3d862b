//! Error types for the Horizon3D engine
//!
//! This module defines the error types used throughout the engine,
//! covering shader builds, device allocation, and file loading.

use std::fmt;

/// Result type for Horizon3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Horizon3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Shader source file missing or unreadable
    FileRead(String),

    /// Backend rejected a shader source
    CompileFailed(String),

    /// Attach attempted against an unsatisfied precondition
    AttachRejected(String),

    /// Aggregate program status was not Ready at build time
    ProgramIncomplete(String),

    /// Backend refused an allocation or failed internally
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileRead(msg) => write!(f, "Shader file read failed: {}", msg),
            Error::CompileFailed(msg) => write!(f, "Shader compile failed: {}", msg),
            Error::AttachRejected(msg) => write!(f, "Shader attach rejected: {}", msg),
            Error::ProgramIncomplete(msg) => write!(f, "Program incomplete: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
