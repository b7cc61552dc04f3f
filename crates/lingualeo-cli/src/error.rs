//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from lingualeo-core library
    #[error("{0}")]
    Core(#[from] lingualeo_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination or missing required value
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Some words could not be looked up or added
    #[error("{}", describe_failures(.failed, .total, .add_failed, .add_total))]
    PartialFailure {
        failed: usize,
        total: usize,
        add_failed: usize,
        add_total: usize,
    },

    /// The pronunciation player could not be run
    #[error("Player '{player}' failed: {message}")]
    Player { player: String, message: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(lingualeo_core::Error::Authentication { .. }) => 9,
            Self::Core(lingualeo_core::Error::Http(_)) => 10,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::PartialFailure { .. } => 7,
            Self::Player { .. } => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

fn describe_failures(
    failed: &usize,
    total: &usize,
    add_failed: &usize,
    add_total: &usize,
) -> String {
    let mut parts = Vec::new();
    if *failed > 0 {
        parts.push(format!("{} of {} word(s) failed", failed, total));
    }
    if *add_failed > 0 {
        parts.push(format!(
            "{} of {} dictionary addition(s) failed",
            add_failed, add_total
        ));
    }
    parts.join("; ")
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_args("x").exit_code(), 6);
        let partial = Error::PartialFailure {
            failed: 1,
            total: 3,
            add_failed: 0,
            add_total: 0,
        };
        assert_eq!(partial.exit_code(), 7);
        let auth = Error::Core(lingualeo_core::Error::Authentication {
            message: "bad password".to_string(),
        });
        assert_eq!(auth.exit_code(), 9);
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::PartialFailure {
            failed: 1,
            total: 3,
            add_failed: 0,
            add_total: 0,
        };
        assert_eq!(format_error(&err, false), "Error: 1 of 3 word(s) failed");
    }

    #[test]
    fn test_partial_failure_reports_both_stages() {
        let err = Error::PartialFailure {
            failed: 1,
            total: 3,
            add_failed: 2,
            add_total: 2,
        };
        assert_eq!(
            err.to_string(),
            "1 of 3 word(s) failed; 2 of 2 dictionary addition(s) failed"
        );

        let add_only = Error::PartialFailure {
            failed: 0,
            total: 3,
            add_failed: 1,
            add_total: 2,
        };
        assert_eq!(add_only.to_string(), "1 of 2 dictionary addition(s) failed");
    }

    #[test]
    fn test_should_show_help() {
        assert!(Error::invalid_args("No words").should_show_help());
        assert!(!Error::config("bad").should_show_help());
    }
}
