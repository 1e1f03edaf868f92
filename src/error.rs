//! Error types for the component packager
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the component packager
#[derive(Error, Debug)]
pub enum PackagerError {
    /// Errors related to component discovery
    #[error("Component discovery error: {message}")]
    Discovery {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Errors related to bundler invocation
    #[error("Build error: {message}")]
    Build {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Errors related to bundle relocation
    #[error("Relocation error: {message}")]
    Relocate {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Errors related to package scaffolding
    #[error("Scaffold error: {message}")]
    Scaffold {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Errors related to fixture synchronization
    #[error("Fixture error: {message}")]
    Fixture {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process execution errors
    #[error("Process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl PackagerError {
    /// Create a new component discovery error
    pub fn discovery<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Discovery {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a new build error
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new relocation error
    pub fn relocate<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Relocate {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a new scaffold error
    pub fn scaffold<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Scaffold {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a new fixture synchronization error
    pub fn fixture<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Fixture {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PackagerError>;
