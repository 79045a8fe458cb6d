//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ExtractError: Issues with reading or parsing the version manifest
//! - FetchError: Issues with the GitHub contents API
//! - ContextError: Issues with the CI environment context
//!
//! ExtractError and ContextError are fatal and fail the run. FetchError is
//! the sole recoverable kind: the comparison is skipped, not failed.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version extraction related errors
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// GitHub contents API related errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// CI environment context related errors
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Errors raised while extracting a version from a manifest
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The manifest file name is not one of the supported formats
    #[error("\"{file_name}\" is not supported!")]
    UnsupportedFormat { file_name: String },

    /// Failed to read the manifest from the workspace
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing error (for pom.xml)
    #[error("failed to parse XML in {file_name}: {message}")]
    XmlParseError { file_name: String, message: String },

    /// JSON parsing error (for package.json)
    #[error("failed to parse JSON in {file_name}: {message}")]
    JsonParseError { file_name: String, message: String },

    /// The manifest parsed but carries no version field
    #[error("no version field found in {file_name}")]
    MissingVersionField { file_name: String },
}

/// Errors raised by the GitHub contents API fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Path does not exist at the requested ref
    #[error("`{path}` not found at ref `{reference}`")]
    NotFound { path: String, reference: String },

    /// GitHub responded with a non-success status
    #[error("GitHub API returned HTTP {status} for `{path}`")]
    Http { path: String, status: u16 },

    /// Request never produced a response
    #[error("failed to fetch `{path}` from GitHub: {message}")]
    Network { path: String, message: String },
}

/// Errors raised while resolving the CI environment context
#[derive(Error, Debug)]
pub enum ContextError {
    /// A required environment variable or flag is missing
    #[error("missing required context: {name}")]
    Missing { name: String },

    /// GITHUB_REPOSITORY is not of the form "owner/name"
    #[error("malformed repository slug '{value}': expected 'owner/name'")]
    MalformedRepository { value: String },

    /// The event payload file could not be read or parsed
    #[error("failed to read event payload {path}: {message}")]
    EventPayload { path: PathBuf, message: String },
}

impl ExtractError {
    /// Creates a new UnsupportedFormat error
    pub fn unsupported(file_name: impl Into<String>) -> Self {
        ExtractError::UnsupportedFormat {
            file_name: file_name.into(),
        }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new XmlParseError
    pub fn xml_parse_error(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        ExtractError::XmlParseError {
            file_name: file_name.into(),
            message: message.into(),
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        ExtractError::JsonParseError {
            file_name: file_name.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingVersionField error
    pub fn missing_version(file_name: impl Into<String>) -> Self {
        ExtractError::MissingVersionField {
            file_name: file_name.into(),
        }
    }
}

impl FetchError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<String>, reference: impl Into<String>) -> Self {
        FetchError::NotFound {
            path: path.into(),
            reference: reference.into(),
        }
    }

    /// Creates a new Http error
    pub fn http(path: impl Into<String>, status: u16) -> Self {
        FetchError::Http {
            path: path.into(),
            status,
        }
    }

    /// Creates a new Network error
    pub fn network(path: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Network {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ContextError {
    /// Creates a new Missing error
    pub fn missing(name: impl Into<String>) -> Self {
        ContextError::Missing { name: name.into() }
    }

    /// Creates a new MalformedRepository error
    pub fn malformed_repository(value: impl Into<String>) -> Self {
        ContextError::MalformedRepository {
            value: value.into(),
        }
    }
}
