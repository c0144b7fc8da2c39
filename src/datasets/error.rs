//! Errors raised while loading bundled datasets.

use std::str::Utf8Error;

use arrow::error::ArrowError;

/// Failure to resolve or parse a named resource.
///
/// Resources are static files shipped with the tool, so none of these are
/// transient. Callers get them unmodified and should treat them as a
/// packaging defect.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// The named resource does not exist in the source.
    #[error("resource not found: {name}")]
    ResourceNotFound { name: String },

    /// The resource is not valid UTF-8 text.
    #[error("resource '{name}' is not valid UTF-8")]
    Encoding {
        name: String,
        #[source]
        source: Utf8Error,
    },

    /// The resource is not comma-delimited text with a consistent column count.
    #[error("failed to parse resource '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: ArrowError,
    },

    /// The resource exists but could not be read.
    #[error("failed to read resource '{name}'")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl DatasetError {
    pub fn resource_not_found(name: impl Into<String>) -> Self {
        Self::ResourceNotFound { name: name.into() }
    }

    pub fn parse(name: impl Into<String>, source: ArrowError) -> Self {
        Self::Parse {
            name: name.into(),
            source,
        }
    }

    /// Maps an I/O failure, treating a missing file as a missing resource.
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        let name = name.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::ResourceNotFound { name },
            _ => Self::Io { name, source },
        }
    }
}
