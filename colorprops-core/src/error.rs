//! # Error Types
//!
//! Errors produced while locating, reading and querying color properties.
//! Construction failures fall into two broad kinds (see [ErrorKind]): the
//! explicitly named file is missing, or some I/O level problem occurred
//! (nothing found, unreadable stream, malformed text).

use std::path::PathBuf;
use thiserror::Error;

use crate::color::ColorParseError;

/// Errors raised by the properties text parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertiesError {
    /// A `\uXXXX` escape was not followed by four hex digits.
    #[error("Malformed \\uxxxx encoding on line {line}")]
    MalformedUnicodeEscape {
        /// 1-based line on which the logical line containing the escape starts.
        line: usize,
    },
}

/// Errors that can occur while building or querying a configuration store.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The explicitly supplied properties file does not exist.
    #[error("Color.properties file does not exist: {path:?}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// None of the candidate locations held a properties file.
    #[error("Color.properties was not found! (searched: {searched:?})")]
    PropertiesNotFound {
        /// Every candidate path that was checked, in order.
        searched: Vec<PathBuf>,
    },

    /// No root directories were supplied to search.
    #[error("No application root directories supplied to search for Color.properties")]
    NoRootDirectories,

    /// A located file could not be opened or read.
    #[error("Failed to read {path:?}: {source}")]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A located file contained malformed properties text.
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: PropertiesError,
    },

    /// The requested key is not present in the store.
    #[error("Property '{key}' is not defined")]
    PropertyMissing {
        /// The key that was looked up.
        key: String,
    },

    /// The stored value could not be converted into a color.
    #[error("Property '{key}' has invalid color value '{value}': {source}")]
    InvalidColor {
        /// The key that was looked up.
        key: String,
        /// The raw stored value.
        value: String,
        /// Why the value was rejected.
        #[source]
        source: ColorParseError,
    },

    /// The loader configuration could not be read or parsed.
    #[error("Invalid loader configuration: {details}")]
    Config {
        /// Details about the problem.
        details: String,
    },
}

/// Coarse classification of a [ConfigError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An explicitly named file does not exist.
    NotFound,
    /// Nothing could be located, or a located file could not be read or parsed.
    Io,
    /// A lookup on a loaded store failed.
    Lookup,
    /// The loader configuration itself is invalid.
    Config,
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a file not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a read error for the given file.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for the given file.
    pub fn parse(path: impl Into<PathBuf>, source: PropertiesError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a property missing error.
    pub fn property_missing(key: impl Into<String>) -> Self {
        Self::PropertyMissing { key: key.into() }
    }

    /// Create a loader configuration error.
    pub fn config(details: impl Into<String>) -> Self {
        Self::Config {
            details: details.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PropertiesNotFound { .. }
            | Self::NoRootDirectories
            | Self::Read { .. }
            | Self::Parse { .. } => ErrorKind::Io,
            Self::PropertyMissing { .. } | Self::InvalidColor { .. } => ErrorKind::Lookup,
            Self::Config { .. } => ErrorKind::Config,
        }
    }
}
