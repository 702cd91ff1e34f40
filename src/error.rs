//! # Error Handling
//!
//! This module defines the error type for everything that can stop a
//! `cpe-manager` run: invalid command-line combinations, an unreachable or
//! unparseable dictionary, and a CPE that fails validation on the
//! single-CPE path. It uses `thiserror`, and each variant's display string
//! is the message printed to the user.
//!
//! Grammar errors for individual names live in [`crate::cpe::CpeError`] and
//! [`crate::validate::ValidationError`]. During a bulk dictionary scan those
//! are counted rather than raised, so they only reach this type through
//! [`Error::Validation`].

use thiserror::Error;

use crate::validate::ValidationError;

/// Main error type for cpe-manager operations
#[derive(Error, Debug)]
pub enum Error {
    /// A flag was given without the flag it depends on.
    #[error("{message}")]
    Usage { message: String },

    /// The requested naming version is not 2.2 or 2.3.
    #[error("Invalid mode: {mode}; must be 2.2 or 2.3")]
    InvalidMode { mode: String },

    /// An explicitly requested local dictionary does not exist.
    #[error("No such file or directory: {path}")]
    NotFound { path: String },

    /// An explicitly requested remote dictionary could not be fetched.
    #[error("Unexpected error occurred while obtaining {url}: {message}")]
    Network { url: String, message: String },

    /// Neither the local default nor the default URL yielded a dictionary.
    #[error("Unexpected error occurred and no local file to read from: {message}")]
    NoDictionarySource { message: String },

    /// The dictionary is not well-formed XML.
    #[error("Invalid XML found while loading {origin}; cannot parse")]
    XmlParse { origin: String },

    /// A CPE given for `--describe` failed validation.
    ///
    /// The inner error is part of the message rather than a source, so the
    /// report shows it once.
    #[error("Validation failed: {0}")]
    Validation(ValidationError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
