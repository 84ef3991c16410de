// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for rasteraug.

use thiserror::Error;

/// Top-level error type for all rasteraug operations.
///
/// Every variant is produced before any output buffer is allocated; an
/// operation either returns a complete buffer or one of these.
#[derive(Debug, Error)]
pub enum AugmentError {
    // -- Buffer errors --
    #[error("invalid image shape: {0}")]
    InvalidShape(String),

    // -- Parameter errors --
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Configuration loading --
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse error category, for callers that map failures onto their own
/// exception hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The pixel buffer itself is malformed.
    Shape,
    /// A transform parameter is out of range.
    Argument,
    /// A configuration file could not be read or parsed.
    Config,
}

impl AugmentError {
    /// Classify this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            AugmentError::InvalidShape(_) => ErrorClass::Shape,
            AugmentError::InvalidArgument(_) => ErrorClass::Argument,
            AugmentError::Io(_) | AugmentError::Serialization(_) => ErrorClass::Config,
        }
    }

    /// Shorthand for [`AugmentError::InvalidShape`].
    pub fn shape(detail: impl Into<String>) -> Self {
        AugmentError::InvalidShape(detail.into())
    }

    /// Shorthand for [`AugmentError::InvalidArgument`].
    pub fn argument(detail: impl Into<String>) -> Self {
        AugmentError::InvalidArgument(detail.into())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AugmentError>;
