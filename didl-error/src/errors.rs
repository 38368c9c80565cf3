// DIDL - didl-error
// Module: DIDL Error Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling for the DIDL decoder crates.
///
/// This module provides the error type shared by all decoder crates. Errors
/// carry a category, a numeric code and a static message; they are `Copy` so
/// they can be created and propagated in `no_std` environments without
/// allocation.
use core::fmt;

use crate::codes;

/// `Error` categories for DIDL decoding operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Errors while reading the raw byte stream (truncation, bad varints)
    Parse      = 1,
    /// Errors in the decoded structure (bad tags, out-of-range references)
    Validation = 2,
    /// Declared sizes exceeding what the input can hold
    Capacity   = 3,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// DIDL `Error` type
///
/// The single error type used across the decoder. A malformed header
/// invalidates the whole message, so errors carry no recovery state; the
/// outermost caller decides whether the failure is fatal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a buffer underrun error
    #[must_use]
    pub const fn buffer_underrun(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::BUFFER_UNDERRUN, message)
    }

    /// Create a general parse error
    #[must_use]
    pub const fn parse_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::PARSE_ERROR, message)
    }

    /// Create a general validation error
    #[must_use]
    pub const fn validation_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::VALIDATION_ERROR, message)
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_preserves_category_and_code() {
        let err = Error::new(
            ErrorCategory::Parse,
            codes::NOT_SHORTEST_ENCODING,
            "not shortest encoding",
        );
        assert_eq!(err.category, ErrorCategory::Parse);
        assert_eq!(err.code, codes::NOT_SHORTEST_ENCODING);
        assert!(err.is_parse_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn display_includes_category_and_code() {
        let err = Error::buffer_underrun("unexpected end of input");
        let rendered = std::format!("{err}");
        assert!(rendered.contains("Parse"));
        assert!(rendered.contains("unexpected end of input"));
    }

    #[test]
    fn helper_constructors_pick_the_right_category() {
        assert!(Error::parse_error("x").is_parse_error());
        assert!(Error::validation_error("x").is_validation_error());
        let cap = Error::new(ErrorCategory::Capacity, codes::TOO_MANY_TYPES, "too many types");
        assert!(cap.is_capacity_error());
    }

    #[test]
    fn every_category_is_distinct() {
        // The full category set; each one is produced somewhere in the
        // decoder (Parse by the codec and cursor, Validation by the header
        // walk, Capacity by the early count bound).
        let all = [
            ErrorCategory::Parse,
            ErrorCategory::Validation,
            ErrorCategory::Capacity,
        ];
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }
}
