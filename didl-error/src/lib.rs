// DIDL - didl-error
// Module: DIDL Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! DIDL Error handling library
//!
//! This library provides the error handling system shared by the DIDL header
//! decoder crates. Errors are categorized with numeric codes and static
//! messages so they can be created and propagated without allocation.
//!
//! # Error Categories
//!
//! ## Parse Errors (1000-1999)
//! - Buffer underrun
//! - Bad magic prefix
//! - Non-canonical varint encodings
//! - Varint overflow
//!
//! ## Validation Errors (2000-2999)
//! - Illegal table entry tags
//! - Out-of-range type references
//! - Unsupported future type codes
//!
//! ## Capacity Errors (3000-3999)
//! - Declared counts exceeding the input size
//!
//! # Usage
//!
//! ```
//! use didl_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Parse,
//!     codes::NOT_SHORTEST_ENCODING,
//!     "not shortest encoding",
//! );
//! assert!(error.is_parse_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for the DIDL decoder
pub mod codes;
/// Error and error handling types
pub mod errors;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for DIDL decoding operations.
///
/// This type alias uses `didl_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
