// DIDL - didl-decoder
// Module: DIDL Header Decoder
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! DIDL interface-description header decoder
//!
//! This crate decodes and validates the header of a binary DIDL message: the
//! magic prefix, the self-describing type table and the list of main type
//! references. It is the trust boundary for downstream deserialization;
//! every index returned by [`decode_header`] is safe to use against the type
//! table and the original buffer without further bounds checks.
//!
//! The decoder sits on top of the low-level format handling in
//! `didl-format`, which provides the strict LEB128/SLEB128 varint codec and
//! the fixed tag set. Decoding the actual values referenced by the table is
//! a separate pass, outside this crate.
//!
//! # Features
//!
//! - Single-pass header validation with no backtracking
//! - Zero-copy: the type table stores byte offsets into the borrowed buffer
//! - Strict canonical-varint and 32-bit overflow enforcement
//! - No_std and std environment support
//!
//! ## Feature Flags
//!
//! - `std` (default): Enable standard library support
//! - `alloc`: Enable allocation support (required for no_std)
//! - `log` (default): Emit decode tracing through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Import std when available
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

/// Byte cursor over the message buffer
pub mod cursor;
/// Header parsing and type-table validation
pub mod header;

pub mod prelude;

// Re-export the public decoding surface
pub use cursor::Cursor;
pub use header::{decode_header, parse_header, Header, TypeTable};
// Re-export the quick format check alongside the decoder entry points
pub use didl_format::is_valid_didl_header;
