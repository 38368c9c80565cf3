// DIDL - didl-format
// Module: DIDL Binary Format Definitions
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! DIDL wire format handling
//!
//! This crate defines the DIDL binary format: the magic prefix, the fixed
//! set of primitive and constructor type tags, and the strict LEB128/SLEB128
//! varint codec used to read header fields.
//!
//! It is designed to work in both std and `no_std` environments when
//! configured with the appropriate feature flags.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Import std when available
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

/// Binary format constants and varint codec
pub mod binary;

pub mod prelude;

// Re-export the most commonly used items
pub use binary::{
    is_constructor_tag,
    is_primitive_tag,
    is_valid_didl_header,
    read_leb128_u32,
    read_sleb128_i32,
    CON_FUNC,
    CON_LOWEST,
    CON_OPT,
    CON_RECORD,
    CON_SERVICE,
    CON_VARIANT,
    CON_VEC,
    DIDL_MAGIC,
    DIDL_MAGIC_WORD,
    PRIM_LOWEST,
};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use binary::{write_leb128_u32, write_sleb128_i32};
