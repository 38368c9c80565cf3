// DIDL - didl-format
// Module: DIDL Binary Format Definitions
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! DIDL binary format constants and varint codec
//!
//! This module defines the fixed wire-level constants of the DIDL header
//! format (magic prefix, primitive and constructor type tags) together with
//! the strict LEB128/SLEB128 codec used to read them.
//!
//! The readers here are stricter than a generic LEB128 decoder: they reject
//! non-canonical (non-shortest) encodings and any value whose magnitude does
//! not fit in 32 bits. Downstream decoding relies on these guarantees.

use didl_error::{codes, Error, ErrorCategory, Result};

#[cfg(any(feature = "std", feature = "alloc"))]
use crate::prelude::Vec;

/// Magic bytes identifying a DIDL message ("DIDL" in ASCII)
pub const DIDL_MAGIC: [u8; 4] = [0x44, 0x49, 0x44, 0x4C];

/// The magic prefix read as one little-endian 32-bit word
pub const DIDL_MAGIC_WORD: u32 = 0x4C44_4944;

// Primitive type tags. Negative by construction; values >= 0 are
// indices into the type table.

/// `null` primitive type tag
pub const PRIM_NULL: i32 = -1;
/// `bool` primitive type tag
pub const PRIM_BOOL: i32 = -2;
/// `nat` primitive type tag
pub const PRIM_NAT: i32 = -3;
/// `int` primitive type tag
pub const PRIM_INT: i32 = -4;
/// `nat8` primitive type tag
pub const PRIM_NAT8: i32 = -5;
/// `nat16` primitive type tag
pub const PRIM_NAT16: i32 = -6;
/// `nat32` primitive type tag
pub const PRIM_NAT32: i32 = -7;
/// `nat64` primitive type tag
pub const PRIM_NAT64: i32 = -8;
/// `int8` primitive type tag
pub const PRIM_INT8: i32 = -9;
/// `int16` primitive type tag
pub const PRIM_INT16: i32 = -10;
/// `int32` primitive type tag
pub const PRIM_INT32: i32 = -11;
/// `int64` primitive type tag
pub const PRIM_INT64: i32 = -12;
/// `float32` primitive type tag
pub const PRIM_FLOAT32: i32 = -13;
/// `float64` primitive type tag
pub const PRIM_FLOAT64: i32 = -14;
/// `text` primitive type tag
pub const PRIM_TEXT: i32 = -15;
/// `reserved` primitive type tag
pub const PRIM_RESERVED: i32 = -16;
/// `empty` primitive type tag
pub const PRIM_EMPTY: i32 = -17;

/// The most negative primitive tag; any tag below this is a constructor
/// or invalid
pub const PRIM_LOWEST: i32 = -17;

// Constructor type tags. A table entry always starts with one of these.

/// `opt T` constructor tag
pub const CON_OPT: i32 = -18;
/// `vec T` constructor tag
pub const CON_VEC: i32 = -19;
/// `record {...}` constructor tag
pub const CON_RECORD: i32 = -20;
/// `variant {...}` constructor tag
pub const CON_VARIANT: i32 = -21;
/// `func (...) -> (...)` constructor tag
pub const CON_FUNC: i32 = -22;
/// `service {...}` constructor tag
pub const CON_SERVICE: i32 = -23;

/// The most negative constructor tag; any tag below this is unknown
pub const CON_LOWEST: i32 = -23;

/// Check whether a tag denotes a primitive type
#[must_use]
pub const fn is_primitive_tag(tag: i32) -> bool {
    tag >= PRIM_LOWEST && tag < 0
}

/// Check whether a tag denotes a type constructor
#[must_use]
pub const fn is_constructor_tag(tag: i32) -> bool {
    tag >= CON_LOWEST && tag < PRIM_LOWEST
}

/// Check whether a byte buffer starts with the DIDL magic prefix
#[must_use]
pub fn is_valid_didl_header(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && bytes[0..4] == DIDL_MAGIC
}

/// Read a LEB128 encoded unsigned 32-bit integer
///
/// Returns the decoded value and the number of bytes consumed. Rejects
/// non-shortest encodings (a continuation position whose payload bits are all
/// zero) and values that do not fit in 32 bits.
pub fn read_leb128_u32(bytes: &[u8], pos: usize) -> Result<(u32, usize)> {
    let mut result = 0u32;
    let mut shift = 0u32;
    let mut offset = 0usize;

    loop {
        if pos + offset >= bytes.len() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Truncated LEB128 integer",
            ));
        }

        let byte = bytes[pos + offset];
        offset += 1;

        if shift > 0 && byte == 0x00 {
            // The low 7 bits are all zeros, so a shorter encoding of the
            // same value existed.
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::NOT_SHORTEST_ENCODING,
                "LEB128 integer is not shortest encoding",
            ));
        }

        if shift == 28 && (byte & 0xF0) != 0x00 {
            // The 5th byte must be the last and may contribute at most
            // 4 bits.
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::INTEGER_OVERFLOW,
                "LEB128 integer too large for u32",
            ));
        }

        result |= u32::from(byte & 0x7F) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            break;
        }
    }

    Ok((result, offset))
}

/// Read a SLEB128 encoded signed 32-bit integer
///
/// Returns the decoded value and the number of bytes consumed. Rejects
/// non-shortest encodings (a redundant all-zero or all-sign continuation
/// byte) and values that do not fit in 32 bits. Values shorter than 32 bits
/// are sign-extended.
pub fn read_sleb128_i32(bytes: &[u8], pos: usize) -> Result<(i32, usize)> {
    let mut result = 0u32;
    let mut shift = 0u32;
    let mut offset = 0usize;
    let mut last_sign_bit_set = false;

    loop {
        if pos + offset >= bytes.len() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Truncated SLEB128 integer",
            ));
        }

        let byte = bytes[pos + offset];
        offset += 1;

        if shift == 28 && !((byte & 0xF0) == 0x00 || (byte & 0xF0) == 0x70) {
            // The 5th byte must be the last; its top nibble is either all
            // zeros or all ones depending on sign.
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::INTEGER_OVERFLOW,
                "SLEB128 integer too large for i32",
            ));
        }

        if shift > 0
            && ((!last_sign_bit_set && byte == 0x00) || (last_sign_bit_set && byte == 0x7F))
        {
            // The byte repeats the previous sign bit and contributes no
            // magnitude, so a shorter encoding existed.
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::NOT_SHORTEST_ENCODING,
                "SLEB128 integer is not shortest encoding",
            ));
        }

        last_sign_bit_set = byte & 0x40 != 0;
        result |= u32::from(byte & 0x7F) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            break;
        }
    }

    // Sign extend if necessary
    if shift < 32 && last_sign_bit_set {
        result |= !0u32 << shift;
    }

    Ok((result as i32, offset))
}

/// Write a LEB128 encoded unsigned 32-bit integer in canonical form
#[cfg(any(feature = "std", feature = "alloc"))]
#[must_use]
pub fn write_leb128_u32(value: u32) -> Vec<u8> {
    let mut result = Vec::new();
    let mut value = value;

    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value != 0 {
            byte |= 0x80;
        }

        result.push(byte);

        if value == 0 {
            break;
        }
    }

    result
}

/// Write a SLEB128 encoded signed 32-bit integer in canonical form
#[cfg(any(feature = "std", feature = "alloc"))]
#[must_use]
pub fn write_sleb128_i32(value: i32) -> Vec<u8> {
    let mut result = Vec::new();
    let mut value = value;

    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;

        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);
        if done {
            result.push(byte);
            break;
        }
        result.push(byte | 0x80);
    }

    result
}
