// DIDL - didl-error
// Module: DIDL Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for the DIDL header decoder
//!
//! Codes are grouped by category: parse errors in the 1000 range,
//! validation errors in the 2000 range, capacity errors in the 3000 range.

// Parse error codes (1000-1999)

/// A read would cross the end of the input buffer
pub const BUFFER_UNDERRUN: u16 = 1000;
/// The magic prefix does not identify a DIDL message
pub const BAD_MAGIC: u16 = 1001;
/// A varint byte sequence contains a redundant continuation byte
pub const NOT_SHORTEST_ENCODING: u16 = 1002;
/// A varint's magnitude does not fit in 32 bits
pub const INTEGER_OVERFLOW: u16 = 1003;
/// A count varint, reinterpreted as signed, is negative
pub const OVERFLOW_IN_COUNT: u16 = 1004;
/// General parse error
pub const PARSE_ERROR: u16 = 1005;

// Validation error codes (2000-2999)

/// A table entry's own tag is not a constructor
pub const TYPE_INDEX_TOO_HIGH: u16 = 2000;
/// A referenced type id is outside the valid range
pub const TYPE_INDEX_OUT_OF_RANGE: u16 = 2001;
/// An entry tag outside the fixed known tag set
pub const UNSUPPORTED_FUTURE_TYPE: u16 = 2002;
/// General validation error
pub const VALIDATION_ERROR: u16 = 2003;

// Capacity error codes (3000-3999)

/// Declared type-table entry count exceeds the remaining buffer size
pub const TOO_MANY_TYPES: u16 = 3000;
