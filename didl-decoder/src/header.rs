// DIDL - didl-decoder
// Module: DIDL Header Parser
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! DIDL header parsing and type-table validation
//!
//! This module walks an encoded type table once, end to end, confirming
//! structural well-formedness and that every type reference is in range. The
//! result is a table of byte offsets into the original buffer, one per type,
//! plus the offset of the main-types list. Validation never dereferences a
//! referenced type, it only checks the index; this guarantees that later
//! random-access reads into the table are safe without a second structural
//! pass. Cycles and self-references are legal here (recursive types) and are
//! the value decoder's concern.

use didl_error::{codes, Error, ErrorCategory, Result};
use didl_format::binary::{
    CON_FUNC, CON_OPT, CON_RECORD, CON_SERVICE, CON_VARIANT, CON_VEC, DIDL_MAGIC_WORD, PRIM_LOWEST,
};

use crate::cursor::Cursor;
use crate::prelude::Vec;

/// Table of type-entry byte offsets into the message buffer
///
/// Entry `i` is the offset at which type `i`'s encoding begins. Offsets are
/// strictly increasing and lie within the buffer the table was parsed from.
/// The table stores positions, not parsed structures; interpreting an entry
/// is deferred to the value-decoding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    offsets: Vec<usize>,
}

impl TypeTable {
    /// Number of type entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Byte offset of entry `index`, if in range
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// All entry offsets, in table order
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

/// A validated DIDL header
///
/// Produced once per incoming message and owned by the caller for the rest
/// of message processing. Every index recorded here is safe to use against
/// the buffer the header was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Byte offsets of the type-table entries
    pub typtbl: TypeTable,
    /// Byte offset where the main-types list begins
    pub main_types: usize,
}

/// Validate a type reference against the table size
///
/// A reference is valid when `PRIM_LOWEST <= t < n_types`: either a known
/// primitive/constructor tag or an index into the table.
fn check_type_ref(t: i32, n_types: i32) -> Result<()> {
    if t < PRIM_LOWEST || t >= n_types {
        return Err(Error::new(
            ErrorCategory::Validation,
            codes::TYPE_INDEX_OUT_OF_RANGE,
            "Type index out of range",
        ));
    }
    Ok(())
}

/// Parse and validate a DIDL header from the cursor
///
/// Consumes the magic prefix, the type table and the main-types list,
/// leaving the cursor positioned at the first value byte. Fails on the
/// first malformed construct; a partial header is never returned.
pub fn parse_header(cursor: &mut Cursor<'_>) -> Result<Header> {
    // Magic bytes (DIDL)
    if cursor.read_u32_le()? != DIDL_MAGIC_WORD {
        return Err(Error::new(
            ErrorCategory::Parse,
            codes::BAD_MAGIC,
            "Missing DIDL magic bytes",
        ));
    }

    // The count is read unsigned but compared signed below, so reject
    // anything that wrapped in the narrowing.
    let n_types = cursor.read_uleb128_u32()? as i32;
    if n_types < 0 {
        return Err(Error::new(
            ErrorCategory::Parse,
            codes::OVERFLOW_IN_COUNT,
            "Overflow in number of types",
        ));
    }

    // Early sanity check: every entry takes at least one byte. This is a
    // cheap lower bound only; exact bounds are enforced per read.
    if n_types as usize >= cursor.remaining() {
        return Err(Error::new(
            ErrorCategory::Capacity,
            codes::TOO_MANY_TYPES,
            "Too many types",
        ));
    }

    // Go through the table
    let mut offsets = Vec::with_capacity(n_types as usize);
    for _ in 0..n_types {
        offsets.push(cursor.position());
        let tag = cursor.read_sleb128_i32()?;
        if tag >= PRIM_LOWEST {
            // A table entry must itself be a constructor, never a bare
            // alias index or primitive.
            return Err(Error::new(
                ErrorCategory::Validation,
                codes::TYPE_INDEX_TOO_HIGH,
                "Type index too high",
            ));
        }
        match tag {
            CON_OPT | CON_VEC => {
                let t = cursor.read_sleb128_i32()?;
                check_type_ref(t, n_types)?;
            },
            CON_RECORD | CON_VARIANT => {
                let n_fields = cursor.read_uleb128_u32()?;
                for _ in 0..n_fields {
                    // Field id, unused for validation
                    cursor.read_uleb128_u32()?;
                    let t = cursor.read_sleb128_i32()?;
                    check_type_ref(t, n_types)?;
                }
            },
            CON_FUNC => {
                // Argument types
                let n_args = cursor.read_uleb128_u32()?;
                for _ in 0..n_args {
                    let t = cursor.read_sleb128_i32()?;
                    check_type_ref(t, n_types)?;
                }
                // Return types
                let n_rets = cursor.read_uleb128_u32()?;
                for _ in 0..n_rets {
                    let t = cursor.read_sleb128_i32()?;
                    check_type_ref(t, n_types)?;
                }
                // Annotations, opaque at this layer
                let n_anns = cursor.read_uleb128_u32()?;
                cursor.skip(n_anns as usize)?;
            },
            CON_SERVICE => {
                let n_methods = cursor.read_uleb128_u32()?;
                for _ in 0..n_methods {
                    // Method name, not validated here
                    let name_len = cursor.read_uleb128_u32()?;
                    cursor.skip(name_len as usize)?;
                    let t = cursor.read_sleb128_i32()?;
                    check_type_ref(t, n_types)?;
                }
            },
            _ => {
                // No support for future types
                return Err(Error::new(
                    ErrorCategory::Validation,
                    codes::UNSUPPORTED_FUTURE_TYPE,
                    "Unsupported future type",
                ));
            },
        }
    }

    // Now read the main types
    let main_types = cursor.position();
    let n_main = cursor.read_uleb128_u32()?;
    for _ in 0..n_main {
        let t = cursor.read_sleb128_i32()?;
        check_type_ref(t, n_types)?;
    }

    Ok(Header {
        typtbl: TypeTable { offsets },
        main_types,
    })
}

/// Decode a DIDL header from the start of a byte buffer
///
/// Convenience entry point that builds a cursor over `data` and parses the
/// header. The returned offsets index into `data`.
pub fn decode_header(data: &[u8]) -> Result<Header> {
    #[cfg(feature = "log")]
    log::trace!("decoding DIDL header, {} bytes", data.len());

    let mut cursor = Cursor::new(data);
    let header = parse_header(&mut cursor)?;

    #[cfg(feature = "log")]
    log::debug!(
        "decoded DIDL header: {} types, main types at offset {}",
        header.typtbl.len(),
        header.main_types
    );

    Ok(header)
}

#[cfg(test)]
mod tests {
    use didl_format::binary::{self, write_leb128_u32, write_sleb128_i32};

    use super::*;

    fn didl(body: &[&[u8]]) -> Vec<u8> {
        let mut bytes = binary::DIDL_MAGIC.to_vec();
        for part in body {
            bytes.extend_from_slice(part);
        }
        bytes
    }

    #[test]
    fn empty_table_and_main_types() {
        // "DIDL" 00 00: zero types, zero main types
        let header = decode_header(b"DIDL\x00\x00").unwrap();
        assert!(header.typtbl.is_empty());
        assert_eq!(header.typtbl.offset(0), None);
        assert_eq!(header.main_types, 5);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let err = decode_header(b"DIDX\x00\x00").unwrap_err();
        assert_eq!(err.code, codes::BAD_MAGIC);
        let err = decode_header(b"DI").unwrap_err();
        assert_eq!(err.code, codes::BUFFER_UNDERRUN);
    }

    #[test]
    fn overflowing_type_count_is_rejected() {
        // Overflowing 5-byte unsigned varint, nonzero top nibble at byte 5
        let bytes = didl(&[&[0x85, 0x80, 0x80, 0x80, 0x80], &[0x00]]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::INTEGER_OVERFLOW);
    }

    #[test]
    fn negative_reinterpreted_count_is_rejected() {
        // 0x80000000 survives the u32 decode but is negative as i32
        let bytes = didl(&[&write_leb128_u32(0x8000_0000), &[0x00]]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::OVERFLOW_IN_COUNT);
    }

    #[test]
    fn declared_count_beyond_buffer_is_rejected() {
        // Ten types declared with one byte left
        let bytes = didl(&[&write_leb128_u32(10), &[0x00]]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::TOO_MANY_TYPES);
        assert!(err.is_capacity_error());
    }

    #[test]
    fn vec_of_primitive_nat() {
        // One entry: vec nat; main types: [0]
        let bytes = didl(&[
            &write_leb128_u32(1),
            &write_sleb128_i32(binary::CON_VEC),
            &write_sleb128_i32(binary::PRIM_NAT),
            &write_leb128_u32(1),
            &write_sleb128_i32(0),
        ]);
        let header = decode_header(&bytes).unwrap();
        assert_eq!(header.typtbl.len(), 1);
        // Entry 0 starts right after magic and count
        assert_eq!(header.typtbl.offset(0), Some(5));
        assert_eq!(header.main_types, 7);
    }

    #[test]
    fn record_reference_out_of_range() {
        // record {0: type 5} in a table of 3 entries
        let mut bytes = didl(&[
            &write_leb128_u32(3),
            &write_sleb128_i32(binary::CON_RECORD),
            &write_leb128_u32(1),
            &write_leb128_u32(0),
            &write_sleb128_i32(5),
        ]);
        // Padding so the early bound check passes
        bytes.extend_from_slice(&[0x00; 8]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::TYPE_INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn bare_index_entry_tag_is_rejected() {
        // An entry whose own tag is 2, a table index
        let mut bytes = didl(&[&write_leb128_u32(1), &write_sleb128_i32(2)]);
        bytes.extend_from_slice(&[0x00; 4]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::TYPE_INDEX_TOO_HIGH);
    }

    #[test]
    fn primitive_entry_tag_is_rejected() {
        // A bare primitive is not a legal table entry either
        let mut bytes = didl(&[&write_leb128_u32(1), &write_sleb128_i32(binary::PRIM_NAT)]);
        bytes.extend_from_slice(&[0x00; 4]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::TYPE_INDEX_TOO_HIGH);
    }

    #[test]
    fn unknown_constructor_tag_is_rejected() {
        let mut bytes = didl(&[&write_leb128_u32(1), &write_sleb128_i32(-24)]);
        bytes.extend_from_slice(&[0x00; 4]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::UNSUPPORTED_FUTURE_TYPE);
    }

    #[test]
    fn opt_may_reference_itself() {
        // opt 0 referencing entry 0 is legal; cycles are the value
        // decoder's concern
        let bytes = didl(&[
            &write_leb128_u32(1),
            &write_sleb128_i32(binary::CON_OPT),
            &write_sleb128_i32(0),
            &write_leb128_u32(0),
        ]);
        let header = decode_header(&bytes).unwrap();
        assert_eq!(header.typtbl.len(), 1);
    }

    #[test]
    fn main_type_reference_is_validated() {
        let bytes = didl(&[
            &write_leb128_u32(1),
            &write_sleb128_i32(binary::CON_OPT),
            &write_sleb128_i32(binary::PRIM_TEXT),
            &write_leb128_u32(1),
            &write_sleb128_i32(1),
        ]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::TYPE_INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn entry_offsets_are_strictly_increasing() {
        let bytes = didl(&[
            &write_leb128_u32(3),
            // 0: vec nat8
            &write_sleb128_i32(binary::CON_VEC),
            &write_sleb128_i32(binary::PRIM_NAT8),
            // 1: opt 0
            &write_sleb128_i32(binary::CON_OPT),
            &write_sleb128_i32(0),
            // 2: record {0: 1}
            &write_sleb128_i32(binary::CON_RECORD),
            &write_leb128_u32(1),
            &write_leb128_u32(0),
            &write_sleb128_i32(1),
            // main types: [2]
            &write_leb128_u32(1),
            &write_sleb128_i32(2),
        ]);
        let header = decode_header(&bytes).unwrap();
        assert_eq!(header.typtbl.len(), 3);
        let offsets = header.typtbl.offsets();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(offsets.iter().all(|&off| off < bytes.len()));
        assert_eq!(header.main_types, offsets[2] + 4);
    }

    #[test]
    fn truncated_entry_underruns() {
        // vec whose element reference ends mid-varint
        let bytes = didl(&[
            &write_leb128_u32(1),
            &write_sleb128_i32(binary::CON_VEC),
            &[0x80],
        ]);
        let err = decode_header(&bytes).unwrap_err();
        assert_eq!(err.code, codes::BUFFER_UNDERRUN);
    }
}
