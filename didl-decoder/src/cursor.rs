// DIDL - didl-decoder
// Module: DIDL Byte Cursor
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Byte cursor for zero-copy header parsing
//!
//! The cursor borrows the message buffer and tracks a position; every read
//! advances the position and fails with a buffer underrun error rather than
//! reading past the end. The position never exceeds the buffer length.

use didl_error::{codes, Error, ErrorCategory, Result};
use didl_format::binary::{read_leb128_u32, read_sleb128_i32};

/// DIDL parsing cursor
pub struct Cursor<'a> {
    /// Data being parsed
    data: &'a [u8],
    /// Current position
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the buffer
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Get current position
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining bytes
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if cursor is at end
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        if self.pos >= self.data.len() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Unexpected end of DIDL data",
            ));
        }
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Read a 32-bit word (little-endian)
    pub fn read_u32_le(&mut self) -> Result<u32> {
        if self.pos + 4 > self.data.len() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Unexpected end of DIDL data",
            ));
        }
        let value = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(value)
    }

    /// Read an unsigned 32-bit LEB128 varint
    pub fn read_uleb128_u32(&mut self) -> Result<u32> {
        let (value, consumed) = read_leb128_u32(self.data, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Read a signed 32-bit SLEB128 varint
    pub fn read_sleb128_i32(&mut self) -> Result<i32> {
        let (value, consumed) = read_sleb128_i32(self.data, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Skip a number of bytes
    pub fn skip(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Skip beyond DIDL data bounds",
            ));
        }
        self.pos += count;
        Ok(())
    }

    /// Read a slice of bytes
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Read beyond DIDL data bounds",
            ));
        }
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Peek at the next byte without advancing
    pub fn peek_u8(&self) -> Result<u8> {
        if self.pos >= self.data.len() {
            return Err(Error::new(
                ErrorCategory::Parse,
                codes::BUFFER_UNDERRUN,
                "Peek beyond DIDL data bounds",
            ));
        }
        Ok(self.data[self.pos])
    }
}
