// DIDL - didl-decoder
// Module: DIDL Decoder Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for didl-decoder
//!
//! This module provides a unified set of imports for both std and `no_std`
//! environments. It re-exports commonly used types and traits to ensure
//! consistency across all crates in the DIDL project and simplify imports in
//! individual modules.

pub use core::{
    cmp::{
        Eq,
        Ord,
        PartialEq,
        PartialOrd,
    },
    convert::{
        TryFrom,
        TryInto,
    },
    fmt,
    fmt::{
        Debug,
        Display,
    },
    slice,
    str,
};

// Re-export from std when the std feature is enabled
#[cfg(feature = "std")]
pub use std::{
    format,
    string::{
        String,
        ToString,
    },
    vec,
    vec::Vec,
};

// Re-export from alloc in no_std environments
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use alloc::{
    format,
    string::{
        String,
        ToString,
    },
    vec,
    vec::Vec,
};

// Re-export from didl-error
pub use didl_error::{
    codes,
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
};
// Re-export from didl-format
pub use didl_format::binary;
