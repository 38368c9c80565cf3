// DIDL - didl-error
// Module: DIDL Error Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for didl-error
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
    str,
};

// Re-export error types from this crate
pub use crate::{
    codes,
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
};
