// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for memrange.

use core::fmt;

use thiserror::Error;

/// Which buffer's bound a range violation refers to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Region {
    /// The buffer bytes are read from.
    Source,
    /// The buffer bytes are written to.
    Destination,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Errors from the bounds-checked range operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The requested window does not lie within the referenced buffer.
    #[error(
        "{region} range out of bounds: index {index} + count {count} exceeds {region} length {len}"
    )]
    OutOfRange {
        /// Which buffer's bound was violated.
        region: Region,
        /// Start of the requested window.
        index: usize,
        /// Length of the requested window.
        count: usize,
        /// Length of the referenced buffer.
        len: usize,
    },
}

/// Validates that `[index, index + count)` lies within a buffer of length
/// `len`. An overflowing `index + count` counts as a violation: such a
/// window cannot lie within any buffer.
#[inline]
pub(crate) fn check_window(
    region: Region,
    index: usize,
    count: usize,
    len: usize,
) -> Result<(), RangeError> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(RangeError::OutOfRange {
            region,
            index,
            count,
            len,
        }),
    }
}
