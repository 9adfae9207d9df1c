// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sub-range extraction into newly allocated buffers.

use alloc::vec::Vec;

use crate::error::{RangeError, Region, check_window};

/// Copies the first `count` bytes of `source` into a newly allocated
/// buffer.
///
/// The source is never modified; the returned buffer is an independently
/// owned copy.
///
/// # Example
///
/// ```rust
/// use memrange::{RangeError, slice};
///
/// fn example() -> Result<(), RangeError> {
///     let data = [1u8, 2, 3, 4, 5];
///     let head = slice(&data, 3)?;
///     assert_eq!(head, vec![1, 2, 3]);
///     assert_eq!(data, [1, 2, 3, 4, 5]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// # Errors
///
/// Returns [`RangeError::OutOfRange`] when `count` exceeds `source.len()`.
#[inline]
pub fn slice(source: &[u8], count: usize) -> Result<Vec<u8>, RangeError> {
    slice_at(source, 0, count)
}

/// Copies `source[index..index + count]` into a newly allocated buffer.
///
/// The source is never modified. Zero-length windows are valid anywhere in
/// `0..=source.len()` and return an empty buffer.
///
/// # Example
///
/// ```rust
/// use memrange::{RangeError, slice_at};
///
/// fn example() -> Result<(), RangeError> {
///     let data = [1u8, 2, 3, 4, 5];
///     let window = slice_at(&data, 1, 3)?;
///     assert_eq!(window, vec![2, 3, 4]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// # Errors
///
/// Returns [`RangeError::OutOfRange`] when `index + count` exceeds
/// `source.len()` or overflows.
#[inline]
pub fn slice_at(source: &[u8], index: usize, count: usize) -> Result<Vec<u8>, RangeError> {
    check_window(Region::Source, index, count, source.len())?;

    Ok(source[index..index + count].to_vec())
}
