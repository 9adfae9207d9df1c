// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place bulk copies into a window of a destination buffer.

use crate::error::{RangeError, Region, check_window};

/// Copies all of `src` into `destination` starting at `index`.
///
/// Equivalent to [`set_range_from`] with the full source window.
///
/// # Example
///
/// ```rust
/// use memrange::{RangeError, set_range};
///
/// fn example() -> Result<(), RangeError> {
///     let mut dest = [0u8; 5];
///     set_range(&mut dest, 1, &[9, 9])?;
///     assert_eq!(dest, [0, 9, 9, 0, 0]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// # Errors
///
/// Returns [`RangeError::OutOfRange`] when `index + src.len()` exceeds
/// `destination.len()`.
#[inline]
pub fn set_range(destination: &mut [u8], index: usize, src: &[u8]) -> Result<(), RangeError> {
    set_range_from(destination, index, src, 0, src.len())
}

/// Copies `src[src_index..src_index + count]` into
/// `destination[index..index + count]`, overwriting in place.
///
/// The destination bound is checked before the source bound; on failure
/// nothing has been written. The borrow checker rules out aliasing between
/// `destination` and `src`; for copies between two windows of one buffer
/// use [`set_range_within`].
///
/// # Example
///
/// ```rust
/// use memrange::{RangeError, set_range_from};
///
/// fn example() -> Result<(), RangeError> {
///     let mut dest = [0u8; 5];
///     set_range_from(&mut dest, 2, &[7, 8, 9], 1, 2)?;
///     assert_eq!(dest, [0, 0, 8, 9, 0]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// # Errors
///
/// Returns [`RangeError::OutOfRange`] with [`Region::Destination`] when
/// `index + count` exceeds `destination.len()`, and with [`Region::Source`]
/// when `src_index + count` exceeds `src.len()`.
#[inline]
pub fn set_range_from(
    destination: &mut [u8],
    index: usize,
    src: &[u8],
    src_index: usize,
    count: usize,
) -> Result<(), RangeError> {
    check_window(Region::Destination, index, count, destination.len())?;
    check_window(Region::Source, src_index, count, src.len())?;

    destination[index..index + count].copy_from_slice(&src[src_index..src_index + count]);

    Ok(())
}

/// Copies `buffer[src_index..src_index + count]` onto
/// `buffer[index..index + count]` within one buffer.
///
/// Overlapping windows are copied as if through a temporary, so the
/// destination always receives the bytes the source window held before the
/// call. The destination bound is checked before the source bound; on
/// failure nothing has been written.
///
/// # Example
///
/// ```rust
/// use memrange::{RangeError, set_range_within};
///
/// fn example() -> Result<(), RangeError> {
///     let mut buffer = [1u8, 2, 3, 4, 5];
///     // Overlapping shift right by one.
///     set_range_within(&mut buffer, 1, 0, 3)?;
///     assert_eq!(buffer, [1, 1, 2, 3, 5]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// # Errors
///
/// Returns [`RangeError::OutOfRange`] with [`Region::Destination`] when
/// `index + count` exceeds `buffer.len()`, and with [`Region::Source`] when
/// `src_index + count` does.
#[inline]
pub fn set_range_within(
    buffer: &mut [u8],
    index: usize,
    src_index: usize,
    count: usize,
) -> Result<(), RangeError> {
    check_window(Region::Destination, index, count, buffer.len())?;
    check_window(Region::Source, src_index, count, buffer.len())?;

    buffer.copy_within(src_index..src_index + count, index);

    Ok(())
}
