// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place assignment of one value across a buffer or a window of it.

/// Overwrites every element of `slice` with `value`.
///
/// No-op on an empty slice; no bounds error is possible.
///
/// # Example
///
/// ```rust
/// use memrange::fill;
///
/// let mut buffer = [0u8; 4];
/// fill(&mut buffer, 0xAB);
/// assert_eq!(buffer, [0xAB; 4]);
/// ```
#[inline]
pub fn fill<T: Copy>(slice: &mut [T], value: T) {
    for item in slice.iter_mut() {
        *item = value;
    }
}

/// Overwrites `slice[offset..offset + count]` with `value`, leaving every
/// other element untouched.
///
/// The window is an enforced precondition, not validated input: callers
/// pass ranges they already know fit, and a violation is a programming
/// error.
///
/// # Panics
///
/// Panics when `offset + count` exceeds `slice.len()` or overflows, in
/// release builds as well.
///
/// # Example
///
/// ```rust
/// use memrange::fill_range;
///
/// let mut buffer = [0u8; 4];
/// fill_range(&mut buffer, 1, 2, 7);
/// assert_eq!(buffer, [0, 7, 7, 0]);
/// ```
#[inline]
pub fn fill_range<T: Copy>(slice: &mut [T], offset: usize, count: usize, value: T) {
    assert!(
        offset
            .checked_add(count)
            .is_some_and(|end| end <= slice.len()),
        "fill range precondition violated: offset ({}) + count ({}) exceeds length ({})",
        offset,
        count,
        slice.len()
    );

    for item in slice[offset..offset + count].iter_mut() {
        *item = value;
    }
}
