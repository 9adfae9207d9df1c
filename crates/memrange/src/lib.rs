// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds-checked slice, range-set and fill operations over byte buffers.
//!
//! Every operation validates its window before touching a single byte:
//! on failure nothing has been copied or overwritten, and the error names
//! the offending window. The operations are stateless single passes over
//! caller-supplied buffers and allocate nothing beyond the slice result.
//!
//! # Operations
//!
//! - [`slice`] / [`slice_at`]: newly allocated copy of a sub-range, source
//!   untouched
//! - [`set_range`] / [`set_range_from`]: in-place bulk copy from one
//!   buffer into a window of another
//! - [`set_range_within`]: in-place bulk copy between two windows of the
//!   same buffer, safe for overlapping windows (as if through a temporary)
//! - [`fill`] / [`fill_range`]: overwrite a buffer, or a window of it,
//!   with one value
//!
//! # Errors
//!
//! Window violations in the slice and range-set operations are recoverable
//! and return [`RangeError::OutOfRange`]; the embedded [`Region`] tells a
//! destination-bound violation apart from a source-bound one. The ranged
//! fill is stricter: its window is an enforced precondition, and violating
//! it panics in release builds too.
//!
//! Slices are always present and `usize` is never negative, so the only
//! run-time failure left to report is a window that does not fit its
//! buffer. A window whose `index + count` overflows cannot fit any buffer
//! and fails the same way.
//!
//! # Example
//!
//! ```rust
//! use memrange::{RangeError, set_range, slice_at};
//!
//! fn example() -> Result<(), RangeError> {
//!     let source = [1u8, 2, 3, 4, 5];
//!     let window = slice_at(&source, 1, 3)?;
//!     assert_eq!(window, vec![2, 3, 4]);
//!
//!     let mut dest = [0u8; 5];
//!     set_range(&mut dest, 1, &[9, 9])?;
//!     assert_eq!(dest, [0, 9, 9, 0, 0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod fill;
mod set_range;
mod slice;

pub use error::{RangeError, Region};
pub use fill::{fill, fill_range};
pub use set_range::{set_range, set_range_from, set_range_within};
pub use slice::{slice, slice_at};

/// A shared empty byte slice, for callers that need a zero-length buffer
/// without allocating one.
pub const EMPTY: &[u8] = &[];
