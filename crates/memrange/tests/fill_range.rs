// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod fill_range_tests {
    use memrange::fill_range;

    #[test]
    fn test_fill_range_writes_window() {
        let mut buffer = [0u8, 0, 0, 0];
        fill_range(&mut buffer, 1, 2, 7);
        assert_eq!(buffer, [0, 7, 7, 0]);
    }

    #[test]
    fn test_fill_range_full_window() {
        let mut buffer = [1u8, 2, 3, 4];
        fill_range(&mut buffer, 0, 4, 0);
        assert_eq!(buffer, [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_range_at_end() {
        let mut buffer = [0u8, 0, 0, 0];
        fill_range(&mut buffer, 2, 2, 5);
        assert_eq!(buffer, [0, 0, 5, 5]);
    }

    #[test]
    fn test_fill_range_zero_count_is_noop() {
        let mut buffer = [1u8, 2, 3, 4];
        fill_range(&mut buffer, 2, 0, 9);
        assert_eq!(buffer, [1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_range_zero_count_at_len() {
        let mut buffer = [1u8, 2, 3];
        fill_range(&mut buffer, 3, 0, 9);
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_fill_range_with_different_types() {
        let mut words = [0u64; 6];
        fill_range(&mut words, 1, 3, 7);
        assert_eq!(words, [0, 7, 7, 7, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "fill range precondition violated")]
    fn test_fill_range_past_end_panics() {
        let mut buffer = [0u8; 4];
        fill_range(&mut buffer, 3, 2, 1);
    }

    #[test]
    fn test_fill_range_failure_leaves_buffer_untouched() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let mut buffer = [1u8, 2, 3, 4];
        let result = catch_unwind(AssertUnwindSafe(|| {
            fill_range(&mut buffer, 2, 5, 9);
        }));

        assert!(result.is_err());
        assert_eq!(buffer, [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "fill range precondition violated")]
    fn test_fill_range_offset_past_end_panics() {
        let mut buffer = [0u8; 4];
        fill_range(&mut buffer, 5, 0, 1);
    }

    #[test]
    #[should_panic(expected = "fill range precondition violated")]
    fn test_fill_range_overflowing_window_panics() {
        let mut buffer = [0u8; 4];
        fill_range(&mut buffer, usize::MAX, 2, 1);
    }
}
