//! Size allocation across file slots
//!
//! Splits a total byte budget into one size per file. Duplicate slots come
//! first and share `total / count`; every other slot but the last draws a
//! size in `[1 KiB, min(10 MiB, remaining))` while keeping 1 KiB in reserve
//! for each slot still to be assigned. The last slot takes whatever is left,
//! so the sizes sum to the requested total. When every slot is a duplicate
//! there is no slot left to absorb the remainder and the sum falls short by
//! `total % count`.

use crate::random::SeededStream;

/// Smallest size drawn for a non-duplicate slot
pub const MIN_FILE_SIZE: u64 = 1024;

/// Largest size drawn for a non-duplicate slot
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Allocate one size per slot so that the sizes sum to `total_size`
///
/// `duplicates` above `count` is clamped to `count`.
///
/// When the remaining budget is too small for a `[1 KiB, max)` draw, the
/// slot is clamped to `min(1 KiB, budget left)` without touching the stream.
pub fn allocate_sizes(
    count: usize,
    total_size: u64,
    duplicates: usize,
    stream: &mut SeededStream,
) -> Vec<u64> {
    if count == 0 {
        return Vec::new();
    }

    let duplicates = duplicates.min(count);
    let mut sizes = vec![0u64; count];
    let mut sum = 0u64;

    if duplicates > 0 {
        let duplicate_size = total_size / count as u64;
        for size in sizes.iter_mut().take(duplicates) {
            *size = duplicate_size;
            sum += duplicate_size;
        }
    }

    if duplicates == count {
        return sizes;
    }

    for i in duplicates..count - 1 {
        let reserve = (count - i - 1) as i128 * MIN_FILE_SIZE as i128;
        let remaining = total_size as i128 - sum as i128 - reserve;
        let max_size = remaining.min(MAX_FILE_SIZE as i128);

        let size = if max_size > MIN_FILE_SIZE as i128 {
            stream.next_in_range(MIN_FILE_SIZE, max_size as u64)
        } else {
            MIN_FILE_SIZE.min(total_size - sum)
        };

        sizes[i] = size;
        sum += size;
    }

    sizes[count - 1] = total_size - sum;
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_sum_matches_total() {
        let cases = [
            (1, 0, 0),
            (1, 5000, 0),
            (10, 500 * 1024 * 1024, 0),
            (10, 500 * 1024 * 1024, 3),
            (7, 123_457, 2),
            (100, 50 * 1024 * 1024, 10),
        ];

        for (seed, &(count, total, dups)) in cases.iter().enumerate() {
            let mut stream = SeededStream::new(seed as i64 + 1);
            let sizes = allocate_sizes(count, total, dups, &mut stream);
            assert_eq!(sizes.len(), count);
            assert_eq!(sizes.iter().sum::<u64>(), total, "count={} total={}", count, total);
        }
    }

    #[test]
    fn test_allocate_duplicates_share_size() {
        let mut stream = SeededStream::new(42);
        let sizes = allocate_sizes(10, 10 * 1024 * 1024, 4, &mut stream);

        let dup_size = 1024 * 1024;
        assert!(sizes[..4].iter().all(|&s| s == dup_size));
        assert_eq!(sizes.iter().sum::<u64>(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_allocate_random_slots_within_bounds() {
        let mut stream = SeededStream::new(42);
        let sizes = allocate_sizes(50, 1024 * 1024 * 1024, 0, &mut stream);

        for &size in &sizes[..49] {
            assert!(size >= MIN_FILE_SIZE);
            assert!(size < MAX_FILE_SIZE);
        }
    }

    #[test]
    fn test_allocate_small_budget_is_clamped() {
        // 10 slots but only 3 KiB: the reserve makes the draw window empty
        let mut stream = SeededStream::new(42);
        let sizes = allocate_sizes(10, 3 * 1024, 0, &mut stream);

        assert_eq!(sizes.iter().sum::<u64>(), 3 * 1024);
        assert_eq!(&sizes[..3], &[1024, 1024, 1024]);
        assert!(sizes[3..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_allocate_zero_total() {
        let mut stream = SeededStream::new(42);
        let sizes = allocate_sizes(5, 0, 2, &mut stream);
        assert_eq!(sizes, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_allocate_empty() {
        let mut stream = SeededStream::new(42);
        assert!(allocate_sizes(0, 1024, 0, &mut stream).is_empty());
    }

    #[test]
    fn test_allocate_all_duplicates_drops_remainder() {
        let mut stream = SeededStream::new(42);
        let sizes = allocate_sizes(3, 1000, 3, &mut stream);
        assert_eq!(sizes, vec![333, 333, 333]);

        let sizes = allocate_sizes(3, 1000, 7, &mut stream);
        assert_eq!(sizes, vec![333, 333, 333]);
    }

    #[test]
    fn test_allocate_all_duplicates_draws_nothing() {
        let mut used = SeededStream::new(5);
        let mut fresh = SeededStream::new(5);
        allocate_sizes(4, 4096, 4, &mut used);
        assert_eq!(used.next_int(1 << 40), fresh.next_int(1 << 40));
    }

    #[test]
    fn test_allocate_deterministic() {
        let mut s1 = SeededStream::new(9);
        let mut s2 = SeededStream::new(9);
        assert_eq!(
            allocate_sizes(20, 64 * 1024 * 1024, 2, &mut s1),
            allocate_sizes(20, 64 * 1024 * 1024, 2, &mut s2)
        );
    }
}
