//! Adaptive ascending sort for integer windows.
//!
//! Chooses per call between a distribution-counting sort and the
//! standard comparison sort, based on the measured value range relative
//! to the window length.

use tracing::trace;

use crate::constants::{COUNTER_U16_LIMIT, COUNTER_U8_LIMIT};
use crate::element::IntRank;

/// Sort an integer window ascending in place.
///
/// Windows of length 0 or 1 return immediately; the heuristic takes a
/// logarithm of the length. The counting path allocates one frequency
/// bucket per distinct possible value in `[min, max]`, so it only runs
/// while that range stays small relative to the window.
pub(crate) fn sort_integers<T: IntRank>(window: &mut [T]) {
    let len = window.len();
    if len <= 1 {
        return;
    }

    let mut min = window[0].rank();
    let mut max = min;
    for x in &window[1..] {
        let r = x.rank();
        if r < min {
            min = r;
        }
        if r > max {
            max = r;
        }
    }
    let range = max - min + 1;

    let Ok(buckets) = usize::try_from(range) else {
        // Spread wider than the address space: counting is impossible.
        window.sort_unstable();
        return;
    };
    if comparison_preferred(len, range) {
        trace!(len, range = buckets, "comparison sort selected");
        window.sort_unstable();
        return;
    }

    trace!(len, range = buckets, "distribution sort selected");
    if len < COUNTER_U8_LIMIT {
        pigeonhole::<T, u8>(window, min, buckets);
    } else if len < COUNTER_U16_LIMIT {
        pigeonhole::<T, u16>(window, min, buckets);
    } else {
        pigeonhole::<T, u32>(window, min, buckets);
    }
}

/// Cost model: two O(len + range) passes beat O(len log len)
/// comparisons only while the range stays small relative to the window.
/// The comparison happens in `f64`; precision loss on a range that
/// large routes to the comparison sort anyway.
#[allow(clippy::cast_precision_loss)]
fn comparison_preferred(len: usize, range: i128) -> bool {
    let len_f = len as f64;
    len_f + range as f64 > len_f * len_f.log2()
}

/// Frequency-table counter. The caller picks the narrowest width that
/// cannot overflow for the window length.
trait Counter: Copy + Default {
    fn bump(&mut self);
    fn get(self) -> usize;
}

macro_rules! counter_impl {
    ($($t:ty),* $(,)?) => {$(
        impl Counter for $t {
            fn bump(&mut self) {
                *self += 1;
            }

            #[allow(clippy::cast_lossless)]
            fn get(self) -> usize {
                self as usize
            }
        }
    )*};
}
counter_impl!(u8, u16, u32);

/// Two-pass distribution sort: tally `rank - min` occurrences, then
/// rebuild the window by walking the bucket indices. Not stable;
/// ascending-order-correct and in place.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn pigeonhole<T: IntRank, C: Counter>(window: &mut [T], min: i128, buckets: usize) {
    let mut freq = vec![C::default(); buckets];
    for x in window.iter() {
        freq[(x.rank() - min) as usize].bump();
    }
    let mut idx = 0;
    for (bucket, count) in freq.iter().enumerate() {
        let value = T::from_rank(bucket as i128 + min);
        for _ in 0..count.get() {
            window[idx] = value;
            idx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{BigInt64, BigUint64};

    /// Deterministic LCG so the suites need no external randomness.
    fn pseudo_random(seed: u64, count: usize) -> Vec<u64> {
        let mut state = seed;
        (0..count)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                state
            })
            .collect()
    }

    fn assert_sorts_like_reference<T: IntRank>(mut window: Vec<T>) {
        let mut expected = window.clone();
        expected.sort_unstable();
        sort_integers(&mut window);
        assert_eq!(window, expected);
    }

    #[test]
    fn empty_and_single_windows() {
        let mut empty: Vec<i32> = vec![];
        sort_integers(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7i32];
        sort_integers(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn small_range_takes_counting_path() {
        // 1000 elements drawn from {0..50}: counting path territory.
        let window: Vec<i32> = pseudo_random(11, 1000)
            .iter()
            .map(|r| (r % 51) as i32)
            .collect();
        assert_sorts_like_reference(window);
    }

    #[test]
    fn wide_range_takes_comparison_path() {
        let window: Vec<i32> = pseudo_random(17, 200).iter().map(|r| *r as i32).collect();
        assert_sorts_like_reference(window);
    }

    #[test]
    fn negative_values() {
        assert_sorts_like_reference(vec![3i32, -1, 2, -50, 0, -1]);
    }

    #[test]
    fn u16_counter_band() {
        // Length past the u8 cutoff with a narrow value range.
        let window: Vec<u8> = pseudo_random(23, 600).iter().map(|r| (r % 7) as u8).collect();
        assert_sorts_like_reference(window);
    }

    #[test]
    fn duplicates_preserved() {
        let mut window = vec![5i16, 5, 5, 1, 1, 9];
        sort_integers(&mut window);
        assert_eq!(window, [1, 1, 5, 5, 5, 9]);
    }

    #[test]
    fn extreme_u64_spread_overflows_into_comparison() {
        let mut window = vec![BigUint64(u64::MAX), BigUint64(0), BigUint64(5)];
        sort_integers(&mut window);
        assert_eq!(window, [BigUint64(0), BigUint64(5), BigUint64(u64::MAX)]);
    }

    #[test]
    fn extreme_i64_spread() {
        let mut window = vec![BigInt64(i64::MAX), BigInt64(i64::MIN), BigInt64(0)];
        sort_integers(&mut window);
        assert_eq!(window, [BigInt64(i64::MIN), BigInt64(0), BigInt64(i64::MAX)]);
    }

    #[test]
    fn idempotent() {
        let mut window: Vec<i32> = pseudo_random(31, 300).iter().map(|r| (r % 10) as i32).collect();
        sort_integers(&mut window);
        let once = window.clone();
        sort_integers(&mut window);
        assert_eq!(window, once);
    }
}
