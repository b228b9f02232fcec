//! Capacity and sort-selection constants.

/// Minimum element capacity of any allocation.
///
/// A floor to avoid reallocation thrashing on tiny arrays.
pub const MIN_CAPACITY: usize = 10;

/// Divisor applied to a front-growth allocation to size the leading
/// slack reserved ahead of the live window (one quarter).
pub const FRONT_SLACK_DIVISOR: usize = 4;

/// Window lengths below this tally into `u8` frequency buckets.
pub const COUNTER_U8_LIMIT: usize = 1 << 8;

/// Window lengths below this tally into `u16` frequency buckets.
pub const COUNTER_U16_LIMIT: usize = 1 << 16;
