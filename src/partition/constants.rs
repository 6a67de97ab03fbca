// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants bounding the partition tables.
//!
//! The number of ways to split N members into K groups is the Stirling
//! number of the second kind S(N, K), which grows fast enough that the
//! runtime tables are restricted to a small range of set sizes. Sizes
//! outside that range fall back to the unsplit group (see the solver).
//!
//! # Supported set sizes
//!
//! - Below 4: no partition into two non-singleton groups exists
//! - 4..=9: precomputed tables (the default shared catalog)
//! - Above 9: table generation is a maintenance operation, capped at
//!   [`GENERATION_CEILING`]

/// Smallest set size with a table entry.
///
/// A set must have at least 4 members to split into two groups of two;
/// smaller sets have no partition without a singleton group.
pub const MIN_TABLE_SIZE: usize = 4;

/// Largest set size in the default shared catalog.
///
/// S(N, K) blows up combinatorially: size 9 already yields thousands of
/// candidate partitions per solve. Larger tables must be generated
/// offline with the `generate` command.
pub const MAX_TABLE_SIZE: usize = 9;

/// Hard ceiling on offline table generation.
///
/// The `generate` command refuses sizes above this rather than attempt
/// open-ended enumeration.
pub const GENERATION_CEILING: usize = 12;

/// Smallest group count worth tabulating.
///
/// K=1 is the trivial whole-set partition, which settles nothing.
pub const MIN_GROUP_COUNT: usize = 2;

/// Default tolerance for the zero-sum test.
///
/// Balances are currency values; exact floating-point equality is
/// unsafe once amounts have been divided between members. This is well
/// below cent precision.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Largest useful group count for a set of the given size.
///
/// Groups must have at least 2 members, so at most size/2 groups fit.
pub const fn max_group_count(size: usize) -> usize {
    size / 2
}

/// Compute the Stirling number of the second kind S(n, k) at compile time.
///
/// S(n, k) counts the partitions of n labeled members into k non-empty
/// unlabeled groups. Recurrence: S(n, k) = k·S(n-1, k) + S(n-1, k-1).
///
/// Used to cross-check the generator's output counts.
pub const fn stirling(n: usize, k: usize) -> u64 {
    if k == 0 {
        return if n == 0 { 1 } else { 0 };
    }
    if k > n {
        return 0;
    }
    if k == n {
        return 1;
    }
    k as u64 * stirling(n - 1, k) + stirling(n - 1, k - 1)
}

/// Compile-time assertion that the default table range is generable.
const _: () = assert!(
    MIN_TABLE_SIZE <= MAX_TABLE_SIZE && MAX_TABLE_SIZE <= GENERATION_CEILING,
    "default table range must fit under the generation ceiling"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stirling_base_cases() {
        assert_eq!(stirling(0, 0), 1);
        assert_eq!(stirling(3, 0), 0);
        assert_eq!(stirling(2, 3), 0);
        assert_eq!(stirling(5, 5), 1);
        assert_eq!(stirling(5, 1), 1);
    }

    #[test]
    fn test_stirling_known_values() {
        assert_eq!(stirling(4, 2), 7);
        assert_eq!(stirling(5, 2), 15);
        assert_eq!(stirling(5, 3), 25);
        assert_eq!(stirling(6, 3), 90);
        assert_eq!(stirling(9, 4), 7770);
    }

    #[test]
    fn test_max_group_count() {
        assert_eq!(max_group_count(4), 2);
        assert_eq!(max_group_count(5), 2);
        assert_eq!(max_group_count(8), 4);
        assert_eq!(max_group_count(9), 4);
    }
}
