// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! K-way partition enumeration.
//!
//! This module generates every distinct way to split a member list into
//! exactly K groups. Empty groups are permitted at this stage; the
//! [`filters`] adapters strip empty and singleton groups for the
//! catalog's use.
//!
//! # Generation Algorithm
//!
//! Recursive insertion. To partition `[x, rest..]` into K groups:
//! partition `rest` into K groups, then insert `x` into each of the K
//! group slots in turn, giving K candidates per sub-partition.
//!
//! Duplicates arise only when two slots of one sub-partition hold equal
//! groups (both empty, since non-empty groups of one partition are
//! never set-equal). The construction therefore emits canonically equal
//! partitions adjacently, and a single previous-value comparison
//! ([`Itertools::dedup`]) suppresses them. A traversal that reorders
//! the stream (e.g. a parallel split of the recursion) would break this
//! and must use a full seen-set over canonical forms instead.
//!
//! Output size for N members and K groups, after the non-empty filter,
//! is the Stirling number of the second kind S(N, K); that growth
//! motivates precomputing tables per size (see the catalog).
//!
//! # Examples
//!
//! ```
//! use settle_search::generator::{clustering, non_empty};
//!
//! let members = vec![0, 1, 2, 3];
//! // S(4, 2) = 7 ways into two non-empty groups
//! assert_eq!(non_empty(clustering(&members, 2)).count(), 7);
//! ```

pub mod filters;

pub use filters::{no_singletons, non_empty, non_empty_clustering};

use crate::partition::{MemberIndex, Partition};
use itertools::Itertools;
use std::iter;

/// Generate all distinct K-way partitions of `items`, lazily.
///
/// Every yielded partition is in canonical form (groups sorted), and no
/// two yielded partitions are canonically equal. Empty groups are
/// permitted; compose with [`non_empty`] to drop them.
///
/// Edge cases: `k == 0` with non-empty items yields nothing; any `k`
/// with empty items yields the single partition of `k` empty groups.
pub fn clustering(items: &[MemberIndex], k: usize) -> Box<dyn Iterator<Item = Partition> + '_> {
    if items.is_empty() {
        return Box::new(iter::once(Partition::empty(k)));
    }

    let head = items[0];
    let tail = &items[1..];

    // The recursive stream is canonical and duplicate-free, so the K
    // insertions of `head` per sub-partition can only collide with each
    // other, and collisions land adjacently after canonicalization.
    Box::new(
        clustering(tail, k)
            .flat_map(move |sub| (0..k).map(move |slot| sub.with_inserted(slot, head)))
            .map(|p| p.canonicalized())
            .dedup(),
    )
}
