// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partition type: a division of a member set into groups.
//!
//! A partition is an ordered sequence of groups. Group order carries no
//! meaning, so partitions are compared via their canonical form: each
//! group internally sorted (a [`Group`] invariant) and the group list
//! sorted lexicographically. The generator relies on canonical forms to
//! suppress duplicate partitions cheaply.
//!
//! # Examples
//!
//! ```
//! use settle_search::partition::{Group, Partition};
//!
//! let partition = Partition::from_groups(vec![
//!     Group::new(vec![2, 3]),
//!     Group::new(vec![0, 1]),
//! ]);
//!
//! assert_eq!(partition.group_count(), 2);
//! assert_eq!(partition.member_count(), 4);
//! assert_eq!(format!("{}", partition.canonicalized()), "{0 1}{2 3}");
//! ```

use crate::partition::{Group, MemberIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A division of a member set into groups.
///
/// Catalog entries additionally satisfy: groups pairwise disjoint,
/// union equal to {0..N-1}, no empty groups, no singleton groups. The
/// raw generator output only guarantees disjointness and coverage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    groups: Vec<Group>,
}

impl Partition {
    /// Create a partition of `k` empty groups.
    ///
    /// This is the generator's base case for an empty member set.
    pub fn empty(k: usize) -> Self {
        Self {
            groups: vec![Group::empty(); k],
        }
    }

    /// Create a partition from a list of groups.
    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Get the number of groups, including any empty ones.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Get the total number of members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Get the groups as a slice.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Check if any group is empty.
    pub fn has_empty_group(&self) -> bool {
        self.groups.iter().any(Group::is_empty)
    }

    /// Check if any group has exactly one member.
    pub fn has_singleton(&self) -> bool {
        self.groups.iter().any(Group::is_singleton)
    }

    /// Return the canonical form: groups sorted lexicographically.
    ///
    /// Two partitions describe the same grouping iff their canonical
    /// forms are equal.
    pub fn canonicalized(&self) -> Self {
        let mut groups = self.groups.clone();
        groups.sort_unstable();
        Self { groups }
    }

    /// Return a copy with `member` inserted into the group at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a valid group index.
    pub fn with_inserted(&self, slot: usize, member: MemberIndex) -> Self {
        assert!(
            slot < self.groups.len(),
            "Slot {} out of bounds for partition with {} groups",
            slot,
            self.groups.len()
        );
        let mut groups = self.groups.clone();
        groups[slot].insert(member);
        Self { groups }
    }

    /// Check that the groups cover {0..size-1} exactly once each.
    ///
    /// This is the defining invariant of a partition over an index set.
    pub fn covers(&self, size: usize) -> bool {
        let mut seen = vec![false; size];
        for group in &self.groups {
            for member in group.iter() {
                if member >= size || seen[member] {
                    return false;
                }
                seen[member] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}

impl fmt::Display for Partition {
    /// Format a partition as "{0 1}{2 3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}
