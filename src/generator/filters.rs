// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Filter adapters over the partition stream.
//!
//! Pure predicates composed over [`clustering`]'s output. They drop
//! whole partitions and never reorder the survivors, so the
//! deterministic generation order reaches the catalog intact.

use crate::generator::clustering;
use crate::partition::{MemberIndex, Partition};

/// Keep only partitions where every group has at least one member.
pub fn non_empty<I>(partitions: I) -> impl Iterator<Item = Partition>
where
    I: Iterator<Item = Partition>,
{
    partitions.filter(|p| !p.has_empty_group())
}

/// Keep only partitions where no group has exactly one member.
///
/// Applied on top of [`non_empty`] when building catalog entries: a
/// singleton cannot settle a debt among itself, so such partitions are
/// of no practical value.
pub fn no_singletons<I>(partitions: I) -> impl Iterator<Item = Partition>
where
    I: Iterator<Item = Partition>,
{
    partitions.filter(|p| !p.has_singleton())
}

/// Generate all K-way partitions of `items` with no empty group.
///
/// Convenience composition of [`clustering`] and [`non_empty`].
pub fn non_empty_clustering(
    items: &[MemberIndex],
    k: usize,
) -> impl Iterator<Item = Partition> + '_ {
    non_empty(clustering(items, k))
}
