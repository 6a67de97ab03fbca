// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed partition tables (immutable once built).
//!
//! For each supported set size, the table holds every partition of
//! {0..size-1} into K groups with 2 ≤ K ≤ size/2, no empty groups and
//! no singleton groups, ordered by decreasing K. More groups first
//! means the solver tries the finest decompositions (the smallest
//! settlement clusters) before coarser ones.
//!
//! A table is built once and never changes, so it can be shared
//! read-only across threads without locking. The process-wide default
//! is [`shared`], built lazily behind a `OnceLock`; alternatively a
//! table can be generated offline and shipped as a JSON asset (see
//! [`asset`]).
//!
//! # Examples
//!
//! ```
//! use settle_search::catalog::{apply_partition, CatalogTable};
//!
//! let table = CatalogTable::generate(4..=5).unwrap();
//! let partitions = table.partitions_for(4).unwrap();
//!
//! // The three 2+2 pairings of four members
//! assert_eq!(partitions.len(), 3);
//!
//! let items = ["a", "b", "c", "d"];
//! let groups = apply_partition(&partitions[0], &items).unwrap();
//! assert_eq!(groups.len(), 2);
//! ```

pub mod asset;
pub mod errors;

pub use asset::{load_asset, save_asset};
pub use errors::{AssetError, CatalogError};

use crate::generator::{no_singletons, non_empty_clustering};
use crate::partition::constants::{
    max_group_count, GENERATION_CEILING, MAX_TABLE_SIZE, MIN_GROUP_COUNT, MIN_TABLE_SIZE,
};
use crate::partition::{MemberIndex, Partition};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;
use tracing::debug;

/// Partition tables keyed by set size.
///
/// Immutable after construction. Entry invariants: every partition
/// covers {0..size-1}, has no empty or singleton group, and entries are
/// ordered by decreasing group count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTable {
    tables: BTreeMap<usize, Vec<Partition>>,
}

impl CatalogTable {
    /// Generate tables for every size in the given range.
    ///
    /// Sizes above [`GENERATION_CEILING`] are refused: enumeration cost
    /// is a Stirling-number blowup, and the ceiling keeps an offline
    /// generation run bounded.
    pub fn generate(sizes: RangeInclusive<usize>) -> Result<Self, CatalogError> {
        let max = *sizes.end();
        if max > GENERATION_CEILING {
            return Err(CatalogError::GenerationCeiling {
                requested: max,
                ceiling: GENERATION_CEILING,
            });
        }

        let mut tables = BTreeMap::new();
        for size in sizes {
            let entries = build_for_size(size);
            debug!(size, partitions = entries.len(), "generated partition table");
            tables.insert(size, entries);
        }
        Ok(Self { tables })
    }

    /// Build a catalog from already-validated tables.
    ///
    /// Used by the asset loader after it has checked entry invariants.
    pub(crate) fn from_tables(tables: BTreeMap<usize, Vec<Partition>>) -> Self {
        Self { tables }
    }

    /// Get the partitions for a set size, finest decompositions first.
    pub fn partitions_for(&self, size: usize) -> Result<&[Partition], CatalogError> {
        self.tables
            .get(&size)
            .map(Vec::as_slice)
            .ok_or(CatalogError::UnsupportedSize {
                size,
                min: self.tables.keys().next().copied().unwrap_or(MIN_TABLE_SIZE),
                max: self.tables.keys().last().copied().unwrap_or(MAX_TABLE_SIZE),
            })
    }

    /// Check whether a table entry exists for the given size.
    pub fn supports(&self, size: usize) -> bool {
        self.tables.contains_key(&size)
    }

    /// Iterate over the supported sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.tables.keys().copied()
    }

    /// Get the number of size entries in the catalog.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub(crate) fn tables(&self) -> &BTreeMap<usize, Vec<Partition>> {
        &self.tables
    }
}

/// Build the table entry for one set size.
///
/// For K from size/2 down to 2, run the generator over 0..size, keep
/// partitions with no empty and no singleton group, and append the
/// survivors in that K-descending order.
fn build_for_size(size: usize) -> Vec<Partition> {
    let members: Vec<MemberIndex> = (0..size).collect();
    let mut entries = Vec::new();

    for k in (MIN_GROUP_COUNT..=max_group_count(size)).rev() {
        entries.extend(no_singletons(non_empty_clustering(&members, k)));
    }
    entries
}

/// Re-map an index partition onto a concrete item list.
///
/// Each index in each group becomes `items[index]`. The item list must
/// have exactly as many items as the partition has members; anything
/// else is a caller contract violation reported as
/// [`CatalogError::IndexMismatch`], never silently degraded.
pub fn apply_partition<T: Clone>(
    partition: &Partition,
    items: &[T],
) -> Result<Vec<Vec<T>>, CatalogError> {
    let expected = partition.member_count();
    if items.len() != expected {
        return Err(CatalogError::IndexMismatch {
            expected,
            actual: items.len(),
        });
    }

    Ok(partition
        .groups()
        .iter()
        .map(|group| group.iter().map(|member| items[member].clone()).collect())
        .collect())
}

/// Get the process-wide shared catalog for the default size range.
///
/// Built on first use and immutable afterwards; the `OnceLock` makes
/// first-use construction race-free, and all later callers share the
/// same read-only table.
pub fn shared() -> &'static CatalogTable {
    static SHARED: OnceLock<CatalogTable> = OnceLock::new();
    SHARED.get_or_init(|| {
        CatalogTable::generate(MIN_TABLE_SIZE..=MAX_TABLE_SIZE)
            .expect("default table range is below the generation ceiling")
    })
}
