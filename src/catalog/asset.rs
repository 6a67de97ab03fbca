// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Offline partition asset (JSON).
//!
//! Generating tables for the larger sizes is expensive, so production
//! deployments can pay that cost once: the `settle generate` command
//! writes the tables to a JSON file, and a solver loads them back at
//! startup instead of enumerating. Loading validates every entry
//! against the table invariants, since the asset may have been edited
//! or produced by an older build.

use crate::catalog::{AssetError, CatalogTable};
use crate::partition::Partition;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Format version written to and expected from asset files.
const FORMAT_VERSION: u32 = 1;

/// On-disk shape of the partition asset.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct AssetFile {
    format_version: u32,
    tables: BTreeMap<usize, Vec<Partition>>,
}

/// Write a catalog to a JSON asset file.
pub fn save_asset(catalog: &CatalogTable, path: &Path) -> Result<(), AssetError> {
    let asset = AssetFile {
        format_version: FORMAT_VERSION,
        tables: catalog.tables().clone(),
    };
    let json = serde_json::to_string(&asset)?;
    fs::write(path, json)?;
    info!(path = %path.display(), sizes = catalog.len(), "wrote partition asset");
    Ok(())
}

/// Load a catalog from a JSON asset file.
///
/// Fails on unknown format versions and on entries that violate the
/// table invariants (coverage of {0..size-1}, no empty groups, no
/// singleton groups, group counts descending).
pub fn load_asset(path: &Path) -> Result<CatalogTable, AssetError> {
    let json = fs::read_to_string(path)?;
    let asset: AssetFile = serde_json::from_str(&json)?;

    if asset.format_version != FORMAT_VERSION {
        return Err(AssetError::UnsupportedVersion {
            found: asset.format_version,
            expected: FORMAT_VERSION,
        });
    }

    for (&size, entries) in &asset.tables {
        if !entry_is_valid(size, entries) {
            return Err(AssetError::InvalidEntry { size });
        }
    }

    info!(path = %path.display(), sizes = asset.tables.len(), "loaded partition asset");
    Ok(CatalogTable::from_tables(asset.tables))
}

/// Check one size entry against the table invariants.
fn entry_is_valid(size: usize, entries: &[Partition]) -> bool {
    let coherent = entries
        .iter()
        .all(|p| p.covers(size) && !p.has_empty_group() && !p.has_singleton());
    let descending = entries
        .windows(2)
        .all(|w| w[0].group_count() >= w[1].group_count());
    coherent && descending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Group;

    #[test]
    fn test_invalid_entry_detected() {
        // A singleton group violates the table invariant
        let bad = Partition::from_groups(vec![Group::new(vec![0]), Group::new(vec![1, 2, 3])]);
        assert!(!entry_is_valid(4, &[bad]));

        // A partition not covering the size does too
        let short = Partition::from_groups(vec![Group::new(vec![0, 1]), Group::new(vec![2, 3])]);
        assert!(!entry_is_valid(5, &[short.clone()]));
        assert!(entry_is_valid(4, &[short]));
    }

    #[test]
    fn test_ascending_group_counts_rejected() {
        let two = Partition::from_groups(vec![Group::new(vec![0, 1, 2]), Group::new(vec![3, 4, 5])]);
        let three = Partition::from_groups(vec![
            Group::new(vec![0, 1]),
            Group::new(vec![2, 3]),
            Group::new(vec![4, 5]),
        ]);
        assert!(entry_is_valid(6, &[three.clone(), two.clone()]));
        assert!(!entry_is_valid(6, &[two, three]));
    }
}
