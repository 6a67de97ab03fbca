// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for catalog lookup, application, and asset handling.

use thiserror::Error;

/// Errors from catalog queries and partition application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No table entry exists for the requested set size.
    ///
    /// Expected flow for out-of-range sizes; the solver absorbs this
    /// and degrades to the unsplit fallback.
    #[error("no partition table for groups of {size} members (supported sizes {min}..={max})")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    /// The item list does not match the partition's index universe.
    ///
    /// A caller contract violation, not expected in normal operation.
    #[error("partition covers {expected} members but {actual} items were supplied")]
    IndexMismatch { expected: usize, actual: usize },

    /// Table generation was asked for a size above the hard ceiling.
    #[error("table generation capped at {ceiling} members, {requested} requested")]
    GenerationCeiling { requested: usize, ceiling: usize },
}

/// Errors from reading or writing the offline partition asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read or write partition asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed partition asset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("partition asset format version {found} not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// An entry fails the table invariants (coverage, no empty or
    /// singleton groups). Guards against hand-edited assets.
    #[error("partition asset entry for size {size} is not a valid table entry")]
    InvalidEntry { size: usize },
}
