// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for member subgroups whose balances settle to zero.
//!
//! Given the net balances of a group sharing expenses, this crate finds
//! subgroups that can settle their debts entirely among themselves:
//! every subgroup's balances sum to zero, so no money needs to cross
//! subgroup boundaries.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Catalog (Immutable)
//!
//! Precomputed partition tables that never change once built:
//! - For each supported set size, every way to split {0..size-1} into
//!   K non-empty, non-singleton groups, for K from size/2 down to 2
//! - Built lazily once per process, or generated offline and shipped
//!   as a JSON asset
//! - Shared read-only across threads without locking
//!
//! ## Tier 2: Solver (Per Call)
//!
//! A solve walks the catalog entry for the input's size in order and
//! tests each partition's groups for a zero balance sum. First match
//! wins; no enumeration happens on the solve path.
//!
//! # Search Order
//!
//! Catalog entries are ordered by decreasing group count, so the solver
//! tries the finest decompositions (the smallest settlement clusters)
//! before coarser ones. The result is the first qualifying partition
//! under that order, not an optimum.
//!
//! # Example
//!
//! ```
//! use settle_search::{Settlement, SettlementSolver};
//!
//! let mut solver = SettlementSolver::new();
//! let settlement = solver.find_zero_balance_subsets(&[5.0, -5.0, 3.0, -3.0]);
//!
//! assert!(settlement.is_found());
//! assert_eq!(settlement.into_groups().len(), 2);
//! ```

pub mod catalog;
pub mod generator;
pub mod partition;
pub mod solver;

// Re-export commonly used types
pub use catalog::{apply_partition, AssetError, CatalogError, CatalogTable};
pub use partition::{Group, MemberIndex, Partition};
pub use solver::{Settlement, SettlementSolver};
