// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zero-balance settlement search.
//!
//! The solver takes a list of member balances and looks for a way to
//! split it into groups that each sum to zero: subgroups that can
//! settle their debts among themselves without involving anyone else.
//!
//! The search scans the catalog entry for the list's size in order:
//! group counts descending, so the finest decomposition wins. The first
//! partition whose groups all sum to zero (within the configured
//! tolerance) is returned; there is no optimality guarantee beyond
//! that fixed order. Sizes without a catalog entry, and searches where
//! no partition qualifies, return the whole list as one unsplit group.
//!
//! The two outcomes are distinct variants of [`Settlement`], so a
//! caller can always tell a genuine decomposition from the fallback.
//!
//! # Examples
//!
//! ```
//! use settle_search::solver::{Settlement, SettlementSolver};
//!
//! let mut solver = SettlementSolver::new();
//!
//! match solver.find_zero_balance_subsets(&[5.0, -5.0, 3.0, -3.0]) {
//!     Settlement::Found(groups) => assert_eq!(groups.len(), 2),
//!     Settlement::Fallback(_) => unreachable!(),
//! }
//!
//! // Two members are below the smallest table size
//! let result = solver.find_zero_balance_subsets(&[10.0, -10.0]);
//! assert!(matches!(result, Settlement::Fallback(_)));
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::catalog::{self, apply_partition, CatalogTable};
use crate::partition::constants::DEFAULT_TOLERANCE;
use crate::partition::Partition;
use tracing::debug;

/// Outcome of a settlement search.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// A decomposition was found: every group sums to zero within
    /// tolerance. Balances keep their input values.
    Found(Vec<Vec<f64>>),

    /// No decomposition exists for these balances, or the set size has
    /// no catalog entry. Carries the input unchanged.
    Fallback(Vec<f64>),
}

impl Settlement {
    /// Check whether a genuine decomposition was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Settlement::Found(_))
    }

    /// Flatten into a list of groups.
    ///
    /// The fallback becomes a single group holding the whole input, the
    /// shape a renderer needs either way.
    pub fn into_groups(self) -> Vec<Vec<f64>> {
        match self {
            Settlement::Found(groups) => groups,
            Settlement::Fallback(balances) => vec![balances],
        }
    }
}

/// Searches member balances for zero-sum subgroups.
///
/// Holds a reference to an immutable catalog (the process-wide shared
/// one by default), the zero tolerance, and per-instance search
/// statistics.
pub struct SettlementSolver<'a> {
    catalog: &'a CatalogTable,
    tolerance: f64,
    /// Counters for work done by this solver instance.
    pub statistics: Statistics,
}

impl SettlementSolver<'static> {
    /// Create a solver over the shared catalog with the default
    /// tolerance.
    pub fn new() -> Self {
        Self::with_catalog(catalog::shared())
    }
}

impl Default for SettlementSolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SettlementSolver<'a> {
    /// Create a solver over a specific catalog, e.g. one loaded from an
    /// offline asset.
    pub fn with_catalog(catalog: &'a CatalogTable) -> Self {
        Self {
            catalog,
            tolerance: DEFAULT_TOLERANCE,
            statistics: Statistics::new(),
        }
    }

    /// Set the zero-sum tolerance.
    ///
    /// A group settles when the absolute value of its balance sum is at
    /// most this. Exact floating equality is unsafe for currency values
    /// that went through division; pick a tolerance below the smallest
    /// amount you care about.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Get the configured tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Find a splitting of `balances` into zero-sum groups.
    ///
    /// Returns the first qualifying partition in catalog order (group
    /// counts descending), or [`Settlement::Fallback`] when the size
    /// has no catalog entry or no partition qualifies. The fallback for
    /// unsupported sizes is deliberate degradation, not an error.
    pub fn find_zero_balance_subsets(&mut self, balances: &[f64]) -> Settlement {
        let partitions = match self.catalog.partitions_for(balances.len()) {
            Ok(partitions) => partitions,
            Err(error) => {
                debug!(size = balances.len(), %error, "returning unsplit fallback");
                self.statistics.increment_counter(Counters::FallbacksReturned);
                return Settlement::Fallback(balances.to_vec());
            }
        };

        for partition in partitions {
            self.statistics.increment_counter(Counters::PartitionsTested);
            if self.all_groups_settle(partition, balances) {
                self.statistics.increment_counter(Counters::SolutionsFound);
                debug!(partition = %partition, "zero-balance decomposition found");
                let groups = apply_partition(partition, balances)
                    .expect("catalog partitions match the queried balance count");
                return Settlement::Found(groups);
            }
        }

        self.statistics.increment_counter(Counters::FallbacksReturned);
        Settlement::Fallback(balances.to_vec())
    }

    /// Check that every group of the partition sums to zero.
    fn all_groups_settle(&mut self, partition: &Partition, balances: &[f64]) -> bool {
        partition.groups().iter().all(|group| {
            self.statistics.increment_counter(Counters::GroupsSummed);
            let sum: f64 = group.iter().map(|member| balances[member]).sum();
            sum.abs() <= self.tolerance
        })
    }
}
