// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end settlement searches over real balance lists.

use settle_search::catalog::CatalogTable;
use settle_search::solver::Counters;
use settle_search::{Settlement, SettlementSolver};

/// Sum of each group, for asserting the zero-sum property.
fn group_sums(settlement: &Settlement) -> Vec<f64> {
    match settlement {
        Settlement::Found(groups) => groups.iter().map(|g| g.iter().sum()).collect(),
        Settlement::Fallback(_) => panic!("expected a decomposition"),
    }
}

#[test]
fn test_size_two_falls_back_unsplit() {
    let mut solver = SettlementSolver::new();
    let settlement = solver.find_zero_balance_subsets(&[10.0, -10.0]);

    // Size 2 has no table entry, even though the pair sums to zero
    assert_eq!(settlement, Settlement::Fallback(vec![10.0, -10.0]));
}

#[test]
fn test_two_pairs_split() {
    let mut solver = SettlementSolver::new();
    let settlement = solver.find_zero_balance_subsets(&[5.0, -5.0, 3.0, -3.0]);

    assert!(settlement.is_found());
    let sums = group_sums(&settlement);
    assert_eq!(sums.len(), 2);
    assert!(sums.iter().all(|s| s.abs() < 1e-9));

    // Values reach the caller unchanged
    let mut flat: Vec<f64> = settlement.into_groups().into_iter().flatten().collect();
    flat.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(flat, vec![-5.0, -3.0, 3.0, 5.0]);
}

#[test]
fn test_no_zero_subsets_falls_back() {
    let mut solver = SettlementSolver::new();
    let settlement = solver.find_zero_balance_subsets(&[1.0, 2.0, 3.0]);
    assert_eq!(settlement, Settlement::Fallback(vec![1.0, 2.0, 3.0]));
}

#[test]
fn test_three_pairs_get_finest_split() {
    let mut solver = SettlementSolver::new();
    let settlement =
        solver.find_zero_balance_subsets(&[1.5, -1.5, 20.0, -20.0, 0.25, -0.25]);

    let sums = group_sums(&settlement);
    assert_eq!(sums.len(), 3, "K-descending order must find the 3-way split");
    assert!(sums.iter().all(|s| s.abs() < 1e-9));
}

#[test]
fn test_partial_settlement_not_offered() {
    // {0 3} settles but the remaining pair does not; no partition has
    // every group at zero, so the whole list comes back unsplit.
    let mut solver = SettlementSolver::new();
    let settlement = solver.find_zero_balance_subsets(&[4.0, 1.0, 2.0, -4.0]);
    assert!(!settlement.is_found());
}

#[test]
fn test_unsupported_large_size_falls_back() {
    let balances: Vec<f64> = (0..10).map(|i| i as f64 - 4.5).collect();
    let mut solver = SettlementSolver::new();
    let settlement = solver.find_zero_balance_subsets(&balances);

    // Size 10 is beyond the default table range
    assert_eq!(settlement, Settlement::Fallback(balances));
}

#[test]
fn test_tolerance_controls_the_zero_test() {
    // One pair is off by 0.004: within a cent, not within a micro-unit
    let balances = [2.0, -1.996, 7.5, -7.5];

    let mut strict = SettlementSolver::new();
    assert!(!strict.find_zero_balance_subsets(&balances).is_found());

    let mut cent = SettlementSolver::new().with_tolerance(0.01);
    assert!(cent.find_zero_balance_subsets(&balances).is_found());
}

#[test]
fn test_deterministic_result() {
    let balances = [1.0, -1.0, 1.0, -1.0, 2.0, -2.0];
    let mut solver = SettlementSolver::new();
    let first = solver.find_zero_balance_subsets(&balances);
    let second = solver.find_zero_balance_subsets(&balances);
    assert_eq!(first, second);
}

#[test]
fn test_solver_over_loaded_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partitions.json");

    let generated = CatalogTable::generate(4..=6).unwrap();
    settle_search::catalog::save_asset(&generated, &path).unwrap();
    let loaded = settle_search::catalog::load_asset(&path).unwrap();

    let mut solver = SettlementSolver::with_catalog(&loaded);
    assert!(solver
        .find_zero_balance_subsets(&[5.0, -5.0, 3.0, -3.0])
        .is_found());

    // Size 7 was not generated into this catalog
    let seven = [1.0, -1.0, 2.0, -2.0, 3.0, -3.0, 0.5];
    assert!(!solver.find_zero_balance_subsets(&seven).is_found());
}

#[test]
fn test_statistics_report_search_effort() {
    let mut solver = SettlementSolver::new();

    solver.find_zero_balance_subsets(&[5.0, -5.0, 3.0, -3.0]);
    assert_eq!(solver.statistics.get(Counters::SolutionsFound), 1);
    let tested = solver.statistics.get(Counters::PartitionsTested);
    assert!(tested >= 1 && tested <= 3, "size 4 has three pairings");

    solver.find_zero_balance_subsets(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(solver.statistics.get(Counters::FallbacksReturned), 1);
    // All three pairings of four members were tried and failed
    assert_eq!(solver.statistics.get(Counters::PartitionsTested), tested + 3);
}
