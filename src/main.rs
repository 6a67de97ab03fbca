// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line interface for the settlement search.
//!
//! Three subcommands:
//! - `solve`: run the zero-balance search on a list of balances
//! - `generate`: write the partition tables to a JSON asset file
//!   (offline maintenance; bounded by the generation ceiling)
//! - `show`: print the catalog entries for one set size

use clap::{Parser, Subcommand};
use settle_search::catalog::{load_asset, save_asset, CatalogTable};
use settle_search::partition::constants::{DEFAULT_TOLERANCE, MAX_TABLE_SIZE, MIN_TABLE_SIZE};
use settle_search::solver::Counters;
use settle_search::{catalog, Settlement, SettlementSolver};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "settle", version, about = "Search for member subgroups whose balances settle to zero")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find zero-balance subgroups in a list of member balances.
    Solve {
        /// Zero-sum tolerance for the per-group balance check.
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,

        /// Partition asset to load instead of generating tables.
        #[arg(long)]
        table: Option<PathBuf>,

        /// Net balances, one per member.
        #[arg(required = true, allow_negative_numbers = true)]
        balances: Vec<f64>,
    },

    /// Generate the partition tables and write them to a JSON asset.
    Generate {
        /// Smallest set size to tabulate.
        #[arg(long, default_value_t = MIN_TABLE_SIZE)]
        min_size: usize,

        /// Largest set size to tabulate (hard ceiling applies).
        #[arg(long, default_value_t = MAX_TABLE_SIZE)]
        max_size: usize,

        /// Output path for the asset file.
        #[arg(long)]
        output: PathBuf,
    },

    /// Print the catalog entries for one set size.
    Show {
        /// Set size to display.
        #[arg(long)]
        size: usize,

        /// Partition asset to load instead of generating tables.
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Solve {
            tolerance,
            table,
            balances,
        } => solve(tolerance, table, &balances),
        Command::Generate {
            min_size,
            max_size,
            output,
        } => generate(min_size, max_size, &output),
        Command::Show { size, table } => show(size, table),
    }
}

/// Load the asset if one was given, otherwise use the shared catalog.
fn catalog_from(table: Option<PathBuf>) -> Result<CatalogTable, Box<dyn Error>> {
    match table {
        Some(path) => Ok(load_asset(&path)?),
        None => Ok(catalog::shared().clone()),
    }
}

fn solve(tolerance: f64, table: Option<PathBuf>, balances: &[f64]) -> Result<(), Box<dyn Error>> {
    let catalog = catalog_from(table)?;
    let mut solver = SettlementSolver::with_catalog(&catalog).with_tolerance(tolerance);

    let settlement = solver.find_zero_balance_subsets(balances);
    debug!(
        partitions_tested = solver.statistics.get(Counters::PartitionsTested),
        groups_summed = solver.statistics.get(Counters::GroupsSummed),
        "search finished"
    );

    match &settlement {
        Settlement::Found(_) => println!("Zero-balance decomposition found:"),
        Settlement::Fallback(_) => println!("No decomposition; whole group must settle together:"),
    }
    for (i, group) in settlement.into_groups().into_iter().enumerate() {
        let rendered: Vec<String> = group.iter().map(|b| format!("{b:.2}")).collect();
        println!("  group {}: [{}]", i + 1, rendered.join(", "));
    }
    Ok(())
}

fn generate(min_size: usize, max_size: usize, output: &PathBuf) -> Result<(), Box<dyn Error>> {
    let catalog = CatalogTable::generate(min_size..=max_size)?;
    save_asset(&catalog, output)?;
    for size in catalog.sizes() {
        println!(
            "size {}: {} partitions",
            size,
            catalog.partitions_for(size)?.len()
        );
    }
    Ok(())
}

fn show(size: usize, table: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let catalog = catalog_from(table)?;
    for partition in catalog.partitions_for(size)? {
        println!("{partition}");
    }
    Ok(())
}
