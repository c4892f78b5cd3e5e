//! districts — command-line interface for districts-core
//!
//! This binary keeps the four per-language district lookup tables
//! (`districts.he.json`, `.en`, `.ru`, `.ar`) in sync with the upstream
//! reference data: it downloads the current label sets, merges label
//! corrections into the local files, appends newly discovered districts,
//! and reports duplicate labels for manual review.
//!
//! Usage examples
//! --------------
//!
//! - Full sync (fetch + reconcile) of the tables in the current directory
//!   $ districts sync
//!
//! - Reconcile against previously downloaded scratch files only
//!   $ districts --data-dir data sync --offline
//!
//! - Download the scratch documents without touching the local tables
//!   $ districts fetch
//!
//! - Report duplicate labels without writing anything
//!   $ districts audit
//!
//! Diagnostics go through env_logger; set RUST_LOG=debug for the full
//! correction and duplicate-resolution trace.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use districts_core::{run_audit, run_sync, SyncConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let mut config = SyncConfig::new(args.data_dir.unwrap_or_else(|| ".".to_string()));
    if let Some(endpoint) = args.endpoint {
        config.endpoint_base = endpoint;
    }

    match args.command {
        Commands::Fetch => {
            #[cfg(feature = "fetch")]
            districts_core::fetch::fetch_scratch_tables(&config)?;
            #[cfg(not(feature = "fetch"))]
            anyhow::bail!("this build was compiled without the 'fetch' feature");
        }

        Commands::Sync { offline } => {
            if !offline {
                #[cfg(feature = "fetch")]
                districts_core::fetch::fetch_scratch_tables(&config)?;
                #[cfg(not(feature = "fetch"))]
                anyhow::bail!(
                    "this build was compiled without the 'fetch' feature; rerun with --offline"
                );
            }

            let report = run_sync(&config)?;
            println!("{} district(s) new upstream", report.new_ids);
            for (lang, entry) in &report.languages {
                println!(
                    "  {lang}: {} corrected, {} appended, {} duplicate finding(s), {} rows total",
                    entry.corrected, entry.appended, entry.findings, entry.total
                );
            }
        }

        Commands::Audit => {
            for (lang, findings) in run_audit(&config)? {
                if findings.is_empty() {
                    println!("{lang}: no duplicate labels");
                } else {
                    println!("{lang}: {} duplicate finding(s)", findings.len());
                    for finding in findings {
                        println!("  {finding}");
                    }
                }
            }
        }
    }

    Ok(())
}
