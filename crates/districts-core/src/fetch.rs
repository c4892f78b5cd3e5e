// crates/districts-core/src/fetch.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if the 'fetch' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "fetch")]

//! Scratch-document download.
//!
//! One unchecked attempt per language, no retries. A failed download aborts
//! the run; offline callers skip this step and reuse existing scratch files.

use std::fs;

use log::info;

use crate::config::SyncConfig;
use crate::error::{DistrictError, Result};
use crate::language::Language;

/// Downloads all four per-language documents into the data directory.
pub fn fetch_scratch_tables(config: &SyncConfig) -> Result<()> {
    for lang in Language::ALL {
        fetch_one(config, lang)?;
    }
    Ok(())
}

fn fetch_one(config: &SyncConfig, lang: Language) -> Result<()> {
    let url = config.endpoint(lang);
    info!("fetching {url}");
    let body = reqwest::blocking::get(&url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(DistrictError::Http)?;
    fs::write(config.scratch_path(lang), body).map_err(DistrictError::Io)?;
    Ok(())
}
