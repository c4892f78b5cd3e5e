// crates/districts-core/src/config.rs

//! Run configuration.
//!
//! Paths and endpoints are injected rather than hardcoded so tests can
//! point a run at a scratch directory instead of the real data files.

use std::path::PathBuf;

use crate::language::Language;

pub const DEFAULT_ENDPOINT_BASE: &str = "https://www.oref.org.il";

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory holding `districts.<lang>.json` and their scratch copies.
    pub data_dir: PathBuf,
    /// Base URL the upstream `cities_<lang>.json` documents are fetched from.
    pub endpoint_base: String,
}

impl SyncConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        SyncConfig {
            data_dir: data_dir.into(),
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
        }
    }

    pub fn local_path(&self, lang: Language) -> PathBuf {
        self.data_dir.join(format!("districts.{lang}.json"))
    }

    /// Scratch copy written by the fetch step and consumed by the sync pass.
    pub fn scratch_path(&self, lang: Language) -> PathBuf {
        self.data_dir.join(format!("districts.{lang}.json-new"))
    }

    pub fn endpoint(&self, lang: Language) -> String {
        format!(
            "{}/districts/cities_{}.json",
            self.endpoint_base,
            lang.remote_code()
        )
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig::new(".")
    }
}
