// crates/districts-core/src/lib.rs

pub mod config;
pub mod dedup;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod language;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod store;
pub mod sync;

// Re-exports
pub use crate::config::SyncConfig;
pub use crate::error::{DistrictError, Result};
pub use crate::language::Language;
pub use crate::model::{DistrictId, DistrictRecord, FetchedRecord, FetchedTable, LocalTable};
pub use crate::sync::{run_audit, run_sync, LanguageReport, SyncReport};
