// crates/districts-core/src/sync.rs

//! Whole-run orchestration: load, correct, append, audit, write.

use std::collections::BTreeSet;

use log::info;

use crate::config::SyncConfig;
use crate::dedup::{audit_labels, Finding};
use crate::error::Result;
use crate::language::Language;
use crate::model::{DistrictId, FetchedTable};
use crate::reconcile::{append_missing, correct_labels, missing_ids};
use crate::store;

/// Outcome of one language's reconciliation.
#[derive(Debug, Clone, Default)]
pub struct LanguageReport {
    pub corrected: usize,
    pub appended: usize,
    pub findings: usize,
    pub total: usize,
}

/// Outcome of a full sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Upstream ids absent from the reference local table.
    pub new_ids: usize,
    pub languages: Vec<(Language, LanguageReport)>,
}

/// Reconciles every language table on disk against its scratch copy.
///
/// The missing-id set comes from the reference language alone and is
/// applied unchanged to all languages; a district only counts as new once
/// the reference table carries it.
pub fn run_sync(config: &SyncConfig) -> Result<SyncReport> {
    let reference = store::load_fetched_table(&config.scratch_path(Language::REFERENCE))?;
    let reference_local = store::load_local_table(&config.local_path(Language::REFERENCE))?;
    let missing = missing_ids(&reference_local, &reference);
    info!("{} district(s) new upstream", missing.len());

    let mut report = SyncReport {
        new_ids: missing.len(),
        languages: Vec::with_capacity(Language::ALL.len()),
    };
    for lang in Language::ALL {
        let entry = sync_language(config, lang, &missing, &reference)?;
        report.languages.push((lang, entry));
    }
    Ok(report)
}

fn sync_language(
    config: &SyncConfig,
    lang: Language,
    missing: &BTreeSet<DistrictId>,
    reference: &FetchedTable,
) -> Result<LanguageReport> {
    let local = store::load_local_table(&config.local_path(lang))?;
    let fetched = store::load_fetched_table(&config.scratch_path(lang))?;

    let (mut table, corrected) = correct_labels(&local, &fetched, reference)?;
    let appended = append_missing(&mut table, missing, &fetched, reference)?;
    let findings = audit_labels(&table);

    store::write_local_table(&config.local_path(lang), &table)?;
    info!(
        "{lang}: {corrected} corrected, {appended} appended, {} duplicate finding(s)",
        findings.len()
    );

    Ok(LanguageReport {
        corrected,
        appended,
        findings: findings.len(),
        total: table.len(),
    })
}

/// Audit-only pass over the local tables; nothing is written.
pub fn run_audit(config: &SyncConfig) -> Result<Vec<(Language, Vec<Finding>)>> {
    let mut out = Vec::with_capacity(Language::ALL.len());
    for lang in Language::ALL {
        let table = store::load_local_table(&config.local_path(lang))?;
        out.push((lang, audit_labels(&table)));
    }
    Ok(out)
}
