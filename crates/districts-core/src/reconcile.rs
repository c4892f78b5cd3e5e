// crates/districts-core/src/reconcile.rs

//! The merge pass: label corrections and newly discovered districts.
//!
//! Tables are in-memory values here; file I/O lives in [`crate::store`] so
//! tests can substitute hand-built tables for the real data files.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::info;

use crate::error::{DistrictError, Result};
use crate::model::{DistrictId, DistrictRecord, FetchedTable, LocalTable};
use crate::normalize::normalize_label;

/// Ids present upstream but absent from the local reference table.
///
/// Computed once from the reference language and reused verbatim for every
/// language: reference-language availability gates whether an id counts as
/// new anywhere.
pub fn missing_ids(local: &[DistrictRecord], fetched: &FetchedTable) -> BTreeSet<DistrictId> {
    let known: HashSet<&DistrictId> = local.iter().map(|record| &record.id).collect();
    fetched
        .ids()
        .filter(|id| !known.contains(id))
        .cloned()
        .collect()
}

/// Replaces stale labels, yielding a new table in the original row order.
///
/// A row is corrected when its id exists upstream and the normalized
/// upstream label differs from the current one; the replacement keeps
/// id/value/area fields and refreshes both `label` and `label_he`. Returns
/// the rebuilt table and the number of corrections applied. Idempotent.
pub fn correct_labels(
    local: &[DistrictRecord],
    fetched: &FetchedTable,
    reference: &FetchedTable,
) -> Result<(LocalTable, usize)> {
    let mut out = Vec::with_capacity(local.len());
    let mut corrected = 0;

    for record in local {
        let Some(upstream) = fetched.get(&record.id) else {
            out.push(record.clone());
            continue;
        };
        let label = normalize_label(&upstream.label);
        if label == record.label {
            out.push(record.clone());
            continue;
        }
        let reference_row = reference.get(&record.id).ok_or_else(|| {
            DistrictError::InvalidData(format!(
                "district {} present upstream but missing from the reference table",
                record.id
            ))
        })?;

        info!(
            "correcting district {}: '{}' -> '{}' (upstream '{}')",
            record.id, record.label, label, upstream.label
        );
        let mut replacement = record.clone();
        replacement.label = label;
        replacement.label_he = normalize_label(&reference_row.label);
        out.push(replacement);
        corrected += 1;
    }

    Ok((out, corrected))
}

/// Appends a row for every missing id this language's upstream table
/// carries, in upstream document order; missing ids absent from this
/// language never come up here and are thereby skipped.
///
/// `areaname`/`migun_time` are backfilled from the first existing row that
/// shares the upstream `areaid`, defaulting to `""`/`0` for areas the table
/// has never seen. Returns the number of rows appended.
pub fn append_missing(
    table: &mut LocalTable,
    missing: &BTreeSet<DistrictId>,
    fetched: &FetchedTable,
    reference: &FetchedTable,
) -> Result<usize> {
    // First-seen area metadata wins; appended rows do not extend it.
    let mut areas: HashMap<i64, (String, i64)> = HashMap::new();
    for record in table.iter() {
        areas
            .entry(record.area_id)
            .or_insert_with(|| (record.area_name.clone(), record.migun_time));
    }

    let mut appended = 0;
    for (id, upstream) in fetched.iter() {
        if !missing.contains(id) {
            continue;
        }
        let reference_row = reference.get(id).ok_or_else(|| {
            DistrictError::InvalidData(format!("new district {id} missing from the reference table"))
        })?;
        let (area_name, migun_time) = areas
            .get(&upstream.area_id)
            .cloned()
            .unwrap_or_else(|| (String::new(), 0));

        table.push(DistrictRecord {
            label: normalize_label(&upstream.label),
            label_he: normalize_label(&reference_row.label),
            value: upstream.city_al_id.clone(),
            id: id.clone(),
            area_id: upstream.area_id,
            area_name,
            migun_time,
        });
        appended += 1;
    }

    Ok(appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FetchedRecord;

    fn local(id: &str, label: &str, area_id: i64, area_name: &str, migun_time: i64) -> DistrictRecord {
        DistrictRecord {
            label: label.to_string(),
            label_he: label.to_string(),
            value: format!("v{id}"),
            id: DistrictId::new(id),
            area_id,
            area_name: area_name.to_string(),
            migun_time,
        }
    }

    fn upstream(id: &str, label: &str, area_id: i64) -> FetchedRecord {
        FetchedRecord {
            id: DistrictId::new(id),
            label: label.to_string(),
            city_al_id: format!("al{id}"),
            area_id,
        }
    }

    #[test]
    fn missing_ids_is_the_set_difference() {
        let table = vec![local("1", "A", 1, "N", 0), local("2", "B", 1, "N", 0)];
        let fetched = FetchedTable::new(vec![upstream("2", "B", 1), upstream("3", "C", 1)]);
        let missing = missing_ids(&table, &fetched);
        assert_eq!(missing.len(), 1);
        assert!(missing.contains(&DistrictId::new("3")));
    }

    #[test]
    fn corrects_only_changed_labels() {
        let table = vec![local("1", "Old", 1, "N", 0), local("2", "Same", 1, "N", 0)];
        let fetched = FetchedTable::new(vec![upstream("1", "New I X", 1), upstream("2", "Same", 1)]);

        let (out, corrected) = correct_labels(&table, &fetched, &fetched).unwrap();
        assert_eq!(corrected, 1);
        assert_eq!(out[0].label, "New");
        assert_eq!(out[0].label_he, "New");
        assert_eq!(out[0].value, "v1");
        assert_eq!(out[1], table[1]);
    }

    #[test]
    fn correction_is_idempotent() {
        let table = vec![local("1", "Old", 1, "N", 0)];
        let fetched = FetchedTable::new(vec![upstream("1", "New I X", 1)]);

        let (once, first) = correct_labels(&table, &fetched, &fetched).unwrap();
        let (twice, second) = correct_labels(&once, &fetched, &fetched).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn append_backfills_area_metadata_from_first_match() {
        let mut table = vec![local("1", "A", 7, "Area7", 90)];
        let missing: BTreeSet<_> = [DistrictId::new("2"), DistrictId::new("3")].into();
        let fetched = FetchedTable::new(vec![
            upstream("2", "City2 I Y", 7),
            upstream("3", "City3", 8),
        ]);

        let appended = append_missing(&mut table, &missing, &fetched, &fetched).unwrap();
        assert_eq!(appended, 2);

        let row2 = &table[1];
        assert_eq!(row2.label, "City2");
        assert_eq!(row2.value, "al2");
        assert_eq!(row2.area_name, "Area7");
        assert_eq!(row2.migun_time, 90);

        // Area 8 has no local precedent.
        let row3 = &table[2];
        assert_eq!(row3.area_name, "");
        assert_eq!(row3.migun_time, 0);
    }

    #[test]
    fn append_follows_upstream_document_order() {
        let mut table = vec![local("1", "A", 7, "Area7", 90)];
        let missing: BTreeSet<_> =
            [DistrictId::new("2"), DistrictId::new("3"), DistrictId::new("10")].into();
        // Upstream lists the new districts as 10, 3, 2.
        let fetched = FetchedTable::new(vec![
            upstream("1", "A", 7),
            upstream("10", "Ten", 7),
            upstream("3", "Three", 7),
            upstream("2", "Two", 7),
        ]);

        let appended = append_missing(&mut table, &missing, &fetched, &fetched).unwrap();
        assert_eq!(appended, 3);
        let appended_ids: Vec<_> = table[1..].iter().map(|row| row.id.as_str()).collect();
        assert_eq!(appended_ids, ["10", "3", "2"]);
    }

    #[test]
    fn append_skips_ids_absent_from_this_language() {
        let mut table = vec![local("1", "A", 7, "Area7", 90)];
        let missing: BTreeSet<_> = [DistrictId::new("2")].into();
        let fetched = FetchedTable::new(vec![upstream("1", "A", 7)]);
        let reference = FetchedTable::new(vec![upstream("2", "B", 7)]);

        let appended = append_missing(&mut table, &missing, &fetched, &reference).unwrap();
        assert_eq!(appended, 0);
        assert_eq!(table.len(), 1);
    }
}
