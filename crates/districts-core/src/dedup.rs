// crates/districts-core/src/dedup.rs

//! Duplicate-label audit over a reconciled table.
//!
//! Purely observational: no row is ever removed. The scan keeps a
//! label -> last-winner pointer so later collisions are compared against
//! the row that actually holds the label, and every collision is reported
//! as a [`Finding`] for manual review.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::model::{DistrictId, DistrictRecord};

/// One duplicate-label observation.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// The same id appears twice with the same label; benign copy.
    BenignRepeat { id: DistrictId, label: String },
    /// The earlier holder's id has since been corrected to a different
    /// label; the earlier row stays the comparison pointer.
    EarlierStale {
        earlier: DistrictId,
        current: DistrictId,
        label: String,
    },
    /// The current row's id no longer carries this label; the pointer moves
    /// to the current row.
    CurrentStale {
        earlier: DistrictId,
        current: DistrictId,
        label: String,
    },
    /// Both ids still carry the label: a genuine collision. The smaller id
    /// wins the pointer; both rows remain in the table.
    Tie {
        earlier: DistrictId,
        current: DistrictId,
        winner: DistrictId,
        label: String,
    },
    /// Neither id still carries the label; nothing to resolve.
    Unresolved {
        earlier: DistrictId,
        current: DistrictId,
        label: String,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::BenignRepeat { id, label } => {
                write!(f, "district {id} appears twice with label '{label}'")
            }
            Finding::EarlierStale { earlier, current, label } => write!(
                f,
                "label '{label}': earlier holder {earlier} was relabeled, {current} carries it now"
            ),
            Finding::CurrentStale { earlier, current, label } => write!(
                f,
                "label '{label}': {current} was relabeled, {earlier} still carries it"
            ),
            Finding::Tie { earlier, current, winner, label } => write!(
                f,
                "districts {earlier} and {current} both carry label '{label}' (review; keeping {winner})"
            ),
            Finding::Unresolved { earlier, current, label } => write!(
                f,
                "label '{label}' duplicated between {earlier} and {current}, neither still carries it"
            ),
        }
    }
}

/// Scans a reconciled table once for colliding labels.
///
/// The id -> label snapshot is built upfront over the full table, so a
/// collision can be checked against what each id ended up labeled as after
/// all corrections, regardless of scan position.
pub fn audit_labels(table: &[DistrictRecord]) -> Vec<Finding> {
    let mut snapshot: HashMap<&DistrictId, &str> = HashMap::with_capacity(table.len());
    for record in table {
        snapshot.insert(&record.id, record.label.as_str());
    }

    let mut seen: HashMap<&str, &DistrictRecord> = HashMap::with_capacity(table.len());
    let mut findings = Vec::new();

    for record in table {
        let label = record.label.as_str();
        let Some(&earlier) = seen.get(label) else {
            seen.insert(label, record);
            continue;
        };

        if earlier.id == record.id {
            debug!("district {} appears twice with label '{label}'", record.id);
            findings.push(Finding::BenignRepeat {
                id: record.id.clone(),
                label: label.to_string(),
            });
            continue;
        }

        let earlier_live = snapshot.get(&earlier.id).copied() == Some(label);
        let current_live = snapshot.get(&record.id).copied() == Some(label);
        let finding = match (earlier_live, current_live) {
            (false, true) => {
                debug!(
                    "label '{label}': {} was relabeled, keeping {} as pointer",
                    earlier.id, earlier.id
                );
                Finding::EarlierStale {
                    earlier: earlier.id.clone(),
                    current: record.id.clone(),
                    label: label.to_string(),
                }
            }
            (true, false) => {
                debug!("label '{label}': {} was relabeled, pointer moves to it", record.id);
                seen.insert(label, record);
                Finding::CurrentStale {
                    earlier: earlier.id.clone(),
                    current: record.id.clone(),
                    label: label.to_string(),
                }
            }
            (true, true) => {
                let winner = if record.id < earlier.id { record } else { earlier };
                warn!(
                    "districts {} and {} both carry label '{label}', flagging for manual review",
                    earlier.id, record.id
                );
                let tie = Finding::Tie {
                    earlier: earlier.id.clone(),
                    current: record.id.clone(),
                    winner: winner.id.clone(),
                    label: label.to_string(),
                };
                seen.insert(label, winner);
                tie
            }
            (false, false) => {
                warn!(
                    "label '{label}' duplicated between {} and {}, neither still carries it",
                    earlier.id, record.id
                );
                Finding::Unresolved {
                    earlier: earlier.id.clone(),
                    current: record.id.clone(),
                    label: label.to_string(),
                }
            }
        };
        findings.push(finding);
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, label: &str) -> DistrictRecord {
        DistrictRecord {
            label: label.to_string(),
            label_he: label.to_string(),
            value: format!("v{id}"),
            id: DistrictId::new(id),
            area_id: 1,
            area_name: "Area".to_string(),
            migun_time: 0,
        }
    }

    #[test]
    fn clean_table_yields_no_findings() {
        let table = vec![record("1", "A"), record("2", "B")];
        assert!(audit_labels(&table).is_empty());
    }

    #[test]
    fn same_id_twice_is_benign() {
        let table = vec![record("1", "A"), record("1", "A")];
        let findings = audit_labels(&table);
        assert_eq!(
            findings,
            vec![Finding::BenignRepeat {
                id: DistrictId::new("1"),
                label: "A".to_string(),
            }]
        );
    }

    #[test]
    fn tie_prefers_the_smaller_id_and_keeps_both_rows() {
        let table = vec![record("10", "A"), record("9", "A")];
        let findings = audit_labels(&table);
        assert_eq!(
            findings,
            vec![Finding::Tie {
                earlier: DistrictId::new("10"),
                current: DistrictId::new("9"),
                winner: DistrictId::new("9"),
                label: "A".to_string(),
            }]
        );
        // Audit never removes rows.
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn relabeled_earlier_holder_is_reported() {
        // Id 1 appears later under a new label, so the snapshot maps it to
        // "B" and its old "A" row is stale.
        let table = vec![record("1", "A"), record("2", "A"), record("1", "B")];
        let findings = audit_labels(&table);
        assert_eq!(
            findings,
            vec![Finding::EarlierStale {
                earlier: DistrictId::new("1"),
                current: DistrictId::new("2"),
                label: "A".to_string(),
            }]
        );
    }

    #[test]
    fn collision_with_neither_id_still_labeled_stays_unresolved() {
        // Both ids 1 and 2 reappear under new labels, so the snapshot maps
        // neither to "A"; the collision is reported but the pointer does
        // not move, as the later id-3 row shows by colliding with id 1.
        let table = vec![
            record("1", "A"),
            record("2", "A"),
            record("1", "B"),
            record("2", "C"),
            record("3", "A"),
        ];
        let findings = audit_labels(&table);
        assert_eq!(
            findings,
            vec![
                Finding::Unresolved {
                    earlier: DistrictId::new("1"),
                    current: DistrictId::new("2"),
                    label: "A".to_string(),
                },
                Finding::EarlierStale {
                    earlier: DistrictId::new("1"),
                    current: DistrictId::new("3"),
                    label: "A".to_string(),
                },
            ]
        );
    }

    #[test]
    fn relabeled_current_row_moves_the_pointer() {
        // Id 2's snapshot label is "B", so its "A" row is the stale one.
        let table = vec![record("1", "A"), record("2", "A"), record("2", "B")];
        let findings = audit_labels(&table);
        assert_eq!(
            findings,
            vec![Finding::CurrentStale {
                earlier: DistrictId::new("1"),
                current: DistrictId::new("2"),
                label: "A".to_string(),
            }]
        );
    }
}
