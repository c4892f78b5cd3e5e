// crates/districts-core/src/model.rs

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable district identifier, unique within one language's table.
///
/// The same id denotes the same place across languages. Ids are usually
/// decimal strings, so ordering compares numerically when both sides parse
/// as integers and lexicographically otherwise. Numeric ties ("9" vs "09")
/// fall back to the string form so that ordering stays consistent with
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(pub String);

impl DistrictId {
    pub fn new(id: impl Into<String>) -> Self {
        DistrictId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for DistrictId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.parse::<u64>(), other.0.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            _ => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for DistrictId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One row of a per-language local lookup table, as persisted on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    /// Display name in this table's language.
    pub label: String,
    /// Display name in the reference language, carried on every row.
    pub label_he: String,
    /// Opaque linkage id joining against the external city table.
    pub value: String,
    pub id: DistrictId,
    #[serde(rename = "areaid")]
    pub area_id: i64,
    /// Display name of the containing area, in this table's language.
    #[serde(rename = "areaname")]
    pub area_name: String,
    /// Shelter response time in seconds, shared by the containing area.
    #[serde(deserialize_with = "int_coerce")]
    pub migun_time: i64,
}

/// Minimal shape of an upstream row. Extra upstream fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedRecord {
    pub id: DistrictId,
    pub label: String,
    #[serde(rename = "cityAlId")]
    pub city_al_id: String,
    #[serde(rename = "areaid")]
    pub area_id: i64,
}

/// Ordered on-disk table for one language; the source of truth.
pub type LocalTable = Vec<DistrictRecord>;

/// Freshly fetched upstream table for one language.
///
/// Indexed by district id for lookups while remembering the document row
/// order, so appended rows land in the same order the upstream document
/// listed them. A repeated id keeps its first position and its last row.
#[derive(Debug, Clone, Default)]
pub struct FetchedTable {
    order: Vec<DistrictId>,
    index: HashMap<DistrictId, FetchedRecord>,
}

impl FetchedTable {
    pub fn new(rows: Vec<FetchedRecord>) -> Self {
        let mut order = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        for row in rows {
            if !index.contains_key(&row.id) {
                order.push(row.id.clone());
            }
            index.insert(row.id.clone(), row);
        }
        FetchedTable { order, index }
    }

    pub fn get(&self, id: &DistrictId) -> Option<&FetchedRecord> {
        self.index.get(id)
    }

    pub fn contains(&self, id: &DistrictId) -> bool {
        self.index.contains_key(id)
    }

    /// Ids in upstream document order.
    pub fn ids(&self) -> impl Iterator<Item = &DistrictId> {
        self.order.iter()
    }

    /// Rows in upstream document order.
    pub fn iter(&self) -> impl Iterator<Item = (&DistrictId, &FetchedRecord)> {
        self.order
            .iter()
            .filter_map(|id| self.index.get(id).map(|row| (id, row)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Accepts either a JSON number or a numeric string; some historical table
/// revisions serialized `migun_time` as a string.
fn int_coerce<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        String(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::String(value) => value.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}
