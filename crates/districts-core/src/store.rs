// crates/districts-core/src/store.rs

//! File-backed table storage.
//!
//! Load full file, write full file. There is no incremental update and no
//! atomic-rename protection; the write overwrites unconditionally.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{DistrictError, Result};
use crate::model::{DistrictRecord, FetchedRecord, FetchedTable, LocalTable};

pub fn load_local_table(path: &Path) -> Result<LocalTable> {
    let reader = open_stream(path)?;
    serde_json::from_reader(reader).map_err(DistrictError::Json)
}

pub fn load_fetched_table(path: &Path) -> Result<FetchedTable> {
    let reader = open_stream(path)?;
    let rows: Vec<FetchedRecord> = serde_json::from_reader(reader).map_err(DistrictError::Json)?;
    Ok(FetchedTable::new(rows))
}

/// Pretty-printed UTF-8 with a trailing newline, so the files stay
/// reviewable in plain diffs.
pub fn write_local_table(path: &Path, table: &[DistrictRecord]) -> Result<()> {
    let file = File::create(path).map_err(DistrictError::Io)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table).map_err(DistrictError::Json)?;
    writer.write_all(b"\n").map_err(DistrictError::Io)?;
    writer.flush().map_err(DistrictError::Io)?;
    Ok(())
}

fn open_stream(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        DistrictError::NotFound(format!("table not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}
