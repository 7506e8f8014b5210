//! Synthetic id pool files.
//!
//! # Format
//!
//! One unsigned integer per line, no header:
//!
//! ```text
//! 7340912233
//! 9012388120
//! 4410023871
//! ```
//!
//! Order matters — the discretizer consumes ids front to back.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sn_core::NodeId;

use crate::GraphResult;

/// Load an id pool from a file.
pub fn read_id_pool(path: &Path) -> GraphResult<Vec<NodeId>> {
    read_id_pool_from(File::open(path)?)
}

/// Load an id pool from any reader.
pub fn read_id_pool_from<R: Read>(reader: R) -> GraphResult<Vec<NodeId>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ids = Vec::new();
    for record in rdr.deserialize::<u64>() {
        ids.push(NodeId(record?));
    }
    Ok(ids)
}

/// Write an id pool, one id per line.
pub fn write_id_pool(path: &Path, ids: &[NodeId]) -> GraphResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for id in ids {
        wtr.serialize(id.0)?;
    }
    wtr.flush()?;
    Ok(())
}
