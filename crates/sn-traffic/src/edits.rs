//! Traffic edits as CSV (`node_a,node_b,level`, with header).

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use sn_core::NodeId;

use crate::{TrafficCache, TrafficLevel, TrafficResult};

#[derive(Debug, Deserialize, Serialize)]
struct EditRecord {
    node_a: u64,
    node_b: u64,
    level:  i64,
}

/// Read edits into a fresh cache.  Later rows for the same segment win.
///
/// # Errors
///
/// Malformed rows fail with [`TrafficError::Csv`](crate::TrafficError::Csv);
/// levels outside 1–7 with
/// [`TrafficError::InvalidLevel`](crate::TrafficError::InvalidLevel).
pub fn load_traffic_csv<R: Read>(reader: R) -> TrafficResult<TrafficCache> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut cache = TrafficCache::new();
    let mut rows = 0usize;
    for record in rdr.deserialize() {
        let EditRecord { node_a, node_b, level } = record?;
        cache.set_level(NodeId(node_a), NodeId(node_b), TrafficLevel::new(level)?);
        rows += 1;
    }
    debug!("loaded {rows} traffic edits covering {} segments", cache.len());
    Ok(cache)
}

pub fn read_traffic_file(path: &Path) -> TrafficResult<TrafficCache> {
    load_traffic_csv(File::open(path)?)
}

/// Write every stored entry, sorted by segment so output is stable.
pub fn write_traffic_csv<W: Write>(writer: W, cache: &TrafficCache) -> TrafficResult<()> {
    let mut entries: Vec<_> = cache.iter().collect();
    entries.sort_unstable_by_key(|&(pair, _)| pair);

    let mut wtr = csv::Writer::from_writer(writer);
    for (pair, level) in entries {
        wtr.serialize(EditRecord { node_a: pair.lo().0, node_b: pair.hi().0, level: level.into() })?;
    }
    wtr.flush()?;
    Ok(())
}
