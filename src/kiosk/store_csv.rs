// Primitives for reading and appending the CSV record stores.

use std::fs::OpenOptions;

use serde::{Deserialize, Serialize};

use crate::kiosk::*;

/// One row of either store. The column names follow the externally
/// provisioned datasets.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct VoterRow {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "ID")]
    pub voter_id: String,
}

impl From<VoterRow> for VoterRecord {
    fn from(row: VoterRow) -> VoterRecord {
        VoterRecord {
            first_name: row.first_name,
            last_name: row.last_name,
            voter_id: row.voter_id,
        }
    }
}

impl From<&VoterRecord> for VoterRow {
    fn from(record: &VoterRecord) -> VoterRow {
        VoterRow {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            voter_id: record.voter_id.clone(),
        }
    }
}

/// Reads a full store. Both the roster and the ballot log carry the same
/// header row and the same three columns.
pub fn read_records(path: &str) -> KioskResult<Vec<VoterRecord>> {
    let rdr = csv::Reader::from_path(path).context(StoreOpenSnafu { path })?;
    let mut res: Vec<VoterRecord> = Vec::new();
    for row_r in rdr.into_deserialize() {
        let row: VoterRow = row_r.context(StoreRowSnafu { path })?;
        res.push(row.into());
    }
    log::debug!("read_records: {} records from {:?}", res.len(), path);
    Ok(res)
}

/// Appends one record strictly at the end of the ballot log. The append
/// path writes no header.
pub fn append_record(path: &str, record: &VoterRecord) -> KioskResult<()> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .context(LogAppendOpenSnafu { path })?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.serialize(VoterRow::from(record))
        .context(LogAppendSnafu { path })?;
    wtr.flush().context(LogFlushSnafu { path })?;
    Ok(())
}
