//! CSV input for batch mode.
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::core::batch::ColumnSet;
use crate::error::{Error, Result};
use crate::types::PartialRecord;

/// A parsed batch table: the recognized header columns plus rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: ColumnSet,
    pub rows: Vec<PartialRecord>,
}

pub fn read_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let table = read_table_from(std::fs::File::open(path)?)?;
    debug!("Read {} rows from {:?}", table.rows.len(), path);
    Ok(table)
}

/// Parse CSV with a header row from any reader. Cells and headers are trimmed;
/// unrecognized columns are ignored.
pub fn read_table_from<R: Read>(input: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let columns = ColumnSet::from_headers(reader.headers()?.iter());
    let rows = reader
        .deserialize::<PartialRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
    Ok(Table { columns, rows })
}
