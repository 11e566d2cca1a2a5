//! Write column data as the JSON object read by the plotting collaborator.

use std::io::Write;

use crate::error::Result;
use crate::table::ColumnData;

/// Write `data` as a JSON object of column name to column values.
pub fn write_column_data<W: Write>(data: &ColumnData, writer: W) -> Result<()> {
    serde_json::to_writer(writer, data)?;
    Ok(())
}
