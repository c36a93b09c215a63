//! Plain-text report writing

use std::io::Write;

use anyhow::Result;

use crate::model::Table;
use crate::parser::ParsedCsv;

/// Write the header line verbatim, then one formatted line per row.
///
/// Nothing is written for the header when the input had no header line.
pub fn write_report(writer: &mut dyn Write, parsed: &ParsedCsv) -> Result<()> {
    if !parsed.header.is_empty() {
        writeln!(writer, "{}", parsed.header)?;
    }
    write_rows(writer, &parsed.table)?;
    Ok(())
}

fn write_rows(writer: &mut dyn Write, table: &Table) -> Result<()> {
    for row in table.rows() {
        let line = row
            .fields()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
