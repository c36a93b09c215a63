//! Output layer for printing parsed records

mod terminal;

use std::io;

use anyhow::Result;

use crate::parser::ParsedCsv;

pub use terminal::write_report;

/// Render the parsed file to standard output.
pub fn render_to_stdout(parsed: &ParsedCsv) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, parsed)
}
