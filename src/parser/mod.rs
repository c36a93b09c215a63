//! Parser layer for reading the client CSV export

mod csv;

pub use self::csv::{CsvParser, ParsedCsv};
