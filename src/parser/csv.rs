//! CSV file parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::model::{Row, Table};

/// A parsed input file: the raw header line plus the row table.
#[derive(Debug)]
pub struct ParsedCsv {
    /// Header line, reproduced verbatim (empty if the file had none)
    pub header: String,
    /// Data rows in file order
    pub table: Table,
}

/// Parser for the client CSV export
pub struct CsvParser;

impl CsvParser {
    /// Parse a file and return its header line and row table.
    ///
    /// The export carries no quoting: a comma inside a quoted text field is a
    /// field separator, so quote handling is disabled. Each record is cut to
    /// exactly four fields; missing trailing fields become empty strings and
    /// anything past the fourth field is dropped.
    pub fn parse(path: &Path) -> Result<ParsedCsv, Error> {
        let file = File::open(path).map_err(Error::Open)?;
        let reader = BufReader::new(file);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        // With quoting disabled, joining on ',' reconstructs the raw line.
        let header = csv_reader
            .headers()?
            .iter()
            .collect::<Vec<_>>()
            .join(",");

        let mut table = Table::new();
        for result in csv_reader.records() {
            let record = result?;
            let mut fields = record.iter().map(str::to_string);
            let row = Row::new(
                fields.next().unwrap_or_default(),
                fields.next().unwrap_or_default(),
                fields.next().unwrap_or_default(),
                fields.next().unwrap_or_default(),
            );
            table.append(row);
        }

        Ok(ParsedCsv { header, table })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_header_and_rows_in_order() {
        let file = write_input(
            "CT_Siret,CT_Num,CT_Intitule,DB_NAME\n\
             12345678900012,C001,ACME Corp,DB1\n\
             98765432100099,C002,Globex,DB2\n",
        );
        let parsed = CsvParser::parse(file.path()).unwrap();

        assert_eq!(parsed.header, "CT_Siret,CT_Num,CT_Intitule,DB_NAME");
        assert_eq!(parsed.table.len(), 2);
        let first = parsed.table.get(0).unwrap();
        assert_eq!(first.siret, "12345678900012");
        assert_eq!(first.num, "C001");
        assert_eq!(first.label, "ACME Corp");
        assert_eq!(first.source, "DB1");
        assert_eq!(parsed.table.get(1).unwrap().source, "DB2");
    }

    #[test]
    fn missing_trailing_fields_become_empty() {
        let file = write_input("CT_Siret,CT_Num,CT_Intitule,DB_NAME\n123,C001\n");
        let parsed = CsvParser::parse(file.path()).unwrap();

        let row = parsed.table.get(0).unwrap();
        assert_eq!(row.siret, "123");
        assert_eq!(row.num, "C001");
        assert_eq!(row.label, "");
        assert_eq!(row.source, "");
    }

    #[test]
    fn quotes_are_ordinary_characters() {
        let file = write_input(
            "CT_Siret,CT_Num,CT_Intitule,DB_NAME\n123,C001,\"ACME, Corp\",DB1\n",
        );
        let parsed = CsvParser::parse(file.path()).unwrap();

        // The comma inside the quotes splits the field; the fifth segment
        // falls past the schema and is dropped.
        let row = parsed.table.get(0).unwrap();
        assert_eq!(row.label, "\"ACME");
        assert_eq!(row.source, " Corp\"");
    }

    #[test]
    fn header_only_input_yields_empty_table() {
        let file = write_input("CT_Siret,CT_Num,CT_Intitule,DB_NAME\n");
        let parsed = CsvParser::parse(file.path()).unwrap();

        assert_eq!(parsed.header, "CT_Siret,CT_Num,CT_Intitule,DB_NAME");
        assert!(parsed.table.is_empty());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvParser::parse(&dir.path().join("no_such_file.csv")).unwrap_err();

        assert!(matches!(err, Error::Open(_)));
        assert_eq!(err.to_string(), "Error opening file");
    }
}
