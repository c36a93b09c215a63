//! Row and Table data structures

use serde::{Deserialize, Serialize};

/// Column labels of the client export, in field order.
pub const FIELD_NAMES: [&str; 4] = ["CT_Siret", "CT_Num", "CT_Intitule", "DB_NAME"];

/// One client/enterprise record.
///
/// All four fields are always present, possibly as empty strings, and are
/// stored exactly as read. No trimming and no validation: a non-numeric
/// SIRET is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// SIRET business identifier (opaque string, nominally 14 digits)
    pub siret: String,
    /// Client code
    pub num: String,
    /// Enterprise name (intitulé)
    pub label: String,
    /// Name of the database the record originated from
    pub source: String,
}

impl Row {
    /// Create a row from its four fields, in column order.
    pub fn new(
        siret: impl Into<String>,
        num: impl Into<String>,
        label: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            siret: siret.into(),
            num: num.into(),
            label: label.into(),
            source: source.into(),
        }
    }

    /// The row as an ordered column-label/value view, declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_NAMES[0], self.siret.as_str()),
            (FIELD_NAMES[1], self.num.as_str()),
            (FIELD_NAMES[2], self.label.as_str()),
            (FIELD_NAMES[3], self.source.as_str()),
        ]
    }
}

/// An append-only, ordered collection of rows.
///
/// Insertion order equals input file order. There is no uniqueness
/// constraint on `siret`: duplicate identifiers are kept.
#[derive(Debug, Default)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the end of the table
    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the row at `index`, or `None` if out of range
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// All rows in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
