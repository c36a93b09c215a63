//! Data model for client/enterprise records

mod table;

pub use table::{Row, Table, FIELD_NAMES};
