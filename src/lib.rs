//! enterprise_finder - print client/enterprise SIRET records from a CSV export
//!
//! Reads a comma-separated export of client records (SIRET identifier, client
//! code, enterprise name, source database), stores the rows in memory, and
//! prints them to standard output.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::Error;
pub use model::{Row, Table};
