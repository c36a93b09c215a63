//! Error types for reading the input file

use std::io;

use thiserror::Error;

/// Errors that can occur while reading the client CSV export.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened. The Display text is the exact
    /// diagnostic the tool prints on standard error.
    #[error("Error opening file")]
    Open(#[source] io::Error),

    /// A record could not be read after the file was opened.
    #[error("failed to read CSV record")]
    Read(#[from] csv::Error),
}
