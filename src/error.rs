//! Error types for reading, parsing and writing checklists

use std::path::PathBuf;

/// A directive that stops the conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: unknown command: {name}")]
    UnknownDirective { line: usize, name: String },

    #[error("line {line}: {directive} is missing a required argument")]
    MissingArgument { line: usize, directive: String },

    #[error("line {line}: {directive} appears before any sw_checklist")]
    ItemOutsideCheckList { line: usize, directive: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
