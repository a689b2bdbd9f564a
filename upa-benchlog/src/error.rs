use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchLogError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    /// A config string lacks a field needed to join the tables
    #[error("config has no `{field}`: {configuration}")]
    MissingField {
        field: &'static str,
        configuration: String,
    },
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
