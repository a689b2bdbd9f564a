use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while splitting Yul code
#[derive(Debug, Error)]
pub enum SplitError {
    /// The text does not contain the expected anchors or braces
    #[error("The Yul code structure does not match the expected pattern: {0}")]
    StructuralMismatch(Mismatch),
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl SplitError {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, SplitError::StructuralMismatch(_))
    }
}

impl From<Mismatch> for SplitError {
    fn from(mismatch: Mismatch) -> Self {
        SplitError::StructuralMismatch(mismatch)
    }
}

/// The first piece of expected structure that could not be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// `anchor` does not occur at or after byte offset `from`
    MissingAnchor { anchor: String, from: usize },
    /// The brace opened at byte offset `open` after `anchor` is never closed
    UnclosedBrace { anchor: String, open: usize },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::MissingAnchor { anchor, from } => {
                write!(f, "'{}' not found after offset {}", anchor, from)
            }
            Mismatch::UnclosedBrace { anchor, open } => {
                write!(f, "brace of '{}' opened at offset {} is never closed", anchor, open)
            }
        }
    }
}
