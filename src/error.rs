use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while compressing, decompressing or touching stored artifacts.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The content held no symbols to build a tree from.
    #[error("no symbols to compress")]
    EmptyInput,
    /// A code in the table was empty or held something other than '0' / '1'.
    #[error("code {code:?} is not a binary string")]
    InvalidCodeSymbol { code: String },
    /// No code in the table matches the stream at the cursor.
    #[error("no code matches the bit stream at bit {position}")]
    UndecodableSequence { position: usize },
    /// The persisted code table could not be parsed.
    #[error("malformed code table: {0}")]
    MalformedTable(String),
    /// Content held a symbol the code table has no code for.
    #[error("symbol {0} has no code in the table")]
    MissingSymbol(u8),
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("can not read from {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can not write to {}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HuffError>;
