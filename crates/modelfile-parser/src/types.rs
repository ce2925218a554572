//! Modelfile instruction types and errors.

use serde::{Deserialize, Serialize};

//  Command

/// One parsed Modelfile instruction.
///
/// `name` is the lower-cased keyword (`from` is normalized to `model`);
/// unrecognized keywords are retained verbatim.  `args` is the payload
/// text with the delimiting quotes, if any, removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub args: String,
}

//  Error

#[derive(Debug, thiserror::Error)]
pub enum ModelfileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A keyword reached end-of-line with no argument after it.
    #[error("missing value for [{0}]")]
    MissingValue(String),

    #[error("invalid role {0:?}: must be one of \"system\", \"user\", or \"assistant\"")]
    InvalidRole(String),

    /// A quote-delimited block was still open at end of input.
    #[error("unterminated multiline block")]
    UnterminatedBlock,

    /// The document parsed cleanly but never named a model source.
    #[error("no FROM line")]
    MissingFrom,
}

pub type Result<T> = std::result::Result<T, ModelfileError>;
