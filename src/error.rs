use crate::token::Token;

/// Errors raised while decoding SIE text.
///
/// Every variant aborts the line (or document) being processed; the only
/// recoverable condition, an unknown label in lenient mode, never reaches
/// this type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unhandled control character in line at position #{position}: {line:?}")]
    ControlCharacter { position: usize, line: String },

    #[error("unhandled character in line at position #{position}: '{line}' at '{remainder}'")]
    UnrecognizedCharacter {
        position: usize,
        line: String,
        remainder: String,
    },

    #[error(transparent)]
    InvalidEntry(#[from] InvalidEntry),

    #[error("unbalanced array block on line {line_number}")]
    UnbalancedBlock { line_number: usize },
}

/// Schema violations found while assembling an entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidEntry {
    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),

    #[error("Unexpected token: {0}")]
    UnexpectedToken(Token),

    #[error("More than one pair of attribute tokens for {attribute} on line: {line}")]
    MoreThanOnePair {
        attribute: &'static str,
        line: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
