use redline_store::StoreError;
use thiserror::Error;

/// Errors produced by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("record is already finalized")]
    AlreadyFinalized,

    #[error("finalization requires a non-blank signature")]
    BlankSignature,

    #[error("invalid session config: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors surfaced by the narrative extraction boundary.
///
/// Extraction failures are recoverable: the session guarantees they leave
/// the live record, lock set, and highlight state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("extraction service unavailable: {0}")]
    Unavailable(String),

    #[error("extraction timed out")]
    Timeout,

    #[error("malformed extraction payload: {0}")]
    Malformed(String),
}
