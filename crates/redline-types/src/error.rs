use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("actor identity must not be blank")]
    BlankActor,

    #[error("unknown field name: {0}")]
    UnknownField(String),

    #[error("unknown function tag: {0}")]
    UnknownFunctionTag(String),

    #[error("unknown record status: {0}")]
    UnknownStatus(String),
}
