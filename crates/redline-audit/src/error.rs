/// Errors produced by audit log operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error("audit log lock poisoned")]
    LockPoisoned,

    #[error("backend failure: {0}")]
    Backend(String),
}
