//! Append-only audit log for redline.
//!
//! Whenever a record mutation is accepted by the persistence layer, the
//! audit log captures it as a structured, field-level change set so a
//! reviewer can reconstruct who changed what and when. This crate provides:
//!
//! - [`AuditEntry`] — immutable, attributed, timestamped change-set record
//! - [`AuditWriter`] / [`AuditReader`] trait boundaries
//! - [`InMemoryAuditLog`] implementation for tests and embedding
//! - [`AuditLog`] — the diff-and-append operation over old/new snapshots,
//!   including the deliberate fire-and-forget handling of write failures
//! - [`validate_stream`] — per-record stream integrity report

pub mod entry;
pub mod error;
pub mod log;
pub mod memory;
pub mod traits;
pub mod validation;

pub use entry::AuditEntry;
pub use error::AuditError;
pub use log::{AuditLog, Recorded};
pub use memory::InMemoryAuditLog;
pub use traits::{AuditReader, AuditWriter};
pub use validation::{validate_stream, ValidationReport, Violation, ViolationKind};
