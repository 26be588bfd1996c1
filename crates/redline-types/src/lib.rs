//! Foundation types for redline.
//!
//! This crate provides the identity, field, and record types used throughout
//! the redline system. Every other redline crate depends on `redline-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — Opaque time-ordered record identifier (UUID v7)
//! - [`ActorId`] — Non-blank attribution identity for audit entries
//! - [`FieldName`] — Closed enumeration of the incident record fields
//! - [`Record`] — The structured incident record being composed
//! - [`Proposal`] — A partial record emitted by the narrative extractor
//! - [`Classification`] / [`FunctionTag`] / [`RecordStatus`] — Field value enums

pub mod error;
pub mod field;
pub mod id;
pub mod proposal;
pub mod record;

pub use error::TypeError;
pub use field::{Classification, FieldName, FunctionTag, RecordStatus};
pub use id::{ActorId, RecordId};
pub use proposal::Proposal;
pub use record::Record;
