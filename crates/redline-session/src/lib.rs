//! Editing session facade for redline.
//!
//! [`EditorSession`] owns the single mutable live [`Record`] plus the lock
//! tracker and highlighter, and wires them to a record store and an audit
//! log. It is the one place mutation happens: the host event loop calls into
//! it serially (focus/blur, human edits, extractor deliveries, commits), and
//! everything underneath is a pure function or an explicit store boundary.
//!
//! [`Extractor`] is the opaque narrative-to-proposal boundary; its failures
//! are surfaced as recoverable errors and provably mutate nothing.

pub mod config;
pub mod edit;
pub mod error;
pub mod extract;
pub mod session;

pub use config::SessionConfig;
pub use edit::FieldEdit;
pub use error::{ExtractError, SessionError};
pub use extract::{Extractor, ScriptedExtractor};
pub use session::EditorSession;

pub use redline_types::{Proposal, Record};
