use std::cell::RefCell;
use std::collections::VecDeque;

use redline_types::Proposal;

use crate::error::ExtractError;

/// The opaque narrative-to-structured-data boundary.
///
/// Implementations wrap whatever service turns free-form incident narrative
/// into a partial record. The session treats the call as fallible and
/// best-effort; absence of a field in the returned proposal means "no
/// information", never "clear this field".
pub trait Extractor {
    fn extract(&self, narrative: &str) -> Result<Proposal, ExtractError>;
}

/// Extractor double that replays a scripted queue of results.
///
/// Used by tests and the demo CLI; once the queue is exhausted every call
/// reports the service unavailable.
#[derive(Debug, Default)]
pub struct ScriptedExtractor {
    script: RefCell<VecDeque<Result<Proposal, ExtractError>>>,
}

impl ScriptedExtractor {
    pub fn new(results: Vec<Result<Proposal, ExtractError>>) -> Self {
        Self {
            script: RefCell::new(results.into()),
        }
    }
}

impl Extractor for ScriptedExtractor {
    fn extract(&self, _narrative: &str) -> Result<Proposal, ExtractError> {
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ExtractError::Unavailable("script exhausted".into())))
    }
}
