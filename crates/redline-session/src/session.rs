use std::collections::{BTreeSet, HashSet};

use redline_audit::{AuditEntry, AuditError, AuditLog, AuditReader, AuditWriter, Recorded};
use redline_highlight::Highlighter;
use redline_locks::FieldLocks;
use redline_merge::merge;
use redline_store::RecordStore;
use redline_types::{ActorId, FieldName, Proposal, Record, RecordId, RecordStatus};

use crate::config::SessionConfig;
use crate::edit::FieldEdit;
use crate::error::{ExtractError, SessionError};
use crate::extract::Extractor;

/// One live editing session over one incident record.
///
/// The session is the single owner of the mutable live record and lock set.
/// Callers (the host event loop) invoke it serially; deliveries from the
/// extractor and human input events are reconciled here, never in parallel.
pub struct EditorSession<S, W> {
    live: Record,
    locks: FieldLocks,
    highlighter: Highlighter,
    store: S,
    audit: AuditLog<W>,
}

impl<S: RecordStore, W: AuditWriter> EditorSession<S, W> {
    /// Start a session on a fresh empty draft.
    pub fn new(store: S, audit_writer: W) -> Self {
        Self::open(
            Record::new(RecordId::new()),
            &SessionConfig::default(),
            store,
            audit_writer,
        )
    }

    /// Start a session on an existing record.
    pub fn open(record: Record, config: &SessionConfig, store: S, audit_writer: W) -> Self {
        Self {
            live: record,
            locks: FieldLocks::new(),
            highlighter: Highlighter::with_window(config.highlight_window()),
            store,
            audit: AuditLog::new(audit_writer),
        }
    }

    /// The live record.
    pub fn record(&self) -> &Record {
        &self.live
    }

    /// The live record's identity.
    pub fn id(&self) -> &RecordId {
        &self.live.id
    }

    // ---- Focus tracking ----

    /// The operator started composing `field`.
    pub fn focus(&mut self, field: FieldName) {
        self.locks.acquire(field);
    }

    /// The operator stopped composing `field`.
    pub fn blur(&mut self, field: FieldName) {
        self.locks.release(field);
    }

    /// Fields currently under active human composition.
    pub fn locked_fields(&self) -> HashSet<FieldName> {
        self.locks.snapshot()
    }

    // ---- Human edits ----

    /// Apply a direct human edit to the live record.
    ///
    /// Human edits bypass the merge rules entirely: the operator may clear
    /// fields and does not need to hold the field's lock (locks guard
    /// against the extractor, not against the human).
    pub fn edit(&mut self, edit: FieldEdit) {
        edit.apply(&mut self.live);
    }

    // ---- Extraction ----

    /// Reconcile a delivered extractor proposal against the live record.
    ///
    /// Proposals are applied strictly in delivery order with last-write-wins
    /// on unlocked fields; overlapping extraction calls that resolve out of
    /// request order are therefore visible as a stale value briefly winning.
    /// Returns the fields actually overwritten.
    pub fn apply_proposal(&mut self, proposal: &Proposal) -> BTreeSet<FieldName> {
        let outcome = merge(&self.live, proposal, &self.locks.snapshot());
        self.live = outcome.merged;
        self.highlighter.on_merge(&outcome.changed);

        if !outcome.changed.is_empty() {
            tracing::debug!(
                record = %self.live.id,
                fields = ?outcome.changed,
                "proposal merged"
            );
        }
        outcome.changed
    }

    /// Run `narrative` through `extractor` and apply the resulting proposal.
    ///
    /// On extraction failure the error is returned and the live record, lock
    /// set, and highlight state are untouched.
    pub fn ingest_narrative<E: Extractor>(
        &mut self,
        extractor: &E,
        narrative: &str,
    ) -> Result<BTreeSet<FieldName>, ExtractError> {
        let proposal = extractor.extract(narrative)?;
        Ok(self.apply_proposal(&proposal))
    }

    /// Fields recently overwritten by a merge, for transient UI emphasis.
    pub fn highlighted(&self) -> HashSet<FieldName> {
        self.highlighter.current()
    }

    // ---- Persistence ----

    /// Commit the live record to the store and audit the accepted mutation.
    ///
    /// The store returns the prior and new snapshots atomically; the audit
    /// write is fire-and-forget (see `AuditLog::record`), so the returned
    /// outcome may be `Recorded::Lost` while the commit itself stands.
    pub fn commit(&mut self, actor: &ActorId) -> Result<Recorded, SessionError> {
        let committed = self.store.commit(&self.live)?;
        tracing::debug!(record = %self.live.id, %actor, "record committed");
        Ok(self
            .audit
            .record(&self.live.id, &committed.old, &committed.new, actor))
    }

    /// Finalize the record: `Draft` to `Finalized`, exactly once, requiring
    /// a non-blank signature.
    ///
    /// The transition is committed immediately; if the store rejects the
    /// commit the status stays `Draft` and the operator must retry.
    pub fn finalize(&mut self, signature: &str) -> Result<Recorded, SessionError> {
        let actor = ActorId::new(signature).map_err(|_| SessionError::BlankSignature)?;
        if self.live.status.is_finalized() {
            return Err(SessionError::AlreadyFinalized);
        }

        let mut candidate = self.live.clone();
        candidate.status = RecordStatus::Finalized;
        let committed = self.store.commit(&candidate)?;

        self.live = candidate;
        tracing::debug!(record = %self.live.id, %actor, "record finalized");
        Ok(self
            .audit
            .record(&self.live.id, &committed.old, &committed.new, &actor))
    }

    /// The record store backing this session.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The audit log backing this session.
    pub fn audit(&self) -> &AuditLog<W> {
        &self.audit
    }
}

impl<S: RecordStore, W: AuditWriter + AuditReader> EditorSession<S, W> {
    /// Audit entries for this session's record, most-recent-first.
    pub fn history(&self) -> Result<Vec<AuditEntry>, AuditError> {
        self.audit.history(&self.live.id)
    }
}
