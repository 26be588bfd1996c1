//! Change set computation for redline.
//!
//! Compares two record snapshots field by field and produces a
//! [`ChangeSet`]: the mapping from field name to `{old, new}` value pair for
//! every field whose canonical serialized values differ.
//!
//! Comparison is deep structural equality over [`serde_json::Value`], which
//! is order-sensitive for sequences — reordering the behavioral-function tag
//! list counts as a change. Values that cannot be serialized are compared
//! through their canonical string rendering instead (see
//! `Record::field_value`), so the diff itself never fails.

pub mod change_set;

pub use change_set::{diff_records, diff_states, ChangeSet, FieldChange};
