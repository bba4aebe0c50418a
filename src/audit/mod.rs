//! Audit logging for SplitBill
//!
//! Every ledger mutation (adding or deleting a friend, splitting a bill,
//! editing the last split) produces an [`AuditEntry`] with before/after
//! snapshots. The session keeps the entries in memory and, when enabled,
//! appends them to a JSONL file through [`AuditLogger`].
//!
//! The log is write-only from the session's point of view: it is never
//! replayed to rebuild balances.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
