//! Storage seam for the append-only audit ledger.

use crate::errors::VanguardResult;
use crate::record::LedgerRecord;

/// Read-back ordering for ledger scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    Chronological,
    ReverseChronological,
}

/// Append-only store for committed audit records.
///
/// Implementations must preserve append order for `list` and never mutate
/// a record once appended. Callers serialize writers (the store sits behind
/// a mutex in application state), so implementations may assume one append
/// at a time.
pub trait LedgerStore: Send + Sync {
    /// Append a committed record to the ledger.
    fn append(&mut self, record: &LedgerRecord) -> VanguardResult<()>;

    /// Load a single record by transaction ID.
    fn load(&self, transaction_id: &str) -> VanguardResult<Option<LedgerRecord>>;

    /// List records in the requested order, up to `limit` if given.
    fn list(&self, order: ListOrder, limit: Option<usize>) -> VanguardResult<Vec<LedgerRecord>>;
}
