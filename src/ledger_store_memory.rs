//! In-memory ledger for tests and ephemeral runs.

use crate::errors::VanguardResult;
use crate::ledger_store::{LedgerStore, ListOrder};
use crate::record::LedgerRecord;

#[derive(Debug, Default)]
pub struct LedgerStoreMemory {
    records: Vec<LedgerRecord>,
}

impl LedgerStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for LedgerStoreMemory {
    fn append(&mut self, record: &LedgerRecord) -> VanguardResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn load(&self, transaction_id: &str) -> VanguardResult<Option<LedgerRecord>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.transaction_id == transaction_id)
            .cloned())
    }

    fn list(&self, order: ListOrder, limit: Option<usize>) -> VanguardResult<Vec<LedgerRecord>> {
        let mut records = self.records.clone();
        if order == ListOrder::ReverseChronological {
            records.reverse();
        }
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Ok(records)
    }
}
