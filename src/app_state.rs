use std::sync::{Arc, Mutex};

use crate::config_loader::VanguardConfig;
use crate::errors::{VanguardError, VanguardResult};
use crate::ledger_store::{LedgerStore, ListOrder};
use crate::record::LedgerRecord;

/// Shared application state: resolved configuration plus the ledger store.
///
/// The store sits behind a mutex so concurrent requests serialize their
/// appends; scoring itself is stateless and runs outside the lock.
pub struct AppState {
    pub config: VanguardConfig,
    pub ledger: Arc<Mutex<dyn LedgerStore>>,
}

impl AppState {
    pub fn new(config: VanguardConfig, ledger: Arc<Mutex<dyn LedgerStore>>) -> Self {
        Self { config, ledger }
    }

    /// Append a committed audit record to the ledger.
    pub fn commit_record(&self, record: &LedgerRecord) -> VanguardResult<()> {
        let mut guard = self
            .ledger
            .lock()
            .map_err(|_| VanguardError::lock_poisoned("ledger store"))?;
        guard.append(record)?;

        tracing::info!(
            transaction_id = %record.transaction_id,
            decision = ?record.outcome.decision,
            delta_score = record.outcome.delta_score,
            "audit record committed"
        );
        Ok(())
    }

    pub fn ledger_list(
        &self,
        order: ListOrder,
        limit: Option<usize>,
    ) -> VanguardResult<Vec<LedgerRecord>> {
        let guard = self
            .ledger
            .lock()
            .map_err(|_| VanguardError::lock_poisoned("ledger store"))?;
        guard.list(order, limit)
    }

    pub fn ledger_load(&self, transaction_id: &str) -> VanguardResult<Option<LedgerRecord>> {
        let guard = self
            .ledger
            .lock()
            .map_err(|_| VanguardError::lock_poisoned("ledger store"))?;
        guard.load(transaction_id)
    }
}
