//! Sled-backed implementation of the audit ledger.
//!
//! Records are keyed by a monotonic sequence number (big-endian, so sled's
//! byte-ordered iteration is chronological); a second tree maps transaction
//! IDs to sequence keys for point lookups. Individual entries that fail to
//! deserialize are skipped on read rather than failing the whole scan.

use sled::Db;

use crate::errors::{VanguardError, VanguardResult};
use crate::ledger_store::{LedgerStore, ListOrder};
use crate::record::LedgerRecord;

const LEDGER_TREE: &str = "ledger";
const TXN_INDEX_TREE: &str = "txn_index";

pub struct LedgerStoreSled {
    db: Db,
}

impl LedgerStoreSled {
    pub fn new(path: impl AsRef<std::path::Path>) -> VanguardResult<Self> {
        let db = sled::open(path.as_ref())
            .map_err(|e| VanguardError::ledger("open", e.to_string()))?;
        Ok(LedgerStoreSled { db })
    }

    fn ledger_tree(&self) -> VanguardResult<sled::Tree> {
        self.db
            .open_tree(LEDGER_TREE)
            .map_err(|e| VanguardError::ledger("open_tree", e.to_string()))
    }

    fn index_tree(&self) -> VanguardResult<sled::Tree> {
        self.db
            .open_tree(TXN_INDEX_TREE)
            .map_err(|e| VanguardError::ledger("open_tree", e.to_string()))
    }

    /// Insert raw bytes at a given sequence key, bypassing serialization.
    #[cfg(test)]
    pub(crate) fn insert_raw(&self, sequence: u64, bytes: &[u8]) -> VanguardResult<()> {
        self.ledger_tree()?
            .insert(sequence.to_be_bytes(), bytes)
            .map_err(|e| VanguardError::ledger("insert_raw", e.to_string()))?;
        Ok(())
    }
}

impl LedgerStore for LedgerStoreSled {
    fn append(&mut self, record: &LedgerRecord) -> VanguardResult<()> {
        let data = serde_json::to_vec(record)
            .map_err(|e| VanguardError::serialization("ledger record", e))?;

        let sequence = self
            .db
            .generate_id()
            .map_err(|e| VanguardError::ledger("generate_id", e.to_string()))?;
        let key = sequence.to_be_bytes();

        let ledger = self.ledger_tree()?;
        ledger
            .insert(key, data)
            .map_err(|e| VanguardError::ledger("append", e.to_string()))?;
        self.index_tree()?
            .insert(record.transaction_id.as_bytes(), key.to_vec())
            .map_err(|e| VanguardError::ledger("index", e.to_string()))?;
        ledger
            .flush()
            .map_err(|e| VanguardError::ledger("flush", e.to_string()))?;

        log::debug!(
            "ledger append: seq={} txn={}",
            sequence,
            record.transaction_id
        );
        Ok(())
    }

    fn load(&self, transaction_id: &str) -> VanguardResult<Option<LedgerRecord>> {
        let index = self.index_tree()?;
        let key = match index
            .get(transaction_id.as_bytes())
            .map_err(|e| VanguardError::ledger("index_lookup", e.to_string()))?
        {
            Some(key) => key,
            None => return Ok(None),
        };

        let bytes = match self
            .ledger_tree()?
            .get(&key)
            .map_err(|e| VanguardError::ledger("load", e.to_string()))?
        {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        match serde_json::from_slice::<LedgerRecord>(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                log::warn!("corrupt ledger entry for txn {}: {}", transaction_id, e);
                Ok(None)
            }
        }
    }

    fn list(&self, order: ListOrder, limit: Option<usize>) -> VanguardResult<Vec<LedgerRecord>> {
        let tree = self.ledger_tree()?;
        let iter: Box<dyn Iterator<Item = sled::Result<(sled::IVec, sled::IVec)>>> = match order {
            ListOrder::Chronological => Box::new(tree.iter()),
            ListOrder::ReverseChronological => Box::new(tree.iter().rev()),
        };

        let mut records = Vec::new();
        for item in iter {
            let (_, value) = item.map_err(|e| VanguardError::ledger("scan", e.to_string()))?;
            match serde_json::from_slice::<LedgerRecord>(&value) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("skipping corrupt ledger entry: {}", e),
            }
            if let Some(limit) = limit {
                if records.len() >= limit {
                    break;
                }
            }
        }
        Ok(records)
    }
}
