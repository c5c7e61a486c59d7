//! In-memory ledger used to run the domain layer without a ledger runtime.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use super::ledger_model::{QueryResult, Selector};
use super::ledger_traits::{LedgerState, LedgerTransactionExecutor, QueryResultIterator, StateReader};
use crate::errors::{Result, StorageFailure};

type WorldState = BTreeMap<String, Vec<u8>>;

#[derive(Default)]
struct Inner {
    world: WorldState,
    failing_keys: HashSet<String>,
}

/// A process-local ledger with the same unit-of-work semantics as a real one.
///
/// Each `execute` works on a copy of the world state under the ledger lock
/// and swaps it in only when the job succeeds, so failed units leave no
/// trace. Query results iterate in key order.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| StorageFailure::Unavailable(format!("ledger lock poisoned: {}", e)).into())
    }

    /// Writes raw bytes outside of any unit of work.
    pub fn insert_raw(&self, key: &str, value: &[u8]) -> Result<()> {
        self.lock()?.world.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    /// Returns the committed bytes at `key`.
    pub fn raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.lock()?.world.get(key).cloned())
    }

    /// Number of committed keys.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.world.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Makes every subsequent `put_state` to `key` fail with a write error.
    pub fn fail_writes_to(&self, key: &str) -> Result<()> {
        self.lock()?.failing_keys.insert(key.to_string());
        Ok(())
    }
}

struct MemoryState<'a> {
    world: &'a mut WorldState,
    failing_keys: &'a HashSet<String>,
}

impl StateReader for MemoryState<'_> {
    fn get_state(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.world.get(key).cloned())
    }

    fn get_query_result(&mut self, selector: &Selector) -> Result<QueryResultIterator<'_>> {
        let selector = selector.clone();
        let rows = self.world.iter().filter_map(move |(key, value)| {
            // Values that are not JSON documents are not indexed.
            let document: Value = serde_json::from_slice(value).ok()?;
            selector.matches(&document).then(|| {
                Result::Ok(QueryResult {
                    key: key.clone(),
                    value: value.clone(),
                })
            })
        });
        Ok(Box::new(rows))
    }
}

impl LedgerState for MemoryState<'_> {
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        if self.failing_keys.contains(key) {
            return Err(StorageFailure::WriteFailed(format!("write to '{}' rejected", key)).into());
        }
        self.world.insert(key.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl LedgerTransactionExecutor for InMemoryLedger {
    async fn execute<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut dyn LedgerState) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        let mut working = inner.world.clone();

        let outcome = {
            let mut state = MemoryState {
                world: &mut working,
                failing_keys: &inner.failing_keys,
            };
            job(&mut state)
        };

        if outcome.is_ok() {
            inner.world = working;
        }
        outcome
    }

    fn read<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut dyn StateReader) -> Result<T>,
    {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        let mut state = MemoryState {
            world: &mut inner.world,
            failing_keys: &inner.failing_keys,
        };
        job(&mut state)
    }
}
