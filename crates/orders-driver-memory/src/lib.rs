//! In-process table store.
//!
//! Tables live in a mutex-guarded map and are created on first use, so a
//! fresh [`Memory`] behaves like a store whose tables exist but are empty.
//! Items keep insertion order, which makes scans deterministic.

use orders_core::{
    async_trait,
    driver::{operation, Driver, Operation, Response},
    schema::Table,
    Error, Item, Result, Value,
};

use indexmap::IndexMap;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};
use url::Url;

#[derive(Debug, Default)]
pub struct Memory {
    tables: Mutex<HashMap<&'static str, Rows>>,
}

/// Items of one table, keyed by hash key.
type Rows = IndexMap<Value, Item>;

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Accepts `memory://` URLs. Any host or path is ignored.
    pub fn connect(url: &str) -> Result<Memory> {
        let url = Url::parse(url)
            .map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

        if url.scheme() != "memory" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `memory` scheme; url={url}"
            )));
        }

        Ok(Memory::new())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<&'static str, Rows>> {
        // Every mutation is a single map call, so a poisoned table is still consistent.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn exec_batch_put(&self, op: operation::BatchPut) -> Result<Response> {
        let key_name = op.table.hash_key.name;

        // A batch with any keyless item is rejected as a whole.
        let keyed = op
            .items
            .into_iter()
            .map(|item| -> Result<(Value, Item)> {
                let key = item
                    .get(key_name)
                    .cloned()
                    .ok_or_else(|| Error::missing_attribute(key_name))?;
                Ok((key, item))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = keyed.len();

        let mut tables = self.lock();
        tables.entry(op.table.name).or_default().extend(keyed);

        Ok(Response::count(count as u64))
    }

    fn exec_scan(&self, op: operation::Scan) -> Result<Response> {
        let tables = self.lock();

        let items = tables
            .get(op.table.name)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default();

        Ok(Response::items(items))
    }

    fn exec_update_by_key(&self, op: operation::UpdateByKey) -> Result<Response> {
        let mut tables = self.lock();
        let rows = tables.entry(op.table.name).or_default();

        let Some(item) = rows.get_mut(&op.key) else {
            return Ok(Response::count(0));
        };

        item.insert(op.attribute.to_string(), op.value);
        Ok(Response::count(1))
    }

    fn exec_delete_by_key(&self, op: operation::DeleteByKey) -> Result<Response> {
        let mut tables = self.lock();
        let rows = tables.entry(op.table.name).or_default();

        let removed = rows.shift_remove(&op.key).is_some();
        Ok(Response::count(removed as u64))
    }

    fn exec_query_by_index(&self, op: operation::QueryByIndex) -> Result<Response> {
        let tables = self.lock();
        let Some(rows) = tables.get(op.table.name) else {
            return Ok(Response::empty_items());
        };

        let attribute = op.index.hash_key.name;
        let items = rows
            .values()
            .filter(|item| item.get(attribute) == Some(&op.value))
            .cloned()
            .collect();

        Ok(Response::items(items))
    }
}

#[async_trait]
impl Driver for Memory {
    async fn exec(&self, op: Operation) -> Result<Response> {
        tracing::trace!(op = op.name(), table = op.table().name, "memory exec");

        match op {
            Operation::BatchPut(op) => self.exec_batch_put(op),
            Operation::Scan(op) => self.exec_scan(op),
            Operation::UpdateByKey(op) => self.exec_update_by_key(op),
            Operation::DeleteByKey(op) => self.exec_delete_by_key(op),
            Operation::QueryByIndex(op) => self.exec_query_by_index(op),
        }
    }

    async fn reset_table(&self, table: &'static Table) -> Result<()> {
        self.lock().insert(table.name, Rows::new());
        Ok(())
    }
}
