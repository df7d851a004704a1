mod batch_put;
pub use batch_put::BatchPut;

mod delete_by_key;
pub use delete_by_key::DeleteByKey;

mod query_by_index;
pub use query_by_index::QueryByIndex;

mod scan;
pub use scan::Scan;

mod update_by_key;
pub use update_by_key::UpdateByKey;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Write full items, replacing any existing item with the same key
    BatchPut(BatchPut),

    /// Delete the item with the given key, if any
    DeleteByKey(DeleteByKey),

    /// Read every item whose index key equals a value
    QueryByIndex(QueryByIndex),

    /// Read the whole table
    Scan(Scan),

    /// Set one attribute of an existing item
    UpdateByKey(UpdateByKey),
}

impl Operation {
    /// Name of the operation, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::BatchPut(_) => "batch_put",
            Operation::DeleteByKey(_) => "delete_by_key",
            Operation::QueryByIndex(_) => "query_by_index",
            Operation::Scan(_) => "scan",
            Operation::UpdateByKey(_) => "update_by_key",
        }
    }

    /// The table the operation targets.
    pub fn table(&self) -> &'static crate::Table {
        match self {
            Operation::BatchPut(op) => op.table,
            Operation::DeleteByKey(op) => op.table,
            Operation::QueryByIndex(op) => op.table,
            Operation::Scan(op) => op.table,
            Operation::UpdateByKey(op) => op.table,
        }
    }
}
