use super::Operation;
use crate::{schema::Table, Value};

#[derive(Debug, Clone)]
pub struct DeleteByKey {
    /// Table to delete from
    pub table: &'static Table,

    /// Hash key of the item to delete
    pub key: Value,
}

impl From<DeleteByKey> for Operation {
    fn from(value: DeleteByKey) -> Self {
        Self::DeleteByKey(value)
    }
}
