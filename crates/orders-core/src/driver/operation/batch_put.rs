use super::Operation;
use crate::{schema::Table, Item};

#[derive(Debug, Clone)]
pub struct BatchPut {
    /// Table to write into
    pub table: &'static Table,

    /// Items to write. Each must carry the table's hash key.
    pub items: Vec<Item>,
}

impl From<BatchPut> for Operation {
    fn from(value: BatchPut) -> Self {
        Self::BatchPut(value)
    }
}
