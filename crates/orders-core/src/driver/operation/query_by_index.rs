use super::Operation;
use crate::{
    schema::{Index, Table},
    Value,
};

#[derive(Debug, Clone)]
pub struct QueryByIndex {
    /// Table the index belongs to
    pub table: &'static Table,

    /// Index to query
    pub index: &'static Index,

    /// Value the index hash key must equal
    pub value: Value,
}

impl From<QueryByIndex> for Operation {
    fn from(value: QueryByIndex) -> Self {
        Self::QueryByIndex(value)
    }
}
