use super::Operation;
use crate::{schema::Table, Value};

/// Sets a single attribute on the item with the given key.
///
/// The update only applies to an existing item: a missing key creates
/// nothing and the driver reports a count of 0.
#[derive(Debug, Clone)]
pub struct UpdateByKey {
    /// Table to update
    pub table: &'static Table,

    /// Hash key of the item to update
    pub key: Value,

    /// Attribute to set
    pub attribute: &'static str,

    /// New attribute value
    pub value: Value,
}

impl From<UpdateByKey> for Operation {
    fn from(value: UpdateByKey) -> Self {
        Self::UpdateByKey(value)
    }
}
