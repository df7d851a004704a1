use super::Operation;
use crate::schema::Table;

#[derive(Debug, Clone)]
pub struct Scan {
    /// Table to read
    pub table: &'static Table,
}

impl From<Scan> for Operation {
    fn from(value: Scan) -> Self {
        Self::Scan(value)
    }
}
