use crate::{Error, Item, Result};

#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of items affected by the operation
    Count(u64),

    /// Items returned by a read
    Items(Vec<Item>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn items(items: Vec<Item>) -> Self {
        Self {
            rows: Rows::Items(items),
        }
    }

    pub fn empty_items() -> Self {
        Self::items(vec![])
    }

    pub fn into_count(self) -> Result<u64> {
        self.rows.into_count()
    }

    pub fn into_items(self) -> Result<Vec<Item>> {
        self.rows.into_items()
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_items(&self) -> bool {
        matches!(self, Self::Items(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Items(items) => Err(Error::invalid_result(format!(
                "expected a count, got {} items",
                items.len()
            ))),
        }
    }

    pub fn into_items(self) -> Result<Vec<Item>> {
        match self {
            Rows::Items(items) => Ok(items),
            Rows::Count(count) => Err(Error::invalid_result(format!(
                "expected items, got count {count}"
            ))),
        }
    }
}
