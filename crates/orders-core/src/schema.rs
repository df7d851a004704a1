//! Description of the tables the client talks to.
//!
//! The client only ever uses one table, [`ORDERS`], but drivers read its
//! layout from here instead of hard-coding names.

/// Primary key attribute of the orders table.
pub const ORDER_ID: &str = "OrderID";

/// Attribute indexed by [`CUSTOMER_INDEX`].
pub const CUSTOMER_ID: &str = "CustomerID";

/// Order amount, stored as a number attribute.
pub const AMOUNT: &str = "Amount";

/// Mutable order status.
pub const STATUS: &str = "Status";

/// Name of the secondary index over [`CUSTOMER_ID`].
pub const CUSTOMER_INDEX: &str = "CustomerIndex";

/// The `Orders` table: hash key `OrderID`, secondary index `CustomerIndex`
/// on `CustomerID`.
pub static ORDERS: Table = Table {
    name: "Orders",
    hash_key: Attribute {
        name: ORDER_ID,
        ty: AttributeType::String,
    },
    indices: &[Index {
        name: CUSTOMER_INDEX,
        hash_key: Attribute {
            name: CUSTOMER_ID,
            ty: AttributeType::String,
        },
    }],
};

#[derive(Debug)]
pub struct Table {
    /// Table name as known to the store.
    pub name: &'static str,

    /// Partition key. Tables here have no sort key.
    pub hash_key: Attribute,

    /// Global secondary indices, all projecting every attribute.
    pub indices: &'static [Index],
}

#[derive(Debug)]
pub struct Index {
    pub name: &'static str,
    pub hash_key: Attribute,
}

#[derive(Debug, Clone, Copy)]
pub struct Attribute {
    pub name: &'static str,
    pub ty: AttributeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
}

impl Table {
    /// Looks up a secondary index by name.
    pub fn index(&self, name: &str) -> Option<&'static Index> {
        self.indices.iter().find(|index| index.name == name)
    }
}
