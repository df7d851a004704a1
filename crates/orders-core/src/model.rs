use crate::{
    schema::{AMOUNT, CUSTOMER_ID, ORDER_ID, STATUS},
    Error, Item, Result, Value,
};

use serde::{Deserialize, Serialize};

/// A row of the `Orders` table.
///
/// Serializes with the table's attribute names so seed files read the same
/// as the stored items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub order_id: String,

    #[serde(rename = "CustomerID")]
    pub customer_id: String,

    #[serde(rename = "Amount")]
    pub amount: i64,

    #[serde(rename = "Status")]
    pub status: String,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        customer_id: impl Into<String>,
        amount: i64,
        status: impl Into<String>,
    ) -> Order {
        Order {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            amount,
            status: status.into(),
        }
    }

    /// Encodes the order as a full item, one attribute per field.
    pub fn to_item(&self) -> Item {
        let mut item = Item::with_capacity(4);
        item.insert(ORDER_ID.to_string(), Value::from(self.order_id.as_str()));
        item.insert(
            CUSTOMER_ID.to_string(),
            Value::from(self.customer_id.as_str()),
        );
        item.insert(AMOUNT.to_string(), Value::from(self.amount));
        item.insert(STATUS.to_string(), Value::from(self.status.as_str()));
        item
    }

    /// Decodes an item read back from the store.
    ///
    /// Every attribute must be present with the kind `to_item` writes, and
    /// `Amount` must hold an integer. Extra attributes are ignored.
    pub fn from_item(item: &Item) -> Result<Order> {
        let amount = get_n(item, AMOUNT)?;
        let amount = amount
            .parse::<i64>()
            .map_err(|_| Error::invalid_number(AMOUNT, amount))?;

        Order::from_item_with_amount(item, amount)
    }

    /// Decodes an item like [`Order::from_item`], except that an `Amount`
    /// number without an `i64` value (`100.5`, 20 digits) reads as 0.
    ///
    /// Attribute kinds are still checked.
    pub fn from_item_lenient(item: &Item) -> Result<Order> {
        let amount = decode_amount(item)?.unwrap_or(0);
        Order::from_item_with_amount(item, amount)
    }

    fn from_item_with_amount(item: &Item, amount: i64) -> Result<Order> {
        Ok(Order {
            order_id: get_s(item, ORDER_ID)?.to_string(),
            customer_id: get_s(item, CUSTOMER_ID)?.to_string(),
            amount,
            status: get_s(item, STATUS)?.to_string(),
        })
    }
}

/// Reads the `Amount` attribute of an item for aggregation.
///
/// The attribute must be a number; a number string that is not an integer
/// yields `Ok(None)` so callers can count it as zero.
pub fn decode_amount(item: &Item) -> Result<Option<i64>> {
    Ok(get_n(item, AMOUNT)?.parse::<i64>().ok())
}

fn get<'a>(item: &'a Item, name: &str) -> Result<&'a Value> {
    item.get(name).ok_or_else(|| Error::missing_attribute(name))
}

fn get_s<'a>(item: &'a Item, name: &str) -> Result<&'a str> {
    let value = get(item, name)?;
    value
        .as_s()
        .ok_or_else(|| Error::unexpected_attribute_type(name, "S", value.kind()))
}

fn get_n<'a>(item: &'a Item, name: &str) -> Result<&'a str> {
    let value = get(item, name)?;
    value
        .as_n()
        .ok_or_else(|| Error::unexpected_attribute_type(name, "N", value.kind()))
}
