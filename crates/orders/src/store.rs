use crate::{err, model, Item, Order, Result, Value};

use orders_core::{
    driver::{operation, Driver},
    schema::{CUSTOMER_INDEX, ORDERS, STATUS},
};

/// Client for the `Orders` table.
///
/// Every method is a single round trip through the driver; nothing is cached
/// between calls. Errors are returned to the caller with a short description
/// of the failed operation as context.
#[derive(Debug)]
pub struct OrderStore {
    driver: Box<dyn Driver>,
}

impl OrderStore {
    pub fn new(driver: impl Driver) -> OrderStore {
        OrderStore {
            driver: Box::new(driver),
        }
    }

    /// Connects with the driver selected by the URL scheme. See [`crate::connect`].
    pub async fn connect(url: &str) -> Result<OrderStore> {
        Ok(OrderStore::new(crate::connect(url).await?))
    }

    /// Drops and recreates the `Orders` table with its customer index.
    pub async fn reset_table(&self) -> Result<()> {
        self.driver
            .reset_table(&ORDERS)
            .await
            .map_err(|e| e.context(err!("reset of table `{}` failed", ORDERS.name)))
    }

    /// Writes every order as a full item in one batch write.
    ///
    /// Returns the number of orders written. Items the store leaves
    /// unprocessed fail the call; they are not retried.
    pub async fn batch_insert(&self, orders: &[Order]) -> Result<u64> {
        let op = operation::BatchPut {
            table: &ORDERS,
            items: orders.iter().map(Order::to_item).collect(),
        };

        let count = self
            .driver
            .exec(op.into())
            .await
            .and_then(|response| response.into_count())
            .map_err(|e| e.context("batch insert failed"))?;

        tracing::debug!(count, "inserted orders");
        Ok(count)
    }

    /// Reads the whole table. Only the first page returned by the store is read.
    ///
    /// An amount that is a number but not an integer reads as zero, the same
    /// way [`OrderStore::aggregate_by_customer`] counts it.
    pub async fn scan_all(&self) -> Result<Vec<Order>> {
        let op = operation::Scan { table: &ORDERS };

        let orders = self
            .driver
            .exec(op.into())
            .await
            .and_then(|response| response.into_items())
            .and_then(|items| items.iter().map(decode_order).collect::<Result<Vec<_>>>())
            .map_err(|e| e.context("failed to get orders"))?;

        tracing::debug!(count = orders.len(), "scanned orders");
        Ok(orders)
    }

    /// Sets the status of an existing order.
    ///
    /// Returns `false` when no order has that id; nothing is created in that case.
    pub async fn update_status(&self, order_id: &str, status: &str) -> Result<bool> {
        let op = operation::UpdateByKey {
            table: &ORDERS,
            key: Value::from(order_id),
            attribute: STATUS,
            value: Value::from(status),
        };

        let count = self
            .driver
            .exec(op.into())
            .await
            .and_then(|response| response.into_count())
            .map_err(|e| e.context(err!("failed to update order {order_id}")))?;

        if count == 0 {
            tracing::debug!(order_id, "no order to update");
        }

        Ok(count > 0)
    }

    /// Deletes an order. Deleting a missing order is not an error.
    pub async fn delete(&self, order_id: &str) -> Result<()> {
        let op = operation::DeleteByKey {
            table: &ORDERS,
            key: Value::from(order_id),
        };

        let count = self
            .driver
            .exec(op.into())
            .await
            .and_then(|response| response.into_count())
            .map_err(|e| e.context(err!("failed to delete order {order_id}")))?;

        tracing::debug!(order_id, removed = count > 0, "deleted order");
        Ok(())
    }

    /// Sums `Amount` over the customer's orders, found through `CustomerIndex`.
    ///
    /// An amount that is not an integer counts as zero. A customer without
    /// orders totals 0.
    pub async fn aggregate_by_customer(&self, customer_id: &str) -> Result<i64> {
        self.sum_amounts(customer_id)
            .await
            .map_err(|e| e.context(err!("failed to aggregate orders of customer {customer_id}")))
    }

    async fn sum_amounts(&self, customer_id: &str) -> Result<i64> {
        let index = ORDERS
            .index(CUSTOMER_INDEX)
            .ok_or_else(|| err!("table `{}` has no index `{CUSTOMER_INDEX}`", ORDERS.name))?;

        let op = operation::QueryByIndex {
            table: &ORDERS,
            index,
            value: Value::from(customer_id),
        };

        let items = self.driver.exec(op.into()).await?.into_items()?;

        let mut total: i64 = 0;

        for item in &items {
            let Some(amount) = model::decode_amount(item)? else {
                tracing::warn!(customer_id, "amount is not an integer; counted as zero");
                continue;
            };

            total = total
                .checked_add(amount)
                .ok_or_else(|| err!("total amount overflows"))?;
        }

        Ok(total)
    }
}

fn decode_order(item: &Item) -> Result<Order> {
    let order = Order::from_item_lenient(item)?;

    if model::decode_amount(item)?.is_none() {
        tracing::warn!(order_id = %order.order_id, "amount is not an integer; read as zero");
    }

    Ok(order)
}
