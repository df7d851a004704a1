mod connect;
pub use connect::connect;

mod store;
pub use store::OrderStore;

pub use orders_core::{bail, driver, err, model, schema, Error, Item, Order, Result, Value};
