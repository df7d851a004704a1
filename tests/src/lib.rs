#[macro_use]
mod macros;

pub mod db;
mod db_test;
mod exec_log;
mod logging_driver;

pub use db_test::DbTest;
pub use exec_log::ExecLog;
pub use logging_driver::{DriverOp, LoggingDriver};

use orders::{driver::Driver, Order};

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Connect a driver to the store under test.
    async fn connect(&self) -> orders::Result<Box<dyn Driver>>;

    /// Whether tests must run one at a time.
    ///
    /// Every test uses the same `Orders` table, so setups backed by a shared
    /// store return `true`.
    fn serial(&self) -> bool {
        false
    }
}

/// The four orders the demo inserts.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new("O1", "C1", 100, "Completed"),
        Order::new("O2", "C1", 200, "Pending"),
        Order::new("O3", "C2", 150, "Completed"),
        Order::new("O4", "C3", 300, "Shipped"),
    ]
}
