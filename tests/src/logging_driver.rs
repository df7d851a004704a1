use orders::{
    driver::{operation::Operation, Driver, Response},
    schema::Table,
    Result,
};
use std::sync::{Arc, Mutex};

/// A driver wrapper that logs every executed operation and its response.
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Response,
}

#[async_trait::async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let response = self.inner.exec(operation).await?;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                response: response.clone(),
            });

        Ok(response)
    }

    /// Table resets are not logged.
    async fn reset_table(&self, table: &'static Table) -> Result<()> {
        self.inner.reset_table(table).await
    }
}
