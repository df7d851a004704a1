use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, Setup,
};
use orders::OrderStore;
use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Held by tests whose setup shares one remote table.
static SERIAL: Mutex<()> = Mutex::new(());

/// Runs one test against one setup.
///
/// Tests use `#[test]` and get a current-thread runtime from `run_test`.
/// Every store handed out by `setup_store` logs its driver operations.
pub struct DbTest {
    setup: Box<dyn Setup>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
    _serial: Option<MutexGuard<'static, ()>>,
}

impl DbTest {
    pub fn new(setup: Box<dyn Setup>) -> Self {
        // A failed test poisons the lock; later tests still need it.
        let serial = setup
            .serial()
            .then(|| SERIAL.lock().unwrap_or_else(PoisonError::into_inner));

        Self {
            setup,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            _serial: serial,
        }
    }

    /// Connect, reset the `Orders` table and return a store whose operations
    /// are logged.
    pub async fn setup_store(&mut self) -> OrderStore {
        let driver = self.setup.connect().await.unwrap();

        let logging_driver = LoggingDriver::new(driver);
        self.ops_log = logging_driver.ops_log_handle();

        let store = OrderStore::new(logging_driver);
        store.reset_table().await.unwrap();
        store
    }

    /// Operations executed by the store since setup (or the last clear).
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }

    /// Run a test function with a mutable reference to self on a fresh runtime.
    pub fn run_test<F>(&mut self, test_fn: F)
    where
        F: for<'a> FnOnce(&'a mut DbTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        runtime.block_on(test_fn(self));
    }
}
