use crate::logging_driver::DriverOp;
use orders::driver::{Operation, Response};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Remove and return the oldest logged operation
    #[track_caller]
    pub fn pop(&self) -> (Operation, Response) {
        let mut ops = self.ops.lock().unwrap();
        assert!(!ops.is_empty(), "no logged operations");
        let op = ops.remove(0);
        (op.operation, op.response)
    }

    /// Clear all logged operations
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
