mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::Table};

use std::fmt::Debug;

/// A backend able to execute order store operations.
///
/// Drivers translate each [`Operation`] into a single round trip against
/// their store (batch writes may take one round trip per chunk) and report
/// the outcome as a [`Response`].
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a table operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;

    /// Drop the table if it exists and create it again, with its indices.
    async fn reset_table(&self, table: &'static Table) -> crate::Result<()>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Box<T> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }

    async fn reset_table(&self, table: &'static Table) -> crate::Result<()> {
        (**self).reset_table(table).await
    }
}
