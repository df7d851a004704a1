use super::{item_from_ddb, operation, DynamoDb, Error, Response, Result};

impl DynamoDb {
    pub(crate) async fn exec_scan(&self, op: operation::Scan) -> Result<Response> {
        let res = self
            .client
            .scan()
            .table_name(op.table.name)
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        // Only the first page is read.
        if res.last_evaluated_key.is_some() {
            tracing::warn!(
                table = op.table.name,
                "scan returned a partial page; remaining items were not read"
            );
        }

        Ok(Response::items(
            res.items
                .unwrap_or_default()
                .into_iter()
                .map(item_from_ddb)
                .collect(),
        ))
    }
}
