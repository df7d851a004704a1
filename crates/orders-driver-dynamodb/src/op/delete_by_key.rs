use super::{ddb_key, operation, DynamoDb, Error, Response, Result};
use aws_sdk_dynamodb::types::ReturnValue;

impl DynamoDb {
    pub(crate) async fn exec_delete_by_key(
        &self,
        op: operation::DeleteByKey,
    ) -> Result<Response> {
        // Deleting a missing key succeeds; the old attributes tell whether
        // anything was removed.
        let res = self
            .client
            .delete_item()
            .table_name(op.table.name)
            .set_key(Some(ddb_key(op.table, &op.key)?))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        let removed = res.attributes.is_some_and(|attrs| !attrs.is_empty());
        Ok(Response::count(removed as u64))
    }
}
