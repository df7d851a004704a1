use super::{ddb_key, operation, DynamoDb, Error, Response, Result, SdkError, Value};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

impl DynamoDb {
    pub(crate) async fn exec_update_by_key(
        &self,
        op: operation::UpdateByKey,
    ) -> Result<Response> {
        // Without the existence check UpdateItem would create a new item
        // holding only the key and the updated attribute.
        let res = self
            .client
            .update_item()
            .table_name(op.table.name)
            .set_key(Some(ddb_key(op.table, &op.key)?))
            .update_expression("SET #attr = :value")
            .condition_expression("attribute_exists(#key)")
            .expression_attribute_names("#attr", op.attribute)
            .expression_attribute_names("#key", op.table.hash_key.name)
            .expression_attribute_values(":value", Value::from(op.value).to_ddb()?)
            .send()
            .await;

        match res {
            Ok(_) => Ok(Response::count(1)),
            Err(SdkError::ServiceError(e))
                if matches!(e.err(), UpdateItemError::ConditionalCheckFailedException(_)) =>
            {
                Ok(Response::count(0))
            }
            Err(e) => Err(Error::driver_operation_failed(e)),
        }
    }
}
