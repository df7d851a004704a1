use super::{item_from_ddb, operation, DynamoDb, Error, Response, Result, Value};

impl DynamoDb {
    pub(crate) async fn exec_query_by_index(
        &self,
        op: operation::QueryByIndex,
    ) -> Result<Response> {
        let res = self
            .client
            .query()
            .table_name(op.table.name)
            .index_name(op.index.name)
            .key_condition_expression("#key = :value")
            .expression_attribute_names("#key", op.index.hash_key.name)
            .expression_attribute_values(":value", Value::from(op.value).to_ddb()?)
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        if res.last_evaluated_key.is_some() {
            tracing::warn!(
                table = op.table.name,
                index = op.index.name,
                "query returned a partial page; remaining items were not read"
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
