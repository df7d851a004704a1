use super::{item_to_ddb, operation, DynamoDb, Error, Response, Result};
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};

/// `BatchWriteItem` accepts at most this many write requests per call.
const MAX_BATCH_WRITE: usize = 25;

impl DynamoDb {
    pub(crate) async fn exec_batch_put(&self, op: operation::BatchPut) -> Result<Response> {
        let table = op.table;
        let mut unprocessed = 0;

        for chunk in op.items.chunks(MAX_BATCH_WRITE) {
            let requests = chunk
                .iter()
                .map(|item| -> Result<WriteRequest> {
                    let put_request = PutRequest::builder()
                        .set_item(Some(item_to_ddb(item)?))
                        .build()
                        .map_err(Error::driver_operation_failed)?;

                    Ok(WriteRequest::builder().put_request(put_request).build())
                })
                .collect::<Result<Vec<_>>>()?;

            let res = self
                .client
                .batch_write_item()
                .request_items(table.name, requests)
                .send()
                .await
                .map_err(Error::driver_operation_failed)?;

            // Unprocessed writes are reported, never retried.
            unprocessed += res
                .unprocessed_items
                .as_ref()
                .and_then(|items| items.get(table.name))
                .map_or(0, Vec::len);
        }

        if unprocessed > 0 {
            return Err(Error::unprocessed_items(table.name, unprocessed));
        }

        Ok(Response::count(op.items.len() as u64))
    }
}
