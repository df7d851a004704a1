use super::{ddb_key_schema, DynamoDb, Error, Result, SdkError, Table, TypeExt};
use aws_sdk_dynamodb::{
    client::Waiters,
    operation::delete_table::DeleteTableError,
    types::{
        AttributeDefinition, GlobalSecondaryIndex, Projection, ProjectionType,
        ProvisionedThroughput,
    },
};
use std::time::Duration;

/// Upper bound on how long a table may stay `DELETING` or `CREATING`.
const TABLE_STATUS_TIMEOUT: Duration = Duration::from_secs(300);

impl DynamoDb {
    pub(crate) async fn create_table(&self, table: &Table, reset: bool) -> Result<()> {
        if reset {
            let res = self
                .client
                .delete_table()
                .table_name(table.name)
                .send()
                .await;

            match res {
                Ok(_) => {
                    self.client
                        .wait_until_table_not_exists()
                        .table_name(table.name)
                        .wait(TABLE_STATUS_TIMEOUT)
                        .await
                        .map_err(Error::driver_operation_failed)?;

                    tracing::debug!(table = table.name, "dropped table");
                }
                Err(SdkError::ServiceError(e))
                    if matches!(e.err(), DeleteTableError::ResourceNotFoundException(_)) => {}
                Err(e) => return Err(Error::driver_operation_failed(e)),
            }
        }

        let pt = ProvisionedThroughput::builder()
            .read_capacity_units(10)
            .write_capacity_units(5)
            .build()
            .map_err(Error::driver_operation_failed)?;

        // Only key attributes (table and index) are declared up front.
        let mut defined_attributes = vec![table.hash_key];

        let mut gsis = vec![];

        for index in table.indices {
            if !defined_attributes
                .iter()
                .any(|attr| attr.name == index.hash_key.name)
            {
                defined_attributes.push(index.hash_key);
            }

            gsis.push(
                GlobalSecondaryIndex::builder()
                    .index_name(index.name)
                    .set_key_schema(Some(ddb_key_schema(&index.hash_key)?))
                    .projection(
                        Projection::builder()
                            .projection_type(ProjectionType::All)
                            .build(),
                    )
                    .provisioned_throughput(pt.clone())
                    .build()
                    .map_err(Error::driver_operation_failed)?,
            );
        }

        let attribute_definitions = defined_attributes
            .iter()
            .map(|attr| {
                AttributeDefinition::builder()
                    .attribute_name(attr.name)
                    .attribute_type(attr.ty.to_ddb_type())
                    .build()
                    .map_err(Error::driver_operation_failed)
            })
            .collect::<Result<Vec<_>>>()?;

        self.client
            .create_table()
            .table_name(table.name)
            .set_attribute_definitions(Some(attribute_definitions))
            .set_key_schema(Some(ddb_key_schema(&table.hash_key)?))
            .set_global_secondary_indexes(if gsis.is_empty() { None } else { Some(gsis) })
            .provisioned_throughput(pt)
            .send()
            .await
            .map_err(Error::driver_operation_failed)?;

        self.client
            .wait_until_table_exists()
            .table_name(table.name)
            .wait(TABLE_STATUS_TIMEOUT)
            .await
            .map_err(Error::driver_operation_failed)?;

        tracing::debug!(table = table.name, "created table");

        Ok(())
    }
}
