mod batch_put;
mod create_table;
mod delete_by_key;
mod query_by_index;
mod scan;
mod update_by_key;

use super::{
    ddb_key, ddb_key_schema, item_from_ddb, item_to_ddb, DynamoDb, SdkError, TypeExt, Value,
};
use orders_core::{
    driver::{operation, Response},
    schema::Table,
    Error, Result,
};
