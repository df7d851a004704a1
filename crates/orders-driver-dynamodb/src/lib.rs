mod op;
mod r#type;
mod value;

pub(crate) use r#type::TypeExt;
pub(crate) use value::Value;

use orders_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::{Attribute, Table},
    Error, Item, Result,
};

use aws_sdk_dynamodb::{
    error::SdkError,
    types::{AttributeValue, KeySchemaElement, KeyType},
    Client,
};
use std::collections::HashMap;
use url::Url;

#[derive(Debug)]
pub struct DynamoDb {
    /// Handle to the AWS SDK client
    client: Client,
}

impl DynamoDb {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects using a `dynamodb://[host[:port]]` URL.
    ///
    /// With a host, requests go to `http://host:port` using static test
    /// credentials, which is what DynamoDB Local expects. Without one, the
    /// SDK's default endpoint and credential resolution apply. The region
    /// comes from the environment and falls back to `us-east-1`.
    pub async fn connect(url: &str) -> Result<Self> {
        use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
        use aws_sdk_dynamodb::config::Credentials;

        let url = Url::parse(url)
            .map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

        if url.scheme() != "dynamodb" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `dynamodb` scheme; url={url}"
            )));
        }

        let region = RegionProviderChain::default_provider().or_else("us-east-1");
        let mut aws_config = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let Some(endpoint_url) = endpoint_url(&url) {
            tracing::debug!(%endpoint_url, "using DynamoDB endpoint override");

            aws_config = aws_config
                .endpoint_url(endpoint_url)
                .credentials_provider(Credentials::for_tests());
        }

        let sdk_config = aws_config.load().await;

        Ok(Self::new(Client::new(&sdk_config)))
    }
}

#[async_trait]
impl Driver for DynamoDb {
    async fn exec(&self, op: Operation) -> Result<Response> {
        tracing::debug!(op = op.name(), table = op.table().name, "dynamodb exec");

        match op {
            Operation::BatchPut(op) => self.exec_batch_put(op).await,
            Operation::Scan(op) => self.exec_scan(op).await,
            Operation::UpdateByKey(op) => self.exec_update_by_key(op).await,
            Operation::DeleteByKey(op) => self.exec_delete_by_key(op).await,
            Operation::QueryByIndex(op) => self.exec_query_by_index(op).await,
        }
    }

    async fn reset_table(&self, table: &'static Table) -> Result<()> {
        self.create_table(table, true).await
    }
}

fn endpoint_url(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|host| !host.is_empty())?;
    let mut endpoint_url = format!("http://{host}");

    if let Some(port) = url.port() {
        endpoint_url.push_str(&format!(":{port}"));
    }

    Some(endpoint_url)
}

fn ddb_key(table: &Table, key: &orders_core::Value) -> Result<HashMap<String, AttributeValue>> {
    let mut ret = HashMap::new();
    ret.insert(
        table.hash_key.name.to_string(),
        Value::from(key.clone()).to_ddb()?,
    );
    Ok(ret)
}

fn ddb_key_schema(partition: &Attribute) -> Result<Vec<KeySchemaElement>> {
    let element = KeySchemaElement::builder()
        .attribute_name(partition.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(Error::driver_operation_failed)?;

    Ok(vec![element])
}

fn item_to_ddb(item: &Item) -> Result<HashMap<String, AttributeValue>> {
    item.iter()
        .map(|(name, value)| -> Result<(String, AttributeValue)> {
            Ok((name.clone(), Value::from(value.clone()).to_ddb()?))
        })
        .collect()
}

fn item_from_ddb(item: HashMap<String, AttributeValue>) -> Item {
    item.into_iter()
        .map(|(name, value)| (name, Value::from_ddb(&value).into_inner()))
        .collect()
}
