use crate::{Error, Result};

use orders_core::driver::Driver;
use url::Url;

/// Connects to the store named by `url`, picking the driver from its scheme.
///
/// Supported schemes are `dynamodb://` and `memory://`, each behind the
/// feature of the same name.
pub async fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url)
        .map_err(|e| Error::invalid_connection_url(format!("{e}; url={url}")))?;

    match parsed.scheme() {
        "dynamodb" => connect_dynamodb(&parsed).await,
        "memory" => connect_memory(&parsed),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported store; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "dynamodb")]
async fn connect_dynamodb(url: &Url) -> Result<Box<dyn Driver>> {
    let driver = orders_driver_dynamodb::DynamoDb::connect(url.as_str()).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "dynamodb"))]
async fn connect_dynamodb(_url: &Url) -> Result<Box<dyn Driver>> {
    Err(crate::err!("`dynamodb` feature not enabled"))
}

#[cfg(feature = "memory")]
fn connect_memory(url: &Url) -> Result<Box<dyn Driver>> {
    let driver = orders_driver_memory::Memory::connect(url.as_str())?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &Url) -> Result<Box<dyn Driver>> {
    Err(crate::err!("`memory` feature not enabled"))
}
