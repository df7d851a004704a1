use orders::driver::Driver;

use crate::Setup;

/// Runs against the store named by `ORDERS_TEST_DYNAMODB_URL`, DynamoDB
/// Local on port 8000 by default.
pub struct SetupDynamoDb;

#[async_trait::async_trait]
impl Setup for SetupDynamoDb {
    async fn connect(&self) -> orders::Result<Box<dyn Driver>> {
        let url = std::env::var("ORDERS_TEST_DYNAMODB_URL")
            .unwrap_or_else(|_| "dynamodb://localhost:8000".to_string());

        orders::connect(&url).await
    }

    fn serial(&self) -> bool {
        true
    }
}
