use orders::driver::Driver;

use crate::Setup;

pub struct SetupMemory;

#[async_trait::async_trait]
impl Setup for SetupMemory {
    async fn connect(&self) -> orders::Result<Box<dyn Driver>> {
        orders::connect("memory://").await
    }
}
