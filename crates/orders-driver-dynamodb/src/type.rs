use aws_sdk_dynamodb::types::ScalarAttributeType;
use orders_core::schema::AttributeType;

pub trait TypeExt {
    /// Converts a key attribute type to a DynamoDB scalar type.
    fn to_ddb_type(&self) -> ScalarAttributeType;
}

impl TypeExt for AttributeType {
    fn to_ddb_type(&self) -> ScalarAttributeType {
        match self {
            AttributeType::String => ScalarAttributeType::S,
            AttributeType::Number => ScalarAttributeType::N,
        }
    }
}
