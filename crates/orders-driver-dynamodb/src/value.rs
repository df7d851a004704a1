use aws_sdk_dynamodb::types::AttributeValue;
use orders_core::{err, Result, Value as CoreValue};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this DynamoDB driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a DynamoDB AttributeValue to a core value.
    ///
    /// Kinds the orders table never writes keep only their type descriptor.
    pub fn from_ddb(val: &AttributeValue) -> Self {
        use AttributeValue as AV;

        let core_value = match val {
            AV::S(val) => CoreValue::S(val.clone()),
            AV::N(val) => CoreValue::N(val.clone()),
            AV::Bool(val) => CoreValue::Bool(*val),
            AV::Null(_) => CoreValue::Null,
            AV::B(_) => CoreValue::Unsupported("B"),
            AV::Bs(_) => CoreValue::Unsupported("BS"),
            AV::L(_) => CoreValue::Unsupported("L"),
            AV::M(_) => CoreValue::Unsupported("M"),
            AV::Ns(_) => CoreValue::Unsupported("NS"),
            AV::Ss(_) => CoreValue::Unsupported("SS"),
            _ => CoreValue::Unsupported("unknown"),
        };

        Value(core_value)
    }

    /// Converts the value into a DynamoDB AttributeValue.
    pub fn to_ddb(&self) -> Result<AttributeValue> {
        use AttributeValue as AV;

        match &self.0 {
            CoreValue::S(val) => Ok(AV::S(val.clone())),
            CoreValue::N(val) => Ok(AV::N(val.clone())),
            CoreValue::Bool(val) => Ok(AV::Bool(*val)),
            CoreValue::Null => Ok(AV::Null(true)),
            CoreValue::Unsupported(kind) => Err(err!("cannot write attribute of type {kind}")),
        }
    }
}
