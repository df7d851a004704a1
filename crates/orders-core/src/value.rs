use indexmap::IndexMap;

/// An item as stored in a table: attribute name to attribute value.
///
/// Attribute order is preserved so items render the way they were built.
pub type Item = IndexMap<String, Value>;

/// A single attribute value, in the store's typed representation.
///
/// Numbers are carried as their decimal string, the way the store transmits
/// them; parsing happens when a record is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// String attribute.
    S(String),

    /// Number attribute, as a decimal string.
    N(String),

    /// Boolean attribute.
    Bool(bool),

    /// Explicit null attribute.
    Null,

    /// An attribute kind the orders table never writes (binary, list, map,
    /// sets). Only its type descriptor is kept, for error reporting.
    Unsupported(&'static str),
}

impl Value {
    /// Returns the store's type descriptor for this value (`S`, `N`, `BOOL`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::S(_) => "S",
            Value::N(_) => "N",
            Value::Bool(_) => "BOOL",
            Value::Null => "NULL",
            Value::Unsupported(kind) => kind,
        }
    }

    pub fn as_s(&self) -> Option<&str> {
        match self {
            Value::S(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            Value::N(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::S(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::S(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::N(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
