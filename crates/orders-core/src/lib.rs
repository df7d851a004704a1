pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod model;
pub use model::Order;

pub mod schema;
pub use schema::Table;

mod value;
pub use value::{Item, Value};

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
