#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "memory")]
pub mod memory;
