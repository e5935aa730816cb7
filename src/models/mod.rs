//! Models Module
//!
//! Payload types stored by the cache: the definition contract, result-set
//! wrappers, and definition type keys.

mod definition;
mod result_set;
mod type_key;

pub use definition::Definition;
pub use result_set::ResultSet;
pub use type_key::DefinitionTypeKey;
