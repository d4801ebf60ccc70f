//! Document store access

pub mod memory;
pub mod mongo;
pub mod store;

pub use memory::{FailPoint, MemoryConnector, MemoryPostStore};
pub use mongo::{IntoIndexes, MongoClient, MongoConnector, MongoPostStore};
pub use store::{IndexSpec, PostFilter, PostStore, StoreConnector};
