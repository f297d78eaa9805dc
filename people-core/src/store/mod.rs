use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::Person;

mod dynamo;
mod memory;

pub use dynamo::DynamoPersonStore;
pub use memory::MemoryPersonStore;

/// Single-key access to the people table.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert or replace the record keyed by `person.name`.
    ///
    /// Returns the backend's write response rendered as text.
    async fn put_person(&self, person: &Person) -> Result<String, StoreError>;

    async fn get_person(&self, name: &str) -> Result<Option<Person>, StoreError>;
}
