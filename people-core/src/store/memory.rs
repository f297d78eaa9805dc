use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::PersonStore;
use crate::error::StoreError;
use crate::record::Person;

/// Last-write-wins map keyed by name.
#[derive(Default)]
pub struct MemoryPersonStore {
    records: Mutex<HashMap<String, Person>>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> HashMap<String, Person> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn put_person(&self, person: &Person) -> Result<String, StoreError> {
        let previous = self
            .records
            .lock()
            .await
            .insert(person.name.clone(), person.clone());

        Ok(format!(
            "MemoryPutOutput {{ replaced: {} }}",
            previous.is_some()
        ))
    }

    async fn get_person(&self, name: &str) -> Result<Option<Person>, StoreError> {
        Ok(self.records.lock().await.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_overwrites_existing_name() {
        let store = MemoryPersonStore::new();

        let first = store.put_person(&Person::new("a", "b", "30")).await.unwrap();
        let second = store.put_person(&Person::new("a", "c", "31")).await.unwrap();

        assert!(first.contains("replaced: false"));
        assert!(second.contains("replaced: true"));
        assert_eq!(
            store.get_person("a").await.unwrap(),
            Some(Person::new("a", "c", "31"))
        );
    }

    #[tokio::test]
    async fn unknown_name_yields_none() {
        let store = MemoryPersonStore::new();
        assert_eq!(store.get_person("nobody").await.unwrap(), None);
    }
}
