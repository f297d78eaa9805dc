use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::PersonStore;
use crate::error::StoreError;
use crate::record::{Person, KEY_ATTRIBUTE};

pub struct DynamoPersonStore {
    client: Client,
    table_name: String,
}

impl DynamoPersonStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn to_item(person: &Person) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(person.name.clone()),
        ),
        (
            "location".to_string(),
            AttributeValue::S(person.location.clone()),
        ),
        ("age".to_string(), AttributeValue::S(person.age.clone())),
    ])
}

fn backend_error<E, R>(operation: &'static str, error: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    StoreError::Backend {
        operation,
        detail: DisplayErrorContext(&error).to_string(),
        source: Box::new(error),
    }
}

fn string_attribute(
    item: &HashMap<String, AttributeValue>,
    attribute: &'static str,
) -> Result<String, StoreError> {
    item.get(attribute)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or(StoreError::MissingAttribute(attribute))
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Person, StoreError> {
    Ok(Person {
        name: string_attribute(item, KEY_ATTRIBUTE)?,
        location: string_attribute(item, "location")?,
        age: string_attribute(item, "age")?,
    })
}

#[async_trait]
impl PersonStore for DynamoPersonStore {
    async fn put_person(&self, person: &Person) -> Result<String, StoreError> {
        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(person)))
            .send()
            .await
            .map_err(|error| backend_error("put item", error))?;

        Ok(format!("{output:?}"))
    }

    async fn get_person(&self, name: &str) -> Result<Option<Person>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(name.to_string()))
            .send()
            .await
            .map_err(|error| backend_error("get item", error))?;

        output.item().map(from_item).transpose()
    }
}
