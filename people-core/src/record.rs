use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use serde::{Deserialize, Serialize};

use crate::apigw::query_param;
use crate::error::HandlerError;

/// Partition key attribute of the people table.
pub const KEY_ATTRIBUTE: &str = "name";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub location: String,
    pub age: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            age: age.into(),
        }
    }

    pub fn from_query(request: &ApiGatewayProxyRequest) -> Result<Self, HandlerError> {
        Ok(Self::new(
            query_param(request, KEY_ATTRIBUTE)?,
            query_param(request, "location")?,
            query_param(request, "age")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apigw::request_with_query;

    #[test]
    fn builds_from_all_three_parameters() {
        let request =
            request_with_query([("name", "a"), ("location", "b"), ("age", "30")]);

        assert_eq!(Person::from_query(&request).unwrap(), Person::new("a", "b", "30"));
    }

    #[test]
    fn age_stays_an_untyped_string() {
        let request = request_with_query([
            ("name", "a"),
            ("location", "b"),
            ("age", "thirty"),
        ]);

        assert_eq!(Person::from_query(&request).unwrap().age, "thirty");
    }

    #[test]
    fn missing_age_is_an_error() {
        let request = request_with_query([("name", "a"), ("location", "b")]);

        let error = Person::from_query(&request).unwrap_err();
        assert!(matches!(error, HandlerError::MissingParameter(ref p) if p == "age"));
    }
}
