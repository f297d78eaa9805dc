use lambda_runtime::{Error, LambdaEvent};
use people_core::handlers::create;
use people_core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, PersonStore};

/// `POST /create?name=&location=&age=`. Overwrites any record with the same name.
pub(crate) async fn function_handler<S: PersonStore + ?Sized>(
    store: &S,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(create::handle(store, &event.payload).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use people_core::apigw::request_with_query;
    use people_core::{MemoryPersonStore, Person};

    fn event(pairs: &[(&str, &str)]) -> LambdaEvent<ApiGatewayProxyRequest> {
        LambdaEvent::new(request_with_query(pairs.iter().copied()), Context::default())
    }

    #[tokio::test]
    async fn stores_the_queried_person() {
        let store = MemoryPersonStore::new();

        let response = function_handler(
            &store,
            event(&[("name", "a"), ("location", "b"), ("age", "30")]),
        )
        .await
        .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            store.get_person("a").await.unwrap(),
            Some(Person::new("a", "b", "30"))
        );
    }

    #[tokio::test]
    async fn missing_location_fails_the_invocation() {
        let store = MemoryPersonStore::new();

        let error = function_handler(&store, event(&[("name", "a"), ("age", "30")]))
            .await
            .unwrap_err();

        assert!(error.to_string().contains("'location'"));
    }
}
