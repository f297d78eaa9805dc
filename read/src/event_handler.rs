use lambda_runtime::{Error, LambdaEvent};
use people_core::handlers::read;
use people_core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, PersonStore};

pub(crate) async fn function_handler<S: PersonStore + ?Sized>(
    store: &S,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(read::handle(store, &event.payload).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use people_core::apigw::{body_text, request_with_query};
    use people_core::{MemoryPersonStore, Person};

    fn event(name: &str) -> LambdaEvent<ApiGatewayProxyRequest> {
        LambdaEvent::new(request_with_query([("name", name)]), Context::default())
    }

    #[tokio::test]
    async fn returns_the_stored_record_as_json() {
        let store = MemoryPersonStore::new();
        store
            .put_person(&Person::new("a", "b", "30"))
            .await
            .unwrap();

        let response = function_handler(&store, event("a")).await.unwrap();

        assert_eq!(
            serde_json::from_str::<serde_json::Value>(body_text(&response).unwrap()).unwrap(),
            serde_json::json!({"name": "a", "location": "b", "age": "30"})
        );
    }

    #[tokio::test]
    async fn unknown_name_fails_the_invocation() {
        let store = MemoryPersonStore::new();

        let error = function_handler(&store, event("ghost")).await.unwrap_err();

        assert!(error.to_string().contains("ghost"));
    }
}
