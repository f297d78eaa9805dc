use people_core::apigw::{body_text, request_with_query};
use people_core::handlers::{create, read};
use people_core::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, HandlerError, MemoryPersonStore, Person,
};

fn create_request(name: &str, location: &str, age: &str) -> ApiGatewayProxyRequest {
    request_with_query([("name", name), ("location", location), ("age", age)])
}

fn read_request(name: &str) -> ApiGatewayProxyRequest {
    request_with_query([("name", name)])
}

fn body_person(response: &ApiGatewayProxyResponse) -> Person {
    serde_json::from_str(body_text(response).unwrap()).unwrap()
}

#[tokio::test]
async fn created_record_is_read_back_by_name() {
    let store = MemoryPersonStore::new();

    let created = create::handle(&store, &create_request("a", "b", "30"))
        .await
        .unwrap();
    assert_eq!(created.status_code, 200);

    let response = read::handle(&store, &read_request("a")).await.unwrap();
    assert_eq!(response.status_code, 200);
    let person = body_person(&response);
    assert_eq!(person, Person::new("a", "b", "30"));
}

#[tokio::test]
async fn create_body_is_a_json_encoded_status_message() {
    let store = MemoryPersonStore::new();

    let response = create::handle(&store, &create_request("a", "b", "30"))
        .await
        .unwrap();

    let message: String = serde_json::from_str(body_text(&response).unwrap()).unwrap();
    assert!(message.starts_with("Status of the write to DynamoDB "));
    assert!(message.ends_with('!'));
}

#[tokio::test]
async fn repeated_create_leaves_the_same_final_state() {
    let once = MemoryPersonStore::new();
    create::handle(&once, &create_request("a", "b", "30"))
        .await
        .unwrap();

    let twice = MemoryPersonStore::new();
    for _ in 0..2 {
        create::handle(&twice, &create_request("a", "b", "30"))
            .await
            .unwrap();
    }

    assert_eq!(once.snapshot().await, twice.snapshot().await);
}

#[tokio::test]
async fn later_create_wins() {
    let store = MemoryPersonStore::new();
    create::handle(&store, &create_request("a", "b", "30"))
        .await
        .unwrap();
    create::handle(&store, &create_request("a", "Lisbon", "31"))
        .await
        .unwrap();

    let response = read::handle(&store, &read_request("a")).await.unwrap();
    let person = body_person(&response);
    assert_eq!(person, Person::new("a", "Lisbon", "31"));
}

#[tokio::test]
async fn create_without_age_fails_without_writing() {
    let store = MemoryPersonStore::new();
    let request = request_with_query([("name", "a"), ("location", "b")]);

    let error = create::handle(&store, &request).await.unwrap_err();

    assert!(matches!(error, HandlerError::MissingParameter(ref p) if p == "age"));
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn create_without_query_string_fails() {
    let store = MemoryPersonStore::new();

    let error = create::handle(&store, &ApiGatewayProxyRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(error, HandlerError::MissingParameter(ref p) if p == "name"));
}

#[tokio::test]
async fn reading_an_unknown_name_fails_instead_of_answering_404() {
    let store = MemoryPersonStore::new();

    let error = read::handle(&store, &read_request("ghost"))
        .await
        .unwrap_err();

    assert!(matches!(error, HandlerError::NotFound(ref name) if name == "ghost"));
}

#[tokio::test]
async fn read_without_name_fails() {
    let store = MemoryPersonStore::new();

    let error = read::handle(&store, &request_with_query([("location", "b")]))
        .await
        .unwrap_err();

    assert!(matches!(error, HandlerError::MissingParameter(ref p) if p == "name"));
}
