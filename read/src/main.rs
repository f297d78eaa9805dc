use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, tracing, Error};
use people_core::{DynamoPersonStore, TableConfig};
use std::sync::Arc;

mod event_handler;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = TableConfig::from_env()?;
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = DynamoPersonStore::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.table_name,
    );
    tracing::info!(table = store.table_name(), "people table configured");
    let store = Arc::new(store);

    run(service_fn(move |event| {
        let store = Arc::clone(&store);
        async move { function_handler(store.as_ref(), event).await }
    }))
    .await
}
