use lambda_runtime::{run, service_fn, tracing, Error};
use people_core::HelloConfig;

mod event_handler;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = HelloConfig::from_env();

    run(service_fn(|event| function_handler(&config, event))).await
}
