use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use tracing::info;

use crate::apigw::ok_json;
use crate::config::HelloConfig;
use crate::error::HandlerError;

pub fn greeting(config: &HelloConfig) -> String {
    let region = config.region.as_deref().unwrap_or_default();
    format!("This is a hello from {region}!")
}

pub fn handle(config: &HelloConfig) -> Result<ApiGatewayProxyResponse, HandlerError> {
    let message = greeting(config);
    info!(region = ?config.region, "answering hello");
    Ok(ok_json(&message)?)
}
