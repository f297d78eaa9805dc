use lambda_runtime::{Error, LambdaEvent};
use people_core::handlers::hello;
use people_core::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, HelloConfig};

/// `GET /hello`. The request carries nothing the handler needs.
pub(crate) async fn function_handler(
    config: &HelloConfig,
    _event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(hello::handle(config)?)
}
