use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use tracing::info;

use crate::apigw::{ok_json, query_param};
use crate::error::HandlerError;
use crate::record::KEY_ATTRIBUTE;
use crate::store::PersonStore;

pub async fn handle<S: PersonStore + ?Sized>(
    store: &S,
    request: &ApiGatewayProxyRequest,
) -> Result<ApiGatewayProxyResponse, HandlerError> {
    let name = query_param(request, KEY_ATTRIBUTE)?;
    let person = store
        .get_person(name)
        .await?
        .ok_or_else(|| HandlerError::NotFound(name.to_string()))?;
    info!(person = %name, "read person");

    Ok(ok_json(&person)?)
}
