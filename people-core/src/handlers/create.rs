use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use tracing::info;

use crate::apigw::ok_json;
use crate::error::HandlerError;
use crate::record::Person;
use crate::store::PersonStore;

pub async fn handle<S: PersonStore + ?Sized>(
    store: &S,
    request: &ApiGatewayProxyRequest,
) -> Result<ApiGatewayProxyResponse, HandlerError> {
    let person = Person::from_query(request)?;
    let status = store.put_person(&person).await?;
    info!(person = %person.name, "stored person");

    let message = format!("Status of the write to DynamoDB {status}!");
    Ok(ok_json(&message)?)
}
