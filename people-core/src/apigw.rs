//! Helpers around the API Gateway proxy envelope from `aws_lambda_events`.

use std::collections::HashMap;

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::HeaderMap;
use serde::Serialize;

use crate::error::HandlerError;

const ALLOW_METHODS: HeaderName = HeaderName::from_static("access-control-allow-methods");

pub fn query_param<'a>(
    request: &'a ApiGatewayProxyRequest,
    name: &str,
) -> Result<&'a str, HandlerError> {
    request
        .query_string_parameters
        .first(name)
        .ok_or_else(|| HandlerError::MissingParameter(name.to_string()))
}

/// Proxy request carrying only the given query string parameters.
pub fn request_with_query<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> ApiGatewayProxyRequest {
    let params: HashMap<String, Vec<String>> = pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), vec![value.to_string()]))
        .collect();

    let mut request = ApiGatewayProxyRequest::default();
    request.query_string_parameters = params.into();
    request
}

/// 200 response whose body is `value` encoded as JSON.
pub fn ok_json<T: Serialize + ?Sized>(
    value: &T,
) -> Result<ApiGatewayProxyResponse, serde_json::Error> {
    let body = serde_json::to_string(value)?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ALLOW_METHODS, HeaderValue::from_static("GET,POST,OPTIONS"));

    Ok(ApiGatewayProxyResponse {
        status_code: 200,
        headers,
        body: Some(Body::Text(body)),
        ..Default::default()
    })
}

pub fn body_text(response: &ApiGatewayProxyResponse) -> Option<&str> {
    match response.body.as_ref()? {
        Body::Text(text) => Some(text),
        _ => None,
    }
}
