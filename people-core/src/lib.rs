//! Shared pieces of the people API: the person record, the datastore seam,
//! API Gateway envelopes and the runtime-independent handler logic used by the
//! `hello`, `create` and `read` functions.

pub mod apigw;
pub mod config;
pub mod error;
pub mod handlers;
pub mod record;
pub mod store;

pub use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
pub use config::{HelloConfig, TableConfig};
pub use error::{ConfigError, HandlerError, StoreError};
pub use record::Person;
pub use store::{DynamoPersonStore, MemoryPersonStore, PersonStore};
