//! Cold-start configuration handed to the handlers.

use crate::error::ConfigError;

/// Set by the stack on every function; holds the resolved table name.
pub const TABLE_ENV_VAR: &str = "table";
/// Provided by the Lambda platform.
pub const REGION_ENV_VAR: &str = "AWS_REGION";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelloConfig {
    pub region: Option<String>,
}

impl HelloConfig {
    pub fn from_env() -> Self {
        Self {
            region: std::env::var(REGION_ENV_VAR).ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
}

impl TableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_ENV_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVariable(TABLE_ENV_VAR))?;
        Ok(Self { table_name })
    }
}
