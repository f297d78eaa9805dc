use std::collections::BTreeMap;

use serde::Serialize;

use crate::profile::Profile;

/// Environment variable the functions read the table name from.
pub const TABLE_ENV_VAR: &str = "table";
pub const PARTITION_KEY: &str = "name";
/// Write capacity DynamoDB gets when none is specified.
pub const DEFAULT_WRITE_CAPACITY: u32 = 5;

const READ_ACTIONS: &[&str] = &[
    "dynamodb:BatchGetItem",
    "dynamodb:GetRecords",
    "dynamodb:GetShardIterator",
    "dynamodb:Query",
    "dynamodb:GetItem",
    "dynamodb:Scan",
    "dynamodb:ConditionCheckItem",
    "dynamodb:DescribeTable",
];

const WRITE_ACTIONS: &[&str] = &[
    "dynamodb:BatchWriteItem",
    "dynamodb:PutItem",
    "dynamodb:UpdateItem",
    "dynamodb:DeleteItem",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub method: HttpMethod,
    /// Single path segment below the API root, without slashes.
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableAccess {
    None,
    ReadWrite,
    ReadOnly,
}

impl TableAccess {
    pub fn actions(&self) -> Vec<&'static str> {
        match self {
            TableAccess::None => Vec::new(),
            TableAccess::ReadOnly => READ_ACTIONS.to_vec(),
            TableAccess::ReadWrite => READ_ACTIONS.iter().chain(WRITE_ACTIONS).copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: String,
    pub partition_key: String,
    pub read_capacity: u32,
    pub write_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSpec {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSpec {
    /// Also the workspace binary that provides the code.
    pub name: String,
    pub route: Route,
    pub table_access: TableAccess,
    pub reserved_concurrency: u32,
    pub environment: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    pub stack_name: String,
    pub region: String,
    pub profile: Profile,
    pub table: TableSpec,
    pub api: ApiSpec,
    pub functions: Vec<FunctionSpec>,
}

impl Topology {
    pub fn build(
        stack_name: impl Into<String>,
        region: impl Into<String>,
        profile: Profile,
    ) -> Self {
        let table = TableSpec {
            name: profile.table_name(),
            partition_key: PARTITION_KEY.to_string(),
            read_capacity: profile.capacity_units,
            write_capacity: DEFAULT_WRITE_CAPACITY,
        };
        let environment = BTreeMap::from([(TABLE_ENV_VAR.to_string(), table.name.clone())]);

        let function = |name: &str, method: HttpMethod, table_access: TableAccess| FunctionSpec {
            name: name.to_string(),
            route: Route {
                method,
                path: name.to_string(),
            },
            table_access,
            reserved_concurrency: profile.concurrency_limit,
            environment: environment.clone(),
        };

        let functions = vec![
            function("hello", HttpMethod::Get, TableAccess::None),
            function("create", HttpMethod::Post, TableAccess::ReadWrite),
            function("read", HttpMethod::Get, TableAccess::ReadOnly),
        ];

        Self {
            stack_name: stack_name.into(),
            region: region.into(),
            profile,
            api: ApiSpec {
                name: profile.api_name(),
            },
            table,
            functions,
        }
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSpec> {
        self.functions.iter().find(|function| function.name == name)
    }
}
