//! CloudFormation rendering of a [`Topology`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{json, Map, Value};

use crate::topology::{FunctionSpec, TableAccess, Topology};

pub const TABLE_ID: &str = "PeopleTable";
pub const API_ID: &str = "Api";
pub const ASSET_BUCKET_PARAMETER: &str = "AssetBucket";
pub const STAGE_NAME: &str = "prod";
const LAMBDA_RUNTIME: &str = "provided.al2023";
const BASIC_EXECUTION_POLICY: &str = "policy/service-role/AWSLambdaBasicExecutionRole";

fn pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn function_logical_id(function: &FunctionSpec) -> String {
    format!("{}Function", pascal_case(&function.name))
}

pub fn asset_key(function: &FunctionSpec) -> String {
    format!("{}/bootstrap.zip", function.name)
}

fn table_resource(topology: &Topology) -> Value {
    let table = &topology.table;
    json!({
        "Type": "AWS::DynamoDB::Table",
        "Properties": {
            "TableName": table.name,
            "BillingMode": "PROVISIONED",
            "KeySchema": [{"AttributeName": table.partition_key, "KeyType": "HASH"}],
            "AttributeDefinitions": [{"AttributeName": table.partition_key, "AttributeType": "S"}],
            "ProvisionedThroughput": {
                "ReadCapacityUnits": table.read_capacity,
                "WriteCapacityUnits": table.write_capacity
            }
        },
        "UpdateReplacePolicy": "Retain",
        "DeletionPolicy": "Retain"
    })
}

fn role_resource() -> Value {
    json!({
        "Type": "AWS::IAM::Role",
        "Properties": {
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": {"Service": "lambda.amazonaws.com"},
                    "Action": "sts:AssumeRole"
                }]
            },
            "ManagedPolicyArns": [{
                "Fn::Join": ["", [
                    "arn:", {"Ref": "AWS::Partition"}, ":iam::aws:", BASIC_EXECUTION_POLICY
                ]]
            }]
        }
    })
}

fn table_policy_resource(policy_name: &str, role_id: &str, access: TableAccess) -> Value {
    json!({
        "Type": "AWS::IAM::Policy",
        "Properties": {
            "PolicyName": policy_name,
            "Roles": [{"Ref": role_id}],
            "PolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Action": access.actions(),
                    "Resource": [{"Fn::GetAtt": [TABLE_ID, "Arn"]}]
                }]
            }
        }
    })
}

fn function_resources(function: &FunctionSpec, resources: &mut Map<String, Value>) -> String {
    let base = pascal_case(&function.name);
    let role_id = format!("{base}Role");
    let policy_id = format!("{base}TablePolicy");
    let function_id = function_logical_id(function);
    let resource_id = format!("{base}Resource");
    let method_id = format!("{base}Method");
    let method = function.route.method.as_str();

    resources.insert(role_id.clone(), role_resource());

    let mut depends_on = vec![role_id.clone()];
    if function.table_access != TableAccess::None {
        resources.insert(
            policy_id.clone(),
            table_policy_resource(&policy_id, &role_id, function.table_access),
        );
        depends_on.push(policy_id);
    }

    resources.insert(
        function_id.clone(),
        json!({
            "Type": "AWS::Lambda::Function",
            "Properties": {
                "Runtime": LAMBDA_RUNTIME,
                "Handler": "bootstrap",
                "Code": {
                    "S3Bucket": {"Ref": ASSET_BUCKET_PARAMETER},
                    "S3Key": asset_key(function)
                },
                "Role": {"Fn::GetAtt": [role_id, "Arn"]},
                "ReservedConcurrentExecutions": function.reserved_concurrency,
                "Environment": {"Variables": function.environment}
            },
            "DependsOn": depends_on
        }),
    );

    resources.insert(
        resource_id.clone(),
        json!({
            "Type": "AWS::ApiGateway::Resource",
            "Properties": {
                "RestApiId": {"Ref": API_ID},
                "ParentId": {"Fn::GetAtt": [API_ID, "RootResourceId"]},
                "PathPart": function.route.path
            }
        }),
    );

    resources.insert(
        method_id.clone(),
        json!({
            "Type": "AWS::ApiGateway::Method",
            "Properties": {
                "RestApiId": {"Ref": API_ID},
                "ResourceId": {"Ref": resource_id},
                "HttpMethod": method,
                "AuthorizationType": "NONE",
                "Integration": {
                    "Type": "AWS_PROXY",
                    "IntegrationHttpMethod": "POST",
                    "Uri": {"Fn::Join": ["", [
                        "arn:", {"Ref": "AWS::Partition"}, ":apigateway:", {"Ref": "AWS::Region"},
                        ":lambda:path/2015-03-31/functions/", {"Fn::GetAtt": [function_id, "Arn"]},
                        "/invocations"
                    ]]}
                }
            }
        }),
    );

    resources.insert(
        format!("{base}Permission"),
        json!({
            "Type": "AWS::Lambda::Permission",
            "Properties": {
                "Action": "lambda:InvokeFunction",
                "FunctionName": {"Fn::GetAtt": [function_id, "Arn"]},
                "Principal": "apigateway.amazonaws.com",
                "SourceArn": {"Fn::Join": ["", [
                    "arn:", {"Ref": "AWS::Partition"}, ":execute-api:", {"Ref": "AWS::Region"}, ":",
                    {"Ref": "AWS::AccountId"}, ":", {"Ref": API_ID},
                    format!("/*/{method}/{}", function.route.path)
                ]]}
            }
        }),
    );

    method_id
}

pub fn synthesize(topology: &Topology) -> Value {
    let mut resources = Map::new();
    resources.insert(TABLE_ID.to_string(), table_resource(topology));
    resources.insert(
        API_ID.to_string(),
        json!({
            "Type": "AWS::ApiGateway::RestApi",
            "Properties": {"Name": topology.api.name}
        }),
    );

    let methods: Vec<String> = topology
        .functions
        .iter()
        .map(|function| function_resources(function, &mut resources))
        .collect();

    resources.insert(
        "ApiDeployment".to_string(),
        json!({
            "Type": "AWS::ApiGateway::Deployment",
            "Properties": {"RestApiId": {"Ref": API_ID}},
            "DependsOn": methods
        }),
    );
    resources.insert(
        "ApiStage".to_string(),
        json!({
            "Type": "AWS::ApiGateway::Stage",
            "Properties": {
                "RestApiId": {"Ref": API_ID},
                "DeploymentId": {"Ref": "ApiDeployment"},
                "StageName": STAGE_NAME
            }
        }),
    );

    json!({
        "Description": format!("People API ({})", topology.stack_name),
        "Parameters": {
            ASSET_BUCKET_PARAMETER: {
                "Type": "String",
                "Description": "Bucket holding <function>/bootstrap.zip code assets"
            }
        },
        "Resources": resources,
        "Outputs": {
            "ApiEndpoint": {
                "Value": {"Fn::Join": ["", [
                    "https://", {"Ref": API_ID}, ".execute-api.", topology.region, ".",
                    {"Ref": "AWS::URLSuffix"}, format!("/{STAGE_NAME}/")
                ]]}
            },
            "TableName": {"Value": {"Ref": TABLE_ID}}
        }
    })
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> anyhow::Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Writes one template and one topology file per stack plus `manifest.json`.
pub fn write_assembly(out_dir: &Path, topologies: &[Topology]) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    let mut stacks = Map::new();
    for topology in topologies {
        let template_file = format!("{}.template.json", topology.stack_name);
        let topology_file = format!("{}.topology.json", topology.stack_name);

        let template_path = out_dir.join(&template_file);
        write_json(&template_path, &synthesize(topology))?;
        let topology_path = out_dir.join(&topology_file);
        write_json(&topology_path, topology)?;

        stacks.insert(
            topology.stack_name.clone(),
            json!({
                "region": topology.region,
                "template": template_file,
                "topology": topology_file
            }),
        );
        written.push(template_path);
        written.push(topology_path);
    }

    let manifest_path = out_dir.join("manifest.json");
    write_json(&manifest_path, &json!({ "stacks": stacks }))?;
    written.push(manifest_path);

    Ok(written)
}
