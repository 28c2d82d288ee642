use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// API Gateway proxy event, reduced to the fields the bridge reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayEvent {
    pub http_method: String,
    pub path: String,
    pub headers: Option<IndexMap<String, String>>,
    pub query_string_parameters: Option<IndexMap<String, String>>,
    pub body: Option<String>,
}

/// Proxy response handed back to API Gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: String,
    pub headers: IndexMap<String, String>,
    pub body: String,
}
