//! HTTP client for interacting with CAIRN node RPC.

use cairn_types::{Deploy, DeployHash, Digest, Key, StoredValue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{Result, SdkError};

/// RPC request.
#[derive(Debug, Serialize)]
struct RpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

/// RPC response.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RpcResponse<T> {
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    error: Option<RpcError>,
}

/// RPC error.
#[derive(Debug, Deserialize)]
struct RpcError {
    code: i32,
    message: String,
}

/// Result for the `chain_get_state_root_hash` RPC.
#[derive(Debug, Deserialize)]
struct GetStateRootHashResult {
    state_root_hash: Digest,
}

/// Result for the `state_query_value` RPC.
#[derive(Debug, Deserialize)]
struct QueryStateResult {
    stored_value: StoredValue,
}

/// Result for the `account_put_deploy` RPC.
///
/// A node may acknowledge the request without returning a deploy hash;
/// callers decide what that means for their operation.
#[derive(Debug, Deserialize)]
struct PutDeployResult {
    #[serde(default)]
    deploy_hash: Option<DeployHash>,
}

/// Node access used by the contract helpers.
///
/// Every helper operation takes an explicit client handle instead of
/// constructing its own, so tests can substitute a mock node.
#[allow(async_fn_in_trait)]
pub trait NodeClient {
    /// Fetch the current global state root hash.
    async fn state_root_hash(&self) -> Result<Digest>;

    /// Fetch the stored value under `key` at the given state root,
    /// descending through `path`.
    async fn query_state(
        &self,
        state_root: &Digest,
        key: &Key,
        path: &[String],
    ) -> Result<StoredValue>;

    /// Submit a deploy to the node.
    async fn put_deploy(&self, deploy: &Deploy) -> Result<Option<DeployHash>>;
}

/// CAIRN node RPC client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
}

impl Client {
    /// Default request timeout.
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new client for a node RPC endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, Self::DEFAULT_TIMEOUT)
    }

    /// Create a new client with an explicit request timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            url: url.into(),
        }
    }

    /// Node RPC endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make RPC request.
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: 1,
        };

        debug!("rpc request: {} -> {}", method, self.url);

        let response_text = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        let response: RpcResponse<T> = serde_json::from_str(&response_text)
            .map_err(|e| SdkError::Serialization(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = response.error {
            return Err(SdkError::Rpc(format!("{}: {}", error.code, error.message)));
        }

        response
            .result
            .ok_or_else(|| SdkError::Rpc("Empty result".to_string()))
    }
}

impl NodeClient for Client {
    async fn state_root_hash(&self) -> Result<Digest> {
        let result: GetStateRootHashResult = self
            .request("chain_get_state_root_hash", json!([]))
            .await?;
        Ok(result.state_root_hash)
    }

    async fn query_state(
        &self,
        state_root: &Digest,
        key: &Key,
        path: &[String],
    ) -> Result<StoredValue> {
        let result: QueryStateResult = self
            .request(
                "state_query_value",
                json!({
                    "state_root_hash": state_root,
                    "key": key.to_formatted_string(),
                    "path": path,
                }),
            )
            .await?;
        Ok(result.stored_value)
    }

    async fn put_deploy(&self, deploy: &Deploy) -> Result<Option<DeployHash>> {
        let result: PutDeployResult = self
            .request("account_put_deploy", json!({ "deploy": deploy }))
            .await?;

        if let Some(hash) = &result.deploy_hash {
            info!("deploy {} accepted by {}", hash, self.url);
        }
        Ok(result.deploy_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Client::new("http://localhost:7777/rpc");
        assert_eq!(client.url(), "http://localhost:7777/rpc");
    }

    #[test]
    fn test_rpc_response_parses_error() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"bad params"}}"#;
        let response: RpcResponse<GetStateRootHashResult> = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "bad params");
    }

    #[test]
    fn test_put_deploy_result_tolerates_missing_hash() {
        let raw = r#"{"api_version":"1.0.0"}"#;
        let result: PutDeployResult = serde_json::from_str(raw).unwrap();
        assert!(result.deploy_hash.is_none());
    }

    #[test]
    fn test_query_state_result_parses_stored_value() {
        let raw = r#"{"stored_value":{"Value":{"U64":42}}}"#;
        let result: QueryStateResult = serde_json::from_str(raw).unwrap();
        assert_eq!(
            result.stored_value,
            StoredValue::Value(cairn_types::Value::U64(42))
        );
    }
}
