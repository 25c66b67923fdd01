//! Results of the "query applications" and "query node" RPC calls

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::encoding::is_hex;
use crate::error::{CoreError, Result};
use crate::staking::StakingStatus;

/// A staked application entitled to consume relays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub address: String,
    pub public_key: String,
    #[serde(default)]
    pub jailed: bool,
    pub status: StakingStatus,
    #[serde(default)]
    pub chains: Vec<String>,
    pub staked_tokens: String,
    #[serde(default)]
    pub max_relays: String,
    /// Unix timestamp, empty while staked
    #[serde(default)]
    pub unstaking_time: String,
}

impl Application {
    pub fn is_valid(&self) -> bool {
        is_hex(&self.address) && is_hex(&self.public_key) && !self.chains.is_empty()
    }
}

/// A staked servicer node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub address: String,
    pub public_key: String,
    #[serde(default)]
    pub jailed: bool,
    pub status: StakingStatus,
    pub staked_tokens: String,
    pub service_url: String,
    #[serde(default)]
    pub chains: Vec<String>,
    #[serde(default)]
    pub unstaking_time: String,
}

impl Node {
    pub fn is_valid(&self) -> bool {
        is_hex(&self.address)
            && is_hex(&self.public_key)
            && !self.service_url.is_empty()
            && !self.chains.is_empty()
    }
}

/// Applications returned by a "query applications" call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAppsResponse {
    pub applications: Vec<Application>,
}

impl QueryAppsResponse {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    /// Parse a JSON array of applications. `null` yields an empty list.
    pub fn from_json(json: &str) -> Result<Self> {
        let applications: Option<Vec<Application>> = serde_json::from_str(json)?;
        Ok(Self::new(applications.unwrap_or_default()))
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "apps": self.applications })
    }
}

/// Node returned by a "query node" call.
///
/// Only constructible around a valid node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNodeResponse {
    node: Node,
}

#[derive(Deserialize)]
struct QueryNodeWire {
    node: Node,
}

impl QueryNodeResponse {
    pub fn new(node: Node) -> Result<Self> {
        if !node.is_valid() {
            return Err(CoreError::InvalidNode(node.address));
        }
        Ok(Self { node })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let wire: QueryNodeWire = serde_json::from_str(json)?;
        Self::new(wire.node)
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "Node": self.node })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node() -> Node {
        Node {
            address: "ab".repeat(20),
            public_key: "cd".repeat(32),
            jailed: false,
            status: StakingStatus::Staked,
            staked_tokens: "15000".to_string(),
            service_url: "https://node.example:443".to_string(),
            chains: vec!["0021".to_string()],
            unstaking_time: String::new(),
        }
    }

    fn sample_app() -> Application {
        Application {
            address: "ef".repeat(20),
            public_key: "01".repeat(32),
            jailed: false,
            status: StakingStatus::Staked,
            chains: vec!["0021".to_string(), "0001".to_string()],
            staked_tokens: "1000".to_string(),
            max_relays: "250".to_string(),
            unstaking_time: String::new(),
        }
    }

    #[test]
    fn test_node_validity() {
        assert!(sample_node().is_valid());

        let mut node = sample_node();
        node.service_url.clear();
        assert!(!node.is_valid());

        let mut node = sample_node();
        node.chains.clear();
        assert!(!node.is_valid());

        let mut node = sample_node();
        node.public_key = "xyz".to_string();
        assert!(!node.is_valid());
    }

    #[test]
    fn test_query_node_response_rejects_invalid_node() {
        let mut node = sample_node();
        node.address = "nothex".to_string();
        assert!(matches!(
            QueryNodeResponse::new(node),
            Err(CoreError::InvalidNode(_))
        ));
    }

    #[test]
    fn test_query_node_response_from_json() {
        let json = json!({ "node": sample_node() }).to_string();
        let response = QueryNodeResponse::from_json(&json).unwrap();
        assert_eq!(response.node(), &sample_node());
        assert_eq!(response.to_json()["Node"]["status"], 2);
    }

    #[test]
    fn test_query_node_response_unknown_status_falls_back() {
        let mut value = json!({ "node": sample_node() });
        value["node"]["status"] = json!(256);
        let response = QueryNodeResponse::from_json(&value.to_string()).unwrap();
        assert_eq!(response.node().status, StakingStatus::Unstaking);

        let mut apps = json!([sample_app()]);
        apps[0]["status"] = json!(-1);
        let response = QueryAppsResponse::from_json(&apps.to_string()).unwrap();
        assert_eq!(response.applications[0].status, StakingStatus::Unstaking);
    }

    #[test]
    fn test_query_node_response_from_bad_json() {
        assert!(matches!(
            QueryNodeResponse::from_json("{\"node\": 5}"),
            Err(CoreError::SerializationError(_))
        ));
    }

    #[test]
    fn test_query_apps_response_from_json() {
        let json = serde_json::to_string(&vec![sample_app(), sample_app()]).unwrap();
        let response = QueryAppsResponse::from_json(&json).unwrap();
        assert_eq!(response.applications.len(), 2);
        assert!(response.applications.iter().all(Application::is_valid));

        let rendered = response.to_json();
        assert_eq!(rendered["apps"].as_array().unwrap().len(), 2);
        assert_eq!(rendered["apps"][0]["max_relays"], "250");
    }

    #[test]
    fn test_query_apps_response_null_is_empty() {
        let response = QueryAppsResponse::from_json("null").unwrap();
        assert!(response.applications.is_empty());
        assert_eq!(response.to_json(), json!({ "apps": [] }));
    }

    #[test]
    fn test_application_without_chains_invalid() {
        let mut app = sample_app();
        app.chains.clear();
        assert!(!app.is_valid());
    }
}
