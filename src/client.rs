use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use opensearch::auth::Credentials;
use opensearch::cert::CertificateValidation;
use opensearch::http::response::Response;
use opensearch::http::transport::{Connection, ConnectionPool, TransportBuilder};
use opensearch::http::StatusCode;
use opensearch::indices::IndicesGetParts;
use opensearch::{CountParts, OpenSearch, SearchParts};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::{FinderError, Result};
use crate::hits::{self, GameHit};

/// Data nodes of the catalog cluster
pub const CLUSTER_ENDPOINTS: [&str; 3] = [
    "https://192.199.1.53:9200",
    "https://192.199.1.65:9200",
    "https://192.199.1.66:9200",
];

/// API key pair for the catalog reader role
pub const API_KEY_ID: &str = "L8C96JoBlpi-YpBzl02z";
pub const API_KEY_SECRET: &str = "eL5iFNv2V267C0fr4MZyww";

/// Connection settings for the catalog cluster
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Endpoint URLs, requests rotate across them
    pub endpoints: Vec<String>,
    /// API key id half of the credential pair
    pub api_key_id: String,
    /// API key secret half of the credential pair
    pub api_key_secret: String,
    /// Extra attempts allowed when a request times out
    pub max_retries: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Verify TLS certificates; the lab cluster runs self-signed ones
    pub verify_certs: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            endpoints: CLUSTER_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            api_key_id: API_KEY_ID.to_string(),
            api_key_secret: API_KEY_SECRET.to_string(),
            max_retries: 5,
            request_timeout: Duration::from_secs(30),
            verify_certs: false,
        }
    }
}

/// Client session against the games catalog cluster
pub struct CatalogClient {
    client: OpenSearch,
    max_retries: usize,
}

impl CatalogClient {
    /// Build the transport. Network faults only surface on first use.
    pub fn connect(config: ClusterConfig) -> Result<Self> {
        if config.endpoints.is_empty() {
            return Err("no cluster endpoints configured".into());
        }

        let nodes = config
            .endpoints
            .iter()
            .map(|endpoint| Url::parse(endpoint))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let pool = RoundRobinPool::new(nodes);
        let mut builder = TransportBuilder::new(pool)
            .auth(Credentials::ApiKey(config.api_key_id, config.api_key_secret))
            .timeout(config.request_timeout);

        if !config.verify_certs {
            builder = builder.cert_validation(CertificateValidation::None);
        }

        let transport = builder.build()?;
        Ok(Self {
            client: OpenSearch::new(transport),
            max_retries: config.max_retries,
        })
    }

    /// Total documents across all indices matching the pattern
    pub async fn document_count(&self, pattern: &str) -> Result<u64> {
        let indices = [pattern];
        let response = self
            .send_with_retry("count", || {
                self.client.count(CountParts::Index(&indices)).send()
            })
            .await?;

        let response = ensure_success(response, "count").await?;
        let body: CountResponse = response.json().await?;
        Ok(body.count)
    }

    /// Most recent catalog index: names carry a date suffix, so the
    /// lexicographically greatest match is the newest one.
    pub async fn latest_index(&self, pattern: &str) -> Result<String> {
        let indices_api = self.client.indices();
        let indices = [pattern];
        let response = self
            .send_with_retry("indices get", || {
                indices_api.get(IndicesGetParts::Index(&indices)).send()
            })
            .await?;

        if response.status_code() == StatusCode::NOT_FOUND {
            return Err(FinderError::IndexNotFound(pattern.to_string()));
        }
        let response = ensure_success(response, "indices get").await?;

        let body: Value = response.json().await?;
        let newest = body
            .as_object()
            .and_then(|names| newest_name(names.keys().map(String::as_str)))
            .map(str::to_string)
            .ok_or_else(|| FinderError::IndexNotFound(pattern.to_string()))?;

        tracing::debug!("Resolved pattern '{}' to index '{}'", pattern, newest);
        Ok(newest)
    }

    /// Run one query body against an index and flatten the response
    pub async fn search(&self, index: &str, body: &Value) -> Result<Vec<GameHit>> {
        let indices = [index];
        let response = self
            .send_with_retry("search", || {
                self.client
                    .search(SearchParts::Index(&indices))
                    .body(body.clone())
                    .send()
            })
            .await?;

        let response = ensure_success(response, "search").await?;
        let payload: Value = response.json().await?;
        let results = hits::from_response(&payload);

        tracing::debug!("Search on '{}' returned {} hits", index, results.len());
        Ok(results)
    }

    /// Re-issue a request while it keeps timing out, up to max_retries
    async fn send_with_retry<F, Fut>(&self, operation: &str, mut request: F) -> Result<Response>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<Response, opensearch::Error>>,
    {
        let mut attempt = 0;
        loop {
            match request().await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_timeout() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "⚠️ {} timed out, retry {}/{}",
                        operation,
                        attempt,
                        self.max_retries
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Connection pool that hands out the cluster's nodes in rotation.
/// The client crate only ships a single-node pool.
#[derive(Debug, Clone)]
struct RoundRobinPool {
    connections: Vec<Connection>,
    cursor: Arc<AtomicUsize>,
}

impl RoundRobinPool {
    /// `nodes` must not be empty, the caller checks
    fn new(nodes: Vec<Url>) -> Self {
        Self {
            connections: nodes.into_iter().map(Connection::new).collect(),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ConnectionPool for RoundRobinPool {
    fn next(&self) -> Connection {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.connections[i % self.connections.len()].clone()
    }
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response> {
    let status = response.status_code();
    if status.is_success() {
        return Ok(response);
    }

    let reason = response.text().await.unwrap_or_default();
    tracing::debug!("{} failed with HTTP {}: {}", operation, status, reason);
    Err(FinderError::BadStatus {
        status: status.as_u16(),
        reason,
    })
}

fn newest_name<'a>(names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    names.max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_name_is_lexicographic_max() {
        let names = ["steam_games-2025.03", "steam_games-2025.07", "steam_games-2025.01"];
        assert_eq!(
            newest_name(names.iter().copied()),
            Some("steam_games-2025.07")
        );
    }

    #[test]
    fn test_newest_name_empty_is_none() {
        assert_eq!(newest_name(std::iter::empty()), None);
    }

    #[test]
    fn test_dated_names_sort_by_date() {
        let names = ["steam_games-2024.12", "steam_games-2025.02"];
        assert_eq!(
            newest_name(names.iter().copied()),
            Some("steam_games-2025.02")
        );
    }

    #[test]
    fn test_default_config_targets_the_lab_cluster() {
        let config = ClusterConfig::default();
        assert_eq!(config.endpoints.len(), 3);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.verify_certs);
    }

    #[test]
    fn test_connect_rejects_malformed_endpoints() {
        let config = ClusterConfig {
            endpoints: vec!["not a url".to_string()],
            ..ClusterConfig::default()
        };
        assert!(CatalogClient::connect(config).is_err());
    }

    #[test]
    fn test_connect_rejects_empty_endpoints() {
        let config = ClusterConfig {
            endpoints: Vec::new(),
            ..ClusterConfig::default()
        };
        assert!(CatalogClient::connect(config).is_err());
    }

    #[test]
    fn test_round_robin_pool_cycles_endpoints() {
        let nodes: Vec<Url> = CLUSTER_ENDPOINTS
            .iter()
            .map(|endpoint| Url::parse(endpoint).unwrap())
            .collect();
        let pool = RoundRobinPool::new(nodes);

        let order: Vec<String> = (0..4).map(|_| format!("{:?}", pool.next())).collect();
        assert!(order[0].contains("192.199.1.53"));
        assert!(order[1].contains("192.199.1.65"));
        assert!(order[2].contains("192.199.1.66"));
        assert_eq!(order[0], order[3]);
    }
}
