// Cloudflare Radar API client
// Reads the "top locations" attack rankings for layer 3 and layer 7 traffic
// See: https://developers.cloudflare.com/api/resources/radar/subresources/attacks/
//
// Read-only. One GET per endpoint, no retries, transport default timeouts.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

use super::types::{Endpoint, RankedEntry};
use crate::config::ApiConfig;
use crate::error::FetchError;

const USER_AGENT: &str = concat!("attack-atlas/", env!("CARGO_PKG_VERSION"));

/// Radar API client for ranking downloads
pub struct RadarClient {
    http: Client,
    config: ApiConfig,
}

impl RadarClient {
    /// Create a client for the configured API base and credential
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    /// Full URL for an endpoint, without the query string
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.config.base_url, endpoint.path())
    }

    /// Download and parse one ranking
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<Vec<RankedEntry>, FetchError> {
        let url = self.endpoint_url(endpoint);
        let limit = self.config.limit.to_string();
        let query = [
            ("name", self.config.ranking_name.as_str()),
            ("dateRange", self.config.date_range.as_str()),
            ("limit", limit.as_str()),
        ];

        log::info!("Fetching {} ranking from {}", endpoint, url);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .send()
            .await
            .map_err(|source| FetchError::Network { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport { endpoint, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network { endpoint, source })?;

        log::debug!("{} response: {} bytes", endpoint, body.len());

        let json: Value = serde_json::from_str(&body).map_err(|e| FetchError::MalformedResponse {
            endpoint,
            reason: format!("body is not JSON: {}", e),
        })?;

        let entries = parse_ranking(&json, endpoint, &self.config.ranking_name)?;
        log::info!("{} ranking: {} entries", endpoint, entries.len());
        Ok(entries)
    }
}

/// Extract ranked rows from a Radar response body
///
/// The rows live at `result.<ranking_name>`; anything else is malformed.
pub fn parse_ranking(
    body: &Value,
    endpoint: Endpoint,
    ranking_name: &str,
) -> Result<Vec<RankedEntry>, FetchError> {
    let result = body.get("result").ok_or_else(|| FetchError::MalformedResponse {
        endpoint,
        reason: "missing 'result' key".to_string(),
    })?;

    let rows = result
        .get(ranking_name)
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::MalformedResponse {
            endpoint,
            reason: format!("missing 'result.{}' array", ranking_name),
        })?;

    let code_key = endpoint.direction.code_key();
    let name_key = endpoint.direction.name_key();

    Ok(rows
        .iter()
        .map(|row| RankedEntry {
            country_code: string_field(row, code_key),
            country_name: string_field(row, name_key),
            value: row.get("value").and_then(number_field),
            value_text: row.get("value").and_then(raw_text),
            rank: row.get("rank").and_then(rank_field),
        })
        .collect())
}

fn string_field(row: &Value, key: &str) -> Option<String> {
    row.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Radar sends magnitudes as decimal strings; plain numbers are accepted too
fn number_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// The value's text as sent, so exports reproduce it verbatim
fn raw_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        _ => None,
    }
}

fn rank_field(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|r| u32::try_from(r).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn test_config(base_url: String) -> ApiConfig {
        ApiConfig {
            base_url,
            token: "test-token".to_string(),
            ranking_name: "main".to_string(),
            date_range: "28d".to_string(),
            limit: 10,
        }
    }

    /// Answer exactly one HTTP request on a loopback port; yields the raw request
    async fn serve_once(status_line: &'static str, body: String) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });
        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_parse_origin_rows() {
        let body = json!({
            "success": true,
            "result": {
                "main": [
                    {"originCountryAlpha2": "US", "originCountryName": "United States", "value": "32.5", "rank": 1},
                    {"originCountryAlpha2": "CN", "originCountryName": "China", "value": 12.25, "rank": 2}
                ]
            }
        });
        let entries = parse_ranking(&body, Endpoint::LAYER7_ORIGIN, "main").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], RankedEntry::new("US", "United States", 32.5, 1));
        assert_eq!(entries[1].value, Some(12.25));
        assert_eq!(entries[1].value_text.as_deref(), Some("12.25"));
    }

    #[test]
    fn test_parse_keeps_value_text() {
        let body = json!({
            "result": {"main": [{"originCountryAlpha2": "US", "originCountryName": "United States", "value": "10.00", "rank": 1}]}
        });
        let entries = parse_ranking(&body, Endpoint::LAYER7_ORIGIN, "main").unwrap();
        assert_eq!(entries[0].value, Some(10.0));
        assert_eq!(entries[0].value_text.as_deref(), Some("10.00"));
    }

    #[test]
    fn test_parse_target_rows_use_target_keys() {
        let body = json!({
            "result": {
                "main": [
                    {"targetCountryAlpha2": "DE", "targetCountryName": "Germany", "value": "7", "rank": 3},
                    {"originCountryAlpha2": "FR", "originCountryName": "France", "value": "1", "rank": 4}
                ]
            }
        });
        let entries = parse_ranking(&body, Endpoint::LAYER3_TARGET, "main").unwrap();
        assert_eq!(entries[0].country_code.as_deref(), Some("DE"));
        assert_eq!(entries[0].country_name.as_deref(), Some("Germany"));
        // Origin keys are not read for a target ranking
        assert_eq!(entries[1].country_code, None);
        assert_eq!(entries[1].country_name, None);
        assert_eq!(entries[1].rank, Some(4));
    }

    #[test]
    fn test_parse_missing_fields() {
        let body = json!({
            "result": {"main": [{"originCountryName": "Brazil", "value": "n/a"}]}
        });
        let entries = parse_ranking(&body, Endpoint::LAYER3_ORIGIN, "main").unwrap();
        assert_eq!(entries[0].country_code, None);
        assert_eq!(entries[0].value, None);
        assert_eq!(entries[0].value_text.as_deref(), Some("n/a"));
        assert_eq!(entries[0].rank, None);
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_ranking(&json!({"errors": []}), Endpoint::LAYER7_ORIGIN, "main").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));

        let err = parse_ranking(&json!({"result": {"other": []}}), Endpoint::LAYER7_ORIGIN, "main").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert_eq!(err.endpoint(), Endpoint::LAYER7_ORIGIN);

        let err = parse_ranking(&json!({"result": {"main": {}}}), Endpoint::LAYER7_ORIGIN, "main").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_success_sends_bearer_and_query() {
        let body = json!({
            "result": {"main": [{"originCountryAlpha2": "NL", "originCountryName": "Netherlands", "value": "4.5", "rank": 1}]}
        })
        .to_string();
        let (base, server) = serve_once("200 OK", body).await;
        let client = RadarClient::new(test_config(base)).unwrap();

        let entries = client.fetch(Endpoint::LAYER7_ORIGIN).await.unwrap();
        assert_eq!(entries, vec![RankedEntry::new("NL", "Netherlands", 4.5, 1)]);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /layer7/top/locations/origin?"));
        assert!(request.contains("name=main"));
        assert!(request.contains("dateRange=28d"));
        assert!(request.contains("limit=10"));
        assert!(request.to_lowercase().contains("authorization: bearer test-token"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let (base, server) = serve_once("403 Forbidden", "{}".to_string()).await;
        let client = RadarClient::new(test_config(base)).unwrap();

        let err = client.fetch(Endpoint::LAYER3_TARGET).await.unwrap_err();
        match err {
            FetchError::Transport { endpoint, status } => {
                assert_eq!(endpoint, Endpoint::LAYER3_TARGET);
                assert_eq!(status, StatusCode::FORBIDDEN);
            }
            other => panic!("expected transport failure, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_non_json_body() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>".to_string()).await;
        let client = RadarClient::new(test_config(base)).unwrap();

        let err = client.fetch(Endpoint::LAYER7_TARGET).await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        server.await.unwrap();
    }
}
