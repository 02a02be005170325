use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::ProbeError;

const USER_AGENT: &str = concat!("shopprobe/", env!("CARGO_PKG_VERSION"));

/// Outcome of one Admin API call. `Ok` requires both a 2xx status and a
/// JSON-parseable body; everything else keeps the raw body for reporting.
#[derive(Debug, Clone)]
pub enum ProbeResponse {
    Ok { status: u16, body: Value },
    Failed { status: u16, body: String },
}

impl ProbeResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeResponse::Ok { .. })
    }
}

/// Thin wrapper over reqwest for versioned Admin API GETs. The base URL is
/// an explicit argument so the prober can walk candidate hosts with one
/// client and tests can point candidates at mock servers.
pub struct AdminClient {
    http: Client,
    access_token: String,
    api_version: String,
}

impl AdminClient {
    pub fn new(access_token: &str, api_version: &str, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            access_token: access_token.to_string(),
            api_version: api_version.to_string(),
        }
    }

    pub async fn get(
        &self,
        base_url: &str,
        endpoint: &str,
    ) -> Result<ProbeResponse, ProbeError> {
        let url = format!("{}/admin/api/{}{}", base_url, self.api_version, endpoint);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(ProbeError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ProbeError::from)?;

        if status.is_success() {
            match serde_json::from_str::<Value>(&body) {
                Ok(json) => Ok(ProbeResponse::Ok {
                    status: status.as_u16(),
                    body: json,
                }),
                // 2xx with a non-JSON body is still a failed probe
                Err(_) => Ok(ProbeResponse::Failed {
                    status: status.as_u16(),
                    body,
                }),
            }
        } else {
            Ok(ProbeResponse::Failed {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    fn test_client() -> AdminClient {
        AdminClient::new("test-token", "2024-10", Duration::from_secs(2))
    }

    #[tokio::test]
    async fn sends_token_and_content_type_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/api/2024-10/shop.json")
            .match_header("x-shopify-access-token", "test-token")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(json!({"shop": {}}).to_string())
            .expect(1)
            .create_async()
            .await;

        let response = test_client()
            .get(&server.url(), "/shop.json")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn non_2xx_resolves_as_failure_with_raw_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/admin/api/2024-10/shop.json")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let response = test_client()
            .get(&server.url(), "/shop.json")
            .await
            .unwrap();

        match response {
            ProbeResponse::Failed { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            ProbeResponse::Ok { .. } => panic!("expected failure"),
        }
    }

    #[tokio::test]
    async fn non_json_body_on_2xx_resolves_as_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/admin/api/2024-10/shop.json")
            .with_status(200)
            .with_body("<html>login page</html>")
            .create_async()
            .await;

        let response = test_client()
            .get(&server.url(), "/shop.json")
            .await
            .unwrap();

        assert!(!response.is_ok());
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = test_client()
            .get(&format!("http://127.0.0.1:{}", port), "/shop.json")
            .await;

        assert!(matches!(result, Err(ProbeError::Transport(_))));
    }
}
