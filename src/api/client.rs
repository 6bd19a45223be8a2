//! REST client for the catalog backend
//!
//! Single choke point for backend calls: attaches the bearer credential,
//! turns failures into [`ApiError`], and purges the session on a 401.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};

use super::envelope;
use super::session::AuthContext;
use super::ApiError;
use crate::perf_elapsed;

/// Default backend location (local development server)
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

pub struct ApiClient {
    config: ApiConfig,
    client: Client,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(config: ApiConfig, auth: AuthContext) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        log::info!("API base URL configured as: {}", config.base_url);

        Ok(Self {
            config,
            client,
            auth,
        })
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send one request and return the backend's JSON payload.
    ///
    /// A 401 from any endpoint clears the stored credentials and fires the
    /// session-expired callback before the error is returned.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        let started = Instant::now();

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.auth.bearer_token() {
            builder = builder.bearer_auth(token);
            log::debug!("Token added to request: {} {}", method, path);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("API request failed: {} {}: {}", method, path, e);
            ApiError::from(e)
        })?;

        let status = response.status();

        // The purge must not depend on the error body arriving intact
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API responded 401 for {} {}, ending session", method, path);
            self.auth.expire_session();
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            perf_elapsed!(format!("{} {}", method, path), started);
            log::error!("API response error: {} {} {}", status.as_u16(), method, path);
            return Err(ApiError::from_response(status, &text));
        }

        let text = response.text().await.map_err(ApiError::from)?;
        perf_elapsed!(format!("{} {}", method, path), started);

        log::debug!("API response successful: {} {}", status.as_u16(), path);

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("Invalid JSON from {}: {}", path, e)))
    }

    /// Serialize `body` and send it
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("Failed to encode request body: {}", e)))?;
        self.request(method, path, Some(&body)).await
    }

    /// GET a collection endpoint, accepting bare or `data`-wrapped lists
    pub async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let payload = self.request(Method::GET, path, None).await?;
        Ok(envelope::collection(payload))
    }

    /// GET a single-record endpoint
    pub async fn get_item<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let payload = self.request(Method::GET, path, None).await?;
        envelope::item(payload)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::client_for;
    use super::*;
    use crate::api::session::CredentialStore;
    use crate::models::UserProfile;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_attaches_bearer_token_when_present() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/products")
            .match_header("authorization", "Bearer abc123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"_id":"p1"}]"#)
            .create_async()
            .await;

        let test = client_for(server.url(), Some("abc123"));
        let payload = test.client.request(Method::GET, "/auth/products", None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload, json!([{"_id": "p1"}]));
    }

    #[tokio::test]
    async fn test_sends_unauthenticated_without_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/services")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let test = client_for(server.url(), None);
        test.client.request(Method::GET, "auth/services", None).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_401_on_any_endpoint_purges_session() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/auth/contacts")
            .with_status(401)
            .with_body(r#"{"message":"Token expired"}"#)
            .create_async()
            .await;

        let test = client_for(server.url(), Some("stale"));
        test.store
            .set_user(&UserProfile {
                id: "u1".to_string(),
                name: None,
                email: None,
                is_admin: true,
            })
            .unwrap();

        let err = test
            .client
            .request(Method::GET, "/auth/contacts", None)
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Token expired");
        assert!(test.store.token().unwrap().is_none());
        assert!(test.store.user().unwrap().is_none());
        assert_eq!(test.expired_count(), 1);
    }

    #[tokio::test]
    async fn test_401_with_truncated_body_still_purges_session() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            // Announces more bytes than it sends, then hangs up
            let _ = socket
                .write_all(b"HTTP/1.1 401 Unauthorized\r\nContent-Length: 100\r\n\r\nhello")
                .await;
            let _ = socket.shutdown().await;
        });

        let test = client_for(format!("http://{}", addr), Some("stale"));
        let err = test
            .client
            .request(Method::GET, "/auth/products", None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(test.store.token().unwrap().is_none());
        assert_eq!(test.expired_count(), 1);
    }

    #[tokio::test]
    async fn test_other_failures_keep_session() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/auth/products/p1")
            .with_status(403)
            .with_body(r#"{"success":false,"message":"Admin access required"}"#)
            .create_async()
            .await;

        let test = client_for(server.url(), Some("abc"));
        let err = test
            .client
            .request(Method::DELETE, "/auth/products/p1", None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), "Admin access required");
        assert_eq!(test.store.token().unwrap().as_deref(), Some("abc"));
        assert_eq!(test.expired_count(), 0);
    }

    #[tokio::test]
    async fn test_json_body_is_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/services/add")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"serviceName": "AMC"})))
            .with_status(201)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let test = client_for(server.url(), None);
        let payload = test
            .client
            .send(Method::POST, "/auth/services/add", &json!({"serviceName": "AMC"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(payload["success"], true);
    }

    #[tokio::test]
    async fn test_empty_body_is_null_payload() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/logout")
            .with_status(204)
            .create_async()
            .await;

        let test = client_for(server.url(), None);
        let payload = test.client.request(Method::POST, "/auth/logout", None).await.unwrap();
        assert_eq!(payload, Value::Null);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let test = client_for("http://127.0.0.1:9".to_string(), Some("abc"));
        let err = test
            .client
            .request(Method::GET, "/auth/products", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
        assert_eq!(test.expired_count(), 0);
    }
}
