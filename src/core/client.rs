use crate::domain::model::{AuthMode, HttpMethod, ProbeCase, ProbeResponse, RequestBody};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{multipart, Client, Method};
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("studio-smoke/", env!("CARGO_PKG_VERSION"));

/// 對 server-api 發送請求的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        // 保留 base path（例如 preview 部署的子路徑），join 時需要結尾斜線
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, case: &ProbeCase) -> Result<ProbeResponse> {
        let mut url = self.endpoint(&case.path)?;
        if !case.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(case.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        tracing::debug!("➡️  {} {}", case.method, url);
        let mut request = self.client.request(Self::method(case.method), url);

        request = match &case.auth {
            AuthMode::Bearer => request.bearer_auth(&self.token),
            AuthMode::Token(token) => request.bearer_auth(token),
            AuthMode::None => request,
        };

        request = match &case.body {
            RequestBody::None => request,
            RequestBody::Json(body) => request.json(body),
            RequestBody::Multipart(file) => {
                let part = multipart::Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)?;
                request.multipart(multipart::Form::new().part(file.field_name.clone(), part))
            }
        };

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let elapsed = started.elapsed();

        tracing::debug!("⬅️  {} in {:?} ({} bytes)", status, elapsed, body.len());

        let json = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&body).ok()
        };

        Ok(ProbeResponse {
            status,
            elapsed,
            body,
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UploadFile;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.base_url(), "mock-token", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client =
            ApiClient::new("https://preview.example.com/app", "t", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint("/server-api/bookings").unwrap().as_str(),
            "https://preview.example.com/app/server-api/bookings"
        );
        assert_eq!(
            client.endpoint("server-api/bookings").unwrap().as_str(),
            "https://preview.example.com/app/server-api/bookings"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(ApiClient::new("not a url", "t", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_send_attaches_bearer_token_and_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/server-api/bookings")
                    .header("authorization", "Bearer mock-token")
                    .json_body(json!({"classId": "c-1"}));
                then.status(201).json_body(json!({"id": "b-1"}));
            })
            .await;

        let case = ProbeCase::post("create", "/server-api/bookings").with_json(json!({"classId": "c-1"}));
        let response = client_for(&server).send(&case).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 201);
        assert_eq!(response.json.unwrap()["id"], "b-1");
    }

    #[tokio::test]
    async fn test_send_without_auth_and_with_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/server-api/analytics/dashboard")
                    .query_param("range", "30d")
                    .header_missing("authorization");
                then.status(401).body("unauthorized");
            })
            .await;

        let case = ProbeCase::get("dashboard", "/server-api/analytics/dashboard")
            .with_query("range", "30d")
            .without_auth();
        let response = client_for(&server).send(&case).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 401);
        assert!(response.json.is_none());
        assert_eq!(response.body, "unauthorized");
    }

    #[tokio::test]
    async fn test_send_multipart_upload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/server-api/upload")
                    .body_includes("avatar.png")
                    .body_includes("name=\"file\"");
                then.status(200).json_body(json!({"url": "https://cdn/avatar.png"}));
            })
            .await;

        let case = ProbeCase::post("upload", "/server-api/upload").with_upload(UploadFile {
            field_name: "file".to_string(),
            file_name: "avatar.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: b"fake-png-bytes".to_vec(),
        });
        let response = client_for(&server).send(&case).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        // 9 號埠 (discard) 在測試環境中通常沒有服務
        let client = ApiClient::new("http://127.0.0.1:9", "t", Duration::from_secs(2)).unwrap();
        let err = client
            .send(&ProbeCase::get("down", "/server-api/bookings"))
            .await
            .unwrap_err();
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Network);
    }
}
