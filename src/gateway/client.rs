//! Backend HTTP client used by the gateway.

use axum::http::StatusCode;
use serde_json::Value;

/// Status and JSON body of a backend reply.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<BackendResponse> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::read(response).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Result<BackendResponse> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::read(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> reqwest::Result<BackendResponse> {
        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok(BackendResponse { status, body })
    }
}
