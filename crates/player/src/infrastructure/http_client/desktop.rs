//! Desktop HTTP client using reqwest

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use super::join_url;
use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// reqwest-backed adapter for the fights REST API
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(config: &PlayerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    "Failed to build HTTP client, falling back to defaults without timeout"
                );
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
    ApiError::HttpStatus { status, message }
}

fn request_failed(e: reqwest::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(request_failed)?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(status_error(response).await),
            _ => response
                .json::<Value>()
                .await
                .map(Some)
                .map_err(|e| ApiError::ParseError(e.to_string())),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_text(&self, path: &str, body: &Value) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::ACCEPT, "text/plain")
            .json(body)
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_target_the_configured_base_url() {
        let config = PlayerConfig {
            api_base_url: "http://fights.local:8082".to_string(),
            request_timeout_secs: 2,
        };
        let adapter = ApiAdapter::new(&config);

        assert_eq!(
            adapter.url("/api/fights/randomfighters"),
            "http://fights.local:8082/api/fights/randomfighters"
        );
        assert_eq!(
            adapter.url("api/fights/narrate"),
            "http://fights.local:8082/api/fights/narrate"
        );
    }
}
