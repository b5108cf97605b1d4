//! WASM HTTP client using gloo-net (browser fetch)

use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::join_url;
use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

/// Fetch-backed adapter for the fights REST API
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => response.status_text(),
    };
    ApiError::HttpStatus { status, message }
}

fn request_failed(e: gloo_net::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;

        match response.status() {
            204 | 404 => Ok(None),
            _ if !response.ok() => Err(status_error(response).await),
            _ => response
                .json::<Value>()
                .await
                .map(Some)
                .map_err(|e| ApiError::ParseError(e.to_string())),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_text(&self, path: &str, body: &Value) -> Result<String, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Accept", "text/plain")
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
