//! Typed API wrapper for application services.
//!
//! Services are generic over `ApiPort`; the composition root only holds an
//! `Arc<dyn RawApiPort>`. `Api` bridges the two by converting through
//! `serde_json::Value`.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ApiPort for Api {
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        self.raw
            .get_optional_json(path)
            .await?
            .map(decode)
            .transpose()
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode(body)?;
        decode(self.raw.post_json(path, &body).await?)
    }

    async fn post_for_text<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let body = encode(body)?;
        self.raw.post_text(path, &body).await
    }
}
