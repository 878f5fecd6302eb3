use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::protocol::{RawUser, UsersResponse};
use thiserror::Error;
use tracing::info;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/?results=100&seed=abc";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("directory api returned HTTP {status}")]
    Status { status: StatusCode },
    #[error("malformed directory payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError>;
}

/// One GET against the randomuser.me API; no retry, paging, or auth.
pub struct RandomUserClient {
    http: Client,
    endpoint: Url,
}

impl RandomUserClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    fn request_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Request {
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|source| self.request_error(source))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| self.request_error(source))?;
        let payload: UsersResponse = serde_json::from_slice(&body)?;
        info!(
            endpoint = %self.endpoint,
            count = payload.results.len(),
            "directory: fetched users"
        );
        Ok(payload.results)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
