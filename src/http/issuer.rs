use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{Client, Url, header::CONTENT_TYPE};
use tracing::debug;

use crate::args::HttpMethod;
use crate::engine::RunConfig;
use crate::error::AppResult;

use super::client::build_client;
use super::outcome::RequestOutcome;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Executes one request attempt and reports what happened.
///
/// Implementations must absorb every failure: a broken attempt is data, not
/// an error, so `issue` has no error channel.
#[async_trait]
pub trait RequestIssuer: Send + Sync {
    async fn issue(&self) -> RequestOutcome;
}

/// Issues the fixed request shape of a run over a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpIssuer {
    client: Client,
    method: HttpMethod,
    url: Url,
    body: Bytes,
}

impl HttpIssuer {
    /// Builds the issuer and its client from a validated run configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &RunConfig) -> AppResult<Self> {
        let client = build_client(config.request_timeout(), config.connect_timeout())?;
        Ok(Self::with_client(client, config))
    }

    #[must_use]
    pub fn with_client(client: Client, config: &RunConfig) -> Self {
        let body = config
            .body()
            .map_or_else(Bytes::new, Bytes::copy_from_slice);
        Self {
            client,
            method: config.method(),
            url: config.url().clone(),
            body,
        }
    }

    fn request(&self) -> reqwest::RequestBuilder {
        match self.method {
            HttpMethod::Get => self.client.get(self.url.clone()),
            HttpMethod::Post => self
                .client
                .post(self.url.clone())
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(self.body.clone()),
        }
    }
}

#[async_trait]
impl RequestIssuer for HttpIssuer {
    async fn issue(&self) -> RequestOutcome {
        let response = match self.request().send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("Request failed: {}", err);
                return RequestOutcome::TRANSPORT_FAILURE;
            }
        };

        let outcome = RequestOutcome::from(response.status());
        match drain_response_body(response).await {
            Ok(_) => outcome,
            Err(err) => {
                debug!("Failed to read response body: {}", err);
                RequestOutcome::TRANSPORT_FAILURE
            }
        }
    }
}

/// Reads the body to the end without keeping it, so the connection can go
/// back to the pool.
async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
