//! Shared HTTP plumbing for the JSON adapters.
//!
//! Every adapter goes through [`HttpFetcher`], which applies the caller's
//! timeout and the single fixed-backoff retry for transient failures.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::{ProviderError, RetryClass};

const USER_AGENT: &str = concat!("country-radar/", env!("CARGO_PKG_VERSION"));

/// Timeout and retry policy for provider calls.
#[derive(Clone, Debug)]
pub struct HttpPolicy {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Extra attempts after the first, for transient failures only.
    pub retries: u32,
    /// Fixed delay before each retry.
    pub backoff: Duration,
}

impl Default for HttpPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(8_000),
            retries: 1,
            backoff: Duration::from_millis(600),
        }
    }
}

/// Run `op`, retrying only errors classified [`RetryClass::WithBackoff`].
pub async fn with_retry<T, F, Fut>(
    policy: &HttpPolicy,
    provider: &str,
    mut op: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.retry_class() == RetryClass::WithBackoff && attempt < policy.retries => {
                attempt += 1;
                debug!(
                    "{}: transient failure ({}), retry {} after {:?}",
                    provider, e, attempt, policy.backoff
                );
                tokio::time::sleep(policy.backoff).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Thin reqwest wrapper shared by the adapters.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
    policy: HttpPolicy,
}

impl HttpFetcher {
    pub fn new(policy: HttpPolicy) -> Self {
        let client = Client::builder()
            .timeout(policy.timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, policy }
    }

    pub fn policy(&self) -> &HttpPolicy {
        &self.policy
    }

    /// GET a JSON document. Non-success statuses are errors and never retried.
    pub async fn get_json(
        &self,
        provider: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ProviderError> {
        with_retry(&self.policy, provider, || self.get_once(provider, url, query)).await
    }

    async fn get_once(
        &self,
        provider: &'static str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ProviderError> {
        debug!("{} request: {} with {} params", provider, url, query.len());

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.policy.timeout)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(provider, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: provider.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(provider, e))?;

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::parse(provider, format!("invalid JSON: {}", e)))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(HttpPolicy::default())
    }
}
