//! Transport abstraction
//!
//! Design: the fetch pipeline only needs "send this request, give me the
//! response". [`Transport`] is that seam; [`ReqwestTransport`] is the
//! production implementation and tests plug in stubs.

use crate::error::BoxError;
use crate::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;

/// Shared transport for requests that do not configure their own
static DEFAULT_TRANSPORT: OnceCell<Arc<dyn Transport>> = OnceCell::new();

/// Sends one HTTP request and returns the raw response
///
/// Implementations must be safe to call concurrently; a single transport
/// is shared by every clone of a [`Request`](crate::Request).
/// Timeouts and cancellation are the implementation's business.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request
    ///
    /// Only transport-level failures belong in the error; any HTTP status,
    /// including 5xx, is a successful response here.
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, BoxError>;
}

/// Builder for [`ReqwestTransport`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransportBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ReqwestTransportBuilder {
    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a total timeout per request (none by default)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the transport
    pub fn build(self) -> Result<ReqwestTransport, BoxError> {
        let mut headers = HeaderMap::new();
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestTransport {
            client: builder.build()?,
        })
    }
}

/// Transport backed by a [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default User-Agent and no timeout
    pub fn new() -> Result<Self, BoxError> {
        Self::builder().build()
    }

    /// Create a transport builder
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Use an already configured client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Process-wide [`ReqwestTransport`], built on first use
///
/// A failed build is returned to the caller and attempted again next time.
pub(crate) fn default_transport() -> Result<Arc<dyn Transport>, BoxError> {
    DEFAULT_TRANSPORT
        .get_or_try_init(|| Ok(Arc::new(ReqwestTransport::new()?) as Arc<dyn Transport>))
        .cloned()
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, BoxError> {
        Ok(self.client.execute(request).await?)
    }
}
