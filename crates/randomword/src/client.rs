//! Request descriptor and fetch pipeline
//!
//! A [`Request`] is built once from [`RequestOption`]s and can then be
//! fetched any number of times. Each fetch performs exactly one
//! request/response cycle through the configured [`Transport`].

use crate::error::RandomWordError;
use crate::options::{RequestBuilder, RequestOption};
use crate::transport::{default_transport, Transport};
use crate::types::{Language, WordList};
use crate::{BASE_URL, WORD_PATH};
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Fully configured request for random words
///
/// Cheap to clone; clones share the transport. Without a configured
/// transport, fetches go through one process-wide
/// [`ReqwestTransport`](crate::ReqwestTransport).
#[derive(Clone)]
pub struct Request {
    pub(crate) number: Option<u64>,
    pub(crate) length: Option<u64>,
    pub(crate) language: Language,
    pub(crate) transport: Option<Arc<dyn Transport>>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            number: None,
            length: None,
            language: Language::default(),
            transport: None,
        }
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("number", &self.number)
            .field("length", &self.length)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Request {
    /// Build a request from options, applied left to right
    ///
    /// Starts from the defaults (service-chosen count and length, default
    /// language, shared default transport) and stops at the first option that
    /// fails, returning its error.
    pub fn new(
        options: impl IntoIterator<Item = RequestOption>,
    ) -> Result<Self, RandomWordError> {
        let mut request = Self::default();
        for option in options {
            option.apply(&mut request)?;
        }
        Ok(request)
    }

    /// Create a chained request builder
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Requested number of words, if set
    pub fn number(&self) -> Option<u64> {
        self.number
    }

    /// Requested word length, if set
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    /// Requested language
    pub fn language(&self) -> Language {
        self.language
    }

    /// URL this request will be sent to
    ///
    /// Parameters that are unset are omitted, and so is the `?` when none
    /// are set. The result depends only on the configured options.
    pub fn endpoint(&self) -> Result<Url, RandomWordError> {
        let mut url = Url::parse(BASE_URL).map_err(RandomWordError::internal)?;
        url.set_path(WORD_PATH);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(number) = self.number {
            params.push(("number", number.to_string()));
        }
        if let Some(length) = self.length {
            params.push(("length", length.to_string()));
        }
        if !self.language.is_default() {
            params.push(("lang", self.language.code().to_string()));
        }

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Fetch words from the service
    ///
    /// Returns every word on success and nothing on failure:
    /// - transport, body read or JSON decode failures are
    ///   [`RandomWordError::Internal`]
    /// - a status other than 200, or a 200 with a zero-byte body, is
    ///   [`RandomWordError::UnexpectedResponse`]
    ///
    /// A body of `[]` or `null` is a valid, empty word list.
    pub async fn fetch(&self) -> Result<WordList, RandomWordError> {
        let url = self.endpoint()?;
        debug!(url = %url, "Fetching random words");

        let transport = match &self.transport {
            Some(transport) => transport.clone(),
            None => default_transport().map_err(RandomWordError::Internal)?,
        };

        let request = reqwest::Request::new(Method::GET, url);
        let response = transport
            .execute(request)
            .await
            .map_err(RandomWordError::Internal)?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "Rejecting response status");
            return Err(RandomWordError::UnexpectedResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(RandomWordError::internal)?;
        if body.is_empty() {
            debug!("Rejecting empty response body");
            return Err(RandomWordError::UnexpectedResponse {
                status: status.as_u16(),
            });
        }

        // `null` decodes to no words, like `[]`
        let words: WordList = serde_json::from_slice::<Option<WordList>>(&body)
            .map_err(RandomWordError::internal)?
            .unwrap_or_default();
        debug!(words = words.len(), "Fetched random words");
        Ok(words)
    }
}
