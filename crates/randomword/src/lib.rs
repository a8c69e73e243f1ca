//! RandomWord - client for the random word API
//!
//! Build a [`Request`] from validated options, then fetch a list of words:
//!
//! ```no_run
//! use randomword::{with_language, with_number, Language, Request};
//!
//! # async fn run() -> Result<(), randomword::RandomWordError> {
//! let request = Request::new([with_number(10), with_language(Language::Spanish)])?;
//! let words = request.fetch().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Transports
//!
//! Requests are sent through a [`Transport`]. The default is
//! [`ReqwestTransport`]; tests and callers with special needs can supply
//! their own with [`with_transport`].

pub mod client;
mod error;
pub mod options;
mod transport;
mod types;

pub use client::Request;
pub use error::{BoxError, RandomWordError};
pub use options::{
    with_language, with_length, with_number, with_shared_transport, with_transport,
    RequestBuilder, RequestOption,
};
pub use transport::{ReqwestTransport, ReqwestTransportBuilder, Transport};
pub use types::{Language, WordList};

/// Origin of the random word API
pub const BASE_URL: &str = "https://random-word-api.herokuapp.com";

/// Resource path for word lists
pub const WORD_PATH: &str = "/word";

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns RandomWord/1.0";
