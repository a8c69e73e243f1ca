//! Request options
//!
//! Each option owns exactly one field of a [`Request`] and validates its
//! input before touching it. Options are applied in order by
//! [`Request::new`]; the first failure aborts construction.

use crate::client::Request;
use crate::error::RandomWordError;
use crate::transport::Transport;
use std::sync::Arc;

type ApplyFn = dyn FnOnce(&mut Request) -> Result<(), RandomWordError> + Send;

/// A deferred, validated change to a request under construction
pub struct RequestOption {
    apply: Box<ApplyFn>,
}

impl RequestOption {
    fn new(
        apply: impl FnOnce(&mut Request) -> Result<(), RandomWordError> + Send + 'static,
    ) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    /// Apply this option to a request that is still being built
    pub(crate) fn apply(self, request: &mut Request) -> Result<(), RandomWordError> {
        (self.apply)(request)
    }
}

impl std::fmt::Debug for RequestOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestOption").finish_non_exhaustive()
    }
}

/// Number of words to return; must be at least 1
pub fn with_number(n: i64) -> RequestOption {
    RequestOption::new(move |request| {
        request.number = Some(positive(n, "number")?);
        Ok(())
    })
}

/// Exact length of the returned words; must be at least 1
pub fn with_length(l: i64) -> RequestOption {
    RequestOption::new(move |request| {
        request.length = Some(positive(l, "length")?);
        Ok(())
    })
}

/// Language of the returned words
///
/// Accepts a [`Language`](crate::Language) or its wire code (`"es"`, `"pt-br"`, ...).
/// Unknown codes are rejected.
pub fn with_language(lang: impl AsRef<str>) -> RequestOption {
    let code = lang.as_ref().to_string();
    RequestOption::new(move |request| {
        request.language = code.parse()?;
        Ok(())
    })
}

/// Replace the transport used to send the request
pub fn with_transport(transport: impl Transport + 'static) -> RequestOption {
    with_shared_transport(Arc::new(transport))
}

/// Replace the transport with one that is already shared
pub fn with_shared_transport(transport: Arc<dyn Transport>) -> RequestOption {
    RequestOption::new(move |request| {
        request.transport = Some(transport);
        Ok(())
    })
}

fn positive(value: i64, field: &'static str) -> Result<u64, RandomWordError> {
    if value < 1 {
        return Err(RandomWordError::InvalidArgument(field));
    }
    Ok(value as u64)
}

/// Chained alternative to passing a list of options to [`Request::new`]
///
/// Setters never fail; validation happens in [`build`](Self::build), in the
/// order the setters were called.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    options: Vec<RequestOption>,
}

impl RequestBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of words
    pub fn number(self, n: i64) -> Self {
        self.option(with_number(n))
    }

    /// Set the word length
    pub fn length(self, l: i64) -> Self {
        self.option(with_length(l))
    }

    /// Set the language
    pub fn language(self, lang: impl AsRef<str>) -> Self {
        self.option(with_language(lang))
    }

    /// Set the transport
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.option(with_transport(transport))
    }

    /// Append an arbitrary option
    pub fn option(mut self, option: RequestOption) -> Self {
        self.options.push(option);
        self
    }

    /// Apply all options in order and build the request
    pub fn build(self) -> Result<Request, RandomWordError> {
        Request::new(self.options)
    }
}
