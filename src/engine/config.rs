use std::time::Duration;

use url::Url;

use crate::args::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpMethod};
use crate::error::ValidationError;

/// Immutable description of one run. Only constructible through validation,
/// so the engine never sees an empty URL, a zero duration or zero workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    url: Url,
    duration: Duration,
    concurrency: usize,
    method: HttpMethod,
    body: Option<Vec<u8>>,
    request_timeout: Duration,
    connect_timeout: Duration,
}

impl RunConfig {
    /// Validates and builds a run configuration with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or unparseable URL, a non-http(s) scheme,
    /// a zero duration, or zero concurrency.
    pub fn new(
        url: &str,
        duration: Duration,
        concurrency: usize,
        method: HttpMethod,
        body: Option<Vec<u8>>,
    ) -> Result<Self, ValidationError> {
        let url = parse_target_url(url)?;
        if duration.is_zero() {
            return Err(ValidationError::DurationZero);
        }
        if concurrency == 0 {
            return Err(ValidationError::ConcurrencyZero);
        }

        Ok(Self {
            url,
            duration,
            concurrency,
            method,
            body,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Replaces the per-request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error when either timeout is zero.
    pub fn with_timeouts(
        mut self,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ValidationError> {
        if request_timeout.is_zero() {
            return Err(ValidationError::RequestTimeoutZero);
        }
        if connect_timeout.is_zero() {
            return Err(ValidationError::ConnectTimeoutZero);
        }
        self.request_timeout = request_timeout;
        self.connect_timeout = connect_timeout;
        Ok(self)
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Raw body as configured. Only POST requests send it.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

fn parse_target_url(value: &str) -> Result<Url, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    let url = Url::parse(value).map_err(|err| ValidationError::InvalidUrl {
        url: value.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::UnsupportedScheme {
            scheme: other.to_owned(),
        }),
    }
}
