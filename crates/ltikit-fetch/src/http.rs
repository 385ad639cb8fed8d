//! HTTP(S) descriptor retrieval.
//!
//! Redirects are never followed: a 3xx answer is reported as
//! `RedirectRejected` with its status code.

use crate::errors::{fetch_error, from_reqwest, redirect_rejected, Result};
use crate::source::DescriptorSource;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

pub struct HttpSource {
    client: Client,
    timeout: Duration,
}

impl HttpSource {
    /// Build a client with redirects disabled and a bounded timeout.
    ///
    /// # Errors
    ///
    /// Returns `Fetch` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|e| fetch_error("<client>", &e.to_string()))?;
        Ok(Self { client, timeout })
    }
}

impl DescriptorSource for HttpSource {
    fn fetch(&self, location: &str) -> Result<String> {
        tracing::debug!(location, timeout_ms = self.timeout.as_millis() as u64, "requesting descriptor");

        let response = self
            .client
            .get(location)
            .send()
            .map_err(|e| from_reqwest(location, e))?;

        let status = response.status();
        if status.is_redirection() {
            return Err(redirect_rejected(location, status.as_u16()));
        }
        if !status.is_success() {
            return Err(fetch_error(location, &format!("server returned {}", status)));
        }

        let body = response.text().map_err(|e| from_reqwest(location, e))?;
        tracing::debug!(location, bytes = body.len(), "descriptor received");
        Ok(body)
    }
}
