//! Blocking HTTP transport shared by all lookups

use std::time::{Duration, Instant};

use tracing::debug;
use url::Url;

use crate::error::LookupError;
use crate::payload::Payload;

const USER_AGENT: &str = concat!("whodat/", env!("CARGO_PKG_VERSION"));

/// HTTP client configured once per process.
///
/// `minreq` applies a single deadline covering connect, TLS handshake,
/// response headers and body.
#[derive(Debug, Clone)]
pub struct HttpClient {
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// GET `base` joined with `segments` and decode the body as JSON.
    pub fn get_json(
        &self,
        base: &Url,
        segments: &[&str],
        headers: &[(&str, &str)],
    ) -> Result<Payload, LookupError> {
        let url = build_url(base, segments)?;
        let url = url.as_str();

        let mut request = minreq::get(url)
            .with_header("Accept", "application/json")
            .with_header("User-Agent", USER_AGENT)
            .with_timeout(self.timeout.as_secs().max(1));
        for (name, value) in headers {
            request = request.with_header(*name, *value);
        }

        debug!(url, "sending request");
        let started = Instant::now();
        let response = request.send().map_err(|e| LookupError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        debug!(
            url,
            status = response.status_code,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );

        if response.status_code != 200 {
            return Err(LookupError::Response {
                url: url.to_string(),
                status: response.status_code,
                reason: response.reason_phrase.clone(),
            });
        }

        let body = response.as_str().map_err(|e| LookupError::Decode {
            url: url.to_string(),
            path: String::new(),
            message: e.to_string(),
        })?;
        debug!(url, bytes = body.len(), "decoding body");

        Payload::parse(url, body)
    }
}

/// Append percent-escaped path segments to a base URL.
pub fn build_url(base: &Url, segments: &[&str]) -> Result<Url, LookupError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| LookupError::Request {
            url: base.to_string(),
            message: "base URL cannot carry path segments".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
