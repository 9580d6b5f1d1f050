//! Provider endpoints and request timeout

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Default BGPView API base, used for ASN, IP and prefix detail.
pub const BGPVIEW_URL: &str = "https://api.bgpview.io/";
/// Default BGPStuff API base, used for an ASN's sourced prefixes.
pub const BGPSTUFF_URL: &str = "https://bgpstuff.net/";
/// Overall deadline for a single request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Environment variable overriding [`BGPVIEW_URL`]
pub const ENV_BGPVIEW_URL: &str = "WHODAT_BGPVIEW_URL";
/// Environment variable overriding [`BGPSTUFF_URL`]
pub const ENV_BGPSTUFF_URL: &str = "WHODAT_BGPSTUFF_URL";
/// Environment variable overriding [`REQUEST_TIMEOUT_SECS`]
pub const ENV_TIMEOUT: &str = "WHODAT_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bgpview_url: Url,
    pub bgpstuff_url: Url,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bgpview_url: Url::parse(BGPVIEW_URL).expect("default BGPView URL is valid"),
            bgpstuff_url: Url::parse(BGPSTUFF_URL).expect("default BGPStuff URL is valid"),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = var(ENV_BGPVIEW_URL) {
            config.bgpview_url = parse_base_url(&raw)
                .with_context(|| format!("Invalid {ENV_BGPVIEW_URL}: {raw}"))?;
        }

        if let Some(raw) = var(ENV_BGPSTUFF_URL) {
            config.bgpstuff_url = parse_base_url(&raw)
                .with_context(|| format!("Invalid {ENV_BGPSTUFF_URL}: {raw}"))?;
        }

        if let Some(raw) = var(ENV_TIMEOUT) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_TIMEOUT}: {raw}"))?;
            if secs == 0 {
                anyhow::bail!("Invalid {ENV_TIMEOUT}: timeout must be at least one second");
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        anyhow::bail!("URL cannot carry path segments");
    }
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("unsupported scheme '{}'", url.scheme());
    }
    Ok(url)
}
