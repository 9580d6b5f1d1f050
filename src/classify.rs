//! Input classification: IP address, CIDR prefix, or ASN

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::LazyLock;

use ipnet::IpNet;
use regex::Regex;

use crate::error::ParseError;

static ASN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:AS)?([0-9]+)$").expect("ASN pattern is valid"));

/// A classified, canonicalized query token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A bare IPv4 or IPv6 address
    Ip(IpAddr),
    /// A network prefix with host bits zeroed
    Prefix(IpNet),
    /// An AS number as a digit string, passed through without range checks
    Asn(String),
}

impl Query {
    /// Short name of the query kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Ip(_) => "ip",
            Query::Prefix(_) => "prefix",
            Query::Asn(_) => "asn",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Ip(ip) => write!(f, "{ip}"),
            Query::Prefix(net) => write!(f, "{net}"),
            Query::Asn(asn) => write!(f, "{asn}"),
        }
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s)
    }
}

/// Classify a raw token. CIDR wins over a bare address, which wins over ASN.
pub fn classify(raw: &str) -> Result<Query, ParseError> {
    if let Ok(net) = raw.parse::<IpNet>() {
        return Ok(Query::Prefix(net.trunc()));
    }

    if let Ok(ip) = raw.parse::<IpAddr>() {
        return Ok(Query::Ip(ip));
    }

    parse_asn(raw)
        .map(Query::Asn)
        .ok_or_else(|| ParseError(raw.to_string()))
}

/// Accepts `12345` or `AS12345` and returns the digits.
pub fn parse_asn(raw: &str) -> Option<String> {
    ASN_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
