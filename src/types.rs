//! Unified lookup records

use serde::Serialize;

/// Registration details of an autonomous system
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsnDetail {
    pub asn: u32,
    pub org: String,
    pub country: String,
    pub looking_glass: Option<String>,
    pub website: Option<String>,
}

/// One originating AS of a prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixOrigin {
    pub asn: u32,
    pub org: String,
    pub name: Option<String>,
}

/// Routing and registration details of a prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixDetail {
    pub org: String,
    pub name: String,
    pub prefix: String,
    pub rir: String,
    /// RIR allocation covering the prefix
    pub allocation: Option<String>,
    pub origins: Vec<PrefixOrigin>,
}

/// Routing and registration details of a single address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpDetail {
    pub ip: String,
    pub ptr: Option<String>,
    pub org: String,
    pub name: String,
    /// Most specific announced prefix covering the address
    pub prefix: String,
    pub asn: u32,
    pub rir: String,
    pub allocation: Option<String>,
}

/// Prefixes an AS originates, split by address family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AsnPrefixes {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}
