//! Provider queries and normalization into unified records
//!
//! Detail lookups go to BGPView (`asn/<asn>`, `ip/<ip>`,
//! `prefix/<addr>/<len>`), whose payloads are wrapped in a
//! `{"status": "ok", "data": {...}}` envelope. An AS's sourced prefixes
//! come from BGPStuff (`sourced/<asn>`).

use std::net::IpAddr;

use ipnet::{IpNet, Ipv4Net};
use tracing::debug;
use url::Url;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::LookupError;
use crate::payload::{opt_asn, opt_str, Payload};
use crate::types::{AsnDetail, AsnPrefixes, IpDetail, PrefixDetail, PrefixOrigin};

pub struct Lookup {
    client: HttpClient,
    bgpview_url: Url,
    bgpstuff_url: Url,
}

impl Lookup {
    pub fn new(config: &Config) -> Self {
        Self {
            client: HttpClient::new(config.timeout),
            bgpview_url: config.bgpview_url.clone(),
            bgpstuff_url: config.bgpstuff_url.clone(),
        }
    }

    /// Registration details of an AS. `asn` is the digit string as typed.
    pub fn asn_detail(&self, asn: &str) -> Result<AsnDetail, LookupError> {
        let data = self.bgpview(&["asn", asn])?;

        Ok(AsnDetail {
            asn: data.require_asn("/data/asn")?,
            org: data.str_or_empty("/data/description_short"),
            country: data.str_or_empty("/data/country_code"),
            looking_glass: data.opt_str("/data/looking_glass"),
            website: data.opt_str("/data/website"),
        })
    }

    /// Prefixes originated by an AS, split into IPv4 and IPv6 and sorted.
    pub fn asn_prefixes(&self, asn: &str) -> Result<AsnPrefixes, LookupError> {
        let data = self.client.get_json(
            &self.bgpstuff_url,
            &["sourced", asn],
            &[("Content-Type", "application/json")],
        )?;

        let path = "/Response/Sourced/Prefixes";
        let mut ipv4 = Vec::new();
        let mut ipv6 = Vec::new();

        for (i, item) in data.items(path)?.iter().enumerate() {
            let item_path = format!("{path}/{i}");
            let raw = item
                .as_str()
                .ok_or_else(|| data.decode_error(&item_path, "expected a prefix string"))?;
            let net: IpNet = raw.parse().map_err(|e| {
                data.decode_error(&item_path, format!("Error parsing prefix '{raw}': {e}"))
            })?;

            match as_family(net.trunc()) {
                net @ IpNet::V4(_) => ipv4.push(net),
                net @ IpNet::V6(_) => ipv6.push(net),
            }
        }

        debug!(asn, ipv4 = ipv4.len(), ipv6 = ipv6.len(), "sourced prefixes");

        Ok(AsnPrefixes {
            ipv4: sort_nets(ipv4),
            ipv6: sort_nets(ipv6),
        })
    }

    /// Routing details of a single address.
    pub fn ip_detail(&self, ip: IpAddr) -> Result<IpDetail, LookupError> {
        let ip = ip.to_string();
        let data = self.bgpview(&["ip", ip.as_str()])?;

        let covering = data
            .items("/data/prefixes")?
            .first()
            .ok_or_else(|| data.decode_error("/data/prefixes/0", "no covering prefix"))?;

        let prefix = opt_str(covering, "/prefix")
            .filter(|p| !p.is_empty())
            .ok_or_else(|| data.decode_error("/data/prefixes/0/prefix", "expected a prefix"))?;
        let asn = opt_asn(covering, "/asn/asn")
            .ok_or_else(|| data.decode_error("/data/prefixes/0/asn/asn", "expected an AS number"))?;

        Ok(IpDetail {
            ip: data.require_str("/data/ip")?,
            ptr: data.opt_str("/data/ptr_record"),
            org: opt_str(covering, "/description").unwrap_or_default(),
            name: opt_str(covering, "/name").unwrap_or_default(),
            prefix,
            asn,
            rir: data.str_or_empty("/data/rir_allocation/rir_name"),
            allocation: data.opt_str("/data/rir_allocation/prefix"),
        })
    }

    /// Routing details of a prefix and its origin ASes.
    pub fn prefix_detail(&self, prefix: IpNet) -> Result<PrefixDetail, LookupError> {
        let addr = prefix.network().to_string();
        let len = prefix.prefix_len().to_string();
        let data = self.bgpview(&["prefix", addr.as_str(), len.as_str()])?;

        let origins = data
            .items("/data/asns")?
            .iter()
            .enumerate()
            .map(|(i, item)| -> Result<PrefixOrigin, LookupError> {
                let asn = opt_asn(item, "/asn").ok_or_else(|| {
                    data.decode_error(&format!("/data/asns/{i}/asn"), "expected an AS number")
                })?;
                Ok(PrefixOrigin {
                    asn,
                    org: opt_str(item, "/description").unwrap_or_default(),
                    name: opt_str(item, "/name"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PrefixDetail {
            org: data.str_or_empty("/data/description_short"),
            name: data.str_or_empty("/data/name"),
            prefix: data.require_str("/data/prefix")?,
            rir: data.str_or_empty("/data/rir_allocation/rir_name"),
            allocation: data.opt_str("/data/rir_allocation/prefix"),
            origins,
        })
    }

    fn bgpview(&self, segments: &[&str]) -> Result<Payload, LookupError> {
        let data = self.client.get_json(&self.bgpview_url, segments, &[])?;

        if data.opt_str("/status").as_deref() != Some("ok") {
            let message = data
                .opt_str("/status_message")
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "response status is not ok".to_string());
            return Err(LookupError::Provider {
                url: data.url().to_string(),
                message,
            });
        }

        Ok(data)
    }
}

/// An IPv4-mapped IPv6 prefix (`::ffff:a.b.c.d/96+`) becomes its IPv4 form.
pub fn as_family(net: IpNet) -> IpNet {
    match net {
        IpNet::V6(v6) if v6.prefix_len() >= 96 => v6
            .network()
            .to_ipv4_mapped()
            .and_then(|addr| Ipv4Net::new(addr, v6.prefix_len() - 96).ok())
            .map_or(net, IpNet::V4),
        _ => net,
    }
}

/// Order by prefix length, then by network address text. The sort is stable.
pub fn sort_nets(mut nets: Vec<IpNet>) -> Vec<String> {
    nets.sort_by(|a, b| {
        a.prefix_len()
            .cmp(&b.prefix_len())
            .then_with(|| a.network().to_string().cmp(&b.network().to_string()))
    });
    nets.iter().map(ToString::to_string).collect()
}
