pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod payload;
pub mod report;
pub mod types;

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

pub use classify::{classify, Query};
pub use config::Config;
pub use error::{LookupError, ParseError};
pub use lookup::Lookup;
pub use types::{AsnDetail, AsnPrefixes, IpDetail, PrefixDetail, PrefixOrigin};

/// Output switches for one invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Also fetch the advertised prefixes when the query is an ASN
    pub prefixes: bool,
    /// Print JSON instead of the text report: one document per record,
    /// written one after another (ASN detail, then its prefixes)
    pub json: bool,
}

fn emit<W, T>(out: &mut W, record: &T, text: impl FnOnce(&T) -> String, json: bool) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
    } else {
        write!(out, "{}", text(record))?;
    }
    out.flush()?;
    Ok(())
}

/// Resolve one query and write its report to `out`.
///
/// For an ASN with `prefixes` set, the detail is written and flushed before
/// the prefixes are requested, so it stays in place if that second call fails.
pub fn run_whodat<W: Write>(
    lookup: &Lookup,
    query: &Query,
    options: Options,
    out: &mut W,
) -> Result<()> {
    debug!(kind = query.kind(), query = %query, "classified query");

    match query {
        Query::Ip(ip) => {
            let detail = lookup.ip_detail(*ip)?;
            emit(out, &detail, report::render_ip, options.json)?;
        }
        Query::Prefix(prefix) => {
            let detail = lookup.prefix_detail(*prefix)?;
            emit(out, &detail, report::render_prefix, options.json)?;
        }
        Query::Asn(asn) => {
            let detail = lookup.asn_detail(asn)?;
            emit(out, &detail, report::render_asn, options.json)?;

            if options.prefixes {
                let prefixes = lookup.asn_prefixes(asn)?;
                emit(out, &prefixes, report::render_asn_prefixes, options.json)?;
            }
        }
    }

    Ok(())
}
