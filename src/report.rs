//! Text rendering of lookup records

use colored::Colorize;

use crate::types::{AsnDetail, AsnPrefixes, IpDetail, PrefixDetail};

fn asn_label(asn: u32) -> String {
    format!("AS{asn}")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Error line for stderr, red and bold only when `color` is set.
pub fn render_error(message: &str, color: bool) -> String {
    if color {
        message.red().bold().to_string()
    } else {
        message.to_string()
    }
}

pub fn render_asn(detail: &AsnDetail) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "  {} ({})",
            asn_label(detail.asn).as_str().blue().bold(),
            detail.org.as_str().yellow().bold()
        ),
        String::new(),
    ];

    if let Some(lg) = present(&detail.looking_glass) {
        lines.push(format!("    {}{}", "Looking Glass: ".white().bold(), lg.green()));
    }
    if let Some(website) = present(&detail.website) {
        lines.push(format!("    {}{}", "Website: ".white().bold(), website.magenta()));
    }

    lines.join("\n") + "\n"
}

pub fn render_asn_prefixes(prefixes: &AsnPrefixes) -> String {
    let mut lines = vec![
        format!("    {}", "Prefixes:".white().bold()),
        format!("      {}", "IPv4:".white().bold()),
    ];
    lines.extend(prefixes.ipv4.iter().map(|p| format!("        {}", p.as_str().yellow())));
    lines.push(format!("      {}", "IPv6:".white().bold()));
    lines.extend(prefixes.ipv6.iter().map(|p| format!("        {}", p.as_str().cyan())));

    lines.join("\n") + "\n"
}

pub fn render_ip(detail: &IpDetail) -> String {
    let heading = match present(&detail.ptr) {
        Some(ptr) => format!("  {} ({})", detail.ip.as_str().magenta().bold(), ptr.green()),
        None => format!("  {}", detail.ip.as_str().magenta().bold()),
    };

    let mut lines = vec![
        String::new(),
        heading,
        String::new(),
        format!("    {}", detail.org.as_str().yellow().bold()),
        format!("    {}", asn_label(detail.asn).as_str().cyan().bold()),
        String::new(),
        format!(
            "    {} {} ({})",
            "Prefix:".bright_black(),
            detail.prefix.as_str().blue().bold(),
            detail.name.as_str().bright_black()
        ),
        format!("    {} {}", "RIR:".bright_black(), detail.rir.as_str().red().bold()),
    ];
    if let Some(allocation) = present(&detail.allocation) {
        lines.push(format!("    {} {}", "Allocation:".bright_black(), allocation.blue()));
    }

    lines.join("\n") + "\n"
}

pub fn render_prefix(detail: &PrefixDetail) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "  {} ({})",
            detail.prefix.as_str().magenta().bold(),
            detail.name.as_str().green()
        ),
        String::new(),
        format!("    {}", detail.org.as_str().yellow().bold()),
        String::new(),
        format!("    {}", "Origins:".white().bold()),
    ];
    for origin in &detail.origins {
        lines.push(format!(
            "      {} ({})",
            asn_label(origin.asn).as_str().cyan().bold(),
            origin.org.as_str().blue()
        ));
    }
    lines.push(String::new());
    lines.push(format!("    {} {}", "RIR:".bright_black(), detail.rir.as_str().red().bold()));
    if let Some(allocation) = present(&detail.allocation) {
        lines.push(format!("    {} {}", "Allocation:".bright_black(), allocation.blue()));
    }

    lines.join("\n") + "\n"
}
