use minidns_domain::LookupResult;
use std::fmt::Write;

const RULE: &str = "+----------------------+-------------------+";

/// Boxed two-column table, one row per address, domain shown as entered.
pub fn render_table(result: &LookupResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "| {:<20} | {:<17} |", "Domain Name", "Resolved IP");
    let _ = writeln!(out, "{}", RULE);
    for address in &result.addresses {
        let _ = writeln!(out, "| {:<20} | {:<17} |", result.domain, address.to_string());
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

pub fn no_results_message(domain: &str) -> String {
    format!("No resolved IPs found for {}.", domain)
}

pub fn timeout_message(timeout_secs: u64) -> String {
    format!(
        "DNS server timeout. No response received within {} seconds.",
        timeout_secs
    )
}

pub fn render_json(result: &LookupResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

pub fn render_json_error(domain: &str, error: &str) -> String {
    serde_json::json!({ "domain": domain, "error": error }).to_string()
}
