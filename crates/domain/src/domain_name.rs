//! Textual rules for domain names: what may be encoded, and how a requested
//! name is normalized before it is looked up.

use crate::DomainError;

/// Longest label the wire format can carry (6-bit length).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest textual name, dots included, without a trailing dot.
pub const MAX_DOMAIN_LEN: usize = 253;

const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];
const WWW_PREFIX: &str = "www.";

/// Checks that `domain` can be encoded as a sequence of labels and returns
/// it with a single trailing dot removed.
///
/// Rejected inputs:
///
/// * the empty name (and a lone `"."`)
/// * empty labels (`"a..b"`, `".a"`, `"a.."`)
/// * labels longer than [`MAX_LABEL_LEN`] bytes
/// * labels containing non-ASCII bytes
/// * names longer than [`MAX_DOMAIN_LEN`] bytes
pub fn validate_domain_name(domain: &str) -> Result<&str, DomainError> {
    let name = domain.strip_suffix('.').unwrap_or(domain);

    if name.is_empty() {
        return Err(DomainError::InvalidLabel("domain name is empty".to_string()));
    }

    if name.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::InvalidLabel(format!(
            "domain name is {} bytes, maximum is {}",
            name.len(),
            MAX_DOMAIN_LEN
        )));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidLabel(format!(
                "empty label in '{}'",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidLabel(format!(
                "label '{}' is {} bytes, maximum is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        if !label.is_ascii() {
            return Err(DomainError::InvalidLabel(format!(
                "label '{}' contains non-ASCII characters",
                label
            )));
        }
    }

    Ok(name)
}

/// Strips a leading `http://` or `https://`, then a leading `www.`.
///
/// Matching is exact and case-sensitive. The pass repeats until nothing is
/// left to strip (`"www.www.a.com"` becomes `"a.com"`), which keeps
/// `normalize_domain(normalize_domain(x)) == normalize_domain(x)`.
pub fn normalize_domain(domain: &str) -> &str {
    let mut current = domain;
    loop {
        let next = strip_prefixes_once(current);
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn strip_prefixes_once(domain: &str) -> &str {
    let without_scheme = SCHEME_PREFIXES
        .iter()
        .find_map(|prefix| domain.strip_prefix(prefix))
        .unwrap_or(domain);

    without_scheme
        .strip_prefix(WWW_PREFIX)
        .unwrap_or(without_scheme)
}
