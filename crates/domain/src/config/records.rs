use crate::HostRecord;
use std::net::Ipv4Addr;

const BUILTIN_RECORDS: &[(&str, &[[u8; 4]])] = &[
    ("google.com", &[[8, 8, 8, 8], [8, 8, 4, 4]]),
    ("amazon.com", &[[54, 239, 28, 85], [54, 239, 28, 84]]),
    ("github.com", &[[140, 82, 112, 3], [140, 82, 114, 4]]),
    ("example.com", &[[93, 184, 216, 34]]),
    ("localhost", &[[127, 0, 0, 1]]),
    ("microsoft.com", &[[13, 77, 161, 179], [40, 112, 72, 205]]),
    ("apple.com", &[[17, 172, 224, 47], [17, 172, 224, 48]]),
    ("facebook.com", &[[31, 13, 71, 36], [31, 13, 71, 37]]),
    ("twitter.com", &[[104, 244, 42, 129], [104, 244, 42, 65]]),
    ("linkedin.com", &[[108, 174, 10, 10], [108, 174, 10, 11]]),
];

/// The table served when no `[[records]]` are configured.
pub fn default_records() -> Vec<HostRecord> {
    BUILTIN_RECORDS
        .iter()
        .map(|(domain, addresses)| {
            HostRecord::new(
                *domain,
                addresses.iter().map(|octets| Ipv4Addr::from(*octets)).collect(),
            )
        })
        .collect()
}
