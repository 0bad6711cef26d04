//! Pure predicates behind the [`Validator`](crate::core::Validator) checks.
//!
//! Every function here answers a yes/no question about its input and never
//! fails: malformed input simply yields `false`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Maximum length of a full hostname, excluding an optional trailing dot.
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of the local part of an email address.
const MAX_EMAIL_LOCAL_LEN: usize = 64;

/// One or more RFC 1123 labels separated by dots, with an optional trailing dot.
static HOSTNAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.?$",
    )
    .ok()
});

/// Top-level label of a domain name: alphabetic, or an IDNA `xn--` label.
static TOP_LEVEL_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9-]{1,59})$").ok());

/// Local part of an address as accepted by the WHATWG email grammar.
static EMAIL_LOCAL_PART: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, s: &str) -> bool {
    LazyLock::force(pattern)
        .as_ref()
        .is_some_and(|re| re.is_match(s))
}

/// Every character is alphabetic or numeric. Vacuously true for `""`.
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(char::is_alphanumeric)
}

/// At least one cased character and no uppercase ones.
///
/// Text from scripts without case (Arabic, N'Ko, ...) is neither lowercase nor
/// uppercase.
pub fn is_lowercase(s: &str) -> bool {
    s == s.to_lowercase() && s != s.to_uppercase()
}

/// At least one cased character and no lowercase ones.
pub fn is_uppercase(s: &str) -> bool {
    s == s.to_uppercase() && s != s.to_lowercase()
}

/// Standard alphabet base64 with padding.
pub fn is_base64(s: &str) -> bool {
    STANDARD.decode(s).is_ok()
}

/// A 12 to 19 digit number passing the Luhn checksum.
///
/// Spaces and hyphens between digit groups are ignored.
pub fn is_credit_card(s: &str) -> bool {
    let mut digits = Vec::with_capacity(19);
    for c in s.chars().filter(|c| *c != ' ' && *c != '-') {
        match c.to_digit(10) {
            Some(d) => digits.push(d),
            None => return false,
        }
    }
    (12..=19).contains(&digits.len()) && luhn(&digits)
}

fn luhn(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// RFC 1123 hostname: dot-separated labels of letters, digits and inner hyphens.
pub fn is_hostname(s: &str) -> bool {
    s.trim_end_matches('.').len() <= MAX_HOSTNAME_LEN && matches(&HOSTNAME, s)
}

/// A hostname with at least two labels whose last label is a valid top-level domain.
pub fn is_domain(s: &str) -> bool {
    if !is_hostname(s) {
        return false;
    }
    let mut labels = s.trim_end_matches('.').rsplit('.');
    match (labels.next(), labels.next()) {
        (Some(top), Some(_)) => matches(&TOP_LEVEL_LABEL, top),
        _ => false,
    }
}

/// `local@host` where the local part follows the WHATWG grammar and the host
/// is a valid hostname.
pub fn is_email(s: &str) -> bool {
    let Some((local, host)) = s.rsplit_once('@') else {
        return false;
    };
    local.len() <= MAX_EMAIL_LOCAL_LEN
        && matches(&EMAIL_LOCAL_PART, local)
        && !host.ends_with('.')
        && is_hostname(host)
}

/// A UUID in canonical hyphenated form (`8-4-4-4-12` hex digits).
pub fn is_guid(s: &str) -> bool {
    // 36 is the only length uuid accepts in hyphenated form
    s.len() == 36 && uuid::Uuid::try_parse(s).is_ok()
}

/// An IPv4 or IPv6 literal.
pub fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// An RFC 3339 timestamp with a valid calendar date and time of day.
pub fn is_std_date(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

/// An absolute URL with a scheme.
pub fn is_url(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}
