//! Public-suffix ("TLD") lookup for a split URL.

use super::split::UrlParts;
use url::quirks::domain_to_unicode;
use url::Host;

/// Returns the public suffix of the URL's host, e.g. `com`, `co.uk` or `рф`.
///
/// IDN suffixes come back in Unicode form. Hosts the URL host parser
/// rejects (e.g. `exa%20mple.com`) are still looked up verbatim.
///
/// `None` when the URL has no host (scheme-less input lands in the path),
/// when the host is an IP address, when the suffix is not on the Public
/// Suffix List, or when nothing precedes the suffix (`http://com/`).
pub fn public_suffix(parts: &UrlParts) -> Option<String> {
    let hostname = parts.hostname()?;
    let domain = match Host::parse(&hostname) {
        Ok(Host::Domain(d)) => d,
        Ok(Host::Ipv4(_) | Host::Ipv6(_)) => return None,
        Err(_) => hostname,
    };
    let domain = domain.trim_end_matches('.');

    let registrable = psl::domain(domain.as_bytes())?;
    let suffix = registrable.suffix();
    if !suffix.is_known() {
        return None;
    }
    let ascii = std::str::from_utf8(suffix.as_bytes()).ok()?;
    let unicode = domain_to_unicode(ascii);
    if unicode.is_empty() {
        Some(ascii.to_string())
    } else {
        Some(unicode)
    }
}
