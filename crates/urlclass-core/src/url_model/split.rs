//! Generic URL split into scheme, netloc, path, params, query and fragment.
//!
//! Lenient on purpose: most URLs seen in the wild (and in the training data)
//! carry no scheme, so `example.com/login` is a valid input whose whole text
//! lands in `path`. Only an unbalanced or malformed bracketed host is an error.

use std::net::IpAddr;
use thiserror::Error;

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("Invalid IPv6 URL")]
    InvalidIpv6,
    #[error("'{0}' does not appear to be an IPv4 or IPv6 address")]
    InvalidBracketedHost(String),
    #[error("an IPv4 address cannot be in brackets")]
    BracketedIpv4,
    #[error("IPvFuture address is invalid")]
    InvalidIpvFuture,
}

/// Components of a split URL. Empty strings mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Host portion of the netloc: userinfo and port removed, brackets
    /// stripped, lowercased. `None` when the netloc carries no host.
    pub fn hostname(&self) -> Option<String> {
        let hostinfo = match self.netloc.rfind('@') {
            Some(i) => &self.netloc[i + 1..],
            None => self.netloc.as_str(),
        };
        let host = match hostinfo.split_once('[') {
            Some((_, bracketed)) => bracketed
                .split_once(']')
                .map(|(h, _)| h)
                .unwrap_or(bracketed),
            None => hostinfo
                .split_once(':')
                .map(|(h, _)| h)
                .unwrap_or(hostinfo),
        };
        if host.is_empty() {
            None
        } else {
            Some(host.to_lowercase())
        }
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Splits `input` into its components.
pub fn split_url(input: &str) -> Result<UrlParts, SplitError> {
    let cleaned: String = input
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let mut rest = cleaned.as_str();
    let mut parts = UrlParts::default();

    if let Some(i) = rest.find(':') {
        let candidate = &rest[..i];
        if candidate.starts_with(|c: char| c.is_ascii_alphabetic())
            && candidate.chars().all(is_scheme_char)
        {
            parts.scheme = candidate.to_ascii_lowercase();
            rest = &rest[i + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        parts.netloc = after[..end].to_string();
        rest = &after[end..];
        check_brackets(&parts.netloc)?;
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        parts.fragment = fragment.to_string();
        rest = before;
    }
    if let Some((before, query)) = rest.split_once('?') {
        parts.query = query.to_string();
        rest = before;
    }

    if USES_PARAMS.contains(&parts.scheme.as_str()) && rest.contains(';') {
        let (path, params) = split_params(rest);
        parts.path = path.to_string();
        parts.params = params.to_string();
    } else {
        parts.path = rest.to_string();
    }

    Ok(parts)
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(i) => {
            let at = search_from + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}

fn check_brackets(netloc: &str) -> Result<(), SplitError> {
    let open = netloc.contains('[');
    if open != netloc.contains(']') {
        return Err(SplitError::InvalidIpv6);
    }
    if !open {
        return Ok(());
    }
    let bracketed = netloc
        .split_once('[')
        .map(|(_, b)| b.split_once(']').map(|(h, _)| h).unwrap_or(b))
        .unwrap_or_default();
    check_bracketed_host(bracketed)
}

fn check_bracketed_host(host: &str) -> Result<(), SplitError> {
    if let Some(future) = host.strip_prefix('v') {
        let valid = future
            .split_once('.')
            .map(|(ver, addr)| {
                !ver.is_empty() && ver.chars().all(|c| c.is_ascii_hexdigit()) && !addr.is_empty()
            })
            .unwrap_or(false);
        return if valid {
            Ok(())
        } else {
            Err(SplitError::InvalidIpvFuture)
        };
    }

    // Zone identifiers (`fe80::1%eth0`) are allowed after the address.
    let addr = host.split_once('%').map(|(a, _)| a).unwrap_or(host);
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => Ok(()),
        Ok(IpAddr::V4(_)) => Err(SplitError::BracketedIpv4),
        Err(_) => Err(SplitError::InvalidBracketedHost(host.to_string())),
    }
}
