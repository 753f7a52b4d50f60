//! Features derived from the split URL components.

use crate::url_model::{public_suffix, UrlParts};

/// Sentinel for "no resolvable public suffix".
pub const NO_TLD: f64 = -1.0;

pub fn dir_count(parts: &UrlParts) -> usize {
    parts.path.matches('/').count()
}

/// Occurrences of `//` inside the path (an embedded second URL or domain).
pub fn embedded_domain_count(parts: &UrlParts) -> usize {
    parts.path.matches("//").count()
}

/// Length of the full netloc, including userinfo and port.
pub fn hostname_length(parts: &UrlParts) -> usize {
    parts.netloc.chars().count()
}

/// Length of the first directory: the piece after the first `/` of the path.
/// 0 when the path has no `/`.
pub fn first_dir_length(parts: &UrlParts) -> usize {
    parts
        .path
        .split('/')
        .nth(1)
        .map(|s| s.chars().count())
        .unwrap_or(0)
}

pub fn tld_length(parts: &UrlParts) -> f64 {
    public_suffix(parts)
        .map(|s| s.chars().count() as f64)
        .unwrap_or(NO_TLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::split_url;

    fn parts(url: &str) -> UrlParts {
        split_url(url).unwrap()
    }

    #[test]
    fn dirs_and_embedded() {
        let p = parts("http://a.com/x//y/z?u=/q");
        assert_eq!(dir_count(&p), 4);
        assert_eq!(embedded_domain_count(&p), 1);
    }

    #[test]
    fn hostname_length_uses_netloc() {
        assert_eq!(hostname_length(&parts("http://user@a.com:80/")), 13);
        assert_eq!(hostname_length(&parts("a.com/x")), 0);
    }

    #[test]
    fn first_dir() {
        assert_eq!(first_dir_length(&parts("http://a.com/abcd/e")), 4);
        assert_eq!(first_dir_length(&parts("http://a.com/")), 0);
        assert_eq!(first_dir_length(&parts("http://a.com")), 0);
        assert_eq!(first_dir_length(&parts("a.com/login.php")), 9);
        assert_eq!(first_dir_length(&parts("a.com")), 0);
    }

    #[test]
    fn tld() {
        assert_eq!(tld_length(&parts("https://www.google.com/")), 3.0);
        assert_eq!(tld_length(&parts("http://bbc.co.uk")), 5.0);
        assert_eq!(tld_length(&parts("google.com")), NO_TLD);
        assert_eq!(tld_length(&parts("http://10.0.0.1/")), NO_TLD);
        assert_eq!(tld_length(&parts("http://пример.рф/")), 2.0);
    }
}
