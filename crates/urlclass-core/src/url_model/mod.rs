//! URL modeling: component split and public-suffix lookup.
//!
//! The split mirrors the generic-URL rules the classifier's features were
//! defined against, rather than WHATWG parsing: nothing is normalized, no
//! default path is inserted, and scheme-less input is kept as a path.

mod split;
mod tld;

pub use split::{split_url, SplitError, UrlParts};
pub use tld::public_suffix;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_then_suffix() {
        let parts = split_url("https://login.paypal.com.secure-update.info/webscr").unwrap();
        assert_eq!(
            parts.hostname().as_deref(),
            Some("login.paypal.com.secure-update.info")
        );
        assert_eq!(public_suffix(&parts).as_deref(), Some("info"));
    }

    #[test]
    fn path_is_not_normalized() {
        let parts = split_url("http://example.com").unwrap();
        assert_eq!(parts.path, "");
        let parts = split_url("http://example.com/a/../b//c").unwrap();
        assert_eq!(parts.path, "/a/../b//c");
    }
}
