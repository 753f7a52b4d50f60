//! Boolean pattern features: IP literals, shortening services, bait words
//! and hostname consistency.

use regex::Regex;
use std::sync::OnceLock;

use crate::url_model::UrlParts;

/// Dotted-decimal IPv4 followed by `/`, or a hex-dotted IPv4 followed by `/`
/// and an eight-group IPv6 literal. The second branch is kept exactly as the
/// shipped forests were trained with it.
const IP_LITERAL: &str = concat!(
    r"(([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])\.",
    r"([01]?\d\d?|2[0-4]\d|25[0-5])\.([01]?\d\d?|2[0-4]\d|25[0-5])/)|",
    r"((0x[0-9a-fA-F]{1,2})\.(0x[0-9a-fA-F]{1,2})\.(0x[0-9a-fA-F]{1,2})\.(0x[0-9a-fA-F]{1,2})/)",
    r"(?:[a-fA-F0-9]{1,4}:){7}[a-fA-F0-9]{1,4}",
);

const SHORTENERS: &[&str] = &[
    "bit.ly", "goo.gl", "shorte.st", "go2l.ink", "x.co", "ow.ly", "t.co", "tinyurl", "tr.im",
    "is.gd", "cli.gs", "yfrog.com", "migre.me", "ff.im", "tiny.cc", "url4.eu", "twit.ac",
    "su.pr", "twurl.nl", "snipurl.com", "short.to", "BudURL.com", "ping.fm", "post.ly",
    "Just.as", "bkite.com", "snipr.com", "fic.kr", "loopt.us", "doiop.com", "short.ie",
    "kl.am", "wp.me", "rubyurl.com", "om.ly", "to.ly", "bit.do", "lnkd.in", "db.tt", "qr.ae",
    "adf.ly", "bitly.com", "cur.lv", "tinyurl.com", "ity.im", "q.gs", "po.st", "bc.vc",
    "twitthis.com", "u.to", "j.mp", "buzurl.com", "cutt.us", "u.bb", "yourls.org",
    "prettylinkpro.com", "scrnch.me", "filoops.info", "vzturl.com", "qr.net", "1url.com",
    "tweez.me", "v.gd", "link.zip.net",
];

const SUSPICIOUS_WORDS: &[&str] = &[
    "PayPal", "login", "signin", "bank", "account", "update", "free", "lucky", "service",
    "bonus", "ebayisapi", "webscr",
];

fn ip_literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IP_LITERAL).expect("ip literal regex is valid"))
}

fn shortener_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = SHORTENERS
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("shortener regex is valid")
    })
}

fn suspicious_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&SUSPICIOUS_WORDS.join("|")).expect("suspicious regex is valid"))
}

/// True when an IP literal appears anywhere in the URL.
pub fn having_ip_address(url: &str) -> bool {
    ip_literal_re().is_match(url)
}

/// True when a known URL-shortening service appears anywhere in the URL.
/// Matching is case-sensitive and unanchored, so `t.co` also fires inside
/// `microsoft.com`.
pub fn shortening_service(url: &str) -> bool {
    shortener_re().is_match(url)
}

pub fn suspicious_words(url: &str) -> bool {
    suspicious_re().is_match(url)
}

/// True when the URL has a hostname and that (lowercased) hostname occurs
/// verbatim in the URL text. Mixed-case hosts therefore count as abnormal.
pub fn abnormal_url(url: &str, parts: &UrlParts) -> bool {
    parts
        .hostname()
        .map(|host| url.contains(&host))
        .unwrap_or(false)
}
