//! Syntactic URL plausibility checking.
//!
//! Validation happens once, at creation time. The submitted string is stored
//! verbatim when it passes; nothing is re-checked at resolve time.

use url::Url;

/// Returns true when the input parses as an absolute HTTP(S) URL with a host.
///
/// This is a plausibility check, not a reachability check: parsing is
/// delegated to the `url` crate, and only the `http`/`https` schemes are
/// accepted. Schemes like `javascript:` or `data:` are rejected so a stored
/// link can never redirect into them.
pub fn looks_like_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
