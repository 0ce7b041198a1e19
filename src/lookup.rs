//! Auxiliary documentation lookup.
//!
//! Convenience action outside the navigation core: given a word, build the
//! URL of an external documentation search for it. Opening the URL is the
//! host's business; this module only produces the address.

/// Default documentation search endpoint for platform APIs.
pub const DEFAULT_SEARCH_BASE: &str = "https://developer.android.com/s/results?q=";

/// Build a documentation-search URL for a single word.
///
/// The word is percent-escaped conservatively: anything outside the
/// unreserved query characters is encoded byte-wise.
pub fn doc_search_url(word: &str) -> String {
    doc_search_url_with_base(DEFAULT_SEARCH_BASE, word)
}

/// Same as [`doc_search_url`] with a caller-chosen endpoint.
pub fn doc_search_url_with_base(base: &str, word: &str) -> String {
    let mut url = String::with_capacity(base.len() + word.len());
    url.push_str(base);
    for byte in word.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                url.push(byte as char)
            }
            _ => {
                url.push('%');
                url.push_str(&format!("{byte:02X}"));
            }
        }
    }
    url
}
