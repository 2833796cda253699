//! Catalog image sources and the placeholder fallback
//!
//! A terminal cannot show the photos, so an image "loads" when its source is
//! a usable absolute http(s) URL. Anything else is a load error, and the
//! source is swapped for a generated placeholder labelled with the product
//! name.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Bytes escaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way `encodeURIComponent` does (UTF-8 bytes)
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Placeholder image URL whose text is the encoded product name
pub fn placeholder_url(base_url: &str, name: &str) -> String {
    format!(
        "{}?text={}",
        base_url.trim_end_matches('/'),
        encode_uri_component(name)
    )
}

/// Whether a source can be loaded at all
///
/// Accepts `http` and `https` URLs with a non-empty host.
pub fn is_loadable(src: &str) -> bool {
    Url::parse(src).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// The image element of one catalog card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// Product name used for the alt text and placeholder label
    alt: String,
    src: String,
    fell_back: bool,
}

impl ImageSource {
    pub fn new(alt: &str, src: &str) -> Self {
        Self {
            alt: alt.to_string(),
            src: src.to_string(),
            fell_back: false,
        }
    }

    /// Whether the current source loads
    pub fn loads(&self) -> bool {
        is_loadable(&self.src)
    }

    /// Handle a load error by switching to the placeholder
    ///
    /// Applied once; a failing placeholder is left as is.
    pub fn on_error(&mut self, placeholder_base: &str) {
        if self.fell_back {
            return;
        }
        let placeholder = placeholder_url(placeholder_base, &self.alt);
        log::debug!("Image for '{}' failed to load, using {}", self.alt, placeholder);
        self.src = placeholder;
        self.fell_back = true;
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_placeholder(&self) -> bool {
        self.fell_back
    }
}
