//! Output minification.
//!
//! The rendered CV page goes through `minify_html` when `[build] minify`
//! is enabled; the sitemap gets a cheap whitespace strip. Disabled
//! minification returns the input untouched as `Cow::Borrowed`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Content kind for minification.
pub enum MinifyType<'a> {
    /// A rendered HTML document
    Html(&'a [u8]),
    /// Generated XML (sitemap)
    Xml(&'a [u8]),
}

/// Minify content according to its kind, honoring `config.build.minify`.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return match content {
            MinifyType::Html(bytes) | MinifyType::Xml(bytes) => Cow::Borrowed(bytes),
        };
    }

    match content {
        MinifyType::Html(html) => Cow::Owned(minify_html_bytes(html)),
        MinifyType::Xml(xml) => Cow::Owned(strip_xml_whitespace(xml)),
    }
}

/// Run `minify_html` with settings that keep the document well-formed.
fn minify_html_bytes(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = false;
    minify_html::minify(html, &cfg)
}

/// Strip indentation and blank lines from XML.
fn strip_xml_whitespace(xml: &[u8]) -> Vec<u8> {
    std::str::from_utf8(xml)
        .unwrap_or("")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
        .into_bytes()
}
