use crate::error::{Result, ScanError};
use crate::result::ContentFeatures;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

const HIDDEN_STYLE_PATTERN: &str = r"(?i)display:\s*none|visibility:\s*hidden";

/// Returns the authority part of a URL (`user@host:port`), verbatim.
///
/// Works on any string: when there is no `://` the whole prefix up to the
/// first `/`, `?` or `#` is taken. A backslash also ends the authority, as
/// browsers and `reqwest` read it as a path separator in http(s) URLs.
pub fn authority(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#' | '\\'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Compiled selectors for the markup checks, built once and shared by every
/// fetch.
#[derive(Debug, Clone)]
pub struct PageInspector {
    forms: Selector,
    typed_inputs: Selector,
    scripts: Selector,
    styled: Selector,
    meta: Selector,
    hidden_style: Regex,
}

impl PageInspector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            forms: parse_selector("form")?,
            typed_inputs: parse_selector("input[type]")?,
            scripts: parse_selector("script[src]")?,
            styled: parse_selector("input[style], div[style], span[style], section[style]")?,
            meta: parse_selector("meta[http-equiv]")?,
            hidden_style: Regex::new(HIDDEN_STYLE_PATTERN)?,
        })
    }

    /// Inspect the markup of `page_url`.
    pub fn inspect(&self, html: &str, page_url: &str) -> ContentFeatures {
        let document = Html::parse_document(html);
        let own_origin = format!("https://{}", authority(page_url));

        let forms = document.select(&self.forms).next().is_some();

        let password_fields = document.select(&self.typed_inputs).any(|input| {
            input
                .value()
                .attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("password"))
        });

        // Only protocol-relative and same-origin https sources count as local.
        let external_scripts = document.select(&self.scripts).any(|script| {
            script
                .value()
                .attr("src")
                .is_some_and(|src| !src.starts_with("//") && !src.starts_with(&own_origin))
        });

        let hidden_elements = document.select(&self.styled).any(|element| {
            element
                .value()
                .attr("style")
                .is_some_and(|style| self.hidden_style.is_match(style))
        });

        let suspicious_redirects = document.select(&self.meta).any(|meta| {
            meta.value()
                .attr("http-equiv")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("refresh"))
        });

        let features = ContentFeatures {
            forms,
            password_fields,
            external_scripts,
            hidden_elements,
            suspicious_redirects,
        };
        debug!("Inspected {}: {:?}", page_url, features);
        features
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScanError::SelectorError(format!("{css}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect(html: &str) -> ContentFeatures {
        PageInspector::new()
            .unwrap()
            .inspect(html, "https://shop.example.com/login")
    }

    #[test]
    fn test_authority_extraction() {
        assert_eq!(authority("https://example.com/path?q=1"), "example.com");
        assert_eq!(authority("http://user@example.com:8080#x"), "user@example.com:8080");
        assert_eq!(authority("https://example.com"), "example.com");
        assert_eq!(authority("example.com/path"), "example.com");
        assert_eq!(authority("https://"), "");
    }

    #[test]
    fn test_authority_stops_at_backslash() {
        assert_eq!(
            authority(r"https://attacker.example\.google.com/login"),
            "attacker.example"
        );
        assert_eq!(authority(r"http://payp@l.com\x"), "payp@l.com");
    }

    #[test]
    fn test_plain_page_has_no_signals() {
        let features = inspect("<html><body><p>Hello</p></body></html>");
        assert_eq!(features, ContentFeatures::default());
    }

    #[test]
    fn test_login_form_detected() {
        let features = inspect(
            r#"<form action="/go"><input type="text" name="u"><input type="PASSWORD" name="p"></form>"#,
        );
        assert!(features.forms);
        assert!(features.password_fields);
        assert!(features.has_credential_form());
    }

    #[test]
    fn test_password_input_outside_form() {
        let features = inspect(r#"<div><input type="password"></div>"#);
        assert!(!features.forms);
        assert!(features.password_fields);
    }

    #[test]
    fn test_same_origin_and_protocol_relative_scripts_are_local() {
        let features = inspect(
            r#"<script src="https://shop.example.com/app.js"></script>
               <script src="//cdn.example.net/lib.js"></script>
               <script>inline()</script>"#,
        );
        assert!(!features.external_scripts);
    }

    #[test]
    fn test_off_origin_script_is_external() {
        let features = inspect(r#"<script src="https://evil.example.org/steal.js"></script>"#);
        assert!(features.external_scripts);
    }

    #[test]
    fn test_plain_http_same_host_script_is_external() {
        let features = inspect(r#"<script src="http://shop.example.com/app.js"></script>"#);
        assert!(features.external_scripts);
    }

    #[test]
    fn test_hidden_elements_by_style() {
        assert!(inspect(r#"<div style="display: none">x</div>"#).hidden_elements);
        assert!(inspect(r#"<input style="VISIBILITY:HIDDEN" name="t">"#).hidden_elements);
        assert!(inspect(r#"<span style="color:red;display:none"></span>"#).hidden_elements);
        assert!(!inspect(r#"<div style="display: block">x</div>"#).hidden_elements);
        assert!(!inspect(r#"<p style="display:none">x</p>"#).hidden_elements);
    }

    #[test]
    fn test_meta_refresh_detected() {
        let features = inspect(
            r#"<html><head><meta http-equiv="Refresh" content="0; url=https://evil.example.org"></head></html>"#,
        );
        assert!(features.suspicious_redirects);

        let features =
            inspect(r#"<html><head><meta http-equiv="content-type" content="text/html"></head></html>"#);
        assert!(!features.suspicious_redirects);
    }
}
