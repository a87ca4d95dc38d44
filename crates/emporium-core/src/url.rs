//! URL normalization and source-type inference
//!
//! GitHub URLs like `https://github.com/user/repo/blob/master/Foo.js` point
//! at the browsable UI page; the raw code lives on the official
//! `raw.githubusercontent.com` service. The legacy `raw.github.com` host is
//! rewritten to the same target. URLs for other hosts pass through unchanged.

use crate::types::SourceType;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static GITHUB_BLOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([\w.-]+)/([\w.-]+)/blob/(.+)$")
        .expect("github blob regex is valid")
});

static GITHUB_RAW_LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://raw\.github\.com/([\w.-]+)/([\w.-]+)/(.+)$")
        .expect("legacy raw regex is valid")
});

/// Rewrite a browsable code-host URL to its raw-content equivalent
///
/// Unrecognized URLs are returned unchanged, which also makes the rewrite
/// idempotent. Pure function, no I/O.
pub fn to_raw_url(url: &str) -> Cow<'_, str> {
    let captures = GITHUB_BLOB_RE
        .captures(url)
        .or_else(|| GITHUB_RAW_LEGACY_RE.captures(url));
    match captures {
        Some(captures) => Cow::Owned(format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            &captures[1], &captures[2], &captures[3]
        )),
        None => Cow::Borrowed(url),
    }
}

/// Split a URL into its pre-fragment part and optional fragment
///
/// The fragment addresses a record inside a container document and is never
/// part of the GET request path.
pub fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((base, fragment)) if !fragment.is_empty() => (base, Some(fragment)),
        Some((base, _)) => (base, None),
        None => (url, None),
    }
}

/// Infer how to interpret the resource behind a URL
///
/// Paths ending in `.txt` or `.js` (query and fragment stripped) hold the
/// extension as plain text; anything else is treated as a container
/// document with the fragment naming the record to extract.
pub fn infer_source_type(raw: &str) -> SourceType {
    let path = match url::Url::parse(raw) {
        Ok(parsed) => Cow::Owned(parsed.path().to_string()),
        // not an absolute URL; strip fragment and query by hand
        Err(_) => {
            let (base, _) = split_fragment(raw);
            Cow::Borrowed(base.split('?').next().unwrap_or(base))
        }
    };
    if path.ends_with(".txt") || path.ends_with(".js") {
        SourceType::Text
    } else {
        SourceType::Container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_github_ui_url() {
        assert_eq!(
            to_raw_url("https://github.com/A/B/blob/master/X.js"),
            "https://raw.githubusercontent.com/A/B/master/X.js"
        );
    }

    #[test]
    fn test_rewrites_legacy_raw_url() {
        assert_eq!(
            to_raw_url("https://raw.github.com/A/B/master/X.js"),
            "https://raw.githubusercontent.com/A/B/master/X.js"
        );
    }

    #[test]
    fn test_handles_dashed_owner_and_nested_path() {
        assert_eq!(
            to_raw_url("https://github.com/some-user/my.repo/blob/main/plugins/X.js"),
            "https://raw.githubusercontent.com/some-user/my.repo/main/plugins/X.js"
        );
    }

    #[test]
    fn test_other_hosts_pass_through() {
        let url = "https://example.org/wiki/index.html#SomePlugin";
        assert_eq!(to_raw_url(url), url);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = to_raw_url("https://github.com/A/B/blob/master/X.js").into_owned();
        assert_eq!(to_raw_url(&once), once);
    }

    #[test]
    fn test_split_fragment() {
        assert_eq!(
            split_fragment("https://example.org/w.html#Plugin"),
            ("https://example.org/w.html", Some("Plugin"))
        );
        assert_eq!(
            split_fragment("https://example.org/a.js"),
            ("https://example.org/a.js", None)
        );
        assert_eq!(
            split_fragment("https://example.org/w.html#"),
            ("https://example.org/w.html", None)
        );
    }

    #[test]
    fn test_source_type_inference() {
        assert_eq!(
            infer_source_type("https://example.org/Foo.js"),
            SourceType::Text
        );
        assert_eq!(
            infer_source_type("https://example.org/Foo.txt?raw=1"),
            SourceType::Text
        );
        assert_eq!(
            infer_source_type("https://example.org/Foo.js#ignored"),
            SourceType::Text
        );
        assert_eq!(
            infer_source_type("https://example.org/wiki.html#Plugin"),
            SourceType::Container
        );
        assert_eq!(
            infer_source_type("https://example.org/#Plugin"),
            SourceType::Container
        );
    }
}
