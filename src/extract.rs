use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use url::Url;

/// Substrings that mark a path or query as video-related
pub const VIDEO_KEYWORDS: [&str; 8] = [
    "watch", "video", "videos", "playlist", "play", "embed", "media", "stream",
];

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));
static IFRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("iframe[src]").expect("valid iframe selector"));
static RAW_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"'>]+"#).expect("valid url pattern"));

/// Harvesting pass a URL was first seen in
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Anchor,
    Iframe,
    Text,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct VideoUrl {
    pub url: String,
    pub source: Source,
}

/// Returns true when `url` is an absolute HTTP(S) URL whose lowercased path or
/// query contains one of [`VIDEO_KEYWORDS`]. Unparseable input never matches.
pub fn looks_like_video_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    if !parsed.scheme().starts_with("http") {
        return false;
    }

    let path = parsed.path().to_lowercase();
    let query = parsed.query().unwrap_or("").to_lowercase();

    VIDEO_KEYWORDS
        .iter()
        .any(|k| path.contains(k) || query.contains(k))
}

/// Sorted, deduplicated video-like URLs found in `html`.
pub fn extract_urls(html: &str, base_url: &Url) -> Vec<String> {
    extract_candidates(html, base_url)
        .into_iter()
        .map(|candidate| candidate.url)
        .collect()
}

/// Runs the anchor, iframe and raw-text passes over `html` and merges them.
///
/// Relative anchor and iframe attributes are resolved against `base_url`;
/// absolute ones and raw-text matches are kept verbatim. Anchors and raw-text
/// matches must pass [`looks_like_video_url`], iframes only need an HTTP(S)
/// scheme. A URL found by several passes keeps the source of the earliest one.
pub fn extract_candidates(html: &str, base_url: &Url) -> Vec<VideoUrl> {
    let document = Html::parse_document(html);
    let mut found: BTreeMap<String, Source> = BTreeMap::new();

    // Extract <a href>, keeping only video-like targets
    let anchors: Vec<String> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|el| resolve(base_url, el.value().attr("href")?))
        .filter(|url| looks_like_video_url(url))
        .collect();
    log::debug!("Anchor pass kept {} URL(s)", anchors.len());

    // Extract <iframe src>; embeds skip the keyword check
    let iframes: Vec<String> = document
        .select(&IFRAME_SELECTOR)
        .filter_map(|el| resolve(base_url, el.value().attr("src")?))
        .filter(|url| has_http_scheme(url))
        .collect();
    log::debug!("Iframe pass kept {} URL(s)", iframes.len());

    // Extract URLs from inline scripts and text blobs
    let raw: Vec<String> = RAW_URL
        .find_iter(html)
        .map(|m| m.as_str())
        .filter(|url| looks_like_video_url(url))
        .map(str::to_string)
        .collect();
    log::debug!("Raw-text pass kept {} URL(s)", raw.len());

    // Earlier passes win the source on duplicates
    for (urls, source) in [
        (anchors, Source::Anchor),
        (iframes, Source::Iframe),
        (raw, Source::Text),
    ] {
        for url in urls {
            found.entry(url).or_insert(source);
        }
    }

    found
        .into_iter()
        .map(|(url, source)| VideoUrl { url, source })
        .collect()
}

/// Makes an attribute value absolute, skipping blanks and failures.
///
/// Values that already start with `http://` or `https://` are returned
/// unchanged so they compare equal to the same URL found in raw text.
fn resolve(base_url: &Url, reference: &str) -> Option<String> {
    if reference.trim().is_empty() {
        return None;
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return Some(reference.to_string());
    }
    match base_url.join(reference) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            log::debug!("Skipping unresolvable reference '{}': {}", reference, e);
            None
        }
    }
}

fn has_http_scheme(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.scheme().starts_with("http"))
}
