// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

/// Turn a possibly-relative href into an absolute URL on the given origin.
///
/// Wiki table cells link images and articles with site-relative hrefs like
/// `/wiki/File:Ford_Field.jpg`; protocol-relative `//upload.wikimedia.org/...`
/// also appears in image markup.
pub fn absolutize(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    if let Some(rest) = href.strip_prefix("//") {
        return format!("https://{rest}");
    }

    match Url::parse(origin).and_then(|base| base.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(_) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            href.trim_start_matches('/')
        ),
    }
}
