//! HTTP utilities for merging remote INI sources

use std::time::Duration;
use url::Url;

use crate::error::{IniError, Result};

fn fetch_error(url: &str, message: impl ToString) -> IniError {
    IniError::Fetch {
        url: url.to_string(),
        message: message.to_string(),
    }
}

/// Fetch content from a URL
pub fn fetch_url(url_str: &str) -> Result<String> {
    let url = Url::parse(url_str).map_err(|e| fetch_error(url_str, e))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(fetch_error(url_str, "only HTTP/HTTPS URLs are supported"));
    }

    let response = ureq::get(url.as_str())
        .timeout(Duration::from_secs(30))
        .call()
        .map_err(|e| fetch_error(url_str, e))?;

    if response.status() < 200 || response.status() >= 300 {
        return Err(fetch_error(
            url_str,
            format!("HTTP request failed with status: {}", response.status()),
        ));
    }

    response.into_string().map_err(|e| fetch_error(url_str, e))
}

/// Check if a string is a valid URL
pub fn is_url(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        url.scheme() == "http" || url.scheme() == "https"
    } else {
        false
    }
}
