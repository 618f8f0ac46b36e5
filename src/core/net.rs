// src/core/net.rs
// Single HTTPS GET with browser-like headers. No retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, COOKIE, HeaderMap, HeaderValue, REFERER, USER_AGENT};

use crate::config::options::RequestOptions;
use crate::error::{Error, Result};

/// Headers sent with every page request: a desktop browser User-Agent,
/// Accept-Language, Referer and the consent cookie that skips the
/// cookie wall.
pub fn request_headers(request: &RequestOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&request.user_agent)?);
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&request.accept_language)?);
    headers.insert(REFERER, HeaderValue::from_str(&request.referer)?);
    headers.insert(COOKIE, HeaderValue::from_str(&request.cookie)?);
    Ok(headers)
}

/// GET `url` and return the raw body.
///
/// Only 404 is turned into an error (`Error::NotFound`). Any other status
/// hands its body to the caller as-is; a consent or bot wall then shows up
/// later as a missing page structure. Transport failures propagate.
pub fn fetch_page(url: &str, request: &RequestOptions) -> Result<Vec<u8>> {
    let mut builder = Client::builder()
        .default_headers(request_headers(request)?)
        .timeout(Duration::from_secs(request.timeout_secs));
    if !request.system_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    logf!("GET {url}");
    let response = client.get(url).send()?;
    let status = response.status();
    logd!("{url} -> {status}");

    if status == StatusCode::NOT_FOUND {
        loge!("404 for {url}");
        return Err(Error::NotFound { url: s!(url) });
    }

    // Reading the body to the end releases the connection
    let body = response.bytes()?.to_vec();
    logf!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_carry_browser_identity() {
        let headers = request_headers(&RequestOptions::default()).unwrap();
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("Mozilla/5.0"));
        assert_eq!(headers[ACCEPT_LANGUAGE], "en-US,en;q=0.9");
        assert_eq!(headers[REFERER], "https://www.transfermarkt.com/");
        assert_eq!(headers[COOKIE], "consentCookie=true");
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let request = RequestOptions { referer: s!("bad\nvalue"), ..RequestOptions::default() };
        assert!(matches!(request_headers(&request), Err(Error::InvalidHeader(_))));
    }
}
