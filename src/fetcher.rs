use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::parsers::{self, charset};
use crate::results::PageContent;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

/// Fetches a single page and extracts its title and text
pub struct PageFetcher {
    client: reqwest::Client,
    headers: HeaderMap,
}

impl PageFetcher {
    /// Create a new fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            headers: build_headers(config)?,
        })
    }

    /// GET `url` and parse the response as HTML
    ///
    /// Error statuses are not treated as failures; whatever body the server
    /// returns is parsed. A response labelled with a non-HTML content type
    /// is rejected.
    pub async fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        ::log::info!("Fetching {}", parsed);
        let response = self
            .client
            .get(parsed)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} returned HTTP {}, parsing body anyway", url, status);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if let Some(content_type) = &content_type {
            if !charset::is_html_content_type(content_type) {
                return Err(FetchError::NotHtml {
                    url: url.to_string(),
                    content_type: content_type.clone(),
                });
            }
        }

        let bytes = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        ::log::debug!("Received {} bytes from {}", bytes.len(), url);

        let body = charset::decode_body(&bytes, content_type.as_deref());
        parsers::parse_page(url, &body)
    }
}

fn build_headers(config: &FetchConfig) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::with_capacity(config.headers.len());
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_default_headers() {
        let headers = build_headers(&FetchConfig::default()).unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["content-type"], "application/json");
    }

    #[test]
    fn test_invalid_header_name() {
        let config = FetchConfig {
            headers: BTreeMap::from([("bad header".to_string(), "x".to_string())]),
        };
        assert!(matches!(
            build_headers(&config),
            Err(FetchError::InvalidHeader(name)) if name == "bad header"
        ));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let fetcher = PageFetcher::new(&FetchConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
