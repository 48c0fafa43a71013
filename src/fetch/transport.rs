use crate::fetch::error::FetchError;
use log::{info, warn};
use reqwest::blocking::Client;

/// The complete response body of a single request.
///
/// Bodies are buffered whole; nothing downstream works on partial data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The body as text, with invalid UTF-8 replaced. Used for the flat-file log.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

/// Turns a URL into a [`Payload`].
///
/// [`HttpTransport`] is the production implementation. Tests substitute canned bodies.
pub trait Transport {
    /// Performs a GET request for `url` and returns the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NetworkRequest`] when the request could not be completed and
    /// [`FetchError::HttpStatus`] when the server answered with a non-success status.
    fn get(&self, url: &str) -> Result<Payload, FetchError>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Payload, FetchError> {
        info!("Requesting {}", redact_url(url));

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::NetworkRequest(redact_url(url), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", redact_url(url), e.status());
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: redact_url(url),
                        status,
                        source: e.without_url(),
                    }
                } else {
                    FetchError::NetworkRequest(redact_url(url), e.without_url())
                });
            }
        };

        let bytes = response
            .bytes()
            .map_err(|e| FetchError::NetworkRequest(redact_url(url), e.without_url()))?;
        info!("Received {} bytes", bytes.len());
        Ok(Payload::new(bytes.to_vec()))
    }
}

const SECRET_PARAMS: [&str; 2] = ["appid", "apiKey"];

/// Masks API keys in a URL so it can be logged or shown in an error message.
pub(crate) fn redact_url(url: &str) -> String {
    let Ok(mut parsed) = reqwest::Url::parse(url) else {
        return url.to_string();
    };
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let value = if SECRET_PARAMS.iter().any(|secret| k == *secret) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();
    if pairs.is_empty() {
        return parsed.to_string();
    }
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_url_masks_keys() {
        let url = "http://api.openweathermap.org/data/2.5/weather?q=london&appid=secret";
        let redacted = redact_url(url);
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("q=london"));
        assert!(redacted.contains("appid=***") || redacted.contains("appid=%2A%2A%2A"));
    }

    #[test]
    fn test_redact_url_leaves_unparseable_input() {
        assert_eq!(redact_url("not a url"), "not a url");
    }

    #[test]
    fn test_payload_text_is_lossy() {
        let payload = Payload::new(vec![b'o', b'k', 0xff]);
        assert_eq!(payload.len(), 3);
        assert!(payload.text().starts_with("ok"));
    }
}
