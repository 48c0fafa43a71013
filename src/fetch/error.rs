use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    // Covers empty bodies too, serde_json reports those as EOF at line 1 column 0
    #[error("Unable to parse JSON data (line {line}, column {column})")]
    JsonParse {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid or missing data in API response")]
    InvalidData {
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub(crate) fn json_parse(source: serde_json::Error) -> Self {
        FetchError::JsonParse {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
