use crate::fetch::error::FetchError;
use crate::fetch::transport::Payload;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a buffered body into a JSON tree.
///
/// Syntax errors, including an empty body, become [`FetchError::JsonParse`] with the
/// line and column reported by the parser.
pub fn parse_document(payload: &Payload) -> Result<Value, FetchError> {
    serde_json::from_slice::<Value>(payload.as_bytes()).map_err(FetchError::json_parse)
}

/// Deserializes a parsed document into the typed report `T`.
///
/// Fails as a whole when any required key is absent or has the wrong type.
pub fn extract<T: DeserializeOwned>(document: Value) -> Result<T, FetchError> {
    serde_json::from_value(document).map_err(|e| {
        debug!("Document does not match the expected shape: {}", e);
        FetchError::InvalidData { source: e }
    })
}

/// Parses and extracts in one step.
pub fn parse_report<T: DeserializeOwned>(payload: &Payload) -> Result<T, FetchError> {
    extract(parse_document(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        main: Value,
    }

    #[test]
    fn test_empty_body_is_parse_error() {
        let err = parse_document(&Payload::new(Vec::new())).unwrap_err();
        match err {
            FetchError::JsonParse { line, .. } => assert_eq!(line, 1),
            other => panic!("Expected JsonParse, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_reports_position() {
        let err = parse_document(&Payload::from("{\n  \"name\": \"x\",\n  oops\n}")).unwrap_err();
        match err {
            FetchError::JsonParse { line, column, .. } => {
                assert_eq!(line, 3);
                assert!(column > 0);
            }
            other => panic!("Expected JsonParse, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_key_is_invalid_data() {
        let err = parse_report::<Probe>(&Payload::from(r#"{"name": "London"}"#)).unwrap_err();
        assert!(matches!(err, FetchError::InvalidData { .. }));
        assert!(err.to_string().contains("Invalid or missing data"));
    }

    #[test]
    fn test_well_formed_document_extracts() {
        let probe = parse_report::<Probe>(&Payload::from(r#"{"main": {"temp": 280.0}}"#));
        assert!(probe.is_ok());
    }
}
