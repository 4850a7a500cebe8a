//! Client-side settings. Loaded from JSON by the host; the core itself never
//! reads the environment.

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::client::DEFAULT_COLLECTION_PATH;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,
    pub collection_path: String,
    /// `None` keeps every message for the life of the process.
    pub message_capacity: Option<NonZeroUsize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            message_capacity: None,
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = ClientConfig::from_json(
            r#"{"base_url":"http://heroes.test","message_capacity":50}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://heroes.test");
        assert_eq!(config.collection_path, "api/heroes");
        assert_eq!(config.message_capacity.map(NonZeroUsize::get), Some(50));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = ClientConfig::from_json(r#"{"message_capacity":0}"#).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ClientConfig::from_json(r#"{"timeout":5}"#).is_err());
    }
}
