//! Codec between typed records and untyped JSON trees
//!
//! The engine works on an owned [`serde_json::Value`] tree; the codec is the
//! only place typed records cross that boundary.

use crate::media::DigitalMedia;
use crate::specimen::DigitalSpecimen;
use serde_json::Value;

/// Errors while crossing the typed/untyped boundary
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Typed record could not be serialized to a JSON tree
    #[error("unable to encode record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// JSON tree could not be decoded back into a typed record
    #[error("unable to decode record: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

/// Encode a specimen record into an owned JSON tree
///
/// # Errors
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_specimen(specimen: &DigitalSpecimen) -> Result<Value, CodecError> {
    serde_json::to_value(specimen).map_err(|source| CodecError::Encode { source })
}

/// Decode a JSON tree back into a specimen record
///
/// # Errors
/// Returns [`CodecError::Decode`] if the tree does not conform to the
/// specimen shape.
pub fn decode_specimen(value: Value) -> Result<DigitalSpecimen, CodecError> {
    serde_json::from_value(value).map_err(|source| CodecError::Decode { source })
}

/// Encode a media record into an owned JSON tree
///
/// # Errors
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_media(media: &DigitalMedia) -> Result<Value, CodecError> {
    serde_json::to_value(media).map_err(|source| CodecError::Encode { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn given_specimen() -> DigitalSpecimen {
        DigitalSpecimen {
            record_type: "ods:DigitalSpecimen".to_string(),
            identifier: "https://doi.org/10.3535/AAA-BBB-CCC".to_string(),
            version: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let specimen = given_specimen();
        let tree = encode_specimen(&specimen).unwrap();
        let decoded = decode_specimen(tree).unwrap();
        assert_eq!(decoded, specimen);
    }

    #[test]
    fn encoded_tree_exposes_identity() {
        let tree = encode_specimen(&given_specimen()).unwrap();
        assert_eq!(
            tree["dcterms:identifier"],
            "https://doi.org/10.3535/AAA-BBB-CCC"
        );
    }

    #[test]
    fn decode_rejects_malformed_tree() {
        let tree = serde_json::json!({ "dcterms:identifier": 42 });
        let result = decode_specimen(tree);
        assert!(matches!(result, Err(CodecError::Decode { .. })));
    }
}
