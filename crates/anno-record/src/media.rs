//! Digital media records
//!
//! Media annotation is not supported yet; the record type exists so the
//! engine can expose the extension point with a typed signature.

use serde::{Deserialize, Serialize};

/// A digital media record (image, sound, 3D scan) attached to a specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigitalMedia {
    /// Persistent identifier (DOI)
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Record type, always `ods:DigitalMedia`
    #[serde(rename = "@type")]
    pub record_type: String,

    /// Identity of the record
    #[serde(rename = "dcterms:identifier")]
    pub identifier: String,

    /// Where the media file can be fetched
    #[serde(rename = "ac:accessURI", skip_serializing_if = "Option::is_none")]
    pub access_uri: Option<String>,

    /// MIME type of the media file
    #[serde(rename = "dcterms:format", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}
