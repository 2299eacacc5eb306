//! The digital specimen record
//!
//! [`DigitalSpecimen`] is the typed record the engine mutates. Scalar
//! metadata lives at the root; structural content hangs off the plural
//! `ods:has…s` collections and the singular `ods:has…` objects.

use crate::classes::{
    Agent, Assertion, ChronometricAge, Citation, EntityRelationship, Event, Identification,
    Identifier, RelatedPid, SpecimenPart,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the physical specimen identifier resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalSpecimenIdType {
    #[serde(rename = "Resolvable")]
    Resolvable,
    #[serde(rename = "Global")]
    Global,
    #[serde(rename = "Local")]
    Local,
}

/// Discipline the specimen belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicDiscipline {
    #[serde(rename = "Anthropology")]
    Anthropology,
    #[serde(rename = "Botany")]
    Botany,
    #[serde(rename = "Geology")]
    Geology,
    #[serde(rename = "Microbiology")]
    Microbiology,
    #[serde(rename = "Palaeontology")]
    Palaeontology,
    #[serde(rename = "Zoology")]
    Zoology,
    #[serde(rename = "Other")]
    Other,
}

/// Whether the specimen is living or preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LivingOrPreserved {
    #[serde(rename = "Living")]
    Living,
    #[serde(rename = "Preserved")]
    Preserved,
}

/// A digital specimen record
///
/// The engine never mutates this struct directly; it is encoded to an owned
/// JSON tree, patched there, gated against the schema, and decoded back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigitalSpecimen {
    /// Persistent identifier (DOI)
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Record type, always `ods:DigitalSpecimen`
    #[serde(rename = "@type")]
    pub record_type: String,

    /// Identity of the record; annotations must declare the same value
    #[serde(rename = "dcterms:identifier")]
    pub identifier: String,

    /// Version counter, bumped by the persistence layer
    #[serde(rename = "ods:version", skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// FDO type PID
    #[serde(rename = "ods:fdoType", skip_serializing_if = "Option::is_none")]
    pub fdo_type: Option<String>,

    /// Minimum-information-about-digital-specimen level
    #[serde(rename = "ods:midsLevel", skip_serializing_if = "Option::is_none")]
    pub mids_level: Option<u32>,

    /// Creation timestamp of this record version
    #[serde(rename = "dcterms:created", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last-modified marker carried over from the source system
    #[serde(rename = "dcterms:modified", skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    #[serde(rename = "ods:organisationID", skip_serializing_if = "Option::is_none")]
    pub organisation_id: Option<String>,

    #[serde(rename = "ods:organisationName", skip_serializing_if = "Option::is_none")]
    pub organisation_name: Option<String>,

    #[serde(
        rename = "ods:physicalSpecimenIDType",
        skip_serializing_if = "Option::is_none"
    )]
    pub physical_specimen_id_type: Option<PhysicalSpecimenIdType>,

    #[serde(rename = "ods:physicalSpecimenID", skip_serializing_if = "Option::is_none")]
    pub physical_specimen_id: Option<String>,

    #[serde(
        rename = "ods:normalisedPhysicalSpecimenID",
        skip_serializing_if = "Option::is_none"
    )]
    pub normalised_physical_specimen_id: Option<String>,

    #[serde(rename = "ods:topicDiscipline", skip_serializing_if = "Option::is_none")]
    pub topic_discipline: Option<TopicDiscipline>,

    #[serde(rename = "ods:livingOrPreserved", skip_serializing_if = "Option::is_none")]
    pub living_or_preserved: Option<LivingOrPreserved>,

    #[serde(rename = "ods:sourceSystemID", skip_serializing_if = "Option::is_none")]
    pub source_system_id: Option<String>,

    #[serde(rename = "ods:sourceSystemName", skip_serializing_if = "Option::is_none")]
    pub source_system_name: Option<String>,

    #[serde(
        rename = "ods:isKnownToContainMedia",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_known_to_contain_media: Option<bool>,

    /// Catalog numbers the specimen is known under elsewhere.
    /// Term annotations on this field carry a JSON string array.
    #[serde(
        rename = "dwc:otherCatalogNumbers",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub other_catalog_numbers: Vec<String>,

    #[serde(rename = "ods:hasAgents", default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<Agent>,

    #[serde(
        rename = "ods:hasAssertions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub assertions: Vec<Assertion>,

    #[serde(
        rename = "ods:hasChronometricAges",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub chronometric_ages: Vec<ChronometricAge>,

    #[serde(
        rename = "ods:hasCitations",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub citations: Vec<Citation>,

    #[serde(
        rename = "ods:hasEntityRelationships",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub entity_relationships: Vec<EntityRelationship>,

    #[serde(rename = "ods:hasEvents", default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,

    #[serde(
        rename = "ods:hasIdentifications",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub identifications: Vec<Identification>,

    #[serde(
        rename = "ods:hasIdentifiers",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub identifiers: Vec<Identifier>,

    #[serde(
        rename = "ods:hasRelatedPIDs",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_pids: Vec<RelatedPid>,

    #[serde(
        rename = "ods:hasSpecimenParts",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub specimen_parts: Vec<SpecimenPart>,

    /// Tombstone block, present only on tombstoned records.
    /// Never a legal annotation target.
    #[serde(
        rename = "ods:hasTombstoneMetadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub tombstone_metadata: Option<serde_json::Value>,
}
