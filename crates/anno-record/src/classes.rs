//! Structural classes nested inside a digital specimen record
//!
//! Each struct mirrors one entry of the class registry. Decoding is strict
//! (`deny_unknown_fields`): an annotation value only conforms to a class
//! shape if every key it carries is declared here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agent type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentType {
    #[serde(rename = "prov:Person")]
    Person,
    #[serde(rename = "prov:SoftwareAgent")]
    SoftwareAgent,
    #[serde(rename = "schema:Organization")]
    Organization,
}

/// A person, organisation, or software agent involved with the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Agent {
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<AgentType>,

    #[serde(rename = "schema:name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "schema:identifier", skip_serializing_if = "Option::is_none")]
    pub schema_identifier: Option<String>,

    #[serde(rename = "ods:hasRoles", default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
}

/// Role an agent fulfils, e.g. collector or identifier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Role {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,

    #[serde(rename = "schema:roleName", skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

/// Measurement or fact asserted about the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assertion {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub assertion_type: Option<String>,

    #[serde(rename = "dwc:measurementType", skip_serializing_if = "Option::is_none")]
    pub measurement_type: Option<String>,

    #[serde(rename = "dwc:measurementValue", skip_serializing_if = "Option::is_none")]
    pub measurement_value: Option<String>,

    #[serde(rename = "dwc:measurementUnit", skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<String>,
}

/// Chronometric age determination
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronometricAge {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub age_type: Option<String>,

    #[serde(
        rename = "chrono:chronometricAgeProtocol",
        skip_serializing_if = "Option::is_none"
    )]
    pub protocol: Option<String>,

    #[serde(
        rename = "chrono:chronometricAgeRemarks",
        skip_serializing_if = "Option::is_none"
    )]
    pub remarks: Option<String>,
}

/// Literature citation for the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Citation {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub citation_type: Option<String>,

    #[serde(rename = "dcterms:description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        rename = "dcterms:bibliographicCitation",
        skip_serializing_if = "Option::is_none"
    )]
    pub bibliographic_citation: Option<String>,
}

/// Relationship between this specimen and another resource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRelationship {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,

    #[serde(
        rename = "dwc:relationshipOfResource",
        skip_serializing_if = "Option::is_none"
    )]
    pub relationship_of_resource: Option<String>,

    #[serde(
        rename = "dwc:relationshipEstablishedDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub established_date: Option<DateTime<Utc>>,

    #[serde(rename = "dwc:relatedResourceID", skip_serializing_if = "Option::is_none")]
    pub related_resource_id: Option<String>,

    #[serde(rename = "ods:relatedResourceURI", skip_serializing_if = "Option::is_none")]
    pub related_resource_uri: Option<String>,

    #[serde(rename = "ods:hasAgents", default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<Agent>,
}

/// Collecting event
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(rename = "dwc:eventDate", skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,

    #[serde(rename = "dwc:fieldNumber", skip_serializing_if = "Option::is_none")]
    pub field_number: Option<String>,

    #[serde(rename = "ods:hasLocation", skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,
}

/// Geological context of a location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeologicalContext {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub context_type: Option<String>,

    #[serde(
        rename = "dwc:lithostratigraphicTerms",
        skip_serializing_if = "Option::is_none"
    )]
    pub lithostratigraphic_terms: Option<String>,

    #[serde(rename = "dwc:group", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Georeference of a location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Georeference {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub georeference_type: Option<String>,

    #[serde(rename = "dwc:decimalLatitude", skip_serializing_if = "Option::is_none")]
    pub decimal_latitude: Option<f64>,

    #[serde(rename = "dwc:decimalLongitude", skip_serializing_if = "Option::is_none")]
    pub decimal_longitude: Option<f64>,

    #[serde(rename = "dwc:geodeticDatum", skip_serializing_if = "Option::is_none")]
    pub geodetic_datum: Option<String>,
}

/// Taxonomic identification of the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identification {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub identification_type: Option<String>,

    #[serde(
        rename = "dwc:identificationVerificationStatus",
        skip_serializing_if = "Option::is_none"
    )]
    pub verification_status: Option<String>,

    #[serde(
        rename = "ods:hasTaxonIdentifications",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub taxon_identifications: Vec<TaxonIdentification>,
}

/// External identifier attached to the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identifier {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,

    #[serde(rename = "dcterms:title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "dcterms:identifier", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Collecting location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,

    #[serde(rename = "dwc:continent", skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,

    #[serde(rename = "dwc:country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "dwc:countryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(rename = "dwc:locality", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    #[serde(
        rename = "ods:hasGeologicalContext",
        skip_serializing_if = "Option::is_none"
    )]
    pub geological_context: Option<Box<GeologicalContext>>,

    #[serde(rename = "ods:hasGeoreference", skip_serializing_if = "Option::is_none")]
    pub georeference: Option<Box<Georeference>>,
}

/// PID of a resource related to the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedPid {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub pid_type: Option<String>,

    #[serde(rename = "dcterms:identifier", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(rename = "dcterms:relation", skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
}

/// Physical part of the specimen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecimenPart {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,

    #[serde(rename = "schema:name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "schema:description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Single taxon within an identification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonIdentification {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub taxon_type: Option<String>,

    #[serde(rename = "dwc:scientificName", skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,

    #[serde(rename = "dwc:kingdom", skip_serializing_if = "Option::is_none")]
    pub kingdom: Option<String>,

    #[serde(rename = "dwc:phylum", skip_serializing_if = "Option::is_none")]
    pub phylum: Option<String>,

    #[serde(rename = "dwc:genus", skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
}
