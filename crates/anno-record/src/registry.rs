//! Static registries: class shapes, forbidden targets, array terms
//!
//! All tables are immutable after first use. The class registry maps a
//! structural key to the shape its values must decode into; the forbidden
//! sets protect system metadata from mutation.

use crate::annotation::SelectorKind;
use crate::classes::{
    Agent, Assertion, ChronometricAge, Citation, EntityRelationship, Event, GeologicalContext,
    Georeference, Identification, Identifier, Location, RelatedPid, Role, SpecimenPart,
    TaxonIdentification,
};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Expected decoded shape of values stored under a structural key
///
/// A closed enum rather than a key-to-native-class map: every registered
/// shape is known at compile time and dispatch is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassShape {
    Agent,
    Assertion,
    ChronometricAge,
    Citation,
    EntityRelationship,
    Event,
    GeologicalContext,
    Georeference,
    Identification,
    Identifier,
    Location,
    RelatedPid,
    Role,
    SpecimenPart,
    TaxonIdentification,
}

impl ClassShape {
    /// Decode a raw annotation value through this shape
    ///
    /// Decoding is strict: unknown keys fail. The typed value is flattened
    /// back into an untyped JSON value for insertion into the document tree,
    /// which also normalizes it (absent optional fields are dropped).
    ///
    /// # Errors
    /// Returns the underlying serde error if the value does not conform.
    pub fn decode(self, raw: &str) -> Result<Value, serde_json::Error> {
        match self {
            Self::Agent => to_untyped::<Agent>(raw),
            Self::Assertion => to_untyped::<Assertion>(raw),
            Self::ChronometricAge => to_untyped::<ChronometricAge>(raw),
            Self::Citation => to_untyped::<Citation>(raw),
            Self::EntityRelationship => to_untyped::<EntityRelationship>(raw),
            Self::Event => to_untyped::<Event>(raw),
            Self::GeologicalContext => to_untyped::<GeologicalContext>(raw),
            Self::Georeference => to_untyped::<Georeference>(raw),
            Self::Identification => to_untyped::<Identification>(raw),
            Self::Identifier => to_untyped::<Identifier>(raw),
            Self::Location => to_untyped::<Location>(raw),
            Self::RelatedPid => to_untyped::<RelatedPid>(raw),
            Self::Role => to_untyped::<Role>(raw),
            Self::SpecimenPart => to_untyped::<SpecimenPart>(raw),
            Self::TaxonIdentification => to_untyped::<TaxonIdentification>(raw),
        }
    }
}

fn to_untyped<T: DeserializeOwned + Serialize>(raw: &str) -> Result<Value, serde_json::Error> {
    let typed: T = serde_json::from_str(raw)?;
    serde_json::to_value(typed)
}

static CLASS_REGISTRY: Lazy<HashMap<&'static str, ClassShape>> = Lazy::new(|| {
    HashMap::from([
        ("ods:hasAgents", ClassShape::Agent),
        ("ods:hasAssertions", ClassShape::Assertion),
        ("ods:hasChronometricAges", ClassShape::ChronometricAge),
        ("ods:hasCitations", ClassShape::Citation),
        ("ods:hasEntityRelationships", ClassShape::EntityRelationship),
        ("ods:hasEvents", ClassShape::Event),
        ("ods:hasGeologicalContext", ClassShape::GeologicalContext),
        ("ods:hasGeoreference", ClassShape::Georeference),
        ("ods:hasIdentifications", ClassShape::Identification),
        ("ods:hasIdentifiers", ClassShape::Identifier),
        ("ods:hasLocation", ClassShape::Location),
        ("ods:hasRelatedPIDs", ClassShape::RelatedPid),
        ("ods:hasRoles", ClassShape::Role),
        ("ods:hasSpecimenParts", ClassShape::SpecimenPart),
        ("ods:hasTaxonIdentifications", ClassShape::TaxonIdentification),
    ])
});

/// Term fields that may never be the last segment of a mutation path
static FORBIDDEN_FIELDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "ods:version",
        "dcterms:created",
        "dcterms:modified",
        "ods:midsLevel",
        "dcterms:identifier",
        "ods:fdoType",
        "ods:normalisedPhysicalSpecimenID",
        "ods:physicalSpecimenID",
        "ods:isKnownToContainMedia",
    ])
});

/// Class keys that may never be the last segment of a mutation path
static FORBIDDEN_CLASSES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ods:hasTombstoneMetadata"]));

/// Term fields whose values are JSON arrays of strings
static ARRAY_TERMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["dwc:otherCatalogNumbers"]));

/// Look up the registered shape for a structural key
#[inline]
#[must_use]
pub fn class_shape(key: &str) -> Option<ClassShape> {
    CLASS_REGISTRY.get(key).copied()
}

/// Check whether a key is a legal annotation target for the selector kind
#[inline]
#[must_use]
pub fn is_forbidden(kind: SelectorKind, key: &str) -> bool {
    match kind {
        SelectorKind::Term => FORBIDDEN_FIELDS.contains(key),
        SelectorKind::Class => FORBIDDEN_CLASSES.contains(key),
    }
}

/// Check whether a term field holds a primitive string array
#[inline]
#[must_use]
pub fn is_array_term(key: &str) -> bool {
    ARRAY_TERMS.contains(key)
}

/// Check whether a key denotes a collection when materializing structure
///
/// Collections are the pluralized relational keys: local name starts with
/// `has` and ends in `s` (`ods:hasEvents` yes, `ods:hasLocation` no).
#[must_use]
pub fn is_collection_key(key: &str) -> bool {
    let local = key.rsplit(':').next().unwrap_or(key);
    local.starts_with("has") && local.ends_with('s')
}
