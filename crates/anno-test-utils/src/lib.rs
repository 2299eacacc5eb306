//! Testing utilities for the annotation logic workspace
//!
//! Shared fixtures: a canonical digital specimen, annotation builders per
//! motivation and selector kind, and the specimen schema used by gate tests.

#![allow(missing_docs)]

use anno_record::{
    Agent, AgentType, Annotation, AnnotationBody, AnnotationStatus, AnnotationTarget,
    DigitalSpecimen, EntityRelationship, Event, Identification, LivingOrPreserved, Location,
    Motivation, PhysicalSpecimenIdType, Role, Selector, TaxonIdentification, TopicDiscipline,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

pub const DOI_PROXY: &str = "https://doi.org/";
pub const HANDLE_PROXY: &str = "https://hdl.handle.net/";
pub const SPECIMEN_ID: &str = "https://doi.org/10.3535/AAA-BBB-CCC";
pub const MEDIA_ID: &str = "https://doi.org/10.3535/QRS-TUV-WYX";
pub const HANDLE_ID: &str = "https://hdl.handle.net/20.5000.1025/111-222-333";
pub const FDO_TYPE: &str = "https://doi.org/21.T11148/cf458ca9ee1d44a5608f";
pub const NEW_VALUE: &str = "Some new value!";

pub fn created() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2022-11-01T09:59:24Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn given_digital_specimen() -> DigitalSpecimen {
    DigitalSpecimen {
        id: Some(SPECIMEN_ID.to_string()),
        record_type: "ods:DigitalSpecimen".to_string(),
        identifier: SPECIMEN_ID.to_string(),
        version: Some(1),
        fdo_type: Some(FDO_TYPE.to_string()),
        mids_level: Some(1),
        created: Some(created()),
        modified: Some("2022-11-01T09:59:24.000Z".to_string()),
        organisation_id: Some("https://ror.org/039zvsn29".to_string()),
        organisation_name: Some("National Museum of Natural History".to_string()),
        physical_specimen_id_type: Some(PhysicalSpecimenIdType::Resolvable),
        physical_specimen_id: Some(
            "https://data.biodiversitydata.nl/naturalis/specimen/ZMA.INS.1003070".to_string(),
        ),
        normalised_physical_specimen_id: Some(
            "https://data.biodiversitydata.nl/naturalis/specimen/ZMA.INS.1003070".to_string(),
        ),
        topic_discipline: Some(TopicDiscipline::Botany),
        living_or_preserved: Some(LivingOrPreserved::Preserved),
        source_system_id: Some(HANDLE_ID.to_string()),
        source_system_name: Some("A Source System".to_string()),
        identifications: vec![given_identification()],
        entity_relationships: vec![EntityRelationship {
            relationship_type: Some("ods:EntityRelationship".to_string()),
            relationship_of_resource: Some("hasMedia".to_string()),
            established_date: Some(created()),
            related_resource_id: Some(MEDIA_ID.to_string()),
            related_resource_uri: Some(MEDIA_ID.to_string()),
            agents: vec![Agent {
                id: Some(MEDIA_ID.to_string()),
                agent_type: Some(AgentType::SoftwareAgent),
                name: Some("Processing service".to_string()),
                schema_identifier: Some(HANDLE_ID.to_string()),
                roles: vec![Role {
                    role_type: Some("schema:Role".to_string()),
                    role_name: Some("ods:sourceSystem".to_string()),
                }],
            }],
        }],
        events: vec![given_event()],
        ..Default::default()
    }
}

pub fn given_event() -> Event {
    Event {
        event_date: Some("2022-11-01T09:59:24.000Z".to_string()),
        location: Some(Box::new(Location {
            country: Some("England".to_string()),
            ..Default::default()
        })),
        ..Default::default()
    }
}

pub fn given_identification() -> Identification {
    Identification {
        identification_type: Some("holotype".to_string()),
        taxon_identifications: vec![TaxonIdentification {
            scientific_name: Some("Bombus bombus".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub fn given_agent(agent_type: AgentType) -> Agent {
    Agent {
        id: Some(HANDLE_ID.to_string()),
        agent_type: Some(agent_type),
        name: Some("Some agent".to_string()),
        ..Default::default()
    }
}

/// Default annotation: a term edit of the event location's country
pub fn given_annotation() -> Annotation {
    given_annotation_for(Motivation::Editing, true)
}

/// Annotation fixture per motivation and selector kind, matching the
/// canonical specimen
pub fn given_annotation_for(motivation: Motivation, is_term: bool) -> Annotation {
    let target = if is_term {
        given_term_target(if motivation == Motivation::Adding {
            "$['ods:hasEvents'][0]['ods:hasLocation']['dwc:locality']"
        } else {
            "$['ods:hasEvents'][0]['ods:hasLocation']['dwc:country']"
        })
    } else {
        given_class_target(if motivation == Motivation::Adding {
            "$['ods:hasIdentifications'][0]['ods:hasTaxonIdentifications'][1]"
        } else {
            "$['ods:hasIdentifications'][0]['ods:hasTaxonIdentifications'][0]"
        })
    };
    let body = if motivation == Motivation::Deleting {
        AnnotationBody {
            body_type: Some("oa:TextualBody".to_string()),
            values: Vec::new(),
            references: None,
            score: None,
        }
    } else if is_term {
        given_term_body()
    } else {
        given_class_body()
    };

    Annotation {
        id: Some(HANDLE_ID.to_string()),
        record_type: Some("ods:Annotation".to_string()),
        identifier: Some(HANDLE_ID.to_string()),
        fdo_type: Some(FDO_TYPE.to_string()),
        version: Some(1),
        status: Some(AnnotationStatus::Active),
        motivation,
        body,
        target,
        creator: Some(given_agent(AgentType::Person)),
        created: Some(created()),
        issued: Some(created()),
        modified: Some(created()),
        generator: Some(given_agent(AgentType::SoftwareAgent)),
    }
}

pub fn given_term_body() -> AnnotationBody {
    AnnotationBody {
        body_type: Some("oa:TextualBody".to_string()),
        values: vec![NEW_VALUE.to_string()],
        references: Some(
            "https://medialib.naturalis.nl/file/id/ZMA.UROCH.P.1555/format/large".to_string(),
        ),
        score: Some(0.99),
    }
}

pub fn given_class_body() -> AnnotationBody {
    AnnotationBody {
        body_type: Some("oa:TextualBody".to_string()),
        values: vec![format!(
            "{{\n  \"dwc:genus\": \"{NEW_VALUE}\",\n  \"dwc:phylum\": \"{NEW_VALUE}\"\n}}"
        )],
        references: None,
        score: Some(0.99),
    }
}

pub fn given_term_target(path: &str) -> AnnotationTarget {
    AnnotationTarget {
        id: Some(SPECIMEN_ID.to_string()),
        record_type: Some("ods:DigitalSpecimen".to_string()),
        fdo_type: Some(FDO_TYPE.to_string()),
        identifier: SPECIMEN_ID.to_string(),
        selector: Selector::Term {
            term: path.to_string(),
        },
    }
}

pub fn given_class_target(path: &str) -> AnnotationTarget {
    AnnotationTarget {
        id: Some(SPECIMEN_ID.to_string()),
        record_type: Some("ods:DigitalSpecimen".to_string()),
        fdo_type: Some(FDO_TYPE.to_string()),
        identifier: SPECIMEN_ID.to_string(),
        selector: Selector::Class {
            class: path.to_string(),
        },
    }
}

/// Specimen schema for gate tests: required identity and events, typed
/// scalars, free-form elsewhere
pub fn given_specimen_schema() -> Value {
    json!({
        "type": "object",
        "required": ["@type", "dcterms:identifier", "ods:version", "ods:hasEvents"],
        "properties": {
            "@type": { "const": "ods:DigitalSpecimen" },
            "dcterms:identifier": { "type": "string" },
            "ods:version": { "type": "integer", "minimum": 1 },
            "ods:midsLevel": { "type": "integer" },
            "ods:organisationID": { "type": "string" },
            "ods:organisationName": { "type": "string" },
            "dwc:otherCatalogNumbers": {
                "type": "array",
                "items": { "type": "string" }
            },
            "ods:hasEvents": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "properties": {
                        "dwc:eventDate": { "type": "string" },
                        "ods:hasLocation": {
                            "type": "object",
                            "properties": {
                                "dwc:continent": { "type": "string" },
                                "dwc:country": { "type": "string" },
                                "dwc:countryCode": { "type": "string" },
                                "dwc:locality": { "type": "string" }
                            }
                        }
                    }
                }
            },
            "ods:hasIdentifications": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ods:hasTaxonIdentifications": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "dwc:scientificName": { "type": "string" },
                                    "dwc:genus": { "type": "string" },
                                    "dwc:phylum": { "type": "string" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
