//! Annotation records: motivation, target, selector, and body
//!
//! An [`Annotation`] is an immutable proposed change to a digital specimen
//! record. Its [`Motivation`] decides the add/edit/delete semantics, its
//! [`Selector`] names where in the record the change applies, and its
//! [`AnnotationBody`] carries the raw value strings.

use crate::classes::Agent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The kind of edit an annotation requests
///
/// Only `Editing`, `Adding`, and `Deleting` drive mutations; the commentary
/// motivations are recognized on the wire but rejected by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motivation {
    /// Free-text quality assessment, not a mutation
    #[serde(rename = "oa:assessing")]
    Assessing,

    /// Free-text remark, not a mutation
    #[serde(rename = "oa:commenting")]
    Commenting,

    /// Replace the value at an existing path
    #[serde(rename = "oa:editing")]
    Editing,

    /// Insert a value at a not-yet-existing path
    #[serde(rename = "ods:adding")]
    Adding,

    /// Remove the value at an existing path
    #[serde(rename = "ods:deleting")]
    Deleting,
}

impl Motivation {
    /// Wire name of the motivation
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assessing => "oa:assessing",
            Self::Commenting => "oa:commenting",
            Self::Editing => "oa:editing",
            Self::Adding => "ods:adding",
            Self::Deleting => "ods:deleting",
        }
    }

    /// Check if this motivation mutates the target record
    #[inline]
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Editing | Self::Adding | Self::Deleting)
    }
}

impl Display for Motivation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the record an annotation applies
///
/// Discriminated on the wire by `@type`. Term selectors address scalar or
/// primitive-array fields, class selectors address structured sub-objects;
/// fragment selectors (regions of interest in media) are recognized but not
/// supported for mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Selector {
    /// Path to a scalar or whitelisted primitive-array field
    #[serde(rename = "ods:TermSelector")]
    Term {
        /// Bracket-notation path into the record
        #[serde(rename = "ods:term")]
        term: String,
    },

    /// Path to a structured object or array-of-objects
    #[serde(rename = "ods:ClassSelector")]
    Class {
        /// Bracket-notation path into the record
        #[serde(rename = "ods:class")]
        class: String,
    },

    /// Region of interest within a media file
    #[serde(rename = "oa:FragmentSelector")]
    Fragment {
        /// Standard the fragment value conforms to
        #[serde(rename = "dcterms:conformsTo", skip_serializing_if = "Option::is_none")]
        conforms_to: Option<String>,

        /// Region-of-interest payload
        #[serde(rename = "ac:hasROI", skip_serializing_if = "Option::is_none")]
        region: Option<serde_json::Value>,
    },
}

impl Selector {
    /// Wire name of the selector type
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Term { .. } => "ods:TermSelector",
            Self::Class { .. } => "ods:ClassSelector",
            Self::Fragment { .. } => "oa:FragmentSelector",
        }
    }
}

/// Selector kind after resolution, used for forbidden-set dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// Scalar or primitive-array field
    Term,
    /// Structured object or array-of-objects
    Class,
}

impl Display for SelectorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term => f.write_str("term"),
            Self::Class => f.write_str("class"),
        }
    }
}

/// The record an annotation targets, and where inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTarget {
    /// Persistent identifier of the target record
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Record type, e.g. `ods:DigitalSpecimen`
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// FDO type of the target record
    #[serde(rename = "ods:fdoType", skip_serializing_if = "Option::is_none")]
    pub fdo_type: Option<String>,

    /// Declared identifier; must match the target document's own identifier
    #[serde(rename = "dcterms:identifier")]
    pub identifier: String,

    /// Location of the change inside the record
    #[serde(rename = "oa:hasSelector")]
    pub selector: Selector,
}

/// The value payload of an annotation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationBody {
    /// Body type, e.g. `oa:TextualBody`
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    /// Raw value strings; empty for deletions, exactly one for add/edit
    #[serde(rename = "oa:value", default)]
    pub values: Vec<String>,

    /// Supporting reference for the proposed value
    #[serde(rename = "dcterms:references", skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,

    /// Confidence score of the proposing agent
    #[serde(rename = "ods:score", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Lifecycle status of an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationStatus {
    /// Annotation is live
    #[serde(rename = "ods:Active")]
    Active,
    /// Annotation has been tombstoned
    #[serde(rename = "ods:Tombstone")]
    Tombstone,
}

/// An immutable proposed change to a digital specimen record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Persistent identifier of the annotation itself
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Record type, always `ods:Annotation`
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Identifier duplicate in dcterms namespace
    #[serde(rename = "dcterms:identifier", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// FDO type of the annotation record
    #[serde(rename = "ods:fdoType", skip_serializing_if = "Option::is_none")]
    pub fdo_type: Option<String>,

    /// Version counter
    #[serde(rename = "ods:version", skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Lifecycle status
    #[serde(rename = "ods:status", skip_serializing_if = "Option::is_none")]
    pub status: Option<AnnotationStatus>,

    /// The kind of edit requested
    #[serde(rename = "oa:motivation")]
    pub motivation: Motivation,

    /// Value payload
    #[serde(rename = "oa:hasBody")]
    pub body: AnnotationBody,

    /// Target record and selector
    #[serde(rename = "oa:hasTarget")]
    pub target: AnnotationTarget,

    /// Agent that proposed the change
    #[serde(rename = "dcterms:creator", skip_serializing_if = "Option::is_none")]
    pub creator: Option<Agent>,

    /// Creation timestamp
    #[serde(rename = "dcterms:created", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Issue timestamp
    #[serde(rename = "dcterms:issued", skip_serializing_if = "Option::is_none")]
    pub issued: Option<DateTime<Utc>>,

    /// Last-modified timestamp
    #[serde(rename = "dcterms:modified", skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Software agent that generated the annotation record
    #[serde(rename = "as:generator", skip_serializing_if = "Option::is_none")]
    pub generator: Option<Agent>,
}
