//! Annotation Record System
//!
//! Typed digital specimen and annotation records, plus the static registries
//! the patch engine consults.
//!
//! # Core Concepts
//!
//! - [`DigitalSpecimen`]: the record under annotation
//! - [`Annotation`]: an immutable proposed change (motivation + target + body)
//! - [`Selector`]: where in the record the change applies (term or class)
//! - [`ClassShape`]: expected decoded shape of structured annotation values
//! - [`codec`]: the typed/untyped JSON boundary
//!
//! Records serialize with their wire names (`dcterms:identifier`,
//! `ods:hasEvents`, …); structural classes decode strictly so annotation
//! values are shape-checked before insertion.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod annotation;
mod classes;
mod media;
mod registry;
mod specimen;

pub mod codec;

pub use annotation::{
    Annotation, AnnotationBody, AnnotationStatus, AnnotationTarget, Motivation, Selector,
    SelectorKind,
};
pub use classes::{
    Agent, AgentType, Assertion, ChronometricAge, Citation, EntityRelationship, Event,
    GeologicalContext, Georeference, Identification, Identifier, Location, RelatedPid, Role,
    SpecimenPart, TaxonIdentification,
};
pub use codec::CodecError;
pub use media::DigitalMedia;
pub use registry::{class_shape, is_array_term, is_collection_key, is_forbidden, ClassShape};
pub use specimen::{DigitalSpecimen, LivingOrPreserved, PhysicalSpecimenIdType, TopicDiscipline};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
