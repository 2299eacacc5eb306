//! The annotation engine
//!
//! One entry point per operation: [`AnnotationEngine::apply`] for a single
//! annotation, [`AnnotationEngine::apply_all`] for an ordered batch, and
//! [`AnnotationEngine::is_valid`] as the dry-run variant.
//!
//! Every invocation works on its own encoded copy of the record, so calls
//! are reentrant and may run fully in parallel. A call either returns a
//! fully valid mutated record or an error with no observable effects.

use crate::document::TargetDocument;
use crate::error::{AnnotationError, AnnotationResult};
use crate::precondition::{self, ResolvedTarget};
use crate::schema::SchemaGate;
use crate::{mutate, value};
use anno_record::codec;
use anno_record::{Annotation, DigitalMedia, DigitalSpecimen, Motivation};
use serde_json::Value;

/// Validates and applies annotations to digital specimen records
///
/// Holds only immutable configuration (the compiled schema gate); all
/// per-call state lives on the stack of the invocation.
#[derive(Debug)]
pub struct AnnotationEngine {
    gate: SchemaGate,
}

impl AnnotationEngine {
    /// Create an engine gated by the given specimen schema
    ///
    /// # Errors
    /// Returns [`AnnotationError::SchemaCompilation`] if the schema does not
    /// compile.
    pub fn new(schema: &Value) -> AnnotationResult<Self> {
        Ok(Self {
            gate: SchemaGate::new(schema)?,
        })
    }

    /// Apply a single annotation to a specimen record
    ///
    /// # Errors
    /// Any variant of [`AnnotationError`]; the input record is untouched on
    /// failure.
    pub fn apply(
        &self,
        specimen: &DigitalSpecimen,
        annotation: &Annotation,
    ) -> AnnotationResult<DigitalSpecimen> {
        let mut document = TargetDocument::new(codec::encode_specimen(specimen)?);
        self.apply_to_document(&mut document, annotation)?;
        self.gate.check(document.as_value())?;
        let annotated = codec::decode_specimen(document.into_value()).map_err(|error| {
            tracing::warn!(%error, "unable to parse annotated record");
            AnnotationError::from(error)
        })?;
        Ok(annotated)
    }

    /// Apply an ordered sequence of annotations, oldest first
    ///
    /// Each annotation's preconditions run against the result of the
    /// previous mutation; the schema gate runs once on the final document.
    /// The whole batch succeeds or fails atomically.
    ///
    /// # Errors
    /// The error of the first annotation that fails, or the gate's verdict
    /// on the final document.
    pub fn apply_all(
        &self,
        specimen: &DigitalSpecimen,
        annotations: &[Annotation],
    ) -> AnnotationResult<DigitalSpecimen> {
        let mut document = TargetDocument::new(codec::encode_specimen(specimen)?);
        for annotation in annotations {
            self.apply_to_document(&mut document, annotation)?;
        }
        self.gate.check(document.as_value())?;
        Ok(codec::decode_specimen(document.into_value())?)
    }

    /// Dry-run variant: check whether an annotation would apply cleanly
    ///
    /// Runs the full pipeline, converting every failure into `false`.
    #[must_use]
    pub fn is_valid(&self, specimen: &DigitalSpecimen, annotation: &Annotation) -> bool {
        self.apply(specimen, annotation).is_ok()
    }

    /// Apply a single annotation to a media record
    ///
    /// Media annotation is an open extension point.
    ///
    /// # Errors
    /// Always [`AnnotationError::UnsupportedTarget`].
    pub fn apply_media(
        &self,
        _media: &DigitalMedia,
        _annotation: &Annotation,
    ) -> AnnotationResult<DigitalMedia> {
        Err(AnnotationError::UnsupportedTarget { kind: "media" })
    }

    /// Batch variant of [`Self::apply_media`]
    ///
    /// # Errors
    /// Always [`AnnotationError::UnsupportedTarget`].
    pub fn apply_all_media(
        &self,
        _media: &DigitalMedia,
        _annotations: &[Annotation],
    ) -> AnnotationResult<DigitalMedia> {
        Err(AnnotationError::UnsupportedTarget { kind: "media" })
    }

    /// Dry-run variant for media records; never valid
    #[must_use]
    pub fn is_valid_media(&self, _media: &DigitalMedia, _annotation: &Annotation) -> bool {
        false
    }

    /// Validate and mutate the document for one annotation
    fn apply_to_document(
        &self,
        document: &mut TargetDocument,
        annotation: &Annotation,
    ) -> AnnotationResult<()> {
        let ResolvedTarget { kind, path } = precondition::run(document, annotation)?;
        let fragment = value::map_value(kind, &path, annotation)?;
        match (annotation.motivation, fragment) {
            (Motivation::Deleting, _) => mutate::delete(document, &path),
            (Motivation::Editing, Some(fragment)) => mutate::replace(document, &path, fragment),
            (Motivation::Adding, Some(fragment)) => mutate::insert(document, &path, fragment),
            (motivation, _) => Err(AnnotationError::InvalidMotivation { motivation }),
        }
    }
}
