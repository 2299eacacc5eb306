//! Error taxonomy of the annotation patch engine
//!
//! Every variant is a terminal validation outcome, not a transient fault:
//! an annotation that fails one of these checks will fail it again on retry.

use crate::path::PathError;
use crate::schema::SchemaViolation;
use anno_record::{CodecError, Motivation};

/// Why an annotation could not be applied
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    /// Selector path does not match the bracket grammar
    #[error("selector path is not in valid bracket notation: {0}")]
    MalformedPath(#[from] PathError),

    /// Annotation's declared target identifier differs from the document's
    #[error("annotation targets '{declared}' but the record is '{actual}'")]
    TargetMismatch { declared: String, actual: String },

    /// Editing/deleting requires the path to resolve in the document
    #[error("target path '{path}' must exist for {motivation} annotations")]
    PathMustExist { path: String, motivation: Motivation },

    /// Adding requires the path to be absent (or a legal append position)
    #[error("target path '{path}' must not exist for {motivation} annotations")]
    PathMustNotExist { path: String, motivation: Motivation },

    /// Last path segment names protected system metadata
    #[error("annotating '{key}' is forbidden")]
    ForbiddenTarget { key: String },

    /// Wrong number of body values for the motivation
    #[error("{motivation} annotations must have {expected} value(s), got {actual}")]
    InvalidValueCount {
        motivation: Motivation,
        expected: usize,
        actual: usize,
    },

    /// Class-selector last key has no registry entry
    #[error("unrecognized class: {class}")]
    UnrecognizedClass { class: String },

    /// Annotation value does not decode into the class's registered shape
    #[error("unable to read value as class {class}: {source}")]
    InvalidAnnotationBody {
        class: String,
        #[source]
        source: serde_json::Error,
    },

    /// Motivation outside the mutation set
    #[error("invalid motivation: {motivation}")]
    InvalidMotivation { motivation: Motivation },

    /// Selector type recognized but not supported for mutation
    #[error("unsupported selector type: {selector}")]
    UnsupportedSelector { selector: String },

    /// Mutated document fails the specimen schema
    #[error("annotation produces an invalid record: {}", format_violations(.violations))]
    ResultingDocumentInvalid { violations: Vec<SchemaViolation> },

    /// Input record could not be serialized into a document tree
    #[error("unable to encode the target record: {source}")]
    TargetEncodingFailed {
        #[source]
        source: serde_json::Error,
    },

    /// Mutated document could not be decoded back into a typed record
    #[error("unable to decode the annotated record: {source}")]
    TargetDecodingFailed {
        #[source]
        source: serde_json::Error,
    },

    /// Record kind has no annotation support yet
    #[error("annotation of {kind} records is not supported")]
    UnsupportedTarget { kind: &'static str },

    /// Specimen schema itself failed to compile (engine construction only)
    #[error("specimen schema failed to compile: {message}")]
    SchemaCompilation { message: String },
}

impl From<CodecError> for AnnotationError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::Encode { source } => Self::TargetEncodingFailed { source },
            CodecError::Decode { source } => Self::TargetDecodingFailed { source },
        }
    }
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(SchemaViolation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for engine operations
pub type AnnotationResult<T> = Result<T, AnnotationError>;
