//! Post-condition gate
//!
//! After a mutation the whole document is checked against the specimen
//! schema. Any violation invalidates the operation; the diagnostics are
//! carried to the caller verbatim.

use crate::error::{AnnotationError, AnnotationResult};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

/// One schema violation reported by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending node (empty for the root)
    pub instance_path: String,

    /// Validator's message, verbatim
    pub message: String,
}

impl Display for SchemaViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Compiled specimen schema
///
/// Compiled once at engine construction; checking a document allocates
/// nothing on the success path.
pub struct SchemaGate {
    compiled: JSONSchema,
}

impl SchemaGate {
    /// Compile the specimen schema
    ///
    /// # Errors
    /// Returns [`AnnotationError::SchemaCompilation`] if the schema document
    /// itself is invalid.
    pub fn new(schema: &Value) -> AnnotationResult<Self> {
        let compiled = JSONSchema::compile(schema).map_err(|error| {
            AnnotationError::SchemaCompilation {
                message: error.to_string(),
            }
        })?;
        Ok(Self { compiled })
    }

    /// Check a mutated document against the schema
    ///
    /// # Errors
    /// Returns [`AnnotationError::ResultingDocumentInvalid`] carrying every
    /// violation the validator reports.
    pub fn check(&self, document: &Value) -> AnnotationResult<()> {
        if let Err(errors) = self.compiled.validate(document) {
            let violations: Vec<SchemaViolation> = errors
                .map(|error| SchemaViolation {
                    instance_path: error.instance_path.to_string(),
                    message: error.to_string(),
                })
                .collect();
            tracing::warn!(
                count = violations.len(),
                "annotation produces an invalid record"
            );
            return Err(AnnotationError::ResultingDocumentInvalid { violations });
        }
        Ok(())
    }

    /// Check a document without collecting diagnostics
    #[inline]
    #[must_use]
    pub fn is_valid(&self, document: &Value) -> bool {
        self.compiled.is_valid(document)
    }
}

impl fmt::Debug for SchemaGate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaGate").finish_non_exhaustive()
    }
}
