//! Value mapping
//!
//! Turns an annotation's raw value string into the JSON fragment the tree
//! mutator writes: an opaque scalar, a whitelisted primitive string array,
//! or a structured object decoded through the class registry.

use crate::error::{AnnotationError, AnnotationResult};
use crate::path::DocPath;
use anno_record::{class_shape, is_array_term, Annotation, Motivation, SelectorKind};
use serde_json::Value;

/// Map the annotation's value into the fragment to be written
///
/// Deleting annotations need no value and yield `None`.
pub(crate) fn map_value(
    kind: SelectorKind,
    path: &DocPath,
    annotation: &Annotation,
) -> AnnotationResult<Option<Value>> {
    if annotation.motivation == Motivation::Deleting {
        return Ok(None);
    }
    let raw = annotation.body.values.first().ok_or_else(|| {
        AnnotationError::InvalidValueCount {
            motivation: annotation.motivation,
            expected: 1,
            actual: 0,
        }
    })?;

    let fragment = match kind {
        SelectorKind::Term => map_term_value(path, raw)?,
        SelectorKind::Class => map_class_value(path, raw)?,
    };
    Ok(Some(fragment))
}

/// Term values are opaque scalars, except for the whitelisted fields known
/// to hold a primitive string array
fn map_term_value(path: &DocPath, raw: &str) -> AnnotationResult<Value> {
    match path.last_key() {
        Some(key) if is_array_term(key) => {
            let entries: Vec<String> = serde_json::from_str(raw).map_err(|source| {
                tracing::warn!(field = key, "term value is not a string array");
                AnnotationError::InvalidAnnotationBody {
                    class: key.to_string(),
                    source,
                }
            })?;
            Ok(Value::Array(entries.into_iter().map(Value::String).collect()))
        }
        _ => Ok(Value::String(raw.to_string())),
    }
}

/// Class values must decode through the registered shape, which both checks
/// conformance and normalizes the fragment
fn map_class_value(path: &DocPath, raw: &str) -> AnnotationResult<Value> {
    let key = path.last_key().ok_or_else(|| AnnotationError::UnrecognizedClass {
        class: path.to_string(),
    })?;
    let shape = class_shape(key).ok_or_else(|| {
        tracing::warn!(class = key, "unrecognized class");
        AnnotationError::UnrecognizedClass {
            class: key.to_string(),
        }
    })?;
    shape.decode(raw).map_err(|source| {
        tracing::error!(class = key, %source, "unable to read value as target class");
        AnnotationError::InvalidAnnotationBody {
            class: key.to_string(),
            source,
        }
    })
}
