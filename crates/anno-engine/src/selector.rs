//! Selector resolution
//!
//! Maps an annotation's selector onto `(kind, raw path)`. Fragment
//! selectors address regions of interest in media files and are rejected
//! here, before any document work happens.

use crate::error::AnnotationError;
use anno_record::{Annotation, Selector, SelectorKind};

/// Resolve an annotation's selector into its kind and raw path string
///
/// # Errors
/// Returns [`AnnotationError::UnsupportedSelector`] for fragment selectors.
pub fn resolve(annotation: &Annotation) -> Result<(SelectorKind, &str), AnnotationError> {
    match &annotation.target.selector {
        Selector::Term { term } => Ok((SelectorKind::Term, term)),
        Selector::Class { class } => Ok((SelectorKind::Class, class)),
        selector @ Selector::Fragment { .. } => Err(AnnotationError::UnsupportedSelector {
            selector: selector.type_name().to_string(),
        }),
    }
}
