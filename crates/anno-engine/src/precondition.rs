//! Precondition validation
//!
//! Five sequential checks run before any mutation, short-circuiting at the
//! first failure. Each check produces its own error variant so callers can
//! tell exactly which contract an annotation broke.

use crate::document::TargetDocument;
use crate::error::{AnnotationError, AnnotationResult};
use crate::path::{DocPath, Segment};
use crate::selector;
use anno_record::{is_forbidden, Annotation, Motivation, SelectorKind};
use serde_json::Value;

/// Validated annotation target, ready for value mapping and mutation
#[derive(Debug, Clone)]
pub(crate) struct ResolvedTarget {
    pub(crate) kind: SelectorKind,
    pub(crate) path: DocPath,
}

/// Run all precondition checks against the current document state
///
/// Order: identity, grammar, motivation/path-existence policy, forbidden
/// target, value count.
pub(crate) fn run(
    document: &TargetDocument,
    annotation: &Annotation,
) -> AnnotationResult<ResolvedTarget> {
    let (kind, raw_path) = selector::resolve(annotation)?;
    check_identity(document, annotation)?;
    let path = DocPath::parse(raw_path)?;
    check_path_policy(document, annotation.motivation, &path)?;
    check_forbidden_target(kind, &path)?;
    check_value_count(annotation)?;
    Ok(ResolvedTarget { kind, path })
}

fn check_identity(document: &TargetDocument, annotation: &Annotation) -> AnnotationResult<()> {
    let actual = document.identifier().unwrap_or_default();
    if actual != annotation.target.identifier {
        return Err(AnnotationError::TargetMismatch {
            declared: annotation.target.identifier.clone(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

fn check_path_policy(
    document: &TargetDocument,
    motivation: Motivation,
    path: &DocPath,
) -> AnnotationResult<()> {
    match motivation {
        Motivation::Editing | Motivation::Deleting => {
            if path.has_wildcard() || !document.exists(path) {
                return Err(AnnotationError::PathMustExist {
                    path: path.to_string(),
                    motivation,
                });
            }
            Ok(())
        }
        Motivation::Adding => check_add_path(document, path),
        motivation => Err(AnnotationError::InvalidMotivation { motivation }),
    }
}

/// Walk an adding path against the document, tracking where it leaves the
/// existing tree
///
/// Index segments may address an existing slot or the append position
/// (index == length) of the array at that point; skipping further ahead is
/// rejected. Once the walk leaves the existing tree the cursor goes virtual
/// (`None`) and only keys, index 0, and wildcards remain legal. The full
/// path must not resolve (a wildcard tail never does).
fn check_add_path(document: &TargetDocument, path: &DocPath) -> AnnotationResult<()> {
    let reject = || AnnotationError::PathMustNotExist {
        path: path.to_string(),
        motivation: Motivation::Adding,
    };

    let mut current: Option<&Value> = Some(document.as_value());
    for segment in path.segments() {
        current = match (current, segment) {
            (Some(Value::Object(map)), Segment::Key(key)) => map.get(key),
            (None, Segment::Key(_)) => None,
            (Some(_), Segment::Key(_)) => return Err(reject()),
            (Some(Value::Array(items)), Segment::Index(index)) => {
                if *index > items.len() {
                    return Err(reject());
                }
                items.get(*index)
            }
            (None, Segment::Index(index)) => {
                if *index > 0 {
                    return Err(reject());
                }
                None
            }
            (Some(_), Segment::Index(_)) => return Err(reject()),
            (Some(Value::Array(_)) | None, Segment::Wildcard) => None,
            (Some(_), Segment::Wildcard) => return Err(reject()),
        };
    }

    if current.is_some() {
        return Err(reject());
    }
    Ok(())
}

fn check_forbidden_target(kind: SelectorKind, path: &DocPath) -> AnnotationResult<()> {
    if let Some(key) = path.last_key() {
        if is_forbidden(kind, key) {
            return Err(AnnotationError::ForbiddenTarget {
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn check_value_count(annotation: &Annotation) -> AnnotationResult<()> {
    let expected = match annotation.motivation {
        Motivation::Deleting => 0,
        _ => 1,
    };
    let actual = annotation.body.values.len();
    if actual != expected {
        return Err(AnnotationError::InvalidValueCount {
            motivation: annotation.motivation,
            expected,
            actual,
        });
    }
    Ok(())
}
