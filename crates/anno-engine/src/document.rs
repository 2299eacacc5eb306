//! The target document tree under mutation
//!
//! [`TargetDocument`] owns the JSON tree for the duration of one engine
//! invocation. Nothing is shared with the caller: the codec produces the
//! tree on entry and consumes it on exit, so mutation never aliases
//! caller-owned data.

use crate::path::{DocPath, Segment};
use serde_json::Value;

/// An owned specimen document tree
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDocument {
    root: Value,
}

impl TargetDocument {
    /// Wrap an encoded record tree
    #[inline]
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Borrow the tree
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consume the document, yielding the tree
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    /// The document's own identity (`dcterms:identifier` at the root)
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.root.get("dcterms:identifier").and_then(Value::as_str)
    }

    /// Resolve a path to a node, if it exists
    ///
    /// Wildcard segments address the append position of an array and
    /// therefore never resolve.
    #[must_use]
    pub fn resolve(&self, path: &DocPath) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = match segment {
                Segment::Key(key) => current.as_object()?.get(key)?,
                Segment::Index(index) => current.as_array()?.get(*index)?,
                Segment::Wildcard => return None,
            };
        }
        Some(current)
    }

    /// Check whether a path resolves to a node
    #[inline]
    #[must_use]
    pub fn exists(&self, path: &DocPath) -> bool {
        self.resolve(path).is_some()
    }

    /// Resolve a path to a mutable node, if it exists
    pub(crate) fn resolve_mut(&mut self, path: &DocPath) -> Option<&mut Value> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = match segment {
                Segment::Key(key) => current.as_object_mut()?.get_mut(key)?,
                Segment::Index(index) => current.as_array_mut()?.get_mut(*index)?,
                Segment::Wildcard => return None,
            };
        }
        Some(current)
    }

    /// Mutable access to the root for the tree mutator
    pub(crate) fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }
}
