//! Annotation Patch Engine
//!
//! Validates and applies structured annotations to digital specimen
//! records: resolves a bracket-notation path, enforces motivation-specific
//! pre/post-conditions, materializes missing structure when adding, maps
//! raw annotation values into correctly-shaped JSON fragments, and mutates
//! an owned document tree.
//!
//! # Core Concepts
//!
//! - [`AnnotationEngine`]: `apply` / `apply_all` / `is_valid` entry points
//! - [`DocPath`]: the restricted bracket-notation path grammar
//! - [`TargetDocument`]: the owned per-call document tree
//! - [`SchemaGate`]: post-condition check against the specimen schema
//! - [`AnnotationError`]: the closed taxonomy of validation failures
//!
//! # Example
//!
//! ```rust,ignore
//! use anno_engine::AnnotationEngine;
//!
//! let engine = AnnotationEngine::new(&specimen_schema)?;
//! let annotated = engine.apply(&specimen, &annotation)?;
//! assert!(engine.is_valid(&specimen, &annotation));
//! ```
//!
//! The engine is stateless and reentrant: each invocation encodes its own
//! copy of the record, so concurrent calls need no locking. A call either
//! returns a fully valid mutated record or fails without partial effects.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod document;
mod engine;
mod error;
mod mutate;
mod path;
mod precondition;
mod schema;
mod selector;
mod value;

pub use document::TargetDocument;
pub use engine::AnnotationEngine;
pub use error::{AnnotationError, AnnotationResult};
pub use path::{DocPath, PathError, Segment};
pub use schema::{SchemaGate, SchemaViolation};
pub use selector::resolve as resolve_selector;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
