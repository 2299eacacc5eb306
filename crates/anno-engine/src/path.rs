//! Bracket-notation paths for addressing within a specimen document
//!
//! Provides [`DocPath`] for the restricted path grammar selectors use:
//! a `$` root anchor followed by quoted-key, numeric-index, or wildcard
//! bracket groups, e.g. `$['ods:hasEvents'][0]['dwc:eventDate']` or
//! `$['ods:hasIdentifications'][*]`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One bracket group of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Quoted object key, e.g. `['dwc:country']`
    Key(String),

    /// Numeric array index, e.g. `[3]`
    Index(usize),

    /// Append position of an array, written `[*]`
    Wildcard,
}

/// Path into a specimen document
///
/// Parsed once into structural segments; parent and last-key derivation are
/// structural operations, never string surgery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DocPath(Vec<Segment>);

impl DocPath {
    /// Parse a bracket-notation path
    ///
    /// # Errors
    /// Returns [`PathError`] if the string does not match the grammar.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let mut chars = raw.char_indices().peekable();
        match chars.next() {
            Some((_, '$')) => {}
            _ => return Err(PathError::MissingAnchor(raw.to_string())),
        }

        let mut segments = Vec::new();
        while let Some((pos, c)) = chars.next() {
            if c != '[' {
                return Err(PathError::UnexpectedCharacter {
                    path: raw.to_string(),
                    position: pos,
                });
            }
            match chars.peek() {
                Some(&(_, quote @ ('\'' | '"'))) => {
                    chars.next();
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some((_, c)) if c == quote => break,
                            Some((_, c)) => key.push(c),
                            None => return Err(PathError::Unterminated(raw.to_string())),
                        }
                    }
                    if key.is_empty() {
                        return Err(PathError::EmptyKey(raw.to_string()));
                    }
                    segments.push(Segment::Key(key));
                }
                Some(&(_, '*')) => {
                    chars.next();
                    segments.push(Segment::Wildcard);
                }
                Some(&(_, c)) if c.is_ascii_digit() => {
                    let mut digits = String::new();
                    while let Some(&(_, c)) = chars.peek() {
                        if c.is_ascii_digit() {
                            digits.push(c);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    let index = digits
                        .parse()
                        .map_err(|_| PathError::InvalidIndex(digits.clone()))?;
                    segments.push(Segment::Index(index));
                }
                Some(&(pos, _)) => {
                    return Err(PathError::UnexpectedCharacter {
                        path: raw.to_string(),
                        position: pos,
                    })
                }
                None => return Err(PathError::Unterminated(raw.to_string())),
            }
            match chars.next() {
                Some((_, ']')) => {}
                Some((pos, _)) => {
                    return Err(PathError::UnexpectedCharacter {
                        path: raw.to_string(),
                        position: pos,
                    })
                }
                None => return Err(PathError::Unterminated(raw.to_string())),
            }
        }

        Ok(Self(segments))
    }

    /// Create a path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Path segments, root to leaf
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the bare root path `$`
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path with the final segment removed
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.0.split_last() {
            Some((_, rest)) => Self(rest.to_vec()),
            None => Self::default(),
        }
    }

    /// Final segment, if any
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    /// Literal of the last key segment, skipping trailing indexes/wildcards
    ///
    /// For `$['ods:hasTaxonIdentifications'][1]` this is
    /// `ods:hasTaxonIdentifications` - the name looked up in the forbidden
    /// sets and the class registry.
    #[must_use]
    pub fn last_key(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|segment| match segment {
            Segment::Key(key) => Some(key.as_str()),
            _ => None,
        })
    }

    /// Check if any segment is a wildcard
    #[inline]
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.0.iter().any(|s| matches!(s, Segment::Wildcard))
    }
}

impl Display for DocPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(key) => write!(f, "['{key}']")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Wildcard => f.write_str("[*]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for DocPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors for paths that do not match the bracket grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Path does not start with the `$` root anchor
    #[error("path '{0}' does not start with the root anchor '$'")]
    MissingAnchor(String),

    /// Bracket group or quote never closed
    #[error("path '{0}' has an unterminated segment")]
    Unterminated(String),

    /// Quoted key with no characters
    #[error("path '{0}' contains an empty key")]
    EmptyKey(String),

    /// Numeric index out of range
    #[error("index '{0}' is not a valid array index")]
    InvalidIndex(String),

    /// Character outside the grammar
    #[error("unexpected character at position {position} in path '{path}'")]
    UnexpectedCharacter { path: String, position: usize },
}
