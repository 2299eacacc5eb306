//! Tree mutation
//!
//! The three mutations behind the motivations: delete removes an existing
//! node, replace overwrites one in place, insert materializes missing
//! parent structure and writes a new node. Preconditions have already run
//! when these are called; the same contracts are still enforced here so a
//! mutation can never silently produce a tree the checks would have
//! rejected.

use crate::document::TargetDocument;
use crate::error::{AnnotationError, AnnotationResult};
use crate::path::{DocPath, Segment};
use anno_record::{is_collection_key, Motivation};
use serde_json::{Map, Value};

/// Remove the node at `path`
pub(crate) fn delete(document: &mut TargetDocument, path: &DocPath) -> AnnotationResult<()> {
    let must_exist = || AnnotationError::PathMustExist {
        path: path.to_string(),
        motivation: Motivation::Deleting,
    };

    let Some(last) = path.last() else {
        return Err(must_exist());
    };
    let parent_node = document.resolve_mut(&path.parent()).ok_or_else(must_exist)?;
    match (parent_node, last) {
        (Value::Object(map), Segment::Key(key)) => {
            map.remove(key).ok_or_else(must_exist)?;
        }
        (Value::Array(items), Segment::Index(index)) => {
            if *index >= items.len() {
                return Err(must_exist());
            }
            items.remove(*index);
        }
        _ => return Err(must_exist()),
    }
    Ok(())
}

/// Replace the node at `path` with `fragment`, in place
pub(crate) fn replace(
    document: &mut TargetDocument,
    path: &DocPath,
    fragment: Value,
) -> AnnotationResult<()> {
    let node = document
        .resolve_mut(path)
        .ok_or_else(|| AnnotationError::PathMustExist {
            path: path.to_string(),
            motivation: Motivation::Editing,
        })?;
    *node = fragment;
    Ok(())
}

/// Insert `fragment` at `path`, materializing missing parent structure
///
/// Missing keys become empty lists when the key name denotes a collection
/// (pluralized relational key) and empty maps otherwise. An index one past
/// the end of an array materializes an empty object at that slot; a
/// wildcard resolves to the append position.
pub(crate) fn insert(
    document: &mut TargetDocument,
    path: &DocPath,
    fragment: Value,
) -> AnnotationResult<()> {
    let reject = || AnnotationError::PathMustNotExist {
        path: path.to_string(),
        motivation: Motivation::Adding,
    };

    let Some(last) = path.last() else {
        return Err(reject());
    };

    let mut current = document.root_mut();
    for segment in path.parent().segments() {
        current = match segment {
            Segment::Key(key) => {
                let map = current.as_object_mut().ok_or_else(reject)?;
                map.entry(key.clone()).or_insert_with(|| empty_node_for(key))
            }
            Segment::Index(index) => {
                let items = current.as_array_mut().ok_or_else(reject)?;
                if *index > items.len() {
                    return Err(reject());
                }
                if *index == items.len() {
                    items.push(Value::Object(Map::new()));
                }
                &mut items[*index]
            }
            Segment::Wildcard => {
                let items = current.as_array_mut().ok_or_else(reject)?;
                items.push(Value::Object(Map::new()));
                let appended = items.len() - 1;
                &mut items[appended]
            }
        };
    }

    match last {
        Segment::Key(key) => {
            let map = current.as_object_mut().ok_or_else(reject)?;
            if map.contains_key(key) {
                return Err(reject());
            }
            map.insert(key.clone(), fragment);
        }
        Segment::Index(index) => {
            let items = current.as_array_mut().ok_or_else(reject)?;
            if *index != items.len() {
                return Err(reject());
            }
            items.push(fragment);
        }
        Segment::Wildcard => {
            let items = current.as_array_mut().ok_or_else(reject)?;
            items.push(fragment);
        }
    }
    Ok(())
}

fn empty_node_for(key: &str) -> Value {
    if is_collection_key(key) {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn given_document() -> TargetDocument {
        TargetDocument::new(json!({
            "dcterms:identifier": "https://doi.org/10.3535/AAA-BBB-CCC",
            "ods:hasEvents": [
                { "ods:hasLocation": { "dwc:country": "England" } }
            ],
            "ods:hasIdentifications": [
                { "ods:hasTaxonIdentifications": [ { "dwc:scientificName": "Bombus bombus" } ] }
            ]
        }))
    }

    fn path(raw: &str) -> DocPath {
        DocPath::parse(raw).unwrap()
    }

    #[test]
    fn delete_map_key() {
        let mut doc = given_document();
        delete(
            &mut doc,
            &path("$['ods:hasEvents'][0]['ods:hasLocation']['dwc:country']"),
        )
        .unwrap();
        assert_eq!(
            doc.as_value()["ods:hasEvents"][0]["ods:hasLocation"],
            json!({})
        );
    }

    #[test]
    fn delete_class_leaves_empty_list_semantics() {
        let mut doc = given_document();
        delete(
            &mut doc,
            &path("$['ods:hasIdentifications'][0]['ods:hasTaxonIdentifications']"),
        )
        .unwrap();
        assert_eq!(doc.as_value()["ods:hasIdentifications"][0], json!({}));
    }

    #[test]
    fn delete_array_element() {
        let mut doc = given_document();
        delete(&mut doc, &path("$['ods:hasEvents'][0]")).unwrap();
        assert_eq!(doc.as_value()["ods:hasEvents"], json!([]));
    }

    #[test]
    fn delete_missing_node_fails() {
        let mut doc = given_document();
        let result = delete(&mut doc, &path("$['dwc:pathDoesNotExist']"));
        assert!(matches!(result, Err(AnnotationError::PathMustExist { .. })));
    }

    #[test]
    fn replace_in_place() {
        let mut doc = given_document();
        replace(
            &mut doc,
            &path("$['ods:hasEvents'][0]['ods:hasLocation']['dwc:country']"),
            json!("France"),
        )
        .unwrap();
        assert_eq!(
            doc.as_value()["ods:hasEvents"][0]["ods:hasLocation"]["dwc:country"],
            json!("France")
        );
    }

    #[test]
    fn replace_missing_node_fails() {
        let mut doc = given_document();
        let result = replace(&mut doc, &path("$['dwc:pathDoesNotExist']"), json!("x"));
        assert!(matches!(result, Err(AnnotationError::PathMustExist { .. })));
    }

    #[test]
    fn insert_under_existing_parent() {
        let mut doc = given_document();
        insert(
            &mut doc,
            &path("$['ods:hasEvents'][0]['ods:hasLocation']['dwc:locality']"),
            json!("Oxford"),
        )
        .unwrap();
        let location = &doc.as_value()["ods:hasEvents"][0]["ods:hasLocation"];
        assert_eq!(location["dwc:locality"], json!("Oxford"));
        assert_eq!(location["dwc:country"], json!("England"));
    }

    #[test]
    fn insert_materializes_map_parent() {
        let mut doc = given_document();
        insert(
            &mut doc,
            &path(
                "$['ods:hasEvents'][0]['ods:hasLocation']['ods:hasGeologicalContext']['dwc:group']",
            ),
            json!("Purbeck"),
        )
        .unwrap();
        assert_eq!(
            doc.as_value()["ods:hasEvents"][0]["ods:hasLocation"]["ods:hasGeologicalContext"],
            json!({ "dwc:group": "Purbeck" })
        );
    }

    #[test]
    fn insert_materializes_list_parent() {
        let mut doc = TargetDocument::new(json!({
            "dcterms:identifier": "https://doi.org/10.3535/AAA-BBB-CCC"
        }));
        insert(
            &mut doc,
            &path("$['ods:hasCitations'][0]['dcterms:description']"),
            json!("First record"),
        )
        .unwrap();
        assert_eq!(
            doc.as_value()["ods:hasCitations"],
            json!([ { "dcterms:description": "First record" } ])
        );
    }

    #[test]
    fn insert_appends_at_index_equal_to_length() {
        let mut doc = given_document();
        insert(
            &mut doc,
            &path("$['ods:hasIdentifications'][0]['ods:hasTaxonIdentifications'][1]"),
            json!({ "dwc:genus": "Bombus" }),
        )
        .unwrap();
        let taxa = doc.as_value()["ods:hasIdentifications"][0]["ods:hasTaxonIdentifications"]
            .as_array()
            .unwrap();
        assert_eq!(taxa.len(), 2);
        assert_eq!(taxa[0]["dwc:scientificName"], json!("Bombus bombus"));
        assert_eq!(taxa[1], json!({ "dwc:genus": "Bombus" }));
    }

    #[test]
    fn insert_rejects_skipped_index() {
        let mut doc = given_document();
        let result = insert(
            &mut doc,
            &path("$['ods:hasIdentifications'][0]['ods:hasTaxonIdentifications'][3]"),
            json!({ "dwc:genus": "Bombus" }),
        );
        assert!(matches!(result, Err(AnnotationError::PathMustNotExist { .. })));
    }

    #[test]
    fn insert_rejects_existing_key() {
        let mut doc = given_document();
        let result = insert(
            &mut doc,
            &path("$['ods:hasEvents'][0]['ods:hasLocation']['dwc:country']"),
            json!("France"),
        );
        assert!(matches!(result, Err(AnnotationError::PathMustNotExist { .. })));
    }

    #[test]
    fn insert_wildcard_appends() {
        let mut doc = given_document();
        insert(
            &mut doc,
            &path("$['ods:hasIdentifications'][0]['ods:hasTaxonIdentifications'][*]"),
            json!({ "dwc:genus": "Bombus" }),
        )
        .unwrap();
        let taxa = doc.as_value()["ods:hasIdentifications"][0]["ods:hasTaxonIdentifications"]
            .as_array()
            .unwrap();
        assert_eq!(taxa.len(), 2);
    }

    #[test]
    fn insert_onto_next_array_slot_materializes_empty_object() {
        let mut doc = given_document();
        insert(
            &mut doc,
            &path("$['ods:hasEvents'][1]['dwc:eventDate']"),
            json!("2024-01-01"),
        )
        .unwrap();
        let events = doc.as_value()["ods:hasEvents"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], json!({ "dwc:eventDate": "2024-01-01" }));
    }

    #[test]
    fn insert_through_scalar_fails() {
        let mut doc = TargetDocument::new(json!({
            "dcterms:identifier": "https://doi.org/10.3535/AAA-BBB-CCC",
            "ods:version": 1
        }));
        let result = insert(
            &mut doc,
            &path("$['ods:version']['dwc:country']"),
            json!("France"),
        );
        assert!(matches!(result, Err(AnnotationError::PathMustNotExist { .. })));
    }
}
