//! Single-annotation pipeline scenarios against the canonical specimen

use anno_engine::{AnnotationEngine, AnnotationError};
use anno_record::codec;
use anno_record::{AnnotationBody, Motivation, Selector, TaxonIdentification};
use anno_test_utils::{
    given_annotation, given_annotation_for, given_class_body, given_class_target,
    given_digital_specimen, given_specimen_schema, given_term_target, MEDIA_ID, NEW_VALUE,
};
use pretty_assertions::assert_eq;

fn given_engine() -> AnnotationEngine {
    AnnotationEngine::new(&given_specimen_schema()).unwrap()
}

#[test]
fn editing_term_replaces_country() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let mut annotation = given_annotation();
    annotation.body.values = vec!["France".to_string()];

    let result = engine.apply(&specimen, &annotation).unwrap();

    let location = result.events[0].location.as_ref().unwrap();
    assert_eq!(location.country.as_deref(), Some("France"));

    // All else unchanged
    let mut expected = specimen.clone();
    expected.events[0].location.as_mut().unwrap().country = Some("France".to_string());
    assert_eq!(result, expected);
}

#[test]
fn adding_term_inserts_locality_and_keeps_country() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let mut annotation = given_annotation_for(Motivation::Adding, true);
    annotation.body.values = vec!["Oxford".to_string()];

    let result = engine.apply(&specimen, &annotation).unwrap();

    let location = result.events[0].location.as_ref().unwrap();
    assert_eq!(location.locality.as_deref(), Some("Oxford"));
    assert_eq!(location.country.as_deref(), Some("England"));
}

#[test]
fn adding_class_appends_taxon_identification() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let annotation = given_annotation_for(Motivation::Adding, false);

    let result = engine.apply(&specimen, &annotation).unwrap();

    let taxa = &result.identifications[0].taxon_identifications;
    assert_eq!(taxa.len(), 2);
    assert_eq!(taxa[0], specimen.identifications[0].taxon_identifications[0]);
    assert_eq!(
        taxa[1],
        TaxonIdentification {
            genus: Some(NEW_VALUE.to_string()),
            phylum: Some(NEW_VALUE.to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn editing_class_replaces_taxon_identification() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let annotation = given_annotation_for(Motivation::Editing, false);

    let result = engine.apply(&specimen, &annotation).unwrap();

    let taxa = &result.identifications[0].taxon_identifications;
    assert_eq!(taxa.len(), 1);
    assert_eq!(taxa[0].genus.as_deref(), Some(NEW_VALUE));
    assert_eq!(taxa[0].phylum.as_deref(), Some(NEW_VALUE));
    assert_eq!(taxa[0].scientific_name, None);
}

#[test]
fn editing_whole_location_class() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let mut annotation = given_annotation_for(Motivation::Editing, false);
    annotation.target =
        given_class_target("$['ods:hasEvents'][0]['ods:hasLocation']");
    annotation.body.values =
        vec![format!(r#"{{"dwc:country": "{NEW_VALUE}", "dwc:locality": "{NEW_VALUE}"}}"#)];

    let result = engine.apply(&specimen, &annotation).unwrap();

    let location = result.events[0].location.as_ref().unwrap();
    assert_eq!(location.country.as_deref(), Some(NEW_VALUE));
    assert_eq!(location.locality.as_deref(), Some(NEW_VALUE));
}

#[test]
fn adding_class_materializes_geological_context() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let mut annotation = given_annotation_for(Motivation::Adding, false);
    annotation.target = given_class_target(
        "$['ods:hasEvents'][0]['ods:hasLocation']['ods:hasGeologicalContext']",
    );
    annotation.body.values =
        vec![format!(r#"{{"dwc:lithostratigraphicTerms": "{NEW_VALUE}"}}"#)];

    let result = engine.apply(&specimen, &annotation).unwrap();

    let context = result.events[0]
        .location
        .as_ref()
        .unwrap()
        .geological_context
        .as_ref()
        .unwrap();
    assert_eq!(context.lithostratigraphic_terms.as_deref(), Some(NEW_VALUE));
}

#[test]
fn deleting_class_empties_taxon_identifications() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let annotation = given_annotation_for(Motivation::Deleting, false);

    let result = engine.apply(&specimen, &annotation).unwrap();

    // Removing the only entry leaves an empty list on the typed record
    assert!(result.identifications[0].taxon_identifications.is_empty());
    assert_eq!(result.identifications[0].identification_type, specimen.identifications[0].identification_type);
}

#[test]
fn deleting_term_removes_country() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let annotation = given_annotation_for(Motivation::Deleting, true);

    let result = engine.apply(&specimen, &annotation).unwrap();

    let location = result.events[0].location.as_ref().unwrap();
    assert_eq!(location.country, None);
}

#[test]
fn editing_whitelisted_array_term() {
    let engine = given_engine();
    let mut specimen = given_digital_specimen();
    specimen.other_catalog_numbers = vec!["ZMA.INS.1003070".to_string()];
    let mut annotation = given_annotation();
    annotation.target = given_term_target("$['dwc:otherCatalogNumbers']");
    annotation.body.values = vec![r#"["ZMA.INS.1003070", "RMNH.5283"]"#.to_string()];

    let result = engine.apply(&specimen, &annotation).unwrap();

    assert_eq!(
        result.other_catalog_numbers,
        vec!["ZMA.INS.1003070".to_string(), "RMNH.5283".to_string()]
    );
}

#[test]
fn target_mismatch_rejected_and_specimen_untouched() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let before = specimen.clone();
    let mut annotation = given_annotation();
    annotation.target.identifier = MEDIA_ID.to_string();

    let result = engine.apply(&specimen, &annotation);

    assert!(matches!(result, Err(AnnotationError::TargetMismatch { .. })));
    assert_eq!(specimen, before);
}

#[test]
fn editing_missing_path_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation();
    annotation.target = given_term_target("$['dwc:pathDoesNotExist']");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::PathMustExist { .. })));
}

#[test]
fn deleting_missing_path_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation_for(Motivation::Deleting, true);
    annotation.target = given_term_target("$['dwc:pathDoesNotExist']");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::PathMustExist { .. })));
}

#[test]
fn adding_existing_path_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation_for(Motivation::Adding, true);
    annotation.target = given_term_target("$['ods:topicDiscipline']");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::PathMustNotExist { .. })));
}

#[test]
fn adding_beyond_existing_array_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation_for(Motivation::Adding, true);
    annotation.target =
        given_term_target("$['ods:hasCitations'][4]['dcterms:description']");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::PathMustNotExist { .. })));
}

#[test]
fn malformed_path_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation();
    annotation.target = given_term_target("ods:hasEvents[0]");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::MalformedPath(_))));
}

#[test]
fn forbidden_term_rejected_regardless_of_state() {
    let engine = given_engine();
    let mut annotation = given_annotation();
    annotation.target = given_term_target("$['dcterms:identifier']");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(
        result,
        Err(AnnotationError::ForbiddenTarget { ref key }) if key == "dcterms:identifier"
    ));
}

#[test]
fn deleting_with_value_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation_for(Motivation::Deleting, true);
    annotation.body.values = vec!["stray".to_string()];

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::InvalidValueCount { .. })));
}

#[test]
fn editing_with_wrong_value_counts_rejected() {
    let engine = given_engine();
    let specimen = given_digital_specimen();

    let mut empty = given_annotation();
    empty.body = AnnotationBody::default();
    assert!(matches!(
        engine.apply(&specimen, &empty),
        Err(AnnotationError::InvalidValueCount { .. })
    ));

    let mut two = given_annotation();
    two.body.values = vec!["value1".to_string(), "value2".to_string()];
    assert!(matches!(
        engine.apply(&specimen, &two),
        Err(AnnotationError::InvalidValueCount { .. })
    ));
}

#[test]
fn commenting_motivation_rejected() {
    let engine = given_engine();
    let annotation = given_annotation_for(Motivation::Commenting, true);

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::InvalidMotivation { .. })));
}

#[test]
fn class_selector_on_plain_term_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation();
    annotation.target = given_class_target("$['ods:topicDiscipline']");

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(
        result,
        Err(AnnotationError::UnrecognizedClass { ref class }) if class == "ods:topicDiscipline"
    ));
}

#[test]
fn nonconforming_class_body_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation_for(Motivation::Adding, false);
    annotation.body.values = vec![r#"{"someField": "someValue"}"#.to_string()];

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(
        result,
        Err(AnnotationError::InvalidAnnotationBody { .. })
    ));
}

#[test]
fn fragment_selector_rejected() {
    let engine = given_engine();
    let mut annotation = given_annotation();
    annotation.target.selector = Selector::Fragment {
        conforms_to: Some("https://www.w3.org/TR/media-frags/".to_string()),
        region: None,
    };

    let result = engine.apply(&given_digital_specimen(), &annotation);
    assert!(matches!(result, Err(AnnotationError::UnsupportedSelector { .. })));
}

#[test]
fn gate_rejects_schema_violating_result() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    // Deleting the only event empties ods:hasEvents, which the schema
    // requires non-empty
    let mut annotation = given_annotation_for(Motivation::Deleting, false);
    annotation.target = given_class_target("$['ods:hasEvents'][0]");

    let result = engine.apply(&specimen, &annotation);
    assert!(matches!(
        result,
        Err(AnnotationError::ResultingDocumentInvalid { ref violations }) if !violations.is_empty()
    ));
}

#[test]
fn editing_twice_is_idempotent() {
    let engine = given_engine();
    let specimen = given_digital_specimen();
    let mut annotation = given_annotation();
    annotation.body.values = vec!["France".to_string()];

    let once = engine.apply(&specimen, &annotation).unwrap();
    let twice = engine.apply(&once, &annotation).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn applied_record_round_trips_through_codec() {
    let engine = given_engine();
    let annotation = given_annotation_for(Motivation::Adding, false);

    let result = engine.apply(&given_digital_specimen(), &annotation).unwrap();

    let tree = codec::encode_specimen(&result).unwrap();
    let decoded = codec::decode_specimen(tree).unwrap();
    assert_eq!(decoded, result);
}

#[test]
fn is_valid_mirrors_apply_outcome() {
    let engine = given_engine();
    let specimen = given_digital_specimen();

    assert!(engine.is_valid(&specimen, &given_annotation()));
    assert!(engine.is_valid(&specimen, &given_annotation_for(Motivation::Adding, false)));

    let mut mismatch = given_annotation();
    mismatch.target.identifier = MEDIA_ID.to_string();
    assert!(!engine.is_valid(&specimen, &mismatch));

    let mut gate_breaker = given_annotation_for(Motivation::Deleting, false);
    gate_breaker.target = given_class_target("$['ods:hasEvents'][0]");
    assert!(!engine.is_valid(&specimen, &gate_breaker));
}

#[test]
fn class_body_fixture_matches_expected_shape() {
    // The shared class body decodes into a taxon identification
    let body = given_class_body();
    let decoded: TaxonIdentification =
        serde_json::from_str(&body.values[0]).unwrap();
    assert_eq!(decoded.genus.as_deref(), Some(NEW_VALUE));
}
