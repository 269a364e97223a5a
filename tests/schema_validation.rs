//! End-to-end tests of the validation pipeline: content classification,
//! schema resolution, dialect-aware validation, and the policy gate.

mod common;

use common::{get_movies, get_version, validator, MOVIE_LISTING, MOVIE_LISTING_WITH_NULLS};
use response_validation::{
    Dialect, OperationId, OutcomeClass, RawResponse, ResponseError, ValidationPolicy,
    ViolationKind,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Movie {
    id: i64,
    name: String,
    director: String,
    genre: Option<String>,
    duration: Option<f64>,
    rented: bool,
}

#[test]
fn reports_missing_required_properties() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let response = RawResponse::json(200, r#"{ "name": "foo" }"#);

    let validation = validator
        .validate(&get_movies(), &response)
        .expect("attach-only never raises");

    let outcome = validation.outcome();
    assert!(!outcome.is_valid());
    assert_eq!(outcome.class(), OutcomeClass::Verified);

    let reasons: Vec<String> = outcome.violations().iter().map(|v| v.reason()).collect();
    assert!(reasons.contains(&"missing required property: id".to_string()));
    assert!(reasons.contains(&"missing required property: director".to_string()));
}

#[test]
fn accepts_complete_movie_listing() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let response = RawResponse::json(200, MOVIE_LISTING);

    let movies = validator
        .accept::<Vec<Movie>>(&get_movies(), &response)
        .expect("valid listing deserializes");

    assert!(movies.validation().is_valid());
    assert_eq!(movies.value().len(), 1);
    assert_eq!(movies.value()[0].id, 1);
    assert_eq!(movies.value()[0].name, "Big Fish");
    assert_eq!(movies.value()[0].director, "Tim Burton");
    assert!(!movies.value()[0].rented);
}

#[test]
fn tolerates_explicit_null_fields() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let response = RawResponse::json(200, MOVIE_LISTING_WITH_NULLS);

    let movies = validator
        .accept::<Vec<Movie>>(&get_movies(), &response)
        .expect("nullable fields deserialize");

    assert!(movies.validation().is_valid());
    assert_eq!(movies.value()[0].genre, None);
    assert_eq!(movies.value()[0].duration, None);
}

#[test]
fn ignores_non_json_content() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let response = RawResponse::new(200, "content").with_content_type("text/plain");

    let validation = validator
        .validate(&get_movies(), &response)
        .expect("non-JSON content never raises");

    let outcome = validation.outcome();
    assert!(outcome.is_valid());
    assert!(!outcome.was_checked());
    assert_eq!(outcome.class(), OutcomeClass::NotJsonContent);
}

#[test]
fn absent_content_type_skips_validation() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let response = RawResponse::new(200, MOVIE_LISTING);

    let validation = validator
        .validate(&get_movies(), &response)
        .expect("absent content type never raises");

    assert_eq!(validation.outcome().class(), OutcomeClass::NotJsonContent);
}

#[test]
fn raises_for_invalid_body_when_policy_raises() {
    let validator = validator(ValidationPolicy::RaiseOnInvalid);
    let response = RawResponse::json(200, r#"{ "name": "foo" }"#);

    let error = validator
        .validate(&get_movies(), &response)
        .expect_err("invalid body must raise");

    assert!(!error.violations().is_empty());
    assert!(error.to_string().contains("violation"));
    assert!(!error.outcome().is_valid());
}

#[test]
fn returns_normally_for_valid_body_when_policy_raises() {
    let validator = validator(ValidationPolicy::RaiseOnInvalid);
    let response = RawResponse::json(200, MOVIE_LISTING);

    let movies = validator
        .accept::<Vec<Movie>>(&get_movies(), &response)
        .expect("valid body returns normally");

    assert!(movies.validation().is_valid());
}

#[test]
fn does_not_raise_for_non_json_content_when_policy_raises() {
    let validator = validator(ValidationPolicy::RaiseOnInvalid);
    let response = RawResponse::new(200, "data").with_content_type("text/plain");

    let validation = validator
        .validate(&get_movies(), &response)
        .expect("fail-open content never raises");

    assert!(validation.is_valid());
}

#[test]
fn validates_modern_component_version_document() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let document = validator
        .registry()
        .resolve(&get_version())
        .expect("version schema registered");
    assert_eq!(document.dialect(), Dialect::Modern);

    let response = RawResponse::json(200, r#"{ "Component": "component", "Version": "version" }"#);
    let validation = validator
        .validate(&get_version(), &response)
        .expect("attach-only never raises");
    assert!(validation.is_valid());
}

#[test]
fn modern_schema_missing_field_is_reported() {
    let validator = validator(ValidationPolicy::AttachOnly);
    let response = RawResponse::json(200, r#"{ "Version": "version" }"#);

    let validation = validator
        .validate(&get_version(), &response)
        .expect("attach-only never raises");

    let outcome = validation.outcome();
    assert!(!outcome.is_valid());
    assert_eq!(outcome.violations().len(), 1);
    assert_eq!(
        outcome.violations()[0].reason(),
        "missing required property: Component"
    );
}

#[test]
fn unregistered_operation_is_fail_open_under_both_policies() {
    for policy in [ValidationPolicy::AttachOnly, ValidationPolicy::RaiseOnInvalid] {
        let validator = validator(policy);
        let response = RawResponse::json(200, r#"{ "anything": ["goes", 1, null] }"#);

        let validation = validator
            .validate(&OperationId::new("songs", "v1"), &response)
            .expect("unregistered operations never raise");

        let outcome = validation.outcome();
        assert!(outcome.is_valid());
        assert_eq!(outcome.class(), OutcomeClass::SchemaUnavailable);
    }
}

#[test]
fn malformed_json_body_is_invalid() {
    let validator = validator(ValidationPolicy::AttachOnly);
    // Relaxed JSON (unquoted keys, single quotes) is not parseable here.
    let response = RawResponse::json(200, "{ name: 'foo' }");

    let validation = validator
        .validate(&get_movies(), &response)
        .expect("attach-only never raises");

    let outcome = validation.outcome();
    assert!(!outcome.is_valid());
    assert_eq!(outcome.violations().len(), 1);
    assert!(matches!(
        outcome.violations()[0].kind(),
        ViolationKind::MalformedBody { .. }
    ));
}

#[test]
fn malformed_json_body_raises_when_policy_raises() {
    let validator = validator(ValidationPolicy::RaiseOnInvalid);
    let response = RawResponse::json(200, "{ name: 'foo' }");

    let error = validator
        .validate(&get_movies(), &response)
        .expect_err("malformed body must raise");
    assert_eq!(error.violations().len(), 1);
}

#[test]
fn empty_listing_is_valid() {
    let validator = validator(ValidationPolicy::RaiseOnInvalid);
    let response = RawResponse::json(200, "[]");

    let movies = validator
        .accept::<Vec<Movie>>(&get_movies(), &response)
        .expect("empty listing is valid");
    assert!(movies.value().is_empty());
    assert!(movies.validation().is_valid());
}

#[test]
fn accept_surfaces_policy_errors_before_deserialization() {
    let validator = validator(ValidationPolicy::RaiseOnInvalid);
    let response = RawResponse::json(200, r#"{ "name": "foo" }"#);

    match validator.accept::<Value>(&get_movies(), &response) {
        Err(ResponseError::Policy(error)) => assert!(!error.violations().is_empty()),
        Err(other) => panic!("expected a policy error, got {other:?}"),
        Ok(_) => panic!("expected the policy gate to reject the response"),
    }
}

#[test]
fn schema_registration_accepts_generator_output() {
    // The registry fixture registers both dialects from raw JSON text.
    let registry = common::registry();
    assert_eq!(registry.len(), 2);
    assert!(registry.contains(&get_movies()));
    assert!(registry.contains(&get_version()));

    let movies = registry.resolve(&get_movies()).expect("movies registered");
    assert_eq!(movies.dialect(), Dialect::Legacy);
}
