//! # Host Pipeline Tests for `ExactType`
//!
//! Drives `ExactType` the way a host framework does: the schema holds a
//! `Box<dyn AttrType>` per attribute, every attribute of a resource is
//! validated against its path, diagnostics are merged across the tree,
//! and only then are the wire values decoded into typed values.
//!
//! Set `RUST_LOG=attrkit_json=trace` to see the validation decisions.

use std::collections::BTreeMap;

use attrkit_core::{
    AttrError, AttrPath, AttrType, AttrValue, Diagnostics, StringType, StringValuable,
    StringValue, WireData, WireState, WireType, WireValue,
};
use attrkit_json::{Exact, ExactType, INVALID_JSON_SUMMARY, VALIDATION_ERROR_SUMMARY};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Attribute name -> declared type, as a host schema would hold it.
fn schema() -> BTreeMap<&'static str, Box<dyn AttrType>> {
    let mut attrs: BTreeMap<&'static str, Box<dyn AttrType>> = BTreeMap::new();
    attrs.insert("name", Box::new(StringType::new()));
    attrs.insert("policy", Box::new(ExactType::new()));
    attrs.insert("template", Box::new(ExactType::new()));
    attrs
}

fn resource_type() -> WireType {
    WireType::object(schema().iter().map(|(k, t)| (*k, t.wire_type())))
}

/// Validate every attribute of a resource object and merge the results.
fn validate_resource(wire: &WireValue) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let WireState::Known(WireData::Object(attrs)) = wire.state() else {
        return diags;
    };
    for (name, ty) in schema() {
        if let Some(value) = attrs.get(name) {
            diags.append(ty.validate(value, &AttrPath::root(name)));
        }
    }
    diags
}

fn decode_resource(wire: &WireValue) -> Result<BTreeMap<&'static str, Box<dyn AttrValue>>, AttrError> {
    let WireState::Known(WireData::Object(attrs)) = wire.state() else {
        return Ok(BTreeMap::new());
    };
    let mut decoded = BTreeMap::new();
    for (name, ty) in schema() {
        if let Some(value) = attrs.get(name) {
            decoded.insert(name, ty.value_from_wire(value)?);
        }
    }
    Ok(decoded)
}

fn resource(json: serde_json::Value) -> WireValue {
    WireValue::from_json(&resource_type(), &json).expect("resource JSON should match schema")
}

// ---------------------------------------------------------------------------
// Scenario: valid document
// ---------------------------------------------------------------------------

#[test]
fn test_valid_document_validates_and_decodes_unchanged() {
    init_tracing();
    let wire = WireValue::string(r#"{"a":1,"b":[2,3]}"#);
    let ty = ExactType::new();

    assert!(ty.validate(&wire, &AttrPath::root("policy")).is_empty());

    let exact = ty.exact_from_wire(&wire).unwrap();
    assert_eq!(exact.value_str(), Some(r#"{"a":1,"b":[2,3]}"#));
}

// ---------------------------------------------------------------------------
// Scenario: unquoted key
// ---------------------------------------------------------------------------

#[test]
fn test_unquoted_key_reports_user_error() {
    init_tracing();
    let diags = ExactType::new().validate(&WireValue::string("{a:1}"), &AttrPath::root("policy"));

    assert_eq!(diags.len(), 1);
    let d = diags.iter().next().unwrap();
    assert_eq!(d.summary, INVALID_JSON_SUMMARY);
    assert!(d.detail.contains("{a:1}"));
}

// ---------------------------------------------------------------------------
// Scenario: null and unknown
// ---------------------------------------------------------------------------

#[test]
fn test_null_validates_and_decodes_to_null() {
    init_tracing();
    let wire = WireValue::null(WireType::String);
    let ty = ExactType::new();

    assert!(ty.validate(&wire, &AttrPath::root("policy")).is_empty());
    assert_eq!(ty.exact_from_wire(&wire).unwrap(), Exact::null());
}

#[test]
fn test_unknown_validates_and_decodes_to_unknown() {
    init_tracing();
    let wire = WireValue::unknown(WireType::String);
    let ty = ExactType::new();

    assert!(ty.validate(&wire, &AttrPath::root("policy")).is_empty());
    assert_eq!(ty.exact_from_wire(&wire).unwrap(), Exact::unknown());
}

// ---------------------------------------------------------------------------
// Whole-resource validation
// ---------------------------------------------------------------------------

#[test]
fn test_resource_diagnostics_are_merged_per_attribute() {
    init_tracing();
    let wire = resource(serde_json::json!({
        "name": "not json but a plain string",
        "policy": "{'a':1}",
        "template": "[1,]",
    }));

    let diags = validate_resource(&wire);

    assert_eq!(diags.error_count(), 2);
    let paths: Vec<String> = diags
        .iter()
        .map(|d| d.path.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect();
    assert_eq!(paths, vec!["policy", "template"]);
    assert!(diags.iter().all(|d| d.summary == INVALID_JSON_SUMMARY));
}

#[test]
fn test_clean_resource_decodes_to_typed_values() {
    init_tracing();
    let wire = resource(serde_json::json!({
        "name": "web",
        "policy": " { \"a\" : 1 } ",
    }));

    assert!(validate_resource(&wire).is_empty());

    let decoded = decode_resource(&wire).unwrap();
    let policy = decoded["policy"].downcast_ref::<Exact>().unwrap();
    assert_eq!(policy.value_str(), Some(" { \"a\" : 1 } "));
    assert!(decoded["template"].downcast_ref::<Exact>().unwrap().is_null());
    assert!(decoded["name"].downcast_ref::<StringValue>().is_some());
    assert!(decoded["name"].downcast_ref::<Exact>().is_none());
}

#[test]
fn test_whitespace_variants_are_different_values() {
    let ty = ExactType::new();
    let spaced = ty.exact_from_wire(&WireValue::string(" { \"a\" : 1 } ")).unwrap();
    let compact = ty.exact_from_wire(&WireValue::string("{\"a\":1}")).unwrap();

    assert_ne!(spaced, compact);
    assert!(!spaced.equal(&compact));
}

// ---------------------------------------------------------------------------
// Internal-consistency errors
// ---------------------------------------------------------------------------

#[test]
fn test_non_string_wire_types_report_internal_error() {
    init_tracing();
    let ty = ExactType::new();
    let path = AttrPath::root("policy");
    let wrong = [
        WireValue::new(WireType::Number, WireData::Number(1.into())),
        WireValue::new(WireType::Bool, WireData::Bool(true)),
        WireValue::new(
            WireType::list_of(WireType::String),
            WireData::List(vec![WireValue::string("{}")]),
        ),
    ];

    for wire in &wrong {
        let diags = ty.validate(wire, &path);
        assert_eq!(diags.len(), 1, "{wire}");
        assert_eq!(diags.iter().next().unwrap().summary, VALIDATION_ERROR_SUMMARY);
    }
}

#[test]
fn test_non_string_wire_type_fails_conversion() {
    let wire = WireValue::new(WireType::Number, WireData::Number(1.into()));
    let err = ExactType::new().value_from_wire(&wire).unwrap_err();
    assert!(matches!(err, AttrError::WireTypeMismatch { .. }));
}

// ---------------------------------------------------------------------------
// Type identity during schema reconciliation
// ---------------------------------------------------------------------------

#[test]
fn test_schema_types_compare_by_kind() {
    let ours = schema();
    let theirs = schema();
    for (name, ty) in &ours {
        assert!(ty.equal(theirs[name].as_ref()), "{name} should match");
    }
    assert!(!ours["policy"].equal(ours["name"].as_ref()));
    assert!(ours["policy"].equal(ours["template"].as_ref()));
}

#[test]
fn test_decoded_value_reports_its_type() {
    let value = ExactType::new().value_from_wire(&WireValue::string("[]")).unwrap();
    assert!(value.attr_type().equal(&ExactType::new()));
    let exact = value.downcast_ref::<Exact>().unwrap();
    assert_eq!(exact.to_string_value(), StringValue::new("[]"));
    assert_eq!(exact.to_wire(), WireValue::string("[]"));
}
