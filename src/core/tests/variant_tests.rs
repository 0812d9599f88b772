use std::io::Write;

use crate::core::types::{FieldKind, ModuleKind};
use crate::core::variant::{VariantConfig, VariantError};

#[test]
fn test_builtins_resolve() {
    for &name in VariantConfig::builtin_names() {
        let variant = VariantConfig::builtin(name).expect("built-in exists");
        assert_eq!(variant.name, name);
        assert!(!variant.title.is_empty());
        assert!(!variant.disclaimer.is_empty());
        assert!(!variant.modules.is_empty());
        assert!(!variant.header_fields.is_empty());
    }
}

#[test]
fn test_unknown_builtin_is_an_error() {
    assert!(VariantConfig::builtin("oncology").is_none());
    assert!(matches!(
        VariantConfig::resolve("oncology"),
        Err(VariantError::UnknownVariant(_))
    ));
}

#[test]
fn test_every_builtin_has_a_visit_date_field() {
    for &name in VariantConfig::builtin_names() {
        let variant = VariantConfig::builtin(name).expect("built-in exists");
        let field = variant.field("visit-date").expect("visit date in schema");
        assert_eq!(field.kind, FieldKind::Date);
    }
}

#[test]
fn test_file_name_field_present_in_schema() {
    for &name in VariantConfig::builtin_names() {
        let variant = VariantConfig::builtin(name).expect("built-in exists");
        assert!(
            variant.field(&variant.file_name_field).is_some(),
            "variant '{}' names exports from a key outside its schema",
            name
        );
    }
}

#[test]
fn test_builtin_palettes_have_no_duplicates() {
    for &name in VariantConfig::builtin_names() {
        let variant = VariantConfig::builtin(name).expect("built-in exists");
        let mut kinds = variant.modules.clone();
        kinds.sort_by_key(|k| k.tag());
        kinds.dedup();
        assert_eq!(kinds.len(), variant.modules.len());
    }
}

#[test]
fn test_builtins_cover_the_whole_catalog() {
    // Every catalog kind is reachable from at least one shipped variant
    let mut covered: Vec<ModuleKind> = VariantConfig::builtin_names()
        .iter()
        .flat_map(|&name| VariantConfig::builtin(name).expect("built-in exists").modules)
        .collect();
    covered.sort_by_key(|k| k.tag());
    covered.dedup();
    assert_eq!(covered.len(), ModuleKind::ALL.len());
}

#[test]
fn test_screening_leads_with_consent() {
    let screening = VariantConfig::builtin("screening").expect("built-in exists");
    assert_eq!(screening.modules[0], ModuleKind::Consent);
}

#[test]
fn test_variant_serde_round_trip() {
    let variant = VariantConfig::builtin("dosing").expect("built-in exists");
    let json = serde_json::to_string(&variant).expect("serializes");
    let back: VariantConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back.name, variant.name);
    assert_eq!(back.modules, variant.modules);
    assert_eq!(back.header_fields, variant.header_fields);
}

#[test]
fn test_load_custom_variant_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "name": "phone-visit",
            "title": "Phone Visit Source Document",
            "disclaimer": "Remote contact record.",
            "header_fields": [
                {{ "key": "subject", "label": "Subject number" }},
                {{ "key": "contact-date", "label": "Contact date", "kind": "date" }}
            ],
            "modules": [ "adverse-events", "con-meds", "notes" ],
            "file_name_field": "subject"
        }}"#
    )
    .expect("write variant json");

    let variant = VariantConfig::load(file.path()).expect("loads");
    assert_eq!(variant.name, "phone-visit");
    assert_eq!(variant.modules.len(), 3);
    assert_eq!(variant.modules[0], ModuleKind::AdverseEvents);
    assert_eq!(
        variant.field("contact-date").expect("field exists").kind,
        FieldKind::Date
    );
}

#[test]
fn test_file_name_field_defaults_to_title() {
    let variant: VariantConfig = serde_json::from_str(
        r#"{
            "name": "minimal",
            "title": "Minimal",
            "disclaimer": "d",
            "header_fields": [ { "key": "title", "label": "Document title" } ],
            "modules": [ "notes" ]
        }"#,
    )
    .expect("parses");
    assert_eq!(variant.file_name_field, "title");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = VariantConfig::load(std::path::Path::new("/nonexistent/variant.json"));
    assert!(matches!(result, Err(VariantError::Io(_))));
}
