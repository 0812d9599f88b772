use crate::core::store::DocumentStore;
use crate::core::types::ModuleKind;
use crate::core::validator::{validate_for_export, ValidationError};
use crate::core::variant::VariantConfig;

fn standard() -> (VariantConfig, DocumentStore) {
    let variant = VariantConfig::builtin("standard").expect("built-in variant");
    let store = DocumentStore::for_variant(&variant);
    (variant, store)
}

#[test]
fn test_empty_document_passes() {
    let (variant, store) = standard();
    assert_eq!(validate_for_export(&variant, &store), Ok(()));
}

#[test]
fn test_valid_visit_date_passes() {
    let (variant, mut store) = standard();
    store.set_header("visit-date", "28-AUG-2025");
    assert_eq!(validate_for_export(&variant, &store), Ok(()));
}

#[test]
fn test_generic_form_visit_date_passes() {
    let (variant, mut store) = standard();
    store.set_header("visit-date", "2025-08-28");
    assert_eq!(validate_for_export(&variant, &store), Ok(()));
}

#[test]
fn test_invalid_visit_date_blocks_export() {
    let (variant, mut store) = standard();
    store.set_header("visit-date", "31-FEB-2025");

    let error = validate_for_export(&variant, &store).expect_err("gate must trip");
    assert_eq!(
        error,
        ValidationError::InvalidDate {
            label: "Visit date".to_string(),
            value: "31-FEB-2025".to_string(),
        }
    );
}

#[test]
fn test_error_message_names_the_field() {
    let (variant, mut store) = standard();
    store.set_header("visit-date", "nonsense");

    let message = validate_for_export(&variant, &store)
        .expect_err("gate must trip")
        .to_string();
    assert!(message.contains("Visit date"));
    assert!(message.contains("nonsense"));
    assert!(message.contains("DD-MON-YYYY"));
}

#[test]
fn test_empty_visit_date_is_allowed() {
    // Header fields are all optional; only a non-empty value that fails
    // normalization blocks export
    let (variant, mut store) = standard();
    store.set_header("visit-date", "   ");
    assert_eq!(validate_for_export(&variant, &store), Ok(()));
}

#[test]
fn test_text_fields_never_gate() {
    let (variant, mut store) = standard();
    store.set_header("protocol", "not a date at all");
    store.add_module(ModuleKind::Vitals);
    assert_eq!(validate_for_export(&variant, &store), Ok(()));
}
