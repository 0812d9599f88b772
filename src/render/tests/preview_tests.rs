use crate::core::store::DocumentStore;
use crate::core::types::ModuleKind;
use crate::core::variant::VariantConfig;
use crate::render::preview::render_preview;

fn standard() -> (VariantConfig, DocumentStore) {
    let variant = VariantConfig::builtin("standard").expect("built-in variant");
    let store = DocumentStore::for_variant(&variant);
    (variant, store)
}

#[test]
fn test_preview_shows_title_and_disclaimer() {
    let (variant, store) = standard();
    let text = render_preview(&variant, &store);

    assert!(text.contains("CLINICAL VISIT SOURCE DOCUMENT"));
    assert!(text.contains(&variant.disclaimer));
}

#[test]
fn test_preview_shows_every_header_label() {
    let (variant, store) = standard();
    let text = render_preview(&variant, &store);

    for field in &variant.header_fields {
        assert!(text.contains(&field.label), "missing label '{}'", field.label);
    }
}

#[test]
fn test_preview_normalizes_valid_dates() {
    let (variant, mut store) = standard();
    store.set_header("visit-date", "2025-08-28");

    let text = render_preview(&variant, &store);
    assert!(text.contains("28-AUG-2025"));
    assert!(!text.contains("2025-08-28"));
}

#[test]
fn test_preview_renders_invalid_dates_raw() {
    // Best-effort: the preview shows what the user typed while the export
    // gate keeps the document in the building
    let (variant, mut store) = standard();
    store.set_header("visit-date", "31-FEB-2025");

    let text = render_preview(&variant, &store);
    assert!(text.contains("31-FEB-2025"));
}

#[test]
fn test_preview_sections_follow_document_order() {
    let (variant, mut store) = standard();
    store.add_module(ModuleKind::Labs);
    store.add_module(ModuleKind::Vitals);

    let text = render_preview(&variant, &store);
    let labs = text.find("LABORATORY SAMPLING").expect("labs section");
    let vitals = text.find("VITAL SIGNS").expect("vitals section");
    assert!(labs < vitals);
}

#[test]
fn test_preview_repeats_reading_blocks() {
    let (variant, mut store) = standard();
    let id = store.add_module(ModuleKind::Vitals).id;
    store.adjust_repeat(id, 2);

    let text = render_preview(&variant, &store);
    assert!(text.contains("Reading 1"));
    assert!(text.contains("Reading 2"));
    assert!(text.contains("Reading 3"));
    assert!(!text.contains("Reading 4"));
    assert_eq!(text.matches("Systolic BP (mmHg)").count(), 3);
}

#[test]
fn test_preview_checkbox_shape() {
    let (variant, mut store) = standard();
    store.add_module(ModuleKind::Labs);

    let text = render_preview(&variant, &store);
    assert!(text.contains("[ ] Fasting status confirmed"));
}

#[test]
fn test_preview_signature_lines() {
    let (variant, mut store) = standard();
    store.add_module(ModuleKind::Labs);

    let text = render_preview(&variant, &store);
    assert!(text.contains("Collected by (signature / date):"));
}
