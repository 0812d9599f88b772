use std::fs;

use crate::core::types::ModuleKind;
use crate::core::variant::VariantConfig;
use crate::ui::Controller;

fn controller() -> Controller {
    Controller::new(VariantConfig::builtin("standard").expect("built-in variant"))
}

#[test]
fn test_new_controller_has_empty_document() {
    let controller = controller();
    assert!(controller.instances().is_empty());
    assert_eq!(controller.header_value("protocol"), "");
}

#[test]
fn test_palette_follows_variant_order() {
    let controller = controller();
    let palette = controller.palette();
    assert_eq!(palette.len(), controller.variant().modules.len());
    assert_eq!(palette[0].kind, ModuleKind::Vitals);
}

#[test]
fn test_add_and_remove_modules() {
    let controller = controller();
    let id = controller.add_module(ModuleKind::Vitals);
    assert_eq!(controller.instances().len(), 1);

    assert!(controller.remove_module(id));
    assert!(controller.instances().is_empty());
    assert!(!controller.remove_module(id));
}

#[test]
fn test_adjust_repeat_through_controller() {
    let controller = controller();
    let id = controller.add_module(ModuleKind::Vitals);

    controller.adjust_repeat(id, 1);
    assert_eq!(controller.instances()[0].repeat, Some(2));

    controller.adjust_repeat(id, -5);
    assert_eq!(controller.instances()[0].repeat, Some(1));
}

#[test]
fn test_preview_tracks_edits() {
    let controller = controller();
    controller.set_header("protocol", "XYZ-9");
    controller.add_module(ModuleKind::Labs);

    let text = controller.preview_text();
    assert!(text.contains("XYZ-9"));
    assert!(text.contains("LABORATORY SAMPLING"));
}

#[test]
fn test_validation_message_for_bad_date() {
    let controller = controller();
    assert_eq!(controller.validation_message(), None);

    controller.set_header("visit-date", "31-FEB-2025");
    let message = controller.validation_message().expect("gate must trip");
    assert!(message.contains("Visit date"));

    controller.set_header("visit-date", "28-AUG-2025");
    assert_eq!(controller.validation_message(), None);
}

#[test]
fn test_field_message_only_for_date_fields() {
    let controller = controller();
    controller.set_header("protocol", "not a date");
    assert_eq!(controller.field_message("protocol"), None);

    controller.set_header("visit-date", "not a date");
    assert!(controller.field_message("visit-date").is_some());

    controller.set_header("visit-date", "");
    assert_eq!(controller.field_message("visit-date"), None);
}

#[test]
fn test_suggested_file_name_tracks_title() {
    let controller = controller();
    controller.set_header("title", "ABC-123 Visit 2");
    assert_eq!(
        controller.suggested_file_name(),
        "ABC_123_Visit_2_source_document.html"
    );
}

#[test]
fn test_export_to_writes_the_document() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("visit.html");

    let controller = controller();
    controller.set_header("title", "ABC-123");
    controller.set_header("visit-date", "2025-08-28");
    let id = controller.add_module(ModuleKind::Vitals);
    controller.adjust_repeat(id, 1);

    controller.export_to(&path).expect("export succeeds");

    let html = fs::read_to_string(&path).expect("file readable");
    assert!(html.contains("28-AUG-2025"));
    assert_eq!(html.matches("<h3>Reading ").count(), 2);
}

#[test]
fn test_export_to_blocked_by_gate() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("visit.html");

    let controller = controller();
    controller.set_header("visit-date", "garbage");

    assert!(controller.export_to(&path).is_err());
    assert!(!path.exists());

    // The preview still renders best-effort while export is blocked
    assert!(controller.preview_text().contains("garbage"));
}
