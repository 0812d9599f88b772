use crate::core::catalog::{all, template};
use crate::core::types::{ModuleKind, Prompt};

#[test]
fn test_every_kind_has_a_template() {
    for kind in ModuleKind::ALL {
        let template = template(kind);
        assert_eq!(template.kind, kind);
        assert!(!template.label.is_empty());
        assert!(
            !template.prompts.is_empty(),
            "'{}' contributes no content",
            kind
        );
    }
}

#[test]
fn test_all_iterates_in_kind_order() {
    let kinds: Vec<ModuleKind> = all().map(|t| t.kind).collect();
    assert_eq!(kinds, ModuleKind::ALL.to_vec());
}

#[test]
fn test_repeatable_kinds() {
    // Repeatable sections and their block labels are fixed catalog data
    assert_eq!(template(ModuleKind::Vitals).repeat_unit, Some("Reading"));
    assert_eq!(template(ModuleKind::Ecg).repeat_unit, Some("Tracing"));
    assert_eq!(template(ModuleKind::Pk).repeat_unit, Some("Sample"));
    assert_eq!(template(ModuleKind::Procedure).repeat_unit, Some("Procedure"));
    assert_eq!(template(ModuleKind::AdHoc).repeat_unit, Some("Assessment"));

    assert!(!template(ModuleKind::Labs).repeatable());
    assert!(!template(ModuleKind::Consent).repeatable());
    assert!(!template(ModuleKind::Notes).repeatable());
}

#[test]
fn test_labels_are_distinct() {
    let mut labels: Vec<&str> = all().map(|t| t.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), ModuleKind::ALL.len());
}

#[test]
fn test_vitals_content() {
    let vitals = template(ModuleKind::Vitals);
    assert_eq!(vitals.label, "Vital Signs");

    let texts: Vec<&str> = vitals.prompts.iter().map(Prompt::text).collect();
    assert!(texts.contains(&"Systolic BP (mmHg)"));
    assert!(texts.contains(&"Heart rate (bpm)"));
    assert!(vitals
        .prompts
        .iter()
        .any(|p| matches!(p, Prompt::Signature(_))));
}

#[test]
fn test_consent_is_checklist_shaped() {
    let consent = template(ModuleKind::Consent);
    let checkboxes = consent
        .prompts
        .iter()
        .filter(|p| matches!(p, Prompt::Checkbox(_)))
        .count();
    assert!(checkboxes >= 4, "consent checklist lost its checkboxes");
}
