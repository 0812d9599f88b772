//! Event handler setup
//!
//! Wires up the cross-component event handlers for the main UI:
//! - Header edits refresh the preview and the validation banner
//! - The palette's add button appends a module instance
//! - Instance-row buttons (repeat +/-, remove) refresh everything

use std::rc::Rc;

use gtk4::prelude::*;

use crate::ui::components::{HeaderForm, InstanceList, ModulePalette, PreviewPanel, ValidationPanel};
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
pub fn wire_up_handlers(
    controller: Rc<Controller>,
    header_form: Rc<HeaderForm>,
    palette: Rc<ModulePalette>,
    instance_list: Rc<InstanceList>,
    preview_panel: Rc<PreviewPanel>,
    validation_panel: Rc<ValidationPanel>,
) {
    // ============================================================================
    // Shared refresh: everything that projects the store re-renders
    // ============================================================================
    let instance_list_for_refresh = instance_list.clone();
    let preview_panel_for_refresh = preview_panel.clone();
    let validation_panel_for_refresh = validation_panel.clone();

    let refresh_all: Rc<dyn Fn()> = Rc::new(move || {
        instance_list_for_refresh.refresh();
        preview_panel_for_refresh.refresh();
        validation_panel_for_refresh.refresh();
    });

    // Header edits never change the instance rows, so they skip the list
    let preview_panel_for_header = preview_panel.clone();
    let validation_panel_for_header = validation_panel.clone();
    header_form.set_on_changed(Rc::new(move || {
        preview_panel_for_header.refresh();
        validation_panel_for_header.refresh();
    }));

    instance_list.set_on_changed(refresh_all.clone());

    // ============================================================================
    // Add button handler
    // ============================================================================
    let palette_for_add = palette.clone();
    let refresh_for_add = refresh_all.clone();
    palette.add_button().connect_clicked(move |_| {
        if let Some(kind) = palette_for_add.selected_kind() {
            eprintln!("➕ Adding section: {}", kind);
            controller.add_module(kind);
            refresh_for_add();
        }
    });
}
