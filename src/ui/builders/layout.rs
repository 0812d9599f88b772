// Copyright 2025 Mara Ellison (maraellison@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::{
    components::{HeaderForm, InstanceList, ModulePalette, PreviewPanel, ValidationPanel},
    Controller,
};
use gtk4::{prelude::*, Box as GtkBox, Orientation, Paned};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Validation banner at top
/// - Paned layout with:
///   - Left: header form, module palette, instance list
///   - Right: live preview panel
///
/// # Returns
///
/// Tuple of (main_vbox, header_form, palette, instance_list, preview_panel,
/// validation_panel)
pub fn build_main_layout(
    controller: Rc<Controller>,
) -> (
    GtkBox,
    Rc<HeaderForm>,
    Rc<ModulePalette>,
    Rc<InstanceList>,
    Rc<PreviewPanel>,
    Rc<ValidationPanel>,
) {
    // Create main vertical box
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    // Validation banner at top
    let validation_panel = Rc::new(ValidationPanel::new(controller.clone()));
    main_vbox.append(validation_panel.widget());

    // Use PANED so the preview keeps a stable share of the window
    let paned = Paned::new(Orientation::Horizontal);

    // LEFT SIDE: header form + palette + instance list
    let left_vbox = GtkBox::new(Orientation::Vertical, 10);
    left_vbox.set_margin_start(10);
    left_vbox.set_margin_end(10);
    left_vbox.set_margin_bottom(10);
    left_vbox.set_margin_top(10);

    let header_form = Rc::new(HeaderForm::new(controller.clone()));
    left_vbox.append(header_form.widget());

    let palette = Rc::new(ModulePalette::new(controller.clone()));
    left_vbox.append(palette.widget());

    let instance_list = Rc::new(InstanceList::new(controller.clone()));
    left_vbox.append(instance_list.widget());

    // RIGHT SIDE: live preview
    let preview_panel = Rc::new(PreviewPanel::new(controller));

    paned.set_start_child(Some(&left_vbox));
    paned.set_end_child(Some(preview_panel.widget()));
    paned.set_position(520);
    paned.set_vexpand(true);

    main_vbox.append(&paned);

    (
        main_vbox,
        header_form,
        palette,
        instance_list,
        preview_panel,
        validation_panel,
    )
}
