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

//! Header-field form component
//!
//! One labelled entry per header-schema field of the active variant. Edits
//! flow straight into the controller; date fields additionally show an
//! inline validation message while their value does not normalize.

use gtk4::{prelude::*, Align, Entry, Frame, Grid, Label};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::types::FieldKind;
use crate::ui::components::{notify, ChangedCallback};
use crate::ui::Controller;

/// Form for the document-level header fields
pub struct HeaderForm {
    /// Root widget (framed grid)
    widget: Frame,
    /// Change-notification slot installed by the layout builder
    on_changed: ChangedCallback,
}

impl HeaderForm {
    /// Builds the form from the variant's header schema.
    ///
    /// The schema is a closed set; the form is the only writer of header
    /// values, so unknown keys can never reach the store from here.
    pub fn new(controller: Rc<Controller>) -> Self {
        let on_changed: ChangedCallback = Rc::new(RefCell::new(None));

        let grid = Grid::builder()
            .row_spacing(6)
            .column_spacing(10)
            .margin_start(10)
            .margin_end(10)
            .margin_top(10)
            .margin_bottom(10)
            .build();

        let mut row = 0;
        for field in &controller.variant().header_fields {
            let label = Label::builder()
                .label(field.label.as_str())
                .halign(Align::End)
                .xalign(1.0)
                .build();
            grid.attach(&label, 0, row, 1, 1);

            let entry = Entry::builder().hexpand(true).build();
            if field.kind == FieldKind::Date {
                entry.set_placeholder_text(Some("DD-MON-YYYY"));
            }
            grid.attach(&entry, 1, row, 1, 1);
            row += 1;

            // Inline message row, only ever shown for date fields
            let message = match field.kind {
                FieldKind::Date => {
                    let message = Label::builder().xalign(0.0).visible(false).build();
                    message.add_css_class("field-error");
                    grid.attach(&message, 1, row, 1, 1);
                    row += 1;
                    Some(message)
                }
                FieldKind::Text | FieldKind::Time => None,
            };

            let key = field.key.clone();
            let controller_for_entry = controller.clone();
            let on_changed_for_entry = on_changed.clone();
            entry.connect_changed(move |entry| {
                let value = entry.text().to_string();
                controller_for_entry.set_header(&key, &value);

                if let Some(message) = &message {
                    match controller_for_entry.field_message(&key) {
                        Some(text) => {
                            message.set_text(&text);
                            message.set_visible(true);
                        }
                        None => message.set_visible(false),
                    }
                }

                notify(&on_changed_for_entry);
            });
        }

        let widget = Frame::builder().label("Document header").build();
        widget.set_child(Some(&grid));

        Self { widget, on_changed }
    }

    /// Installs the change callback (refresh preview, banner, ...).
    pub fn set_on_changed(&self, callback: Rc<dyn Fn()>) {
        *self.on_changed.borrow_mut() = Some(callback);
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Frame {
        &self.widget
    }
}
