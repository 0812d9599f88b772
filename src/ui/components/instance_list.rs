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

//! Module instance list component
//!
//! Displays the placed sections in document order. Each row shows the
//! section title, repeat controls for repeatable kinds (decrement floors at
//! 1 in the store), and a remove button. The list is append-only; rows
//! cannot be reordered.

use gtk4::{prelude::*, Box as GtkBox, Button, Label, ListBox, Orientation, ScrolledWindow};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::catalog;
use crate::core::types::ModuleInstance;
use crate::ui::components::{notify, ChangedCallback};
use crate::ui::Controller;

/// Displays a scrollable list of placed module instances
pub struct InstanceList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// List box containing rows
    list_box: ListBox,
    /// Controller reference for data access
    controller: Rc<Controller>,
    /// Change-notification slot installed by the layout builder
    on_changed: ChangedCallback,
}

impl InstanceList {
    /// Creates an empty instance list.
    pub fn new(controller: Rc<Controller>) -> Self {
        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .build();

        let widget = ScrolledWindow::builder().hexpand(true).vexpand(true).build();
        widget.set_child(Some(&list_box));

        Self {
            widget,
            list_box,
            controller,
            on_changed: Rc::new(RefCell::new(None)),
        }
    }

    /// Installs the change callback (refresh list, preview, banner, ...).
    pub fn set_on_changed(&self, callback: Rc<dyn Fn()>) {
        *self.on_changed.borrow_mut() = Some(callback);
    }

    /// Rebuilds the rows from the controller's current instances.
    pub fn refresh(&self) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        for (index, instance) in self.controller.instances().iter().enumerate() {
            let row = self.create_row(instance, index);
            self.list_box.append(&row);
        }
    }

    /// Create a single row widget for an instance
    fn create_row(&self, instance: &ModuleInstance, index: usize) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        if index % 2 == 0 {
            row.add_css_class("even-row");
        } else {
            row.add_css_class("odd-row");
        }

        let title = Label::builder().xalign(0.0).hexpand(true).build();
        title.set_markup(&format!(
            "<b>{}</b>",
            glib::markup_escape_text(&instance.title)
        ));
        row.append(&title);

        let template = catalog::template(instance.kind);
        if let (Some(unit), Some(count)) = (template.repeat_unit, instance.repeat) {
            let decrement = Button::with_label("\u{2212}");
            let count_label =
                Label::new(Some(&format!("{} {}{}", count, unit.to_lowercase(),
                    if count == 1 { "" } else { "s" })));
            let increment = Button::with_label("+");

            let id = instance.id;
            let controller_for_decrement = self.controller.clone();
            let on_changed_for_decrement = self.on_changed.clone();
            decrement.connect_clicked(move |_| {
                controller_for_decrement.adjust_repeat(id, -1);
                notify(&on_changed_for_decrement);
            });

            let controller_for_increment = self.controller.clone();
            let on_changed_for_increment = self.on_changed.clone();
            increment.connect_clicked(move |_| {
                controller_for_increment.adjust_repeat(id, 1);
                notify(&on_changed_for_increment);
            });

            row.append(&decrement);
            row.append(&count_label);
            row.append(&increment);
        }

        let remove = Button::with_label("\u{2715}");
        remove.add_css_class("destructive-action");

        let id = instance.id;
        let controller_for_remove = self.controller.clone();
        let on_changed_for_remove = self.on_changed.clone();
        remove.connect_clicked(move |_| {
            eprintln!("🗑️  Removing section {}", id);
            controller_for_remove.remove_module(id);
            notify(&on_changed_for_remove);
        });
        row.append(&remove);

        row
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
