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

//! Export-gate warning panel component
//!
//! Displays a warning banner at the top of the window while the document
//! would be refused by the export gate (an invalid date, for instance).
//! The preview keeps rendering while the banner is up; only export is
//! blocked.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ ⚠  Visit date: '2025-13-40' is not a valid date (...)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use gtk4::{prelude::*, Box as GtkBox, Label, Orientation, Revealer};
use std::rc::Rc;

use crate::ui::Controller;

/// Warning banner shown while the document cannot be exported
pub struct ValidationPanel {
    /// Root widget (Revealer for smooth show/hide animation)
    widget: Revealer,
    /// Label displaying the export-gate message
    message_label: Label,
    /// Controller for accessing validation state
    controller: Rc<Controller>,
}

impl ValidationPanel {
    /// Creates the panel, initially hidden.
    pub fn new(controller: Rc<Controller>) -> Self {
        let message_label = Label::builder().xalign(0.0).hexpand(true).build();
        message_label.set_wrap(true);

        let content = GtkBox::new(Orientation::Horizontal, 8);
        content.add_css_class("validation-banner");
        content.set_margin_start(10);
        content.set_margin_end(10);
        content.set_margin_top(6);
        content.set_margin_bottom(6);
        content.append(&Label::new(Some("\u{26a0}")));
        content.append(&message_label);

        let widget = Revealer::builder()
            .reveal_child(false)
            .transition_type(gtk4::RevealerTransitionType::SlideDown)
            .build();
        widget.set_child(Some(&content));

        Self {
            widget,
            message_label,
            controller,
        }
    }

    /// Shows or hides the banner based on the current export gate.
    pub fn refresh(&self) {
        match self.controller.validation_message() {
            Some(message) => {
                self.message_label.set_text(&message);
                self.widget.set_reveal_child(true);
            }
            None => self.widget.set_reveal_child(false),
        }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &Revealer {
        &self.widget
    }
}
