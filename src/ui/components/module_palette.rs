//! Module palette component
//!
//! A selector over the variant's enabled module kinds plus the "Add
//! section" button. The selector is a closed list driven by the catalog,
//! so an unknown module type cannot be requested from the UI.

use gtk4::{prelude::*, Box as GtkBox, Button, DropDown, Orientation, StringList};
use std::rc::Rc;

use crate::core::types::ModuleKind;
use crate::ui::Controller;

/// Selector-plus-button strip for adding module instances
pub struct ModulePalette {
    /// Root widget (horizontal box)
    widget: GtkBox,
    /// The kind selector
    dropdown: DropDown,
    /// The add button (wired by the layout builder)
    add_button: Button,
    /// Kinds in the same order as the dropdown entries
    kinds: Vec<ModuleKind>,
}

impl ModulePalette {
    /// Builds the palette from the variant's module list.
    pub fn new(controller: Rc<Controller>) -> Self {
        let templates = controller.palette();
        let kinds: Vec<ModuleKind> = templates.iter().map(|t| t.kind).collect();
        let labels: Vec<&str> = templates.iter().map(|t| t.label).collect();

        let model = StringList::new(&labels);
        let dropdown = DropDown::builder().model(&model).hexpand(true).build();

        let add_button = Button::builder().label("➕ Add section").build();
        add_button.add_css_class("suggested-action");

        let widget = GtkBox::new(Orientation::Horizontal, 10);
        widget.append(&dropdown);
        widget.append(&add_button);

        Self {
            widget,
            dropdown,
            add_button,
            kinds,
        }
    }

    /// The currently selected kind, if any.
    pub fn selected_kind(&self) -> Option<ModuleKind> {
        self.kinds.get(self.dropdown.selected() as usize).copied()
    }

    /// The add button, for wiring in the layout builder.
    pub fn add_button(&self) -> &Button {
        &self.add_button
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
