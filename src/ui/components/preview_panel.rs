//! Live preview panel component
//!
//! Shows the plain-text half of the dual renderer in a monospace view.
//! The panel re-renders the whole document on every refresh; the preview
//! is a pure projection, so there is no partial-update state to manage.

use gtk4::{prelude::*, ScrolledWindow, TextView, WrapMode};
use std::rc::Rc;

use crate::ui::Controller;

/// Read-only monospace view of the document preview
pub struct PreviewPanel {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// The text view showing the rendered preview
    view: TextView,
    /// Controller reference for data access
    controller: Rc<Controller>,
}

impl PreviewPanel {
    /// Creates the panel with an initial render.
    pub fn new(controller: Rc<Controller>) -> Self {
        let view = TextView::builder()
            .editable(false)
            .cursor_visible(false)
            .monospace(true)
            .wrap_mode(WrapMode::WordChar)
            .left_margin(12)
            .right_margin(12)
            .top_margin(12)
            .build();
        view.add_css_class("preview-view");

        let widget = ScrolledWindow::builder().hexpand(true).vexpand(true).build();
        widget.set_child(Some(&view));

        let panel = Self {
            widget,
            view,
            controller,
        };
        panel.refresh();
        panel
    }

    /// Re-renders the preview text.
    pub fn refresh(&self) {
        self.view.buffer().set_text(&self.controller.preview_text());
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
