//! Reusable UI components
//!
//! Each component owns its root widget and exposes it via `widget()`;
//! cross-component wiring happens in `builders/`, not here.

mod header_form;
mod instance_list;
mod module_palette;
mod preview_panel;
mod validation_panel;

pub use header_form::HeaderForm;
pub use instance_list::InstanceList;
pub use module_palette::ModulePalette;
pub use preview_panel::PreviewPanel;
pub use validation_panel::ValidationPanel;

use std::cell::RefCell;
use std::rc::Rc;

/// Shared change-notification slot.
///
/// Components that mutate the document store invoke this after the change;
/// the layout builder installs a callback that refreshes the dependent
/// views (list, preview, validation banner).
pub type ChangedCallback = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

/// Invokes the installed callback, if any.
pub(crate) fn notify(callback: &ChangedCallback) {
    let current = callback.borrow().clone();
    if let Some(callback) = current {
        callback();
    }
}
