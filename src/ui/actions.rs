//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, export, print)
//! and their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow, FileDialog};
use std::rc::Rc;

use crate::ui::components::ValidationPanel;
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
}

/// Sets up the export action
///
/// Opens a save dialog seeded with the sanitized document name, then
/// validates, renders, and writes the document. The write is the one
/// asynchronous unit of work in the app: it runs to completion or failure
/// in the dialog callback, with no cancellation path.
pub fn setup_export_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    validation_panel: Rc<ValidationPanel>,
) {
    let export_action = gio::SimpleAction::new("export", None);
    let controller_for_export = controller.clone();
    let window_for_export = window.clone();

    export_action.connect_activate(move |_, _| {
        eprintln!("💾 Export requested");

        let file_dialog = FileDialog::builder()
            .title("Export Source Document")
            .initial_name(controller_for_export.suggested_file_name().as_str())
            .build();

        let controller_clone = controller_for_export.clone();
        let validation_panel_clone = validation_panel.clone();

        file_dialog.save(
            Some(&window_for_export),
            None::<&gio::Cancellable>,
            move |result| match result {
                Ok(file) => {
                    let Some(path) = file.path() else {
                        eprintln!("❌ Export failed: target has no local path");
                        return;
                    };
                    eprintln!("💾 Exporting to: {:?}", path);

                    match controller_clone.export_to(&path) {
                        Ok(()) => eprintln!("✅ Export successful!"),
                        Err(e) => {
                            eprintln!("❌ Export failed: {}", e);
                            // Surface the gate failure in the banner too
                            validation_panel_clone.refresh();
                        }
                    }
                }
                Err(_) => eprintln!("🚫 Export cancelled"),
            },
        );
    });

    app.add_action(&export_action);
}

/// Sets up the print action
///
/// Renders the document through the export renderer into a temp file and
/// opens it with the desktop's opener for printing. This is a view, not an
/// export: the validation gate does not apply.
pub fn setup_print_action(app: &Application, controller: Rc<Controller>) {
    let print_action = gio::SimpleAction::new("print", None);

    print_action.connect_activate(move |_, _| {
        eprintln!("🖨️  Print view requested");
        match controller.open_print_view() {
            Ok(path) => eprintln!("✅ Print view opened: {:?}", path),
            Err(e) => eprintln!("❌ Print view failed: {}", e),
        }
    });

    app.add_action(&print_action);
}
