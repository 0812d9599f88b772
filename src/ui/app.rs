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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to hold and mutate data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller for the chosen variant
//!   ├─ Builds main window (form | preview)
//!   └─ Connects components and actions to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::core::variant::VariantConfig;
use crate::ui::builders::{handlers, header, layout};
use crate::ui::{actions, Controller};

/// GTK4 Application for source-document building
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App for the given variant configuration.
    pub fn new(variant: VariantConfig) -> Self {
        let app = Application::builder()
            .application_id("io.github.maraellison.source-doc-builder")
            .build();

        let controller = Rc::new(Controller::new(variant));

        Self { app, controller }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the window closes.
    pub fn run(self) {
        let controller = self.controller.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    ///
    /// Applies the CSS from `style.css` to the default display
    /// at APPLICATION priority level.
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        // Apply CSS to the default display
        gtk4::style_context_add_provider_for_display(
            &gdk::Display::default().expect("Could not connect to a display"),
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window and wires everything together.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title(controller.variant().title.as_str())
            .default_width(1150)
            .default_height(780)
            .build();

        window.set_titlebar(Some(&header::build_header_bar()));

        let (main_vbox, header_form, palette, instance_list, preview_panel, validation_panel) =
            layout::build_main_layout(controller.clone());

        handlers::wire_up_handlers(
            controller.clone(),
            header_form,
            palette,
            instance_list,
            preview_panel,
            validation_panel.clone(),
        );

        actions::setup_quit_action(app);
        actions::setup_export_action(app, &window, controller.clone(), validation_panel);
        actions::setup_print_action(app, controller);

        window.set_child(Some(&main_vbox));
        window.present();
    }
}
