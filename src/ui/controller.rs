//! MVC Controller - Mediates between Model (DocumentStore) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Own the active variant configuration and the document store
//! - Apply header edits and module add/remove/repeat operations
//! - Produce the preview text and the export-gate validation message
//! - Run exports and the print view
//!
//! # Architecture
//!
//! The Controller holds the model behind `RefCell` but doesn't know about
//! GTK4 widgets. This keeps business logic separate from presentation and
//! lets the controller be tested without a display server.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

use crate::core::catalog::{self, ModuleTemplate};
use crate::core::store::DocumentStore;
use crate::core::types::{FieldKind, ModuleInstance, ModuleKind};
use crate::core::validator::validate_for_export;
use crate::core::variant::VariantConfig;
use crate::export::{self, ExportError};
use crate::render::document::render_document;
use crate::render::preview::render_preview;

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Active app-variant configuration (fixed for the session)
    variant: VariantConfig,
    /// The document being assembled (shared mutable state, single thread)
    store: RefCell<DocumentStore>,
}

impl Controller {
    /// Creates a controller with an empty document for the given variant.
    pub fn new(variant: VariantConfig) -> Self {
        let store = RefCell::new(DocumentStore::for_variant(&variant));
        Self { variant, store }
    }

    /// The active variant configuration.
    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    /// The module palette for this variant, in configured order.
    pub fn palette(&self) -> Vec<&'static ModuleTemplate> {
        self.variant
            .modules
            .iter()
            .map(|kind| catalog::template(*kind))
            .collect()
    }

    /// Sets one header value (unknown keys are a store-level no-op).
    pub fn set_header(&self, key: &str, value: &str) {
        self.store.borrow_mut().set_header(key, value);
    }

    /// Current header value; empty string when unset.
    pub fn header_value(&self, key: &str) -> String {
        self.store.borrow().header_value(key).to_string()
    }

    /// Appends a module instance; returns its id.
    pub fn add_module(&self, kind: ModuleKind) -> Uuid {
        self.store.borrow_mut().add_module(kind).id
    }

    /// Removes a module instance; false when the id is unknown.
    pub fn remove_module(&self, id: Uuid) -> bool {
        self.store.borrow_mut().remove_module(id)
    }

    /// Adjusts a repeat count by delta (floored at 1 by the store).
    pub fn adjust_repeat(&self, id: Uuid, delta: i32) -> bool {
        self.store.borrow_mut().adjust_repeat(id, delta)
    }

    /// A snapshot of the current instances, in document order.
    pub fn instances(&self) -> Vec<ModuleInstance> {
        self.store.borrow().instances().to_vec()
    }

    /// The current preview text (always renders, best-effort).
    pub fn preview_text(&self) -> String {
        render_preview(&self.variant, &self.store.borrow())
    }

    /// The export-gate failure message, if the document cannot export.
    pub fn validation_message(&self) -> Option<String> {
        validate_for_export(&self.variant, &self.store.borrow())
            .err()
            .map(|e| e.to_string())
    }

    /// Inline message for one header field, if its value is invalid.
    ///
    /// Only Date-kind fields produce messages; a non-empty value that does
    /// not normalize blocks export, so the form flags it at the field.
    pub fn field_message(&self, key: &str) -> Option<String> {
        let field = self.variant.field(key)?;
        if field.kind != FieldKind::Date {
            return None;
        }
        let value = self.header_value(key);
        if value.trim().is_empty() || crate::core::dates::is_valid(&value) {
            None
        } else {
            Some("Not a valid date (expected DD-MON-YYYY, e.g. 28-AUG-2025)".to_string())
        }
    }

    /// Suggested export file name for the current document.
    pub fn suggested_file_name(&self) -> String {
        export::suggested_file_name(&self.variant, &self.store.borrow())
    }

    /// Validates, renders, and writes the document to `path`.
    pub fn export_to(&self, path: &Path) -> Result<(), ExportError> {
        export::export_document(&self.variant, &self.store.borrow(), path)
    }

    /// Opens the print view: the export rendering written to a temp file
    /// and handed to the desktop's opener.
    ///
    /// The print view shares the preview's best-effort behaviour - it is a
    /// view of the document, not an export, so the gate does not apply.
    pub fn open_print_view(&self) -> Result<PathBuf, ExportError> {
        let html = render_document(&self.variant, &self.store.borrow());
        let path = std::env::temp_dir().join("source-doc-print-view.html");
        export::write_document(&path, &html)?;
        Command::new("xdg-open").arg(&path).spawn()?;
        Ok(path)
    }
}
