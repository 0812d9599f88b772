//! src/core/store.rs
//!
//! The document store: header values plus the ordered module-instance list
//!
//! The store owns every [`ModuleInstance`] exclusively. It is mutated only
//! by the explicit operations below, one user action at a time; there is no
//! reorder operation (the list is append-only) and no persistence (the
//! document is discarded with the session).

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use crate::core::catalog;
use crate::core::types::{ModuleInstance, ModuleKind};
use crate::core::variant::VariantConfig;

/// Errors reading a headless document file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory state of one source document being assembled.
#[derive(Debug)]
pub struct DocumentStore {
    /// Closed, ordered header key set (fixed by the variant schema)
    header_keys: Vec<String>,
    /// Current header values; absent keys render as empty strings
    header_values: HashMap<String, String>,
    /// Module instances in insertion order
    instances: Vec<ModuleInstance>,
}

impl DocumentStore {
    /// Creates an empty store accepting exactly the given header keys.
    pub fn new(header_keys: Vec<String>) -> Self {
        Self {
            header_keys,
            header_values: HashMap::new(),
            instances: Vec::new(),
        }
    }

    /// Creates an empty store for a variant's header schema.
    pub fn for_variant(variant: &VariantConfig) -> Self {
        Self::new(
            variant
                .header_fields
                .iter()
                .map(|field| field.key.clone())
                .collect(),
        )
    }

    /// Sets a header value.
    ///
    /// Keys outside the variant schema are a defensive no-op (returns
    /// false); the form never offers them, so hitting this path means a
    /// caller bug rather than user error.
    pub fn set_header(&mut self, key: &str, value: &str) -> bool {
        if !self.header_keys.iter().any(|k| k == key) {
            return false;
        }
        self.header_values.insert(key.to_string(), value.to_string());
        true
    }

    /// Current value for a header key; empty string when unset.
    pub fn header_value(&self, key: &str) -> &str {
        self.header_values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Appends a new instance of the given kind.
    ///
    /// The title is copied from the catalog label and frozen; the repeat
    /// count starts at 1 for repeatable kinds and is absent otherwise.
    pub fn add_module(&mut self, kind: ModuleKind) -> &ModuleInstance {
        let template = catalog::template(kind);
        let repeat = template.repeatable().then_some(1);
        self.instances
            .push(ModuleInstance::new(kind, template.label, repeat));
        // Just pushed, so the index is valid
        &self.instances[self.instances.len() - 1]
    }

    /// Removes the instance with the given id.
    ///
    /// Returns false (and changes nothing) when no such instance exists.
    pub fn remove_module(&mut self, id: Uuid) -> bool {
        let before = self.instances.len();
        self.instances.retain(|instance| instance.id != id);
        self.instances.len() != before
    }

    /// Adjusts a repeat count by `delta`, flooring at 1.
    ///
    /// No-op (returns false) for unknown ids and for non-repeatable kinds.
    pub fn adjust_repeat(&mut self, id: Uuid, delta: i32) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        let Some(current) = instance.repeat else {
            return false;
        };
        let next = i64::from(current) + i64::from(delta);
        instance.repeat = Some(next.max(1) as u32);
        true
    }

    /// The instances in insertion order.
    pub fn instances(&self) -> &[ModuleInstance] {
        &self.instances
    }

    /// Number of placed instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no module has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// A document described in a JSON file, for the headless CLI paths
///
/// ```json
/// {
///   "variant": "standard",
///   "header": { "title": "ABC-123", "visit-date": "2025-08-28" },
///   "modules": [ { "kind": "vitals", "repeat": 2 }, { "kind": "notes" } ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct DocumentFile {
    /// Built-in variant name; `standard` when absent
    #[serde(default)]
    pub variant: Option<String>,
    /// Header values keyed by the variant's header keys
    #[serde(default)]
    pub header: HashMap<String, String>,
    /// Modules in document order
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
}

/// One module entry of a [`DocumentFile`].
#[derive(Debug, Deserialize)]
pub struct ModuleEntry {
    pub kind: ModuleKind,
    /// Desired repeat count; ignored for non-repeatable kinds
    #[serde(default)]
    pub repeat: Option<u32>,
}

impl DocumentFile {
    /// Reads and parses a document file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Builds a store for `variant` from this description.
    ///
    /// Header keys outside the variant schema are dropped (the store's
    /// closed-key rule applies to files exactly as it does to the form).
    pub fn build_store(&self, variant: &VariantConfig) -> DocumentStore {
        let mut store = DocumentStore::for_variant(variant);

        for field in &variant.header_fields {
            if let Some(value) = self.header.get(&field.key) {
                store.set_header(&field.key, value);
            }
        }

        for entry in &self.modules {
            let id = store.add_module(entry.kind).id;
            if let Some(repeat) = entry.repeat {
                let delta = repeat.clamp(1, i32::MAX as u32) as i32 - 1;
                store.adjust_repeat(id, delta);
            }
        }

        store
    }
}
