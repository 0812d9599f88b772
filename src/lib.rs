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

//! Source Document Builder
//!
//! A desktop tool for clinical-research site staff to assemble a visit
//! "source document" (a paper-like record template) from a fixed library of
//! section modules, preview it live, and export it as a print-ready document.
//!
//! # Features
//!
//! - **Module catalog:** One static registry of section templates (vitals,
//!   ECG, labs, consent checklist, ...) shared by every render path
//! - **Dual rendering:** On-screen preview and exported document are thin
//!   projections of the same catalog data and never drift apart
//! - **Date normalization:** Free-text dates validated and normalized to
//!   `DD-MON-YYYY` before export
//! - **App variants:** Header schema, module palette, and disclaimer text are
//!   configuration data, not duplicated code
//! - **Atomic exports:** Documents are written with temp-file-then-rename
//!   commits; a failed export never leaves a partial file
//! - **GTK4 Interface:** Single-window form with live preview (MVC pattern)
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, catalog, dates, store, validation,
//!   variants)
//! - **`render`:** The dual renderer (shared projection, preview text,
//!   export document)
//! - **`export`:** File operations (filename sanitization, atomic writes)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Normalizing a visit date
//!
//! ```
//! use source_doc_builder::core::dates;
//!
//! assert_eq!(dates::normalize_str("2025-08-28").as_deref(), Some("28-AUG-2025"));
//! assert_eq!(dates::normalize_str("31-FEB-2025"), None);
//! ```
//!
//! ## Building and rendering a document
//!
//! ```
//! use source_doc_builder::core::store::DocumentStore;
//! use source_doc_builder::core::types::ModuleKind;
//! use source_doc_builder::core::variant::VariantConfig;
//! use source_doc_builder::render::preview::render_preview;
//!
//! let variant = VariantConfig::builtin("standard").expect("built-in variant");
//! let mut store = DocumentStore::for_variant(&variant);
//! store.set_header("title", "ABC-123 Visit 2");
//! store.add_module(ModuleKind::Vitals);
//!
//! let text = render_preview(&variant, &store);
//! assert!(text.contains("VITAL SIGNS"));
//! ```

pub mod core;
pub mod export;
pub mod render;
pub mod ui;
