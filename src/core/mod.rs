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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for source-document building, including:
//! - Type definitions for module kinds, prompts, and instances
//! - The static module catalog (single source of truth for section content)
//! - Date validation and normalization to `DD-MON-YYYY`
//! - The document store (header fields plus ordered module instances)
//! - Pre-export validation
//! - App-variant configuration
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod catalog;
pub mod dates;
pub mod store;
pub mod types;
pub mod validator;
pub mod variant;

pub use catalog::ModuleTemplate;
pub use store::DocumentStore;
pub use types::*;
pub use validator::{validate_for_export, ValidationError};
pub use variant::VariantConfig;

#[cfg(test)]
mod tests;
