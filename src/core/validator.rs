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

//! Pre-export document validation
//!
//! The export path is gated: a document with a non-empty date field that
//! fails normalization must not be exported. The preview path deliberately
//! never consults this module; it renders best-effort with the raw value so
//! the user can see what they typed while they correct it.
//!
//! Header fields are all optional, so an empty date value passes the gate
//! and renders blank in both paths.

use thiserror::Error;

use crate::core::dates;
use crate::core::store::DocumentStore;
use crate::core::types::FieldKind;
use crate::core::variant::VariantConfig;

/// Validation errors that block an export.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A non-empty date header value does not normalize.
    #[error("{label}: '{value}' is not a valid date (expected DD-MON-YYYY, e.g. 28-AUG-2025)")]
    InvalidDate { label: String, value: String },

    /// A repeat count dropped below 1. The store floors counts on every
    /// mutation, so this only fires on a store-invariant bug.
    #[error("Section '{title}' has an invalid repeat count")]
    InvalidRepeat { title: String },
}

/// Checks a document against the export gate.
///
/// Returns the first failure; the GUI surfaces it as a banner message and
/// the CLI as a red error line.
pub fn validate_for_export(
    variant: &VariantConfig,
    store: &DocumentStore,
) -> Result<(), ValidationError> {
    for field in &variant.header_fields {
        if field.kind != FieldKind::Date {
            continue;
        }
        let value = store.header_value(&field.key);
        if !value.trim().is_empty() && !dates::is_valid(value) {
            return Err(ValidationError::InvalidDate {
                label: field.label.clone(),
                value: value.to_string(),
            });
        }
    }

    for instance in store.instances() {
        if matches!(instance.repeat, Some(0)) {
            return Err(ValidationError::InvalidRepeat {
                title: instance.title.clone(),
            });
        }
    }

    Ok(())
}
