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

//! src/render/mod.rs
//!
//! The dual renderer
//!
//! A document renders twice: as on-screen preview text and as the exported
//! print-ready document. The two outputs must present the same
//! catalog-derived content for every module instance, repeated exactly
//! `repeat` times for repeatable kinds, with the same computed header
//! values. To make drift impossible rather than merely tested-against, the
//! module content is projected ONCE here, into [`Section`]s of [`Block`]s,
//! and the two render paths in `preview` and `document` are thin
//! serializations of that shared projection.
//!
//! Date-kind header values are shown in canonical `DD-MON-YYYY` form when
//! they normalize, and raw otherwise (best-effort; the export gate in
//! `core::validator` decides whether the document may leave the building).

pub mod document;
pub mod preview;

use crate::core::catalog;
use crate::core::dates;
use crate::core::store::DocumentStore;
use crate::core::types::{FieldKind, ModuleInstance, Prompt};
use crate::core::variant::VariantConfig;

/// One rendered section: a module instance's heading plus its blocks.
#[derive(Debug)]
pub struct Section {
    /// Section heading (the instance's frozen title)
    pub heading: String,
    /// One block per repeat for repeatable kinds; exactly one otherwise
    pub blocks: Vec<Block>,
}

/// One run of section content.
#[derive(Debug)]
pub struct Block {
    /// Repeat label ("Reading 1", "Sample 2", ...); `None` for
    /// non-repeatable sections
    pub label: Option<String>,
    /// The catalog's fixed prompt list for this module kind
    pub prompts: &'static [Prompt],
}

/// Projects the header schema and values into ordered (label, value) rows.
pub fn header_rows(variant: &VariantConfig, store: &DocumentStore) -> Vec<(String, String)> {
    variant
        .header_fields
        .iter()
        .map(|field| {
            let raw = store.header_value(&field.key);
            let value = match field.kind {
                FieldKind::Date => {
                    dates::normalize_str(raw).unwrap_or_else(|| raw.to_string())
                }
                FieldKind::Text | FieldKind::Time => raw.to_string(),
            };
            (field.label.clone(), value)
        })
        .collect()
}

/// Projects every module instance into sections, in document order.
pub fn document_sections(store: &DocumentStore) -> Vec<Section> {
    store.instances().iter().map(section_for).collect()
}

fn section_for(instance: &ModuleInstance) -> Section {
    let template = catalog::template(instance.kind);

    let blocks = match template.repeat_unit {
        Some(unit) => (1..=instance.effective_repeat())
            .map(|n| Block {
                label: Some(format!("{unit} {n}")),
                prompts: template.prompts,
            })
            .collect(),
        None => vec![Block {
            label: None,
            prompts: template.prompts,
        }],
    };

    Section {
        heading: instance.title.clone(),
        blocks,
    }
}

#[cfg(test)]
mod tests;
