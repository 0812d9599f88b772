//! src/core/variant.rs
//!
//! App-variant configuration
//!
//! The builder historically shipped as several near-identical applications
//! whose module palettes, header fields, and disclaimer text drifted apart.
//! A variant collapses one of those applications into data: the header
//! schema, the enabled module kinds, the brand/disclaimer text, and the
//! header key used to name export files. One shared implementation of the
//! catalog, store, and renderers consumes whichever variant is active.
//!
//! Four built-ins cover the shipped configurations; a custom variant can be
//! loaded from a JSON file with the same shape.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::types::{FieldKind, HeaderField, ModuleKind};

/// Errors resolving or loading a variant.
#[derive(Debug, Error)]
pub enum VariantError {
    #[error("Unknown variant '{0}' (built-ins: standard, screening, dosing, follow-up)")]
    UnknownVariant(String),

    #[error("Failed to read variant file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid variant JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration of one app variant.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VariantConfig {
    /// Short identifier (`standard`, `screening`, ...)
    pub name: String,
    /// Document title shown at the top of both render paths
    pub title: String,
    /// Disclaimer line rendered after the header table
    pub disclaimer: String,
    /// Ordered header schema; also the store's closed key set
    pub header_fields: Vec<HeaderField>,
    /// Enabled module kinds, in palette order
    pub modules: Vec<ModuleKind>,
    /// Header key whose value names the export file
    #[serde(default = "default_file_name_field")]
    pub file_name_field: String,
}

fn default_file_name_field() -> String {
    "title".to_string()
}

impl VariantConfig {
    /// The built-in variant names.
    pub fn builtin_names() -> &'static [&'static str] {
        &["standard", "screening", "dosing", "follow-up"]
    }

    /// Returns a built-in variant by name.
    pub fn builtin(name: &str) -> Option<VariantConfig> {
        match name {
            "standard" => Some(standard()),
            "screening" => Some(screening()),
            "dosing" => Some(dosing()),
            "follow-up" => Some(follow_up()),
            _ => None,
        }
    }

    /// Resolves a built-in name, reporting unknown names as an error.
    pub fn resolve(name: &str) -> Result<VariantConfig, VariantError> {
        Self::builtin(name).ok_or_else(|| VariantError::UnknownVariant(name.to_string()))
    }

    /// Loads a custom variant from a JSON file.
    pub fn load(path: &Path) -> Result<VariantConfig, VariantError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The schema entry for a header key, if the variant carries it.
    pub fn field(&self, key: &str) -> Option<&HeaderField> {
        self.header_fields.iter().find(|field| field.key == key)
    }
}

/// Header fields shared by every built-in variant.
fn base_header() -> Vec<HeaderField> {
    vec![
        HeaderField::new("protocol", "Protocol", FieldKind::Text),
        HeaderField::new("title", "Document title", FieldKind::Text),
        HeaderField::new("site", "Site number", FieldKind::Text),
        HeaderField::new("investigator", "Investigator", FieldKind::Text),
        HeaderField::new("subject", "Subject number", FieldKind::Text),
        HeaderField::new("initials", "Subject initials", FieldKind::Text),
        HeaderField::new("visit", "Visit", FieldKind::Text),
        HeaderField::new("visit-date", "Visit date", FieldKind::Date),
    ]
}

fn standard() -> VariantConfig {
    let mut header_fields = base_header();
    header_fields.push(HeaderField::new("visit-time", "Visit time", FieldKind::Time));
    header_fields.push(HeaderField::new("staff", "Completed by", FieldKind::Text));

    VariantConfig {
        name: "standard".to_string(),
        title: "Clinical Visit Source Document".to_string(),
        disclaimer: "This source document is the original record of the visit. Complete all \
                     entries in ink, sign and date each section, and file the original in the \
                     site source binder before transcription into the EDC."
            .to_string(),
        header_fields,
        modules: vec![
            ModuleKind::Vitals,
            ModuleKind::Ecg,
            ModuleKind::Labs,
            ModuleKind::PhysicalExam,
            ModuleKind::Imaging,
            ModuleKind::Procedure,
            ModuleKind::IpAccountability,
            ModuleKind::ConMeds,
            ModuleKind::AdverseEvents,
            ModuleKind::Notes,
            ModuleKind::NextAppointment,
            ModuleKind::Attachments,
        ],
        file_name_field: default_file_name_field(),
    }
}

fn screening() -> VariantConfig {
    VariantConfig {
        name: "screening".to_string(),
        title: "Screening Visit Source Document".to_string(),
        disclaimer: "Screening record. Confirm informed consent is signed and dated before any \
                     screening procedure is performed."
            .to_string(),
        header_fields: base_header(),
        modules: vec![
            ModuleKind::Consent,
            ModuleKind::Eligibility,
            ModuleKind::Screening,
            ModuleKind::Baseline,
            ModuleKind::Vitals,
            ModuleKind::PhysicalExam,
            ModuleKind::NeuroExam,
            ModuleKind::Ecg,
            ModuleKind::Labs,
            ModuleKind::Imaging,
            ModuleKind::Notes,
            ModuleKind::NextAppointment,
        ],
        file_name_field: default_file_name_field(),
    }
}

fn dosing() -> VariantConfig {
    let mut header_fields = base_header();
    header_fields.push(HeaderField::new("visit-time", "Visit time", FieldKind::Time));
    header_fields.push(HeaderField::new("staff", "Completed by", FieldKind::Text));

    VariantConfig {
        name: "dosing".to_string(),
        title: "Dosing Visit Source Document".to_string(),
        disclaimer: "Dosing visit record. Verify the randomization assignment and record actual \
                     clock times for all dosing and sampling activities."
            .to_string(),
        header_fields,
        modules: vec![
            ModuleKind::Vitals,
            ModuleKind::Ecg,
            ModuleKind::Pk,
            ModuleKind::IpAccountability,
            ModuleKind::Randomization,
            ModuleKind::ConMeds,
            ModuleKind::AdverseEvents,
            ModuleKind::Notes,
            ModuleKind::NextAppointment,
        ],
        file_name_field: default_file_name_field(),
    }
}

fn follow_up() -> VariantConfig {
    let mut header_fields = base_header();
    header_fields.push(HeaderField::new("staff", "Completed by", FieldKind::Text));

    VariantConfig {
        name: "follow-up".to_string(),
        title: "Follow-up Visit Source Document".to_string(),
        disclaimer: "Follow-up visit record. Reconcile concomitant medications and adverse \
                     events against the previous visit before the subject leaves the site."
            .to_string(),
        header_fields,
        modules: vec![
            ModuleKind::Vitals,
            ModuleKind::Labs,
            ModuleKind::ConMeds,
            ModuleKind::AdverseEvents,
            ModuleKind::Deviation,
            ModuleKind::AdHoc,
            ModuleKind::Notes,
            ModuleKind::NextAppointment,
        ],
        file_name_field: default_file_name_field(),
    }
}
