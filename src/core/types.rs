//! src/core/types.rs
//!
//! Core type definitions for source-document building
//!
//! This module defines the fundamental types used throughout the application:
//! - `ModuleKind`: The closed set of section-module types
//! - `Prompt`: One line of fixed section content (field, checkbox, note, signature)
//! - `ModuleInstance`: A module placed into a document, with its repeat count
//! - `HeaderField` / `FieldKind`: The document-level header schema
//!
//! Config-facing types implement serialization with kebab-case tags so that
//! variant files and headless document files stay human-editable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// The closed set of section-module types
///
/// Every module a user can place into a document is one of these kinds.
/// The set is fixed at compile time; "unknown module type" is therefore
/// unrepresentable inside the application and only exists at string
/// boundaries (CLI arguments, JSON files), where parsing reports
/// [`UnknownModuleKind`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    Vitals,
    Ecg,
    Labs,
    Pk,
    PhysicalExam,
    NeuroExam,
    Imaging,
    Procedure,
    #[serde(rename = "investigational-product-accountability")]
    IpAccountability,
    Notes,
    NextAppointment,
    Attachments,
    Consent,
    Eligibility,
    Screening,
    Baseline,
    ConMeds,
    AdverseEvents,
    Randomization,
    Deviation,
    AdHoc,
}

/// Error returned when a string does not name a module kind.
#[derive(Debug, Error, PartialEq)]
#[error("Unknown module kind '{0}'")]
pub struct UnknownModuleKind(pub String);

impl ModuleKind {
    /// Every kind, in catalog order.
    pub const ALL: [ModuleKind; 21] = [
        ModuleKind::Vitals,
        ModuleKind::Ecg,
        ModuleKind::Labs,
        ModuleKind::Pk,
        ModuleKind::PhysicalExam,
        ModuleKind::NeuroExam,
        ModuleKind::Imaging,
        ModuleKind::Procedure,
        ModuleKind::IpAccountability,
        ModuleKind::Notes,
        ModuleKind::NextAppointment,
        ModuleKind::Attachments,
        ModuleKind::Consent,
        ModuleKind::Eligibility,
        ModuleKind::Screening,
        ModuleKind::Baseline,
        ModuleKind::ConMeds,
        ModuleKind::AdverseEvents,
        ModuleKind::Randomization,
        ModuleKind::Deviation,
        ModuleKind::AdHoc,
    ];

    /// The kebab-case tag used in variant files and document files.
    pub fn tag(&self) -> &'static str {
        match self {
            ModuleKind::Vitals => "vitals",
            ModuleKind::Ecg => "ecg",
            ModuleKind::Labs => "labs",
            ModuleKind::Pk => "pk",
            ModuleKind::PhysicalExam => "physical-exam",
            ModuleKind::NeuroExam => "neuro-exam",
            ModuleKind::Imaging => "imaging",
            ModuleKind::Procedure => "procedure",
            ModuleKind::IpAccountability => "investigational-product-accountability",
            ModuleKind::Notes => "notes",
            ModuleKind::NextAppointment => "next-appointment",
            ModuleKind::Attachments => "attachments",
            ModuleKind::Consent => "consent",
            ModuleKind::Eligibility => "eligibility",
            ModuleKind::Screening => "screening",
            ModuleKind::Baseline => "baseline",
            ModuleKind::ConMeds => "con-meds",
            ModuleKind::AdverseEvents => "adverse-events",
            ModuleKind::Randomization => "randomization",
            ModuleKind::Deviation => "deviation",
            ModuleKind::AdHoc => "ad-hoc",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ModuleKind {
    type Err = UnknownModuleKind;

    /// Parses a kebab-case tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| UnknownModuleKind(s.to_string()))
    }
}

/// One line of fixed section content
///
/// Prompts are the literal text a module contributes to a rendered document.
/// They live in the static catalog and are never user-editable; both render
/// paths project the same prompts into their own output format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Prompt {
    /// A fill-in field with a label (e.g., "Heart rate (bpm)")
    Field(&'static str),
    /// A checkbox with a label
    Checkbox(&'static str),
    /// A free-standing instruction line
    Note(&'static str),
    /// A signature-and-date line
    Signature(&'static str),
}

impl Prompt {
    /// The literal prompt text, independent of presentation.
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::Field(text)
            | Prompt::Checkbox(text)
            | Prompt::Note(text)
            | Prompt::Signature(text) => text,
        }
    }
}

/// One occurrence of a module placed into a document
///
/// Created by [`DocumentStore::add_module`](crate::core::store::DocumentStore::add_module).
/// The title is copied from the catalog label at creation time and frozen;
/// it does not track later catalog changes. The repeat count is present only
/// for repeatable kinds and is kept at 1 or above by the store.
#[derive(Clone, Debug)]
pub struct ModuleInstance {
    /// Unique identifier for the session lifetime
    pub id: Uuid,
    /// Which catalog entry this instance refers to
    pub kind: ModuleKind,
    /// Section heading, frozen at creation from the catalog label
    pub title: String,
    /// Repeat count (readings/samples); `None` for non-repeatable kinds
    pub repeat: Option<u32>,
    /// Free-form extra data reserved for module-specific fields
    pub extra: HashMap<String, String>,
}

impl ModuleInstance {
    /// Creates an instance with a fresh id.
    pub fn new(kind: ModuleKind, title: &str, repeat: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            repeat,
            extra: HashMap::new(),
        }
    }

    /// The number of content blocks this instance renders.
    pub fn effective_repeat(&self) -> u32 {
        self.repeat.unwrap_or(1).max(1)
    }
}

/// How a header field's value is interpreted
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Free text
    #[default]
    Text,
    /// Calendar date, normalized to `DD-MON-YYYY`; gates export when invalid
    Date,
    /// Clock time, free text (24h convention)
    Time,
}

/// One entry of a variant's document-level header schema
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HeaderField {
    /// Stable key used by the store and document files
    pub key: String,
    /// Human-readable label shown in the form and both render paths
    pub label: String,
    /// Value interpretation
    #[serde(default)]
    pub kind: FieldKind,
}

impl HeaderField {
    pub fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}
