//! Static module catalog
//!
//! One [`ModuleTemplate`] per [`ModuleKind`]: the human-readable label,
//! whether (and how) the section repeats, and the literal section content.
//! This table is the single source of truth for section content; neither
//! render path may hard-code a label or prompt on its own.
//!
//! The catalog is pure data fixed at compile time. [`template`] is a total
//! match over the kind enum, so lookup cannot fail.

use crate::core::types::Prompt::{Checkbox, Field, Note, Signature};
use crate::core::types::{ModuleKind, Prompt};

/// Catalog entry describing one module kind.
#[derive(Debug)]
pub struct ModuleTemplate {
    /// The kind this template describes
    pub kind: ModuleKind,
    /// Human-readable section label; copied onto instances at creation
    pub label: &'static str,
    /// Block label for repeatable kinds ("Reading", "Sample", ...);
    /// `None` means the section renders exactly once
    pub repeat_unit: Option<&'static str>,
    /// The fixed content this section contributes to a document
    pub prompts: &'static [Prompt],
}

impl ModuleTemplate {
    /// Whether instances of this kind carry a repeat count.
    pub fn repeatable(&self) -> bool {
        self.repeat_unit.is_some()
    }
}

/// Looks up the template for a kind. Total over the enum.
pub fn template(kind: ModuleKind) -> &'static ModuleTemplate {
    match kind {
        ModuleKind::Vitals => &VITALS,
        ModuleKind::Ecg => &ECG,
        ModuleKind::Labs => &LABS,
        ModuleKind::Pk => &PK,
        ModuleKind::PhysicalExam => &PHYSICAL_EXAM,
        ModuleKind::NeuroExam => &NEURO_EXAM,
        ModuleKind::Imaging => &IMAGING,
        ModuleKind::Procedure => &PROCEDURE,
        ModuleKind::IpAccountability => &IP_ACCOUNTABILITY,
        ModuleKind::Notes => &NOTES,
        ModuleKind::NextAppointment => &NEXT_APPOINTMENT,
        ModuleKind::Attachments => &ATTACHMENTS,
        ModuleKind::Consent => &CONSENT,
        ModuleKind::Eligibility => &ELIGIBILITY,
        ModuleKind::Screening => &SCREENING,
        ModuleKind::Baseline => &BASELINE,
        ModuleKind::ConMeds => &CON_MEDS,
        ModuleKind::AdverseEvents => &ADVERSE_EVENTS,
        ModuleKind::Randomization => &RANDOMIZATION,
        ModuleKind::Deviation => &DEVIATION,
        ModuleKind::AdHoc => &AD_HOC,
    }
}

/// Iterates every template in catalog order.
pub fn all() -> impl Iterator<Item = &'static ModuleTemplate> {
    ModuleKind::ALL.iter().map(|kind| template(*kind))
}

static VITALS: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Vitals,
    label: "Vital Signs",
    repeat_unit: Some("Reading"),
    prompts: &[
        Field("Time (24h)"),
        Field("Position (sitting / supine / standing)"),
        Checkbox("Subject rested at least 5 minutes before measurement"),
        Field("Systolic BP (mmHg)"),
        Field("Diastolic BP (mmHg)"),
        Field("Heart rate (bpm)"),
        Field("Respiratory rate (breaths/min)"),
        Field("Temperature (C)"),
        Signature("Performed by"),
    ],
};

static ECG: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Ecg,
    label: "12-Lead ECG",
    repeat_unit: Some("Tracing"),
    prompts: &[
        Field("Time performed (24h)"),
        Field("Heart rate (bpm)"),
        Field("PR interval (ms)"),
        Field("QRS duration (ms)"),
        Field("QT / QTcF (ms)"),
        Field("Interpretation (normal / abnormal NCS / abnormal CS)"),
        Checkbox("Tracing reviewed and signed by investigator"),
        Signature("Reviewed by"),
    ],
};

static LABS: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Labs,
    label: "Laboratory Sampling",
    repeat_unit: None,
    prompts: &[
        Field("Collection date (DD-MON-YYYY)"),
        Field("Collection time (24h)"),
        Checkbox("Fasting status confirmed"),
        Checkbox("Haematology collected"),
        Checkbox("Biochemistry collected"),
        Checkbox("Urinalysis collected"),
        Field("Sample condition / comments"),
        Signature("Collected by"),
    ],
};

static PK: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Pk,
    label: "PK Sampling",
    repeat_unit: Some("Sample"),
    prompts: &[
        Field("Nominal timepoint"),
        Field("Actual draw time (24h)"),
        Field("Tube identifier"),
        Checkbox("Sample processed per laboratory manual"),
        Note("Record any deviation from the nominal window in the progress notes."),
        Signature("Drawn by"),
    ],
};

static PHYSICAL_EXAM: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::PhysicalExam,
    label: "Physical Examination",
    repeat_unit: None,
    prompts: &[
        Field("General appearance"),
        Field("Cardiovascular"),
        Field("Respiratory"),
        Field("Abdomen"),
        Field("Skin"),
        Field("Other findings"),
        Checkbox("Examination performed; abnormal findings recorded above"),
        Signature("Examined by"),
    ],
};

static NEURO_EXAM: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::NeuroExam,
    label: "Neurological Examination",
    repeat_unit: None,
    prompts: &[
        Field("Mental status"),
        Field("Cranial nerves"),
        Field("Motor function"),
        Field("Sensory function"),
        Field("Reflexes"),
        Field("Gait and coordination"),
        Signature("Examined by"),
    ],
};

static IMAGING: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Imaging,
    label: "Imaging",
    repeat_unit: None,
    prompts: &[
        Field("Modality (MRI / CT / X-ray / ultrasound)"),
        Field("Body region"),
        Field("Time performed (24h)"),
        Field("Local read summary"),
        Checkbox("Images transferred to central reader"),
        Signature("Performed by"),
    ],
};

static PROCEDURE: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Procedure,
    label: "Study Procedure",
    repeat_unit: Some("Procedure"),
    prompts: &[
        Field("Procedure name"),
        Field("Start time (24h)"),
        Field("End time (24h)"),
        Field("Outcome / findings"),
        Checkbox("Completed per protocol"),
        Signature("Performed by"),
    ],
};

static IP_ACCOUNTABILITY: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::IpAccountability,
    label: "Investigational Product Accountability",
    repeat_unit: None,
    prompts: &[
        Field("Kit / bottle number"),
        Field("Lot number"),
        Field("Quantity dispensed"),
        Field("Quantity returned"),
        Field("Dose administered"),
        Field("Time of administration (24h)"),
        Checkbox("Dispensed per randomization assignment"),
        Signature("Dispensed by"),
    ],
};

static NOTES: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Notes,
    label: "Progress Notes",
    repeat_unit: None,
    prompts: &[
        Note("Record observations, deviations, and clinically relevant events below."),
        Field("Note"),
        Field("Note (continued)"),
        Signature("Recorded by"),
    ],
};

static NEXT_APPOINTMENT: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::NextAppointment,
    label: "Next Appointment",
    repeat_unit: None,
    prompts: &[
        Field("Next visit label"),
        Field("Scheduled date (DD-MON-YYYY)"),
        Field("Scheduled time (24h)"),
        Field("Instructions given to subject"),
        Checkbox("Visit window confirmed against protocol"),
    ],
};

static ATTACHMENTS: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Attachments,
    label: "Attachments",
    repeat_unit: None,
    prompts: &[
        Note("File printouts behind this page and reference them below."),
        Field("Attachment 1 (description / pages)"),
        Field("Attachment 2 (description / pages)"),
        Field("Attachment 3 (description / pages)"),
    ],
};

static CONSENT: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Consent,
    label: "Informed Consent Checklist",
    repeat_unit: None,
    prompts: &[
        Checkbox("Consent discussion conducted in a private setting"),
        Checkbox("Current IRB/IEC-approved version used"),
        Checkbox("Subject given sufficient time to ask questions"),
        Checkbox("Subject signed and dated before any study procedure"),
        Checkbox("Copy of the signed consent given to the subject"),
        Field("Consent version / date"),
        Signature("Person obtaining consent"),
    ],
};

static ELIGIBILITY: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Eligibility,
    label: "Eligibility Review",
    repeat_unit: None,
    prompts: &[
        Checkbox("All inclusion criteria met"),
        Checkbox("No exclusion criteria met"),
        Field("Criteria requiring clarification"),
        Checkbox("Eligibility confirmed by investigator"),
        Signature("Investigator"),
    ],
};

static SCREENING: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Screening,
    label: "Screening Assessments",
    repeat_unit: None,
    prompts: &[
        Field("Screening number"),
        Field("Demographics verified against (source)"),
        Field("Medical history reviewed from (source)"),
        Checkbox("Screening procedures completed per protocol"),
        Signature("Completed by"),
    ],
};

static BASELINE: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Baseline,
    label: "Baseline Assessments",
    repeat_unit: None,
    prompts: &[
        Field("Baseline symptom review"),
        Field("Baseline severity score"),
        Checkbox("Baseline assessments completed before first dose"),
        Signature("Completed by"),
    ],
};

static CON_MEDS: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::ConMeds,
    label: "Concomitant Medications",
    repeat_unit: None,
    prompts: &[
        Note("Record all medications taken within the protocol-defined window."),
        Field("Medication / dose / route / frequency"),
        Field("Indication"),
        Field("Start date"),
        Field("Stop date or ongoing"),
        Checkbox("No concomitant medications reported"),
    ],
};

static ADVERSE_EVENTS: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::AdverseEvents,
    label: "Adverse Events",
    repeat_unit: None,
    prompts: &[
        Note("Record all adverse events since the last visit."),
        Field("Event description"),
        Field("Onset date"),
        Field("Severity (mild / moderate / severe)"),
        Field("Relationship to study drug"),
        Field("Action taken"),
        Field("Outcome"),
        Checkbox("No adverse events reported"),
        Signature("Assessed by"),
    ],
};

static RANDOMIZATION: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Randomization,
    label: "Randomization",
    repeat_unit: None,
    prompts: &[
        Field("Randomization number"),
        Field("Randomization date (DD-MON-YYYY)"),
        Field("Time (24h)"),
        Field("Stratification factors"),
        Checkbox("Randomization performed through IWRS"),
        Signature("Performed by"),
    ],
};

static DEVIATION: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::Deviation,
    label: "Protocol Deviation",
    repeat_unit: None,
    prompts: &[
        Field("Deviation description"),
        Field("Date identified"),
        Field("Category (minor / major)"),
        Field("Corrective action"),
        Checkbox("Reported to sponsor / IRB as required"),
        Signature("Recorded by"),
    ],
};

static AD_HOC: ModuleTemplate = ModuleTemplate {
    kind: ModuleKind::AdHoc,
    label: "Ad-hoc Assessment",
    repeat_unit: Some("Assessment"),
    prompts: &[
        Field("Assessment name"),
        Field("Reason performed"),
        Field("Result / findings"),
        Signature("Performed by"),
    ],
};
