//! Plain-text preview rendering
//!
//! The on-screen half of the dual renderer. Produces the monospace text
//! shown in the preview panel (and by the CLI `preview` subcommand):
//! document title, header rows, disclaimer, then one section per module
//! instance with `[ ]` checkboxes and fill-in rules.
//!
//! Unlike the export path this always renders; invalid header dates appear
//! raw so the user can see and correct them.

use crate::core::store::DocumentStore;
use crate::core::types::Prompt;
use crate::core::variant::VariantConfig;

use super::{document_sections, header_rows, Block};

/// Width of the fill-in rule after field and signature labels.
const RULE_WIDTH: usize = 28;

/// Renders the full preview text for a document.
pub fn render_preview(variant: &VariantConfig, store: &DocumentStore) -> String {
    let mut out = String::new();

    out.push_str(&variant.title.to_uppercase());
    out.push('\n');
    out.push_str(&"=".repeat(variant.title.chars().count()));
    out.push_str("\n\n");

    let rows = header_rows(variant, store);
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in &rows {
        out.push_str(&format!("{label:<label_width$}  {value}\n"));
    }

    out.push('\n');
    out.push_str(&variant.disclaimer);
    out.push_str("\n\n");

    for section in document_sections(store) {
        out.push_str(&section.heading.to_uppercase());
        out.push('\n');
        out.push_str(&"-".repeat(section.heading.chars().count()));
        out.push('\n');
        for block in &section.blocks {
            push_block(&mut out, block);
        }
        out.push('\n');
    }

    out
}

fn push_block(out: &mut String, block: &Block) {
    if let Some(label) = &block.label {
        out.push_str(label);
        out.push('\n');
    }
    for prompt in block.prompts {
        out.push_str("  ");
        out.push_str(&prompt_line(prompt));
        out.push('\n');
    }
}

/// The preview serialization of one prompt.
///
/// Kept deliberately parallel to `document::prompt_html`; both must present
/// the identical literal prompt text.
fn prompt_line(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Field(text) => format!("{text}: {}", "_".repeat(RULE_WIDTH)),
        Prompt::Checkbox(text) => format!("[ ] {text}"),
        Prompt::Note(text) => text.to_string(),
        Prompt::Signature(text) => {
            format!("{text} (signature / date): {}", "_".repeat(RULE_WIDTH))
        }
    }
}
